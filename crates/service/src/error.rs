//! Typed error enum for the service layer.
//!
//! Every variant maps to one user-visible failure shape. Chat failures carry
//! the local fallback answer so callers always have something to render.

use thiserror::Error;
use xinzhi_llm::{LlmError, UpstreamFailure};

/// Service-layer error.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Caller omitted or emptied a required field.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The chat provider credential is not set.
    #[error("not configured: {message}")]
    NotConfigured { message: String, fallback: &'static str },

    /// The chat provider call failed.
    #[error("upstream ({kind:?}): {source}")]
    Upstream {
        kind: UpstreamFailure,
        #[source]
        source: LlmError,
        fallback: &'static str,
    },

    /// Unexpected failure in otherwise pure computation.
    #[error("internal: {0}")]
    Internal(String),
}

impl ServiceError {
    /// Local answer to show instead of a provider reply, if any.
    #[must_use]
    pub fn fallback(&self) -> Option<&'static str> {
        match *self {
            Self::NotConfigured { fallback, .. } | Self::Upstream { fallback, .. } => {
                Some(fallback)
            },
            Self::InvalidInput(_) | Self::Internal(_) => None,
        }
    }

    /// Upstream failure kind, for chat provider errors.
    #[must_use]
    pub fn upstream_kind(&self) -> Option<UpstreamFailure> {
        match *self {
            Self::Upstream { kind, .. } => Some(kind),
            _ => None,
        }
    }
}
