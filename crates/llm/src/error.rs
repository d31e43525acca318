//! Typed error enum for the LLM crate.

use thiserror::Error;

/// Errors from chat completion calls.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),
    #[error("HTTP status {code}: {body}")]
    HttpStatus { code: u16, body: String },
    #[error("JSON parse error in {context}: {source}")]
    JsonParse {
        context: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("empty response: no choices returned")]
    EmptyResponse,
    #[error("missing field in response: {0}")]
    MissingField(String),
    #[error("client initialization failed: {0}")]
    ClientInit(String),
}

/// Coarse classification of a failed provider call, decided where the HTTP
/// status is inspected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpstreamFailure {
    /// 401: the credential was rejected.
    Unauthorized,
    /// 429: the provider is throttling us.
    RateLimited,
    /// Anything else: transport errors, timeouts, 5xx, malformed bodies.
    Unavailable,
}

impl UpstreamFailure {
    /// Message shown to the end user.
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        match *self {
            Self::Unauthorized => "API密钥无效或过期",
            Self::RateLimited => "请求频率超限，请稍后再试",
            Self::Unavailable => "AI服务暂时不可用，请稍后重试",
        }
    }
}

impl LlmError {
    #[must_use]
    pub fn failure_kind(&self) -> UpstreamFailure {
        match self {
            Self::HttpStatus { code: 401, .. } => UpstreamFailure::Unauthorized,
            Self::HttpStatus { code: 429, .. } => UpstreamFailure::RateLimited,
            _ => UpstreamFailure::Unavailable,
        }
    }

    /// Whether the request timed out before the provider answered.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::HttpRequest(e) if e.is_timeout())
    }
}
