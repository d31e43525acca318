use thiserror::Error;

/// Errors raised while parsing core domain values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CoreError {
    #[error("Unknown knowledge category: {0}")]
    UnknownCategory(String),
}
