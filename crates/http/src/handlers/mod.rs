pub mod analyze;
pub mod chat;
pub mod knowledge;

use crate::api_error::ApiError;

/// Fallback for any method an endpoint does not serve.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
