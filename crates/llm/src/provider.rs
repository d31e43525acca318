use async_trait::async_trait;

use crate::ai_types::ChatCompletion;
use crate::error::LlmError;

/// Anything that can answer a single-turn battery compliance question.
///
/// The credential is passed per call because it is read from configuration at
/// request time, not when the provider is constructed.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Sends `context` + `message` with the expert system prompt.
    async fn complete(
        &self,
        api_key: &str,
        context: &str,
        message: &str,
    ) -> Result<ChatCompletion, LlmError>;
}
