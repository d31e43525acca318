use std::sync::Arc;

use xinzhi_core::fallback_response;
use xinzhi_llm::ChatProvider;

use crate::ServiceError;
use crate::credentials::CredentialSource;

/// Successful provider answer.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatReply {
    pub reply: String,
    /// Provider token usage, `{}` when not reported.
    pub usage: serde_json::Value,
}

/// Forwards questions to the chat provider, falling back to canned local
/// answers when the provider cannot be used.
pub struct ChatService {
    provider: Arc<dyn ChatProvider>,
    credentials: Arc<dyn CredentialSource>,
}

impl ChatService {
    #[must_use]
    pub fn new(provider: Arc<dyn ChatProvider>, credentials: Arc<dyn CredentialSource>) -> Self {
        Self { provider, credentials }
    }

    /// Asks one question.
    ///
    /// Exactly one provider call is made, and only when `message` is non-empty
    /// and a credential is configured. Configuration and provider failures
    /// carry the local fallback answer for `message`.
    pub async fn ask(&self, message: &str, context: &str) -> Result<ChatReply, ServiceError> {
        if message.is_empty() {
            return Err(ServiceError::InvalidInput("Message is required".to_owned()));
        }

        let Some(api_key) = self.credentials.api_key() else {
            tracing::warn!("chat provider API key not configured, serving local fallback");
            return Err(ServiceError::NotConfigured {
                message: "API key not configured".to_owned(),
                fallback: fallback_response(message),
            });
        };

        match self.provider.complete(&api_key, context, message).await {
            Ok(completion) => {
                Ok(ChatReply { reply: completion.content, usage: completion.usage })
            },
            Err(e) => {
                let kind = e.failure_kind();
                tracing::warn!(
                    error = %e,
                    ?kind,
                    timed_out = e.is_timeout(),
                    "chat provider failed, serving local fallback"
                );
                Err(ServiceError::Upstream { kind, source: e, fallback: fallback_response(message) })
            },
        }
    }
}
