pub(crate) mod analyze;
pub(crate) mod ask;
pub(crate) mod search;
pub(crate) mod serve;

use anyhow::Result;
use std::sync::Arc;
use xinzhi_core::API_KEY_ENV;
use xinzhi_llm::LlmClient;
use xinzhi_service::{ChatService, EnvCredential};

/// Chat service backed by the environment-configured provider client.
///
/// The API key itself is read per request, so it may be set after startup.
pub(crate) fn build_chat_service() -> Result<ChatService> {
    let client = LlmClient::from_env()?;
    tracing::info!(base_url = client.base_url(), model = client.model(), "chat provider configured");
    Ok(ChatService::new(Arc::new(client), Arc::new(EnvCredential::new(API_KEY_ENV))))
}
