use std::time::Duration;

use async_trait::async_trait;
use xinzhi_core::{
    API_URL_ENV, DEFAULT_API_BASE_URL, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS, MODEL_ENV,
    TIMEOUT_ENV, env_or_default, env_parse_with_default,
};

use crate::ai_types::{ChatCompletion, ChatRequest, ChatResponse};
use crate::error::LlmError;
use crate::provider::ChatProvider;

/// Client for the chat completion endpoint.
///
/// Holds no credential; the API key is supplied with each call.
#[derive(Debug, Clone)]
pub struct LlmClient {
    pub(crate) client: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) model: String,
    pub(crate) timeout: Duration,
}

impl LlmClient {
    /// Creates a client for `base_url` (without the `/chat/completions` suffix).
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built (TLS backend failure).
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, LlmError> {
        let base_url = base_url.trim_end_matches('/').to_owned();
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LlmError::ClientInit(e.to_string()))?;
        Ok(Self { client, base_url, model: DEFAULT_MODEL.to_owned(), timeout })
    }

    /// Builds a client from `ZHIPU_API_URL`, `XINZHI_LLM_MODEL` and
    /// `XINZHI_LLM_TIMEOUT_SECS`.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn from_env() -> Result<Self, LlmError> {
        let base_url = env_or_default(API_URL_ENV, DEFAULT_API_BASE_URL);
        let timeout_secs = env_parse_with_default(TIMEOUT_ENV, DEFAULT_TIMEOUT_SECS);
        let model = env_or_default(MODEL_ENV, DEFAULT_MODEL);
        Ok(Self::new(&base_url, Duration::from_secs(timeout_secs))?.with_model(model))
    }

    /// Sets a custom model for this client.
    #[must_use]
    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Sends one non-streaming chat completion request.
    ///
    /// No retries: the caller falls back to a local answer on any failure.
    ///
    /// # Errors
    /// Returns an error if the HTTP request fails or times out, the API returns
    /// a non-success status, the body cannot be parsed, or
    /// `choices[0].message.content` is missing.
    pub async fn chat_completion(
        &self,
        api_key: &str,
        request: &ChatRequest,
    ) -> Result<ChatCompletion, LlmError> {
        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(api_key)
            .header(reqwest::header::ACCEPT, "application/json")
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body =
                response.text().await.unwrap_or_else(|_| "Could not read error body".to_owned());
            return Err(LlmError::HttpStatus {
                code: status.as_u16(),
                body: truncate(&body, 500).to_owned(),
            });
        }

        let body = response.text().await?;
        let chat_response: ChatResponse =
            serde_json::from_str(&body).map_err(|e| LlmError::JsonParse {
                context: format!("chat completion response (body: {})", truncate(&body, 200)),
                source: e,
            })?;

        let first_choice =
            chat_response.choices.into_iter().next().ok_or(LlmError::EmptyResponse)?;
        let content = first_choice
            .message
            .and_then(|m| m.content)
            .ok_or_else(|| LlmError::MissingField("choices[0].message.content".to_owned()))?;

        Ok(ChatCompletion {
            content,
            usage: chat_response.usage.unwrap_or_else(|| serde_json::json!({})),
        })
    }
}

#[async_trait]
impl ChatProvider for LlmClient {
    async fn complete(
        &self,
        api_key: &str,
        context: &str,
        message: &str,
    ) -> Result<ChatCompletion, LlmError> {
        let request = ChatRequest::single_turn(&self.model, context, message);
        tracing::debug!(model = %self.model, "sending chat completion request");
        self.chat_completion(api_key, &request).await
    }
}

/// Truncates a string to the given maximum length at a char boundary.
#[must_use]
pub fn truncate(s: &str, max_len: usize) -> &str {
    if s.len() <= max_len {
        s
    } else {
        let mut end = max_len;
        while end > 0 && !s.is_char_boundary(end) {
            end = end.saturating_sub(1);
        }
        s.get(..end).unwrap_or("")
    }
}
