use serde::{Deserialize, Serialize};

use xinzhi_core::{CHAT_MAX_TOKENS, CHAT_TEMPERATURE, CHAT_TOP_P};

use crate::prompt::{SYSTEM_PROMPT, user_turn};

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub temperature: f64,
    pub max_tokens: u32,
    pub top_p: f64,
    pub stream: bool,
}

impl ChatRequest {
    /// Single-turn request: the expert system prompt plus one user turn.
    #[must_use]
    pub fn single_turn(model: &str, context: &str, message: &str) -> Self {
        Self {
            model: model.to_owned(),
            messages: vec![Message::system(SYSTEM_PROMPT), Message::user(user_turn(context, message))],
            temperature: CHAT_TEMPERATURE,
            max_tokens: CHAT_MAX_TOKENS,
            top_p: CHAT_TOP_P,
            stream: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
    #[must_use]
    pub fn system(content: impl Into<String>) -> Self {
        Self { role: "system".to_owned(), content: content.into() }
    }

    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self { role: "user".to_owned(), content: content.into() }
    }
}

/// Assistant reply plus the provider's token usage (`{}` when not reported).
#[derive(Debug, Clone, PartialEq)]
pub struct ChatCompletion {
    pub content: String,
    pub usage: serde_json::Value,
}

#[derive(Deserialize)]
pub(crate) struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub usage: Option<serde_json::Value>,
}

#[derive(Deserialize)]
pub(crate) struct Choice {
    #[serde(default)]
    pub message: Option<ResponseMessage>,
}

#[derive(Deserialize)]
pub(crate) struct ResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
}
