//! Request body types (Deserialize)
//!
//! Bodies are read as raw bytes and parsed here rather than through `Json`,
//! so a missing or wrong `Content-Type` does not reject an otherwise valid
//! payload.

use serde::Deserialize;
use serde::de::DeserializeOwned;

pub fn parse_json_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, serde_json::Error> {
    serde_json::from_slice(body)
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub context: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct KnowledgeSearchRequest {
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}
