//! Chat completion client for Xinzhi.
//!
//! Talks to an OpenAI-compatible `/chat/completions` endpoint (Zhipu GLM by
//! default) and classifies failures into a small set of upstream kinds.

mod ai_types;
mod client;
mod error;
mod prompt;
mod provider;


pub use ai_types::{ChatCompletion, ChatRequest, Message};
pub use client::{LlmClient, truncate};
pub use error::{LlmError, UpstreamFailure};
pub use prompt::{SYSTEM_PROMPT, user_turn};
pub use provider::ChatProvider;
