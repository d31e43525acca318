//! Core types for Xinzhi
//!
//! Domain types and pure logic shared by the service, HTTP and CLI crates:
//! patent risk analysis, the static battery knowledge base and the local
//! fallback answers used when the chat provider is unreachable.

mod analysis;
mod constants;
mod env_config;
mod error;
mod fallback;
mod knowledge;
mod knowledge_data;
mod report;

pub use analysis::*;
pub use constants::*;
pub use env_config::*;
pub use error::*;
pub use fallback::*;
pub use knowledge::*;
pub use knowledge_data::KNOWLEDGE_BASE;
pub use report::*;
