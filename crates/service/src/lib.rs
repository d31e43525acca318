//! Service layer for Xinzhi
//!
//! Centralizes business logic between the HTTP/CLI front ends and the core
//! domain and LLM crates.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(missing_debug_implementations, reason = "Internal types")]
#![allow(clippy::missing_docs_in_private_items, reason = "Internal crate")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::min_ident_chars, reason = "Short error vars are idiomatic")]

mod analysis_service;
mod chat_service;
mod credentials;
mod error;
mod knowledge_service;

pub use analysis_service::{AnalysisReport, AnalysisService};
pub use chat_service::{ChatReply, ChatService};
pub use credentials::{CredentialSource, EnvCredential, StaticCredential};
pub use error::ServiceError;
pub use knowledge_service::KnowledgeService;
