//! HTTP API server for Xinzhi.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(unreachable_pub, reason = "pub items are re-exported")]
#![allow(clippy::absolute_paths, reason = "Explicit paths for clarity")]
#![allow(missing_debug_implementations, reason = "Internal types")]
#![allow(clippy::missing_docs_in_private_items, reason = "Internal crate")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::min_ident_chars, reason = "Short closure params are idiomatic")]
#![allow(clippy::exhaustive_structs, reason = "HTTP types are stable")]
#![allow(clippy::single_call_fn, reason = "Helper functions improve readability")]

pub mod api_error;
mod cors;
mod handlers;
mod query_types;
mod response_types;
#[cfg(test)]
mod router_tests;

use axum::{
    Json, Router,
    routing::{get, post},
};
use std::sync::Arc;

use cors::{AllowedMethods, cors_layer};
use xinzhi_service::{AnalysisService, ChatService, KnowledgeService};

pub use response_types::VersionResponse;

/// Shared application state for all HTTP handlers.
///
/// Services hold no mutable state; the `Arc`s only make the state cheap to
/// hand to each request.
pub struct AppState {
    /// Risk analysis and report generation
    pub analysis_service: Arc<AnalysisService>,
    /// Chat provider access with local fallback
    pub chat_service: Arc<ChatService>,
    /// Static knowledge base lookup
    pub knowledge_service: Arc<KnowledgeService>,
}

/// Prefixes under which the API endpoints are mounted. The browser client
/// calls `/api/...`; scripts and older clients call the bare paths.
const API_PREFIXES: [&str; 2] = ["", "/api"];

pub fn create_router(state: Arc<AppState>) -> Router {
    let mut router = Router::new()
        .route("/health", get(health))
        .route("/api/version", get(version));

    for prefix in API_PREFIXES {
        router = router
            .route(
                &format!("{prefix}/analyze"),
                post(handlers::analyze::analyze)
                    .fallback(handlers::method_not_allowed)
                    .layer(cors_layer(AllowedMethods::Post)),
            )
            .route(
                &format!("{prefix}/chat"),
                post(handlers::chat::chat)
                    .fallback(handlers::method_not_allowed)
                    .layer(cors_layer(AllowedMethods::Post)),
            )
            .route(
                &format!("{prefix}/knowledge"),
                get(handlers::knowledge::list_knowledge)
                    .post(handlers::knowledge::search_knowledge)
                    .head(handlers::method_not_allowed)
                    .fallback(handlers::method_not_allowed)
                    .layer(cors_layer(AllowedMethods::GetPost)),
            );
    }

    router.with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse { version: env!("CARGO_PKG_VERSION") })
}
