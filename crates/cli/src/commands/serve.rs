use anyhow::Result;
use std::sync::Arc;
use xinzhi_core::{API_KEY_ENV, env_non_empty};
use xinzhi_http::{AppState, create_router};
use xinzhi_service::{AnalysisService, KnowledgeService};

use super::build_chat_service;

pub(crate) async fn run(port: u16, host: String) -> Result<()> {
    if env_non_empty(API_KEY_ENV).is_none() {
        tracing::warn!("{API_KEY_ENV} not set, chat will serve local fallback answers");
    }

    let knowledge_service = Arc::new(KnowledgeService::default());
    tracing::info!(records = knowledge_service.dataset().len(), "knowledge base loaded");

    let state = Arc::new(AppState {
        analysis_service: Arc::new(AnalysisService::new()),
        chat_service: Arc::new(build_chat_service()?),
        knowledge_service,
    });

    let router = create_router(state);
    let addr = format!("{host}:{port}");
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
