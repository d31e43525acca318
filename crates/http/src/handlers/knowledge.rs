use axum::{Json, body::Bytes, extract::State};
use std::sync::Arc;

use crate::AppState;
use crate::api_error::ApiError;
use crate::query_types::{KnowledgeSearchRequest, parse_json_body};
use crate::response_types::{KnowledgeListResponse, KnowledgeSearchResponse};

pub async fn list_knowledge(State(state): State<Arc<AppState>>) -> Json<KnowledgeListResponse> {
    Json(KnowledgeListResponse { success: true, data: state.knowledge_service.dataset() })
}

pub async fn search_knowledge(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<KnowledgeSearchResponse>, ApiError> {
    let req: KnowledgeSearchRequest = parse_json_body(&body)
        .map_err(|e| ApiError::SearchFailed(anyhow::Error::new(e).context("parse body")))?;

    let results = state
        .knowledge_service
        .search(req.query.as_deref(), req.category.as_deref())
        .map_err(|e| ApiError::SearchFailed(e.into()))?;

    Ok(Json(KnowledgeSearchResponse {
        success: true,
        query: req.query.unwrap_or_default(),
        results,
    }))
}
