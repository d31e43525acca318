use axum::{Json, body::Bytes, extract::State};
use std::sync::Arc;

use xinzhi_core::AnalysisInput;

use crate::AppState;
use crate::api_error::ApiError;
use crate::query_types::parse_json_body;
use crate::response_types::AnalyzeResponse;

pub async fn analyze(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let service = &state.analysis_service;
    let failed = |cause: anyhow::Error| ApiError::AnalysisFailed {
        cause,
        mock: service.fallback_result(),
    };

    let input: AnalysisInput =
        parse_json_body(&body).map_err(|e| failed(anyhow::Error::new(e).context("parse body")))?;
    tracing::debug!(?input, "analyze request");

    let analysis = service.analyze(&input).map_err(|e| failed(e.into()))?;
    Ok(Json(AnalyzeResponse { success: true, data: analysis.result, report: analysis.report }))
}
