use axum::{Json, body::Bytes, extract::State};
use std::sync::Arc;

use crate::AppState;
use crate::api_error::ApiError;
use crate::query_types::{ChatRequest, parse_json_body};
use crate::response_types::ChatResponse;

pub async fn chat(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<ChatResponse>, ApiError> {
    let req: ChatRequest = parse_json_body(&body).map_err(|e| {
        tracing::warn!(error = %e, "unparseable chat request");
        ApiError::chat_unavailable("")
    })?;
    let message = req.message.unwrap_or_default();
    let context = req.context.unwrap_or_default();

    let reply = state.chat_service.ask(&message, &context).await.map_err(ApiError::from_chat)?;
    Ok(Json(ChatResponse { success: true, reply: reply.reply, usage: reply.usage }))
}
