//! Typed API error for HTTP handlers.
//!
//! Each endpoint has its own failure body shape; `ApiError` carries what the
//! shape needs and renders it. Internal failures are logged server-side and
//! never echoed to the client.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use xinzhi_core::{AnalysisResult, fallback_response};
use xinzhi_llm::UpstreamFailure;
use xinzhi_service::ServiceError;

use crate::response_types::{
    AnalysisFailureResponse, ChatFailureResponse, ErrorResponse, SearchFailureResponse,
};

pub const ANALYSIS_FAILED: &str = "分析失败";
pub const SEARCH_FAILED: &str = "搜索失败";
pub const METHOD_NOT_ALLOWED: &str = "Method not allowed";

#[derive(Debug)]
pub enum ApiError {
    /// 400 `{error}`: caller omitted a required field.
    BadRequest(String),
    /// 500 `{success:false, error:"分析失败", data}` with a mock result.
    AnalysisFailed { cause: anyhow::Error, mock: AnalysisResult },
    /// 500 `{success:false, error, fallback}`.
    ChatFailed { message: String, fallback: &'static str },
    /// 500 `{success:false, error:"搜索失败"}`.
    SearchFailed(anyhow::Error),
    /// 405 `{error:"Method not allowed"}`.
    MethodNotAllowed,
}

impl ApiError {
    /// Maps a chat service failure to its response.
    pub fn from_chat(err: ServiceError) -> Self {
        match err {
            ServiceError::InvalidInput(msg) => Self::BadRequest(msg),
            ServiceError::NotConfigured { message, fallback } => {
                Self::ChatFailed { message, fallback }
            },
            ServiceError::Upstream { kind, fallback, .. } => {
                Self::ChatFailed { message: kind.user_message().to_owned(), fallback }
            },
            ServiceError::Internal(msg) => {
                tracing::error!(error = %msg, "chat failed internally");
                Self::chat_unavailable("")
            },
        }
    }

    /// Generic provider-unavailable failure for `message`.
    pub fn chat_unavailable(message: &str) -> Self {
        Self::ChatFailed {
            message: UpstreamFailure::Unavailable.user_message().to_owned(),
            fallback: fallback_response(message),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::BadRequest(error) => {
                (StatusCode::BAD_REQUEST, Json(ErrorResponse { error })).into_response()
            },
            Self::AnalysisFailed { cause, mock } => {
                tracing::error!(error = ?cause, "analysis failed, serving mock result");
                let body =
                    AnalysisFailureResponse { success: false, error: ANALYSIS_FAILED, data: mock };
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            },
            Self::ChatFailed { message, fallback } => {
                let body = ChatFailureResponse { success: false, error: message, fallback };
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            },
            Self::SearchFailed(cause) => {
                tracing::error!(error = ?cause, "knowledge search failed");
                let body = SearchFailureResponse { success: false, error: SEARCH_FAILED };
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            },
            Self::MethodNotAllowed => {
                let body = ErrorResponse { error: METHOD_NOT_ALLOWED.to_owned() };
                (StatusCode::METHOD_NOT_ALLOWED, Json(body)).into_response()
            },
        }
    }
}
