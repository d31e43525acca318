//! Response types (Serialize)

use serde::Serialize;

use xinzhi_core::{AnalysisResult, KnowledgeBase, KnowledgeHit, Report};

#[derive(Debug, Serialize)]
pub struct VersionResponse {
    pub version: &'static str,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub success: bool,
    pub data: AnalysisResult,
    pub report: Report,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub success: bool,
    pub reply: String,
    pub usage: serde_json::Value,
}

#[derive(Debug, Serialize)]
pub struct KnowledgeListResponse {
    pub success: bool,
    pub data: &'static KnowledgeBase,
}

#[derive(Debug, Serialize)]
pub struct KnowledgeSearchResponse {
    pub success: bool,
    pub query: String,
    pub results: Vec<KnowledgeHit>,
}

/// `{"error": ...}` without a success flag, used for 400 and 405.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct AnalysisFailureResponse {
    pub success: bool,
    pub error: &'static str,
    /// Mock result so the client can still render something.
    pub data: AnalysisResult,
}

#[derive(Debug, Serialize)]
pub struct ChatFailureResponse {
    pub success: bool,
    pub error: String,
    pub fallback: &'static str,
}

#[derive(Debug, Serialize)]
pub struct SearchFailureResponse {
    pub success: bool,
    pub error: &'static str,
}
