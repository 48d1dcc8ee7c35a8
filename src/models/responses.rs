use crate::models::domain::AnalysisResult;
use serde::{Deserialize, Serialize};

/// Response for the analyze endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    #[serde(alias = "analysis_id", rename = "analysisId")]
    pub analysis_id: String,
    #[serde(alias = "analyzed_at", rename = "analyzedAt")]
    pub analyzed_at: chrono::DateTime<chrono::Utc>,
    pub result: AnalysisResult,
}

/// Available job profiles
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobsResponse {
    pub jobs: Vec<String>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
