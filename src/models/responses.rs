use crate::models::domain::MatchedCandidate;
use serde::{Deserialize, Serialize};

/// Response for the match webhook endpoint
///
/// The rendered report travels base64-encoded inside the JSON body; the
/// same payload is relayed to the configured return webhook.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResponse {
    pub success: bool,
    pub candidates: Vec<MatchedCandidate>,
    pub pdf_base64: String,
    pub extracted_skills: Vec<String>,
    pub processed_at: chrono::DateTime<chrono::Utc>,
}

/// Response for the email collector endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectEmailResponse {
    pub success: bool,
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
