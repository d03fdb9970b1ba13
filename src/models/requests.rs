use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to match candidates against a job description
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MatchRequest {
    #[validate(length(min = 1))]
    #[serde(default)]
    pub job_description: String,
    #[serde(default)]
    pub extra_notes: Option<String>,
}

/// Request to record an interested email address
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CollectEmailRequest {
    #[validate(length(min = 1))]
    #[serde(default)]
    pub email: String,
}
