use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to analyze a resume against a configured job profile
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AnalyzeRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "resume_text", rename = "resumeText")]
    pub resume_text: String,
    #[validate(length(min = 1))]
    pub job: String,
    #[serde(default = "default_stage")]
    pub stage: String,
}

fn default_stage() -> String {
    "1st".to_string()
}
