// Service exports
pub mod profiles;
pub mod question_bank;
pub mod vocabulary;

use crate::models::InterviewStage;
use thiserror::Error;

pub use profiles::{validate_scoring, ProfileStore};
pub use question_bank::{load_question_bank, question_bank_from_toml};
pub use vocabulary::load_vocabulary;

/// Errors raised while loading profile, scoring, or question-bank configuration
///
/// All of these fail fast at startup; the engine never sees an invalid
/// configuration at analysis time.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("scoring weights must sum to 1.0, got {0:.4}")]
    WeightSum(f64),

    #[error("scoring weight for {0} must be non-negative")]
    NegativeWeight(&'static str),

    #[error("interview threshold ({interview}) must not exceed pass threshold ({pass})")]
    ThresholdOrder { interview: f64, pass: f64 },

    #[error("duplicate job profile title: {0}")]
    DuplicateJob(String),

    #[error("job profile {job:?} has a non-positive weight for skill {skill:?}")]
    InvalidSkillWeight { job: String, skill: String },

    #[error("culture keyword {0:?} has a non-positive weight")]
    InvalidKeywordWeight(String),

    #[error("question bank is empty")]
    EmptyBank,

    #[error("duplicate question id: {0}")]
    DuplicateQuestionId(String),

    #[error("question bank has no baseline (general) questions for stage {0}")]
    MissingBaseline(InterviewStage),
}
