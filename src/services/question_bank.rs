use crate::core::QuestionBank;
use crate::models::{InterviewQuestion, InterviewStage, QuestionCategory};
use crate::services::ConfigurationError;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

/// On-disk layout of the question bank file
#[derive(Debug, Deserialize)]
struct QuestionBankFile {
    #[serde(default)]
    questions: Vec<InterviewQuestion>,
}

/// Load and validate the interview question bank from a TOML file
pub fn load_question_bank<P: AsRef<Path>>(path: P) -> Result<QuestionBank, ConfigurationError> {
    let raw = std::fs::read_to_string(path)?;
    question_bank_from_toml(&raw)
}

/// Parse and validate a question bank from TOML text
///
/// A valid bank is non-empty, has unique question ids, and carries at least
/// one baseline (general) question for every interview stage, so the
/// selector can never return an empty set.
pub fn question_bank_from_toml(raw: &str) -> Result<QuestionBank, ConfigurationError> {
    let file: QuestionBankFile = toml::from_str(raw)?;

    if file.questions.is_empty() {
        return Err(ConfigurationError::EmptyBank);
    }

    let mut ids = HashSet::new();
    for question in &file.questions {
        if !ids.insert(question.id.as_str()) {
            return Err(ConfigurationError::DuplicateQuestionId(question.id.clone()));
        }
    }

    for stage in InterviewStage::ALL {
        let has_baseline = file
            .questions
            .iter()
            .any(|q| q.category == QuestionCategory::General && q.stage == stage);
        if !has_baseline {
            return Err(ConfigurationError::MissingBaseline(stage));
        }
    }

    Ok(QuestionBank::new(file.questions))
}
