//! HireLens Algo - Resume screening and interview planning service
//!
//! This library provides the core resume analysis engine used by HireLens.
//! It turns raw resume text into a structured candidate record, scores the
//! candidate against configurable job and company profiles, selects a
//! matching interview question set, and assembles the full analysis report.
//!
//! The engine is a pure function of its inputs: profiles and the question
//! bank are loaded once as read-only configuration, every analysis call
//! returns a fresh owned result, and concurrent invocations need no locking.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{assemble, evaluate, select_questions, Analyzer, Extractor, QuestionBank};
pub use crate::models::{
    AnalysisResult, AnalyzeRequest, AnalyzeResponse, CandidateRecord, CompanyProfile,
    EducationTier, InterviewQuestion, InterviewStage, InvalidStageError, JobProfile,
    Recommendation, ScoreBreakdown, ScoreCategory, ScoreThresholds, ScoringWeights,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let extractor = Extractor::default();
        let candidate = extractor.extract("Skills: Python");
        assert!(candidate.has_skill("Python"));
    }
}
