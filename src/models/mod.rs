// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    AnalysisResult, CandidateRecord, CompanyProfile, EducationTier, InterviewQuestion,
    InterviewStage, InvalidStageError, JobProfile, QuestionCategory, Recommendation,
    ScoreBreakdown, ScoreCategory, ScoreThresholds, ScoringWeights, WeightedKeyword,
    WeightedSkill,
};
pub use requests::AnalyzeRequest;
pub use responses::{AnalyzeResponse, ErrorResponse, HealthResponse, JobsResponse};
