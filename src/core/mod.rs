// Core engine exports
pub mod analyzer;
pub mod extractor;
pub mod questions;
pub mod scoring;

pub use analyzer::{assemble, derive_special_notes, Analyzer};
pub use extractor::{Extractor, ExtractorVocabulary};
pub use questions::{select_questions, QuestionBank};
pub use scoring::{
    culture_fit_score, education_match_score, evaluate, experience_match_score, recommend,
    skill_match_score,
};
