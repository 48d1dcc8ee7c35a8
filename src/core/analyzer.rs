use crate::core::extractor::{Extractor, ExtractorVocabulary};
use crate::core::questions::{select_questions, QuestionBank};
use crate::core::scoring::evaluate;
use crate::models::{
    AnalysisResult, CandidateRecord, CompanyProfile, InterviewQuestion, InterviewStage,
    JobProfile, ScoreBreakdown, ScoreThresholds, ScoringWeights,
};
use std::sync::Arc;

/// Sub-score floors that trigger special notes in the assembled report
const SKILL_WARNING_FLOOR: f64 = 60.0;
const EXPERIENCE_WARNING_FLOOR: f64 = 30.0;
const STRONG_OVERALL_FLOOR: f64 = 85.0;

/// Main analysis orchestrator - chains the full resume evaluation pipeline
///
/// # Pipeline Stages
/// 1. Extract a candidate record from raw resume text
/// 2. Score the candidate against the job and company profiles
/// 3. Select interview questions from detected weak areas
/// 4. Assemble the final report with special notes
#[derive(Debug, Clone)]
pub struct Analyzer {
    extractor: Extractor,
    weights: ScoringWeights,
    thresholds: ScoreThresholds,
    bank: Arc<QuestionBank>,
}

impl Analyzer {
    pub fn new(
        vocabulary: ExtractorVocabulary,
        weights: ScoringWeights,
        thresholds: ScoreThresholds,
        bank: Arc<QuestionBank>,
    ) -> Self {
        Self {
            extractor: Extractor::new(vocabulary),
            weights,
            thresholds,
            bank,
        }
    }

    pub fn with_defaults(bank: Arc<QuestionBank>) -> Self {
        Self::new(
            ExtractorVocabulary::default(),
            ScoringWeights::default(),
            ScoreThresholds::default(),
            bank,
        )
    }

    pub fn extractor(&self) -> &Extractor {
        &self.extractor
    }

    /// Run the complete analysis for one resume
    ///
    /// Stateless per invocation: immutable inputs in, a fresh owned
    /// `AnalysisResult` out. Safe to call concurrently.
    pub fn analyze(
        &self,
        raw_text: &str,
        job: &JobProfile,
        company: &CompanyProfile,
        stage: InterviewStage,
    ) -> AnalysisResult {
        let candidate = self.extractor.extract(raw_text);
        let breakdown = evaluate(&candidate, job, company, &self.weights, &self.thresholds);
        let questions = select_questions(&self.bank, &breakdown, stage);
        let special_notes = derive_special_notes(&candidate, &breakdown);

        assemble(candidate, breakdown, questions, stage, special_notes)
    }
}

/// Bundle the analysis pieces into one result record
///
/// Pure aggregation: no field is recomputed or altered.
pub fn assemble(
    candidate: CandidateRecord,
    breakdown: ScoreBreakdown,
    questions: Vec<InterviewQuestion>,
    stage: InterviewStage,
    special_notes: Vec<String>,
) -> AnalysisResult {
    AnalysisResult {
        candidate,
        breakdown,
        stage,
        interview_duration_minutes: stage.duration_minutes(),
        questions,
        special_notes,
    }
}

/// Free-text flags for the interviewer, derived from score floors
pub fn derive_special_notes(candidate: &CandidateRecord, breakdown: &ScoreBreakdown) -> Vec<String> {
    let mut notes = Vec::new();

    if breakdown.skill_match_score < SKILL_WARNING_FLOOR {
        notes.push(
            "⚠️ Technical skills fall well short of the requirements. Probe for concrete \
             project experience and willingness to learn."
                .to_string(),
        );
    }

    if breakdown.experience_match_score < EXPERIENCE_WARNING_FLOOR {
        notes.push(
            "⚠️ Experience is significantly below the requirement. Evaluate the depth and \
             quality of what hands-on work there is."
                .to_string(),
        );
    }

    if breakdown.overall_score > STRONG_OVERALL_FLOOR {
        notes.push(
            "✅ Strong overall evaluation. Consider whether the candidate could take on \
             broader responsibility."
                .to_string(),
        );
    }

    if !candidate.certifications.is_empty() {
        notes.push(format!(
            "📝 Certifications held: {}. Assess the learning drive and specialization behind them.",
            candidate.certifications.join(", ")
        ));
    }

    notes
}
