use crate::models::{InterviewQuestion, InterviewStage, QuestionCategory, ScoreBreakdown};
use std::collections::HashSet;

/// Read-only interview question bank, keyed by (category, stage)
///
/// Loaded once at startup and shared across analyses. Load-time validation
/// (baseline coverage, unique ids) lives in the question bank loader.
#[derive(Debug, Clone, Default)]
pub struct QuestionBank {
    questions: Vec<InterviewQuestion>,
}

impl QuestionBank {
    pub fn new(questions: Vec<InterviewQuestion>) -> Self {
        Self { questions }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Bank entries tagged with a category and stage, in bank order
    pub fn for_category(
        &self,
        category: QuestionCategory,
        stage: InterviewStage,
    ) -> impl Iterator<Item = &InterviewQuestion> {
        self.questions
            .iter()
            .filter(move |q| q.category == category && q.stage == stage)
    }

    /// Stage baseline: the general questions always asked in that round
    pub fn baseline(&self, stage: InterviewStage) -> impl Iterator<Item = &InterviewQuestion> {
        self.for_category(QuestionCategory::General, stage)
    }

    /// Whether the stage has at least one baseline entry
    pub fn has_baseline(&self, stage: InterviewStage) -> bool {
        self.baseline(stage).next().is_some()
    }
}

/// Select and order the question set for one interview round
///
/// Weak-category questions come first, in the fixed scoring-category order
/// already encoded in `interview_focus_areas`, followed by the stage
/// baseline. De-duplicated by question id. Non-empty whenever the bank
/// carries a baseline for the stage.
pub fn select_questions(
    bank: &QuestionBank,
    breakdown: &ScoreBreakdown,
    stage: InterviewStage,
) -> Vec<InterviewQuestion> {
    let mut selected = Vec::new();
    let mut seen_ids: HashSet<&str> = HashSet::new();

    for category in &breakdown.interview_focus_areas {
        for question in bank.for_category((*category).into(), stage) {
            if seen_ids.insert(question.id.as_str()) {
                selected.push(question.clone());
            }
        }
    }

    for question in bank.baseline(stage) {
        if seen_ids.insert(question.id.as_str()) {
            selected.push(question.clone());
        }
    }

    selected
}
