use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Structured candidate attributes extracted from raw resume text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateRecord {
    pub name: String,
    pub email: String,
    #[serde(alias = "experience_years", rename = "experienceYears")]
    pub experience_years: u8,
    #[serde(default)]
    pub education: Vec<String>,
    #[serde(default)]
    pub certifications: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(alias = "raw_text", rename = "rawText")]
    pub raw_text: String,
}

impl CandidateRecord {
    /// Highest education tier detectable from the extracted education lines
    pub fn education_tier(&self) -> EducationTier {
        self.education
            .iter()
            .map(|line| EducationTier::detect(line))
            .max()
            .unwrap_or(EducationTier::None)
    }

    /// Case-insensitive check for a skill in the candidate's skill set
    pub fn has_skill(&self, name: &str) -> bool {
        self.skills.iter().any(|s| s.eq_ignore_ascii_case(name))
    }
}

/// A required skill with its relative weight in the skill match score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightedSkill {
    pub name: String,
    pub weight: f64,
}

/// A culture keyword with its relative weight in the culture fit score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightedKeyword {
    pub keyword: String,
    pub weight: f64,
}

/// Per-job requirement profile, loaded once as read-only configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobProfile {
    pub title: String,
    #[serde(alias = "required_skills", rename = "requiredSkills", default)]
    pub required_skills: Vec<WeightedSkill>,
    #[serde(alias = "min_experience_years", rename = "minExperienceYears", default)]
    pub min_experience_years: u8,
    #[serde(
        alias = "education_requirement",
        rename = "educationRequirement",
        default
    )]
    pub education_requirement: EducationTier,
}

/// Company culture profile, same lifecycle as JobProfile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyProfile {
    pub name: String,
    #[serde(alias = "culture_keywords", rename = "cultureKeywords", default)]
    pub culture_keywords: Vec<WeightedKeyword>,
    #[serde(default)]
    pub values: Vec<String>,
}

/// Education tiers in ascending order; ordering drives the education match score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EducationTier {
    #[default]
    None,
    HighSchool,
    Bachelor,
    Master,
    Doctorate,
}

impl EducationTier {
    /// Numeric rank used for the proportional education score
    pub fn rank(&self) -> u8 {
        match self {
            EducationTier::None => 0,
            EducationTier::HighSchool => 1,
            EducationTier::Bachelor => 2,
            EducationTier::Master => 3,
            EducationTier::Doctorate => 4,
        }
    }

    /// Detect the highest tier mentioned in a free-text line
    ///
    /// Higher tiers are checked first so graduate-school lines are not
    /// classified by their embedded undergraduate keywords.
    pub fn detect(text: &str) -> EducationTier {
        let lower = text.to_lowercase();
        const DOCTORATE: [&str; 4] = ["doctorate", "doctoral", "ph.d", "phd"];
        const MASTER: [&str; 4] = ["master", "mba", "graduate school", "大学院"];
        const BACHELOR: [&str; 4] = ["bachelor", "university", "college", "大学"];
        const HIGH_SCHOOL: [&str; 3] = ["high school", "高等学校", "高校"];

        if DOCTORATE.iter().any(|k| lower.contains(k)) {
            EducationTier::Doctorate
        } else if MASTER.iter().any(|k| lower.contains(k)) {
            EducationTier::Master
        } else if BACHELOR.iter().any(|k| lower.contains(k)) {
            EducationTier::Bachelor
        } else if HIGH_SCHOOL.iter().any(|k| lower.contains(k)) {
            EducationTier::HighSchool
        } else {
            EducationTier::None
        }
    }
}

/// Recommendation tier derived from the overall score and thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recommendation {
    Pass,
    Interview,
    Reject,
}

/// The four scoring categories, in their fixed reporting order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreCategory {
    Skill,
    Experience,
    Culture,
    Education,
}

impl ScoreCategory {
    /// Fixed category order: skill, experience, culture, education
    pub const ALL: [ScoreCategory; 4] = [
        ScoreCategory::Skill,
        ScoreCategory::Experience,
        ScoreCategory::Culture,
        ScoreCategory::Education,
    ];

    /// Human-readable label used in reports and focus areas
    pub fn label(&self) -> &'static str {
        match self {
            ScoreCategory::Skill => "Technical skills and expertise",
            ScoreCategory::Experience => "Professional experience",
            ScoreCategory::Culture => "Culture fit",
            ScoreCategory::Education => "Educational background",
        }
    }
}

/// Scoring breakdown for one candidate against one job/company profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    #[serde(alias = "skill_match_score", rename = "skillMatchScore")]
    pub skill_match_score: f64,
    #[serde(alias = "experience_match_score", rename = "experienceMatchScore")]
    pub experience_match_score: f64,
    #[serde(alias = "culture_fit_score", rename = "cultureFitScore")]
    pub culture_fit_score: f64,
    #[serde(alias = "education_match_score", rename = "educationMatchScore")]
    pub education_match_score: f64,
    #[serde(alias = "overall_score", rename = "overallScore")]
    pub overall_score: f64,
    pub recommendation: Recommendation,
    #[serde(alias = "interview_focus_areas", rename = "interviewFocusAreas")]
    pub interview_focus_areas: Vec<ScoreCategory>,
}

impl ScoreBreakdown {
    /// Sub-score for a category
    pub fn score_for(&self, category: ScoreCategory) -> f64 {
        match category {
            ScoreCategory::Skill => self.skill_match_score,
            ScoreCategory::Experience => self.experience_match_score,
            ScoreCategory::Culture => self.culture_fit_score,
            ScoreCategory::Education => self.education_match_score,
        }
    }
}

/// Interview round identifier controlling the eligible question-bank slice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InterviewStage {
    #[serde(rename = "1st")]
    First,
    #[serde(rename = "2nd")]
    Second,
    #[serde(rename = "final")]
    Final,
}

impl InterviewStage {
    pub const ALL: [InterviewStage; 3] = [
        InterviewStage::First,
        InterviewStage::Second,
        InterviewStage::Final,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InterviewStage::First => "1st",
            InterviewStage::Second => "2nd",
            InterviewStage::Final => "final",
        }
    }

    /// Planned interview length for the stage
    pub fn duration_minutes(&self) -> u16 {
        match self {
            InterviewStage::First => 60,
            InterviewStage::Second => 90,
            InterviewStage::Final => 45,
        }
    }
}

impl fmt::Display for InterviewStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for stage strings outside 1st/2nd/final; never silently defaulted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid interview stage: {0:?} (expected one of: 1st, 2nd, final)")]
pub struct InvalidStageError(pub String);

impl std::str::FromStr for InterviewStage {
    type Err = InvalidStageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1st" => Ok(InterviewStage::First),
            "2nd" => Ok(InterviewStage::Second),
            "final" => Ok(InterviewStage::Final),
            other => Err(InvalidStageError(other.to_string())),
        }
    }
}

/// Question-bank categories: the four scoring categories plus stage baselines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionCategory {
    Skill,
    Experience,
    Culture,
    Education,
    General,
}

impl From<ScoreCategory> for QuestionCategory {
    fn from(value: ScoreCategory) -> Self {
        match value {
            ScoreCategory::Skill => QuestionCategory::Skill,
            ScoreCategory::Experience => QuestionCategory::Experience,
            ScoreCategory::Culture => QuestionCategory::Culture,
            ScoreCategory::Education => QuestionCategory::Education,
        }
    }
}

/// One interview question from the static bank; never mutated after load
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewQuestion {
    pub id: String,
    pub category: QuestionCategory,
    pub stage: InterviewStage,
    pub question: String,
    #[serde(alias = "evaluation_points", rename = "evaluationPoints", default)]
    pub evaluation_points: Vec<String>,
    #[serde(alias = "good_answer_example", rename = "goodAnswerExample", default)]
    pub good_answer_example: String,
    #[serde(alias = "red_flags", rename = "redFlags", default)]
    pub red_flags: Vec<String>,
    #[serde(alias = "time_limit_minutes", rename = "timeLimitMinutes", default)]
    pub time_limit_minutes: Option<u8>,
    #[serde(alias = "follow_up_questions", rename = "followUpQuestions", default)]
    pub follow_up_questions: Vec<String>,
}

/// Complete analysis output; owned solely by the caller once returned
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub candidate: CandidateRecord,
    pub breakdown: ScoreBreakdown,
    pub stage: InterviewStage,
    #[serde(
        alias = "interview_duration_minutes",
        rename = "interviewDurationMinutes"
    )]
    pub interview_duration_minutes: u16,
    pub questions: Vec<InterviewQuestion>,
    #[serde(alias = "special_notes", rename = "specialNotes", default)]
    pub special_notes: Vec<String>,
}

/// Weights combining the four sub-scores into the overall score
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub skill: f64,
    pub experience: f64,
    pub culture: f64,
    pub education: f64,
}

impl ScoringWeights {
    pub fn sum(&self) -> f64 {
        self.skill + self.experience + self.culture + self.education
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skill: 0.35,
            experience: 0.25,
            culture: 0.20,
            education: 0.20,
        }
    }
}

/// Recommendation and focus-area thresholds; lower bounds are inclusive
#[derive(Debug, Clone, Copy)]
pub struct ScoreThresholds {
    pub pass: f64,
    pub interview: f64,
    pub focus: f64,
}

impl Default for ScoreThresholds {
    fn default() -> Self {
        Self {
            pass: 80.0,
            interview: 60.0,
            focus: 70.0,
        }
    }
}
