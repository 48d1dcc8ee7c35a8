use crate::models::{CompanyProfile, JobProfile, ScoreThresholds, ScoringWeights};
use crate::services::ConfigurationError;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

/// On-disk layout of the profiles file
#[derive(Debug, Deserialize)]
struct ProfilesFile {
    company: CompanyProfile,
    #[serde(default)]
    jobs: Vec<JobProfile>,
}

/// Read-only store of the company profile and the configured job profiles
///
/// Loaded once at startup and shared via `Arc`; never mutated afterward, so
/// concurrent analyses need no locking.
#[derive(Debug, Clone)]
pub struct ProfileStore {
    company: CompanyProfile,
    jobs: Vec<JobProfile>,
}

impl ProfileStore {
    /// Load and validate profiles from a TOML file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigurationError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }

    /// Parse and validate profiles from TOML text
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigurationError> {
        let file: ProfilesFile = toml::from_str(raw)?;
        let store = Self {
            company: file.company,
            jobs: file.jobs,
        };
        store.validate()?;
        Ok(store)
    }

    fn validate(&self) -> Result<(), ConfigurationError> {
        let mut titles = HashSet::new();
        for job in &self.jobs {
            if !titles.insert(job.title.as_str()) {
                return Err(ConfigurationError::DuplicateJob(job.title.clone()));
            }
            for skill in &job.required_skills {
                if skill.weight <= 0.0 {
                    return Err(ConfigurationError::InvalidSkillWeight {
                        job: job.title.clone(),
                        skill: skill.name.clone(),
                    });
                }
            }
        }

        for keyword in &self.company.culture_keywords {
            if keyword.weight <= 0.0 {
                return Err(ConfigurationError::InvalidKeywordWeight(
                    keyword.keyword.clone(),
                ));
            }
        }

        Ok(())
    }

    pub fn company(&self) -> &CompanyProfile {
        &self.company
    }

    /// Look up a job profile by its exact title
    pub fn job(&self, title: &str) -> Option<&JobProfile> {
        self.jobs.iter().find(|j| j.title == title)
    }

    /// Job titles in configuration order
    pub fn job_titles(&self) -> Vec<String> {
        self.jobs.iter().map(|j| j.title.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}

/// Validate the scoring weights and thresholds loaded from configuration
///
/// Weights must be non-negative and sum to 1.0 (within a small epsilon);
/// the interview threshold must not exceed the pass threshold.
pub fn validate_scoring(
    weights: &ScoringWeights,
    thresholds: &ScoreThresholds,
) -> Result<(), ConfigurationError> {
    for (name, value) in [
        ("skill", weights.skill),
        ("experience", weights.experience),
        ("culture", weights.culture),
        ("education", weights.education),
    ] {
        if value < 0.0 {
            return Err(ConfigurationError::NegativeWeight(name));
        }
    }

    let sum = weights.sum();
    if (sum - 1.0).abs() > 1e-6 {
        return Err(ConfigurationError::WeightSum(sum));
    }

    if thresholds.interview > thresholds.pass {
        return Err(ConfigurationError::ThresholdOrder {
            interview: thresholds.interview,
            pass: thresholds.pass,
        });
    }

    Ok(())
}
