use crate::models::{ScoreThresholds, ScoringWeights};
use ::config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub data: DataSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
    #[serde(default)]
    pub thresholds: ThresholdsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_skill_weight")]
    pub skill: f64,
    #[serde(default = "default_experience_weight")]
    pub experience: f64,
    #[serde(default = "default_culture_weight")]
    pub culture: f64,
    #[serde(default = "default_education_weight")]
    pub education: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            skill: default_skill_weight(),
            experience: default_experience_weight(),
            culture: default_culture_weight(),
            education: default_education_weight(),
        }
    }
}

fn default_skill_weight() -> f64 {
    0.35
}
fn default_experience_weight() -> f64 {
    0.25
}
fn default_culture_weight() -> f64 {
    0.20
}
fn default_education_weight() -> f64 {
    0.20
}

impl From<WeightsConfig> for ScoringWeights {
    fn from(value: WeightsConfig) -> Self {
        Self {
            skill: value.skill,
            experience: value.experience,
            culture: value.culture,
            education: value.education,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ThresholdsConfig {
    #[serde(default = "default_pass_threshold")]
    pub pass: f64,
    #[serde(default = "default_interview_threshold")]
    pub interview: f64,
    #[serde(default = "default_focus_threshold")]
    pub focus: f64,
}

impl Default for ThresholdsConfig {
    fn default() -> Self {
        Self {
            pass: default_pass_threshold(),
            interview: default_interview_threshold(),
            focus: default_focus_threshold(),
        }
    }
}

fn default_pass_threshold() -> f64 {
    80.0
}
fn default_interview_threshold() -> f64 {
    60.0
}
fn default_focus_threshold() -> f64 {
    70.0
}

impl From<ThresholdsConfig> for ScoreThresholds {
    fn from(value: ThresholdsConfig) -> Self {
        Self {
            pass: value.pass,
            interview: value.interview,
            focus: value.focus,
        }
    }
}

/// Paths to the read-only reference data loaded at startup
#[derive(Debug, Clone, Deserialize)]
pub struct DataSettings {
    #[serde(default = "default_profiles_path")]
    pub profiles_path: String,
    #[serde(default = "default_question_bank_path")]
    pub question_bank_path: String,
    #[serde(default)]
    pub vocabulary_path: Option<String>,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            profiles_path: default_profiles_path(),
            question_bank_path: default_question_bank_path(),
            vocabulary_path: None,
        }
    }
}

fn default_profiles_path() -> String {
    "config/profiles.toml".to_string()
}
fn default_question_bank_path() -> String {
    "config/questions.toml".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_format() -> String {
    "json".to_string()
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with HIRELENS_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., HIRELENS_SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("HIRELENS")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("HIRELENS")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights() {
        let weights = WeightsConfig::default();
        assert_eq!(weights.skill, 0.35);
        assert_eq!(weights.experience, 0.25);
        assert_eq!(weights.culture, 0.20);
        assert_eq!(weights.education, 0.20);
    }

    #[test]
    fn test_default_thresholds() {
        let thresholds = ThresholdsConfig::default();
        assert_eq!(thresholds.pass, 80.0);
        assert_eq!(thresholds.interview, 60.0);
        assert_eq!(thresholds.focus, 70.0);
    }

    #[test]
    fn test_default_data_paths() {
        let data = DataSettings::default();
        assert_eq!(data.profiles_path, "config/profiles.toml");
        assert_eq!(data.question_bank_path, "config/questions.toml");
        assert!(data.vocabulary_path.is_none());
    }

    #[test]
    fn test_default_logging() {
        let logging = LoggingSettings::default();
        assert_eq!(logging.level, "info");
        assert_eq!(logging.format, "json");
    }

    #[test]
    fn test_weights_config_conversion() {
        let weights: ScoringWeights = WeightsConfig::default().into();
        assert!((weights.sum() - 1.0).abs() < 1e-9);
    }
}
