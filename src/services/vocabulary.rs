use crate::core::ExtractorVocabulary;
use crate::services::ConfigurationError;
use std::path::Path;

/// Load the extractor vocabulary, falling back to the built-in tables
///
/// The vocabulary file is optional configuration; when no path is set the
/// default skill and certification tables apply.
pub fn load_vocabulary(path: Option<&str>) -> Result<ExtractorVocabulary, ConfigurationError> {
    match path {
        Some(p) => vocabulary_from_path(p),
        None => Ok(ExtractorVocabulary::default()),
    }
}

fn vocabulary_from_path<P: AsRef<Path>>(path: P) -> Result<ExtractorVocabulary, ConfigurationError> {
    let raw = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&raw)?)
}
