//! Detector configuration

use glossa_core::Language;
use std::collections::BTreeSet;

/// Configuration handed to [`crate::LanguageDetector`] at construction.
///
/// Validation happens when the detector is built: the language set must
/// hold at least two entries after [`Language::Unknown`] is discarded, and
/// the minimum relative distance must lie in `[0.0, 0.99)`.
#[derive(Debug, Clone)]
pub struct DetectorConfig {
    /// Languages the detector chooses between
    pub languages: BTreeSet<Language>,
    /// Confidence gap below which detection reports [`Language::Unknown`]
    pub minimum_relative_distance: f64,
    /// Load every (language, order) model eagerly at construction
    pub preload_all_language_models: bool,
    /// Restrict statistical scoring to trigrams to save memory and time
    pub low_accuracy_mode: bool,
}

impl DetectorConfig {
    /// Creates a configuration with default options for the given languages
    pub fn new(languages: impl IntoIterator<Item = Language>) -> Self {
        Self {
            languages: languages.into_iter().collect(),
            minimum_relative_distance: 0.0,
            preload_all_language_models: false,
            low_accuracy_mode: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_off() {
        let config = DetectorConfig::new([Language::English, Language::German]);
        assert_eq!(config.minimum_relative_distance, 0.0);
        assert!(!config.preload_all_language_models);
        assert!(!config.low_accuracy_mode);
        assert_eq!(config.languages.len(), 2);
    }

    #[test]
    fn duplicate_languages_collapse() {
        let config = DetectorConfig::new([
            Language::English,
            Language::English,
            Language::German,
        ]);
        assert_eq!(config.languages.len(), 2);
    }
}
