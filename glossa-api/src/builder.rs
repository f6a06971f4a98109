//! Configures and creates detector instances

use crate::error::{ApiError, Result};
use crate::LanguageDetector;
use glossa_core::Language;
use glossa_engine::{DetectorConfig, ModelStorage};
use std::path::PathBuf;
use std::sync::Arc;

/// Fluent configuration for [`LanguageDetector`].
///
/// Start from one of the `from_*` constructors, chain options, then call
/// [`build`](Self::build). Validation happens at build time: the language
/// set must hold at least two entries and the minimum relative distance
/// must lie in `[0.0, 0.99)`.
#[derive(Debug, Clone)]
pub struct LanguageDetectorBuilder {
    languages: Vec<Language>,
    minimum_relative_distance: f64,
    preload_language_models: bool,
    low_accuracy_mode: bool,
    models_directory: Option<PathBuf>,
}

impl LanguageDetectorBuilder {
    fn new(languages: Vec<Language>) -> Self {
        Self {
            languages,
            minimum_relative_distance: 0.0,
            preload_language_models: false,
            low_accuracy_mode: false,
            models_directory: None,
        }
    }

    /// Chooses among all built-in languages
    pub fn from_all_languages() -> Self {
        Self::new(Language::all())
    }

    /// Chooses among all built-in languages that are still spoken
    pub fn from_all_spoken_languages() -> Self {
        Self::new(Language::all_spoken())
    }

    /// Chooses among all built-in languages written in Arabic script
    pub fn from_all_languages_with_arabic_script() -> Self {
        Self::new(Language::all_with_arabic_script())
    }

    /// Chooses among all built-in languages written in Cyrillic script
    pub fn from_all_languages_with_cyrillic_script() -> Self {
        Self::new(Language::all_with_cyrillic_script())
    }

    /// Chooses among all built-in languages written in Devanagari script
    pub fn from_all_languages_with_devanagari_script() -> Self {
        Self::new(Language::all_with_devanagari_script())
    }

    /// Chooses among all built-in languages written in Latin script
    pub fn from_all_languages_with_latin_script() -> Self {
        Self::new(Language::all_with_latin_script())
    }

    /// Chooses among all built-in languages except the given ones
    pub fn from_all_languages_without(languages: &[Language]) -> Self {
        Self::new(
            Language::all()
                .into_iter()
                .filter(|language| !languages.contains(language))
                .collect(),
        )
    }

    /// Chooses among exactly the given languages
    pub fn from_languages(languages: &[Language]) -> Self {
        Self::new(languages.to_vec())
    }

    /// Chooses among the languages named by the given ISO 639-1 codes
    pub fn from_iso_codes_639_1(iso_codes: &[&str]) -> Result<Self> {
        let languages = iso_codes
            .iter()
            .map(|&code| {
                Language::from_iso_code_639_1(code).ok_or_else(|| ApiError::UnknownIsoCode {
                    code: code.to_string(),
                })
            })
            .collect::<Result<Vec<Language>>>()?;
        Ok(Self::new(languages))
    }

    /// Chooses among the languages named by the given ISO 639-3 codes
    pub fn from_iso_codes_639_3(iso_codes: &[&str]) -> Result<Self> {
        let languages = iso_codes
            .iter()
            .map(|&code| {
                Language::from_iso_code_639_3(code).ok_or_else(|| ApiError::UnknownIsoCode {
                    code: code.to_string(),
                })
            })
            .collect::<Result<Vec<Language>>>()?;
        Ok(Self::new(languages))
    }

    /// Sets the confidence gap below which detection reports
    /// [`Language::Unknown`] instead of a best guess.
    ///
    /// Useful for words spelled identically in several languages. The gap
    /// between confidence values grows with input length, so keep this low
    /// when classifying short phrases. Accepts values in `[0.0, 0.99)`;
    /// out-of-range values are rejected at build time.
    pub fn with_minimum_relative_distance(mut self, distance: f64) -> Self {
        self.minimum_relative_distance = distance;
        self
    }

    /// Loads every language model eagerly when the detector is built,
    /// trading construction time for predictable detection latency
    pub fn with_preloaded_language_models(mut self) -> Self {
        self.preload_language_models = true;
        self
    }

    /// Restricts statistical scoring to trigrams. Saves memory and time;
    /// accuracy for inputs shorter than 120 characters drops noticeably.
    pub fn with_low_accuracy_mode(mut self) -> Self {
        self.low_accuracy_mode = true;
        self
    }

    /// Resolves model files under the given directory instead of the
    /// process-wide default. The detector gets its own model cache.
    pub fn with_models_directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.models_directory = Some(directory.into());
        self
    }

    /// Builds the detector
    pub fn build(self) -> Result<LanguageDetector> {
        let mut config = DetectorConfig::new(self.languages);
        config.minimum_relative_distance = self.minimum_relative_distance;
        config.preload_all_language_models = self.preload_language_models;
        config.low_accuracy_mode = self.low_accuracy_mode;
        let inner = match self.models_directory {
            Some(directory) => glossa_engine::LanguageDetector::with_storage(
                config,
                Arc::new(ModelStorage::new(directory)),
            ),
            None => glossa_engine::LanguageDetector::with_config(config),
        }?;
        Ok(LanguageDetector::from_engine(inner))
    }
}
