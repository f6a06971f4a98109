//! Public language detection API for glossa
//!
//! Detects the natural language of a text fragment from a configurable set
//! of candidates, combining rule-based script filters with statistical
//! n-gram models.
//!
//! ```no_run
//! use glossa_api::{Language, LanguageDetectorBuilder};
//!
//! let detector = LanguageDetectorBuilder::from_languages(&[
//!     Language::English,
//!     Language::French,
//!     Language::German,
//! ])
//! .build()
//! .unwrap();
//!
//! let language = detector.detect_language_of("languages are awesome");
//! assert_eq!(language, Language::English);
//! ```

#![warn(missing_docs)]

pub mod builder;
pub mod error;

use std::collections::BTreeSet;

pub use builder::LanguageDetectorBuilder;
pub use error::{ApiError, Result};
pub use glossa_core::{Alphabet, Language};

/// Detects the language of input text.
///
/// Construct through [`LanguageDetectorBuilder`]. Instances are immutable
/// and safe to share across threads; language models are cached process
/// wide, so building many detectors is cheap.
pub struct LanguageDetector {
    inner: glossa_engine::LanguageDetector,
}

impl LanguageDetector {
    pub(crate) fn from_engine(inner: glossa_engine::LanguageDetector) -> Self {
        Self { inner }
    }

    /// The languages this detector chooses between
    pub fn languages(&self) -> &BTreeSet<Language> {
        self.inner.languages()
    }

    /// Returns the most likely language of the text, or
    /// [`Language::Unknown`] when no confident decision is possible.
    pub fn detect_language_of(&self, text: &str) -> Language {
        self.inner.detect_language_of(text)
    }

    /// Computes a relative confidence value per candidate language.
    ///
    /// Values lie in `[0.0, 1.0]` and are sorted descending; the most
    /// likely language always maps to exactly 1.0. Languages the rule
    /// engine considers impossible are absent, and an input without any
    /// usable signal yields an empty list. The values compare candidates
    /// against each other; they are not absolute probabilities.
    pub fn compute_language_confidence_values(&self, text: &str) -> Vec<(Language, f64)> {
        self.inner.compute_language_confidence_values(text)
    }
}

/// Detects the language of `text` among `languages` with default options
pub fn detect_language_of(text: &str, languages: &[Language]) -> Result<Language> {
    let detector = LanguageDetectorBuilder::from_languages(languages).build()?;
    Ok(detector.detect_language_of(text))
}
