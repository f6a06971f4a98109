//! Integration tests for the statistical scoring pipeline
//!
//! Models are written to a temp directory by hand so every score in here
//! can be recomputed on paper.

use glossa_engine::{DetectorConfig, Language, LanguageDetector, ModelStorage};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

fn write_model(root: &Path, iso_code: &str, file_name: &str, json: &str) {
    let dir = root.join(iso_code);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(file_name), json).unwrap();
}

/// English knows the word "good" at every order; French only knows the
/// letter "o". The returned [`TempDir`] keeps the model files alive.
fn handcrafted_storage() -> (TempDir, Arc<ModelStorage>) {
    let dir = TempDir::new().unwrap();
    write_model(
        dir.path(),
        "en",
        "unigrams.json",
        r#"{"language":"en","ngrams":{"1/10":"g","3/10":"o","1/5":"d"}}"#,
    );
    write_model(
        dir.path(),
        "en",
        "bigrams.json",
        r#"{"language":"en","ngrams":{"1/2":"go oo od"}}"#,
    );
    write_model(
        dir.path(),
        "en",
        "trigrams.json",
        r#"{"language":"en","ngrams":{"1/1":"goo ood"}}"#,
    );
    write_model(
        dir.path(),
        "fr",
        "unigrams.json",
        r#"{"language":"fr","ngrams":{"1/10":"o"}}"#,
    );
    let storage = Arc::new(ModelStorage::new(dir.path()));
    (dir, storage)
}

fn detector(minimum_relative_distance: f64) -> (TempDir, LanguageDetector) {
    let (fixture, storage) = handcrafted_storage();
    let mut config = DetectorConfig::new([Language::English, Language::French]);
    config.minimum_relative_distance = minimum_relative_distance;
    let detector = LanguageDetector::with_storage(config, storage).unwrap();
    (fixture, detector)
}

/// The exact scores the pipeline must produce for the input "good".
///
/// Order 1 sums the unigram logs, order 2 the bigram logs (French backs
/// off to its unigram "o"), order 3 contributes nothing for English
/// because log(1) sums to zero and zero sums count as missing evidence.
/// Each total is then divided by the language's unigram coverage.
fn expected_scores() -> (f64, f64) {
    let english = ((0.1f64.ln() + 0.3f64.ln() + 0.2f64.ln()) + 3.0 * 0.5f64.ln()) / 3.0;
    let french = (0.1f64.ln() + 2.0 * 0.1f64.ln() + 0.1f64.ln()) / 1.0;
    (english, french)
}

#[test]
fn scores_the_known_language_highest() {
    let (_fixture, detector) = detector(0.0);
    let values = detector.compute_language_confidence_values("good");
    let (english_score, french_score) = expected_scores();

    assert_eq!(values.len(), 2);
    assert_eq!(values[0].0, Language::English);
    assert_eq!(values[0].1, 1.0);
    assert_eq!(values[1].0, Language::French);
    let expected_french_confidence = english_score / french_score;
    assert!((values[1].1 - expected_french_confidence).abs() < 1e-12);
    assert!(values[1].1 > 0.0 && values[1].1 < 1.0);

    assert_eq!(detector.detect_language_of("good"), Language::English);
}

#[test]
fn confidence_values_never_increase() {
    let (_fixture, detector) = detector(0.0);
    let values = detector.compute_language_confidence_values("good");
    for pair in values.windows(2) {
        assert!(pair[0].1 >= pair[1].1);
    }
}

#[test]
fn minimum_relative_distance_turns_close_calls_into_unknown() {
    let (english_score, french_score) = expected_scores();
    let gap = 1.0 - english_score / french_score;

    let (_strict_fixture, strict) = detector(0.98);
    assert!(gap < 0.98);
    assert_eq!(strict.detect_language_of("good"), Language::Unknown);

    let (_lenient_fixture, lenient) = detector(gap / 2.0);
    assert_eq!(lenient.detect_language_of("good"), Language::English);
}

#[test]
fn results_are_deterministic_across_calls() {
    let (_fixture, detector) = detector(0.0);
    let first = detector.compute_language_confidence_values("good");
    let second = detector.compute_language_confidence_values("good");
    assert_eq!(first, second);
}

#[test]
fn preloading_changes_nothing_but_timing() {
    let (_fixture, storage) = handcrafted_storage();
    let mut config = DetectorConfig::new([Language::English, Language::French]);
    config.preload_all_language_models = true;
    let preloaded = LanguageDetector::with_storage(config, Arc::clone(&storage)).unwrap();
    let (_lazy_fixture, lazy) = detector(0.0);
    assert_eq!(
        preloaded.compute_language_confidence_values("good"),
        lazy.compute_language_confidence_values("good")
    );
}

#[test]
fn detectors_sharing_storage_share_loaded_models() {
    let (_fixture, storage) = handcrafted_storage();
    let config_a = DetectorConfig::new([Language::English, Language::French]);
    let config_b = DetectorConfig::new([Language::English, Language::French]);
    let detector_a = LanguageDetector::with_storage(config_a, Arc::clone(&storage)).unwrap();
    let detector_b = LanguageDetector::with_storage(config_b, storage).unwrap();
    assert_eq!(
        detector_a.detect_language_of("good"),
        detector_b.detect_language_of("good")
    );
}
