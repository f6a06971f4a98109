//! End-to-end detection scenarios against the public API

use glossa_api::{Language, LanguageDetector, LanguageDetectorBuilder};
use glossa_core::{ngram_name_by_length, TrainingDataLanguageModel, MAX_NGRAM_LENGTH};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Trains models of every order from the corpus lines and writes them in
/// the on-disk layout the detector expects.
fn train_and_write(root: &Path, language: Language, corpus: &[&str]) {
    let iso_code = language.iso_code_639_1().unwrap();
    let dir = root.join(iso_code);
    fs::create_dir_all(&dir).unwrap();
    let mut lower_frequencies = HashMap::new();
    for order in 1..=MAX_NGRAM_LENGTH {
        let model = TrainingDataLanguageModel::from_lines(
            corpus.iter().copied(),
            language,
            order,
            "\\p{L}",
            &lower_frequencies,
        )
        .unwrap();
        let file_name = format!("{}s.json", ngram_name_by_length(order));
        fs::write(dir.join(file_name), model.to_json().unwrap()).unwrap();
        lower_frequencies = model.absolute_frequencies().clone();
    }
}

const ENGLISH_CORPUS: &[&str] = &[
    "languages are awesome and learning languages is fun",
    "these languages are truly awesome to study",
    "an awesome language opens many doors",
];

const FRENCH_CORPUS: &[&str] = &[
    "les langues sont vraiment formidables",
    "apprendre les langues est un grand plaisir",
    "le wagon arrive avec un moteur",
];

const GERMAN_CORPUS: &[&str] = &[
    "sprachen sind wirklich grossartig",
    "das lernen von sprachen macht freude",
    "eine grossartige sprache macht neugierig",
];

fn trained_fixture() -> (TempDir, LanguageDetector) {
    let dir = TempDir::new().unwrap();
    train_and_write(dir.path(), Language::English, ENGLISH_CORPUS);
    train_and_write(dir.path(), Language::French, FRENCH_CORPUS);
    train_and_write(dir.path(), Language::German, GERMAN_CORPUS);
    let detector = LanguageDetectorBuilder::from_languages(&[
        Language::English,
        Language::French,
        Language::German,
    ])
    .with_models_directory(dir.path())
    .build()
    .unwrap();
    (dir, detector)
}

#[test]
fn detects_english_with_full_confidence_for_the_best_match() {
    let (_fixture, detector) = trained_fixture();
    let values = detector.compute_language_confidence_values("languages are awesome");

    assert_eq!(values[0].0, Language::English);
    assert_eq!(values[0].1, 1.0);
    assert!(values.len() > 1);
    assert!(values[0].1 - values[1].1 > 0.0);
    assert_eq!(
        detector.detect_language_of("languages are awesome"),
        Language::English
    );
}

#[test]
fn confidence_values_stay_within_bounds_and_order() {
    let (_fixture, detector) = trained_fixture();
    for text in ["languages", "formidables", "sprachen sind", "a"] {
        let values = detector.compute_language_confidence_values(text);
        for pair in values.windows(2) {
            assert!(pair[0].1 >= pair[1].1);
        }
        for &(language, confidence) in &values {
            assert!((0.0..=1.0).contains(&confidence));
            assert!(detector.languages().contains(&language));
        }
        if let Some(&(_, first)) = values.first() {
            assert_eq!(first, 1.0);
        }
    }
}

#[test]
fn detection_result_is_active_or_unknown() {
    let (_fixture, detector) = trained_fixture();
    for text in ["languages", "bonjour", "中文", "?!", "ひら"] {
        let detected = detector.detect_language_of(text);
        assert!(
            detected == Language::Unknown || detector.languages().contains(&detected),
            "unexpected result {detected} for {text}"
        );
    }
}

#[test]
fn noise_does_not_change_the_decision() {
    let (_fixture, detector) = trained_fixture();
    assert_eq!(
        detector.detect_language_of("  Languages!! are 123 awesome?,  "),
        detector.detect_language_of("languages are awesome")
    );
}

#[test]
fn identical_evidence_yields_unknown() {
    let dir = TempDir::new().unwrap();
    // both languages trained on the same corpus score exactly equal
    train_and_write(dir.path(), Language::English, ENGLISH_CORPUS);
    train_and_write(dir.path(), Language::Dutch, ENGLISH_CORPUS);
    let detector = LanguageDetectorBuilder::from_languages(&[
        Language::English,
        Language::Dutch,
    ])
    .with_models_directory(dir.path())
    .build()
    .unwrap();

    let values = detector.compute_language_confidence_values("languages are awesome");
    assert_eq!(values.len(), 2);
    assert_eq!(values[0].1, values[1].1);
    assert_eq!(
        detector.detect_language_of("languages are awesome"),
        Language::Unknown
    );
}

#[test]
fn long_input_uses_trigrams_only() {
    let dir = TempDir::new().unwrap();
    // English dominates on trigrams, French on quadrigrams; whichever wins
    // tells us which orders the pipeline consulted
    fs::create_dir_all(dir.path().join("en")).unwrap();
    fs::create_dir_all(dir.path().join("fr")).unwrap();
    fs::write(
        dir.path().join("en").join("trigrams.json"),
        r#"{"language":"en","ngrams":{"9/10":"abc bcd"}}"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("en").join("quadrigrams.json"),
        r#"{"language":"en","ngrams":{"1/1000":"abcd"}}"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("fr").join("trigrams.json"),
        r#"{"language":"fr","ngrams":{"1/10":"abc bcd"}}"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("fr").join("quadrigrams.json"),
        r#"{"language":"fr","ngrams":{"99/100":"abcd"}}"#,
    )
    .unwrap();
    let detector = LanguageDetectorBuilder::from_languages(&[
        Language::English,
        Language::French,
    ])
    .with_models_directory(dir.path())
    .build()
    .unwrap();

    // short input consults orders one to five; the quadrigram pass buries
    // English under its 1/1000 probability
    assert_eq!(
        detector.detect_language_of("abcd abcd"),
        Language::French
    );

    // at 124 characters only trigrams are consulted and English wins
    let long = ["abcd"; 25].join(" ");
    assert!(long.chars().count() >= 120);
    assert_eq!(detector.detect_language_of(&long), Language::English);
}

#[test]
fn whitespace_only_input_yields_unknown() {
    let detector = LanguageDetectorBuilder::from_languages(&[
        Language::English,
        Language::German,
    ])
    .build()
    .unwrap();
    assert!(detector.compute_language_confidence_values(" ").is_empty());
    assert_eq!(detector.detect_language_of(" "), Language::Unknown);
}

#[test]
fn kana_input_takes_the_rule_path() {
    let detector = LanguageDetectorBuilder::from_languages(&[
        Language::Chinese,
        Language::English,
        Language::Japanese,
    ])
    .build()
    .unwrap();
    // no statistical models exist here, so only the rule engine can decide
    assert_eq!(
        detector.compute_language_confidence_values("日本語です"),
        vec![(Language::Japanese, 1.0)]
    );
    assert_eq!(detector.detect_language_of("中文"), Language::Chinese);
}

#[test]
fn cyrillic_input_narrows_to_the_single_candidate() {
    let detector = LanguageDetectorBuilder::from_languages(&[
        Language::English,
        Language::Russian,
    ])
    .build()
    .unwrap();
    assert_eq!(
        detector.compute_language_confidence_values("Эти книги интересны"),
        vec![(Language::Russian, 1.0)]
    );
    assert_eq!(
        detector.detect_language_of("Эти книги интересны"),
        Language::Russian
    );
}

#[test]
fn rule_decision_ignores_the_minimum_relative_distance() {
    let detector = LanguageDetectorBuilder::from_languages(&[
        Language::English,
        Language::Russian,
    ])
    .with_minimum_relative_distance(0.9)
    .build()
    .unwrap();
    assert_eq!(
        detector.detect_language_of("Эти книги интересны"),
        Language::Russian
    );
}

#[test]
fn convenience_function_matches_the_builder_path() {
    let by_function =
        glossa_api::detect_language_of("中文", &[Language::Chinese, Language::Japanese]).unwrap();
    let by_builder = LanguageDetectorBuilder::from_languages(&[
        Language::Chinese,
        Language::Japanese,
    ])
    .build()
    .unwrap()
    .detect_language_of("中文");
    assert_eq!(by_function, by_builder);
}
