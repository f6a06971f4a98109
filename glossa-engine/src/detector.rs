//! The detection pipeline
//!
//! Detection runs in three stages. Cleanup normalizes the input and splits
//! it into words. The rule engine then either decides outright (scripts
//! used by exactly one candidate, logogram heuristics) or narrows the
//! candidate set by alphabet and diacritic evidence. Whatever survives is
//! scored statistically: one parallel task per n-gram order sums the log
//! probabilities of the text's n-grams under each candidate's models,
//! backing off to shorter prefixes where evidence is missing.

use crate::config::DetectorConfig;
use crate::error::{EngineError, Result};
use crate::storage::ModelStorage;
use crate::text::{clean_up_input_text, split_text_into_words};
use glossa_core::constant::CHARS_TO_LANGUAGES;
use glossa_core::{
    is_japanese_script, Alphabet, Language, Ngram, TestDataLanguageModel, MAX_NGRAM_LENGTH,
};
use rayon::prelude::*;
use std::cmp::Ordering;
use std::collections::{BTreeSet, HashMap, HashSet};
use std::sync::Arc;

/// Above this cleaned-text length, trigrams alone are reliable enough
const HIGH_ACCURACY_MODE_MAX_TEXT_LENGTH: usize = 120;

/// Identifies the language of text fragments.
///
/// Immutable after construction; cheap to share across threads.
pub struct LanguageDetector {
    languages: BTreeSet<Language>,
    minimum_relative_distance: f64,
    low_accuracy_mode: bool,
    languages_with_unique_characters: Vec<Language>,
    one_language_alphabets: Vec<(Alphabet, Language)>,
    storage: Arc<ModelStorage>,
}

impl LanguageDetector {
    /// Builds a detector over the process-wide model storage
    pub fn with_config(config: DetectorConfig) -> Result<Self> {
        Self::with_storage(config, ModelStorage::shared())
    }

    /// Builds a detector over a caller-supplied model storage
    pub fn with_storage(config: DetectorConfig, storage: Arc<ModelStorage>) -> Result<Self> {
        let mut languages = config.languages;
        languages.remove(&Language::Unknown);
        if languages.len() < 2 {
            return Err(EngineError::NotEnoughLanguages);
        }
        if !(0.0..0.99).contains(&config.minimum_relative_distance) {
            return Err(EngineError::InvalidMinimumRelativeDistance {
                distance: config.minimum_relative_distance,
            });
        }
        let languages_with_unique_characters = languages
            .iter()
            .copied()
            .filter(|language| language.unique_characters().is_some())
            .collect();
        let one_language_alphabets = Alphabet::all_supporting_exactly_one_language()
            .iter()
            .copied()
            .filter(|(_, language)| languages.contains(language))
            .collect();
        let detector = Self {
            languages,
            minimum_relative_distance: config.minimum_relative_distance,
            low_accuracy_mode: config.low_accuracy_mode,
            languages_with_unique_characters,
            one_language_alphabets,
            storage,
        };
        if config.preload_all_language_models {
            detector.storage.preload(&detector.languages);
        }
        Ok(detector)
    }

    /// The active language set
    pub fn languages(&self) -> &BTreeSet<Language> {
        &self.languages
    }

    /// Returns the most likely language, or [`Language::Unknown`] when the
    /// top two candidates are closer than the minimum relative distance.
    pub fn detect_language_of(&self, text: &str) -> Language {
        let confidence_values = self.compute_language_confidence_values(text);
        let Some(&(most_likely, highest)) = confidence_values.first() else {
            return Language::Unknown;
        };
        if confidence_values.len() == 1 {
            return most_likely;
        }
        let (_, second) = confidence_values[1];
        if highest == second || highest - second < self.minimum_relative_distance {
            return Language::Unknown;
        }
        most_likely
    }

    /// Computes a relative confidence per candidate language, sorted by
    /// value descending. The most likely language always maps to 1.0;
    /// languages ruled out entirely are absent. Empty when the input
    /// carries no usable signal.
    pub fn compute_language_confidence_values(&self, text: &str) -> Vec<(Language, f64)> {
        let cleaned = clean_up_input_text(text);
        if cleaned.is_empty() || !cleaned.chars().any(char::is_alphabetic) {
            return Vec::new();
        }
        let words = split_text_into_words(&cleaned);

        let rule_language = self.detect_language_with_rules(&words);
        if rule_language != Language::Unknown {
            return vec![(rule_language, 1.0)];
        }

        let filtered = self.filter_languages_by_rules(&words);
        if filtered.len() == 1 {
            let only = *filtered.iter().next().expect("len checked above");
            return vec![(only, 1.0)];
        }

        let char_count = cleaned.chars().count();
        if self.low_accuracy_mode && char_count < 3 {
            return Vec::new();
        }
        let orders: Vec<usize> =
            if self.low_accuracy_mode || char_count >= HIGH_ACCURACY_MODE_MAX_TEXT_LENGTH {
                vec![3]
            } else {
                (1..=MAX_NGRAM_LENGTH).collect()
            };

        let per_order: Vec<(HashMap<Language, f64>, Option<HashMap<Language, u32>>)> = orders
            .into_par_iter()
            .filter(|&order| char_count >= order)
            .map(|order| {
                let test_model = TestDataLanguageModel::from_text(&cleaned, order);
                let probabilities = self.compute_language_probabilities(&test_model, &filtered);
                let unigram_counts =
                    (order == 1).then(|| self.count_unigrams(&test_model, &filtered));
                (probabilities, unigram_counts)
            })
            .collect();
        let (probability_maps, unigram_counts): (Vec<_>, Vec<_>) = per_order.into_iter().unzip();
        let unigram_counts = unigram_counts.into_iter().flatten().next();

        let summed =
            self.sum_up_probabilities(&probability_maps, unigram_counts.as_ref(), &filtered);
        if summed.is_empty() {
            return Vec::new();
        }
        let highest = summed.values().copied().fold(f64::NEG_INFINITY, f64::max);
        let mut values: Vec<(Language, f64)> = summed
            .into_iter()
            .map(|(language, score)| {
                let confidence = if highest < 0.0 { highest / score } else { 0.0 };
                (language, confidence)
            })
            .collect();
        values.sort_by(|(language_a, confidence_a), (language_b, confidence_b)| {
            confidence_b
                .partial_cmp(confidence_a)
                .unwrap_or(Ordering::Equal)
                .then_with(|| language_a.cmp(language_b))
        });
        values
    }

    /// Decides by script evidence alone. A word votes for the single
    /// language its characters pin down; the text follows the strict
    /// plurality of word votes.
    fn detect_language_with_rules(&self, words: &[String]) -> Language {
        let mut total_counts: HashMap<Language, u32> = HashMap::new();

        for word in words {
            let mut word_counts: HashMap<Language, u32> = HashMap::new();
            for ch in word.chars() {
                let mut matched = false;
                for &(alphabet, language) in &self.one_language_alphabets {
                    if alphabet.matches_char(ch) {
                        *word_counts.entry(language).or_insert(0) += 1;
                        matched = true;
                        break;
                    }
                }
                if matched {
                    continue;
                }
                if Alphabet::Han.matches_char(ch) {
                    *word_counts.entry(Language::Chinese).or_insert(0) += 1;
                } else if is_japanese_script(ch) {
                    *word_counts.entry(Language::Japanese).or_insert(0) += 1;
                } else if Alphabet::Latin.matches_char(ch)
                    || Alphabet::Cyrillic.matches_char(ch)
                    || Alphabet::Devanagari.matches_char(ch)
                {
                    for &language in &self.languages_with_unique_characters {
                        let is_unique = language
                            .unique_characters()
                            .is_some_and(|unique| unique.contains(ch));
                        if is_unique {
                            *word_counts.entry(language).or_insert(0) += 1;
                        }
                    }
                }
            }

            let word_winner = match word_counts.len() {
                0 => None,
                1 => word_counts.keys().next().copied(),
                _ => plurality_winner(&word_counts),
            };
            match word_winner {
                Some(language) if self.languages.contains(&language) => {
                    *total_counts.entry(language).or_insert(0) += 1;
                }
                _ => *total_counts.entry(Language::Unknown).or_insert(0) += 1,
            }
        }

        let unknown_count = total_counts
            .get(&Language::Unknown)
            .copied()
            .unwrap_or(0);
        if f64::from(unknown_count) < 0.5 * words.len() as f64 {
            total_counts.remove(&Language::Unknown);
        }
        if total_counts.is_empty() {
            return Language::Unknown;
        }
        if total_counts.len() == 1 {
            return *total_counts.keys().next().expect("len checked above");
        }
        if total_counts.len() == 2
            && total_counts.contains_key(&Language::Chinese)
            && total_counts.contains_key(&Language::Japanese)
        {
            // kanji is a subset of Japanese writing, so mixed evidence
            // points to Japanese rather than Chinese
            return Language::Japanese;
        }
        plurality_winner(&total_counts).unwrap_or(Language::Unknown)
    }

    /// Narrows the candidate set by the plurality alphabet of the words,
    /// then by diacritic evidence.
    fn filter_languages_by_rules(&self, words: &[String]) -> BTreeSet<Language> {
        let mut detected_alphabets: HashMap<Alphabet, u32> = HashMap::new();
        for word in words {
            for alphabet in Alphabet::ALL {
                if alphabet.matches(word) {
                    *detected_alphabets.entry(alphabet).or_insert(0) += 1;
                    break;
                }
            }
        }
        if detected_alphabets.is_empty() {
            return self.languages.clone();
        }
        if detected_alphabets.len() > 1 {
            let distinct_counts: HashSet<u32> = detected_alphabets.values().copied().collect();
            if distinct_counts.len() == 1 {
                return self.languages.clone();
            }
        }
        let most_frequent_alphabet = detected_alphabets
            .iter()
            .map(|(&alphabet, &count)| (alphabet, count))
            .max_by(|&(alphabet_a, count_a), &(alphabet_b, count_b)| {
                count_a
                    .cmp(&count_b)
                    .then_with(|| alphabet_b.cmp(&alphabet_a))
            })
            .map(|(alphabet, _)| alphabet)
            .expect("emptiness checked above");

        let filtered: BTreeSet<Language> = self
            .languages
            .iter()
            .copied()
            .filter(|language| language.alphabets().contains(&most_frequent_alphabet))
            .collect();

        let mut language_counts: HashMap<Language, u32> = HashMap::new();
        for (characters, languages) in CHARS_TO_LANGUAGES {
            let relevant: Vec<Language> = languages
                .iter()
                .copied()
                .filter(|language| filtered.contains(language))
                .collect();
            if relevant.is_empty() {
                continue;
            }
            for word in words {
                for ch in characters.chars() {
                    if word.contains(ch) {
                        for &language in &relevant {
                            *language_counts.entry(language).or_insert(0) += 1;
                        }
                    }
                }
            }
        }

        let half_word_count = words.len() as f64 / 2.0;
        let subset: BTreeSet<Language> = language_counts
            .into_iter()
            .filter(|&(_, count)| f64::from(count) >= half_word_count)
            .map(|(language, _)| language)
            .collect();
        if subset.is_empty() {
            filtered
        } else {
            subset
        }
    }

    fn compute_language_probabilities(
        &self,
        test_model: &TestDataLanguageModel,
        filtered: &BTreeSet<Language>,
    ) -> HashMap<Language, f64> {
        let mut probabilities = HashMap::new();
        for &language in filtered {
            let sum = self.compute_sum_of_ngram_probabilities(language, test_model.ngrams());
            // a sum of exactly zero means not one n-gram found evidence
            if sum < 0.0 {
                probabilities.insert(language, sum);
            }
        }
        probabilities
    }

    /// Sums the log probability of each n-gram, walking its back-off range
    /// and taking the first prefix with positive stored probability.
    fn compute_sum_of_ngram_probabilities(
        &self,
        language: Language,
        ngrams: &HashSet<Ngram>,
    ) -> f64 {
        let mut sum = 0.0;
        for ngram in ngrams {
            for prefix in ngram.range_of_lower_order_ngrams() {
                let probability = self.storage.ngram_probability(language, &prefix);
                if probability > 0.0 {
                    sum += probability.ln();
                    break;
                }
            }
        }
        sum
    }

    /// How many distinct test unigrams each language has evidence for
    fn count_unigrams(
        &self,
        unigram_model: &TestDataLanguageModel,
        filtered: &BTreeSet<Language>,
    ) -> HashMap<Language, u32> {
        let mut counts = HashMap::new();
        for &language in filtered {
            let count = unigram_model
                .ngrams()
                .iter()
                .filter(|unigram| self.storage.ngram_probability(language, unigram) > 0.0)
                .count() as u32;
            if count > 0 {
                counts.insert(language, count);
            }
        }
        counts
    }

    /// Sums per-order scores, then normalizes each language's total by its
    /// unigram coverage. The division shrinks the magnitude of the
    /// negative log sum, so well-covered languages end up more confident.
    fn sum_up_probabilities(
        &self,
        probability_maps: &[HashMap<Language, f64>],
        unigram_counts: Option<&HashMap<Language, u32>>,
        filtered: &BTreeSet<Language>,
    ) -> HashMap<Language, f64> {
        let mut summed = HashMap::new();
        for &language in filtered {
            let mut sum: f64 = probability_maps
                .iter()
                .map(|probabilities| probabilities.get(&language).copied().unwrap_or(0.0))
                .sum();
            if let Some(counts) = unigram_counts {
                if let Some(&count) = counts.get(&language) {
                    sum /= f64::from(count);
                }
            }
            if sum < 0.0 {
                summed.insert(language, sum);
            }
        }
        summed
    }
}

/// The key with the strictly highest count, if any. Ties are reported as
/// `None`; equal counts are compared deterministically.
fn plurality_winner(counts: &HashMap<Language, u32>) -> Option<Language> {
    let mut sorted: Vec<(Language, u32)> =
        counts.iter().map(|(&language, &count)| (language, count)).collect();
    sorted.sort_by(|(language_a, count_a), (language_b, count_b)| {
        count_b
            .cmp(count_a)
            .then_with(|| language_a.cmp(language_b))
    });
    match sorted.as_slice() {
        [] => None,
        [(language, _)] => Some(*language),
        [(language, count), (_, second_count), ..] if count > second_count => Some(*language),
        _ => None,
    }
}
