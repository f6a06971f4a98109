//! Frequency computation over training corpora
//!
//! Kept in the core crate as the producing side of the wire format; the
//! detection runtime only ever sees the JSON artifacts this emits.

use crate::error::{CoreError, Result};
use crate::fraction::Fraction;
use crate::language::Language;
use crate::model::json::JsonLanguageModel;
use crate::ngram::{Ngram, MAX_NGRAM_LENGTH};
use regex::Regex;
use std::collections::{BTreeMap, HashMap};

/// Absolute and relative n-gram frequencies of one language at one order
#[derive(Debug, Clone)]
pub struct TrainingDataLanguageModel {
    language: Language,
    absolute_frequencies: HashMap<Ngram, u32>,
    relative_frequencies: HashMap<Ngram, Fraction>,
}

impl TrainingDataLanguageModel {
    /// Counts n-grams of the given order across the corpus lines.
    ///
    /// `char_class` is a regex character set (e.g. `\p{L}`) restricting
    /// which n-grams are counted. For orders above one,
    /// `lower_ngram_absolute_frequencies` must hold the counts of the next
    /// lower order from the same corpus; relative frequencies then use the
    /// (k−1)-prefix count as denominator, otherwise the total count.
    ///
    /// # Panics
    ///
    /// Panics if `ngram_length` is outside `1..=5`, or if a counted n-gram
    /// has a prefix absent from `lower_ngram_absolute_frequencies`.
    pub fn from_lines<'a>(
        lines: impl IntoIterator<Item = &'a str>,
        language: Language,
        ngram_length: usize,
        char_class: &str,
        lower_ngram_absolute_frequencies: &HashMap<Ngram, u32>,
    ) -> Result<Self> {
        assert!(
            (1..=MAX_NGRAM_LENGTH).contains(&ngram_length),
            "ngram length {ngram_length} is not in range 1..={MAX_NGRAM_LENGTH}"
        );
        let absolute_frequencies =
            compute_absolute_frequencies(lines, ngram_length, char_class)?;
        let relative_frequencies = compute_relative_frequencies(
            ngram_length,
            &absolute_frequencies,
            lower_ngram_absolute_frequencies,
        );
        Ok(Self {
            language,
            absolute_frequencies,
            relative_frequencies,
        })
    }

    /// The modeled language
    pub fn language(&self) -> Language {
        self.language
    }

    /// Raw n-gram counts
    pub fn absolute_frequencies(&self) -> &HashMap<Ngram, u32> {
        &self.absolute_frequencies
    }

    /// Exact relative frequencies
    pub fn relative_frequencies(&self) -> &HashMap<Ngram, Fraction> {
        &self.relative_frequencies
    }

    /// Serializes to the wire format, grouping n-grams by their shared
    /// probability. Output is deterministic: fractions ascend and n-grams
    /// within a group are sorted.
    pub fn to_json(&self) -> Result<String> {
        let mut grouped: BTreeMap<Fraction, Vec<&str>> = BTreeMap::new();
        for (ngram, &fraction) in &self.relative_frequencies {
            grouped.entry(fraction).or_default().push(ngram.value());
        }
        let ngrams = grouped
            .into_iter()
            .map(|(fraction, mut values)| {
                values.sort_unstable();
                (fraction, values.join(" "))
            })
            .collect();
        let model = JsonLanguageModel {
            language: self
                .language
                .iso_code_639_1()
                .unwrap_or_default()
                .to_string(),
            ngrams,
        };
        Ok(serde_json::to_string(&model)?)
    }
}

fn compute_absolute_frequencies<'a>(
    lines: impl IntoIterator<Item = &'a str>,
    ngram_length: usize,
    char_class: &str,
) -> Result<HashMap<Ngram, u32>> {
    let regex = Regex::new(&format!("^[{char_class}]+$")).map_err(|source| {
        CoreError::InvalidCharClass {
            char_class: char_class.to_string(),
            source,
        }
    })?;
    let mut frequencies: HashMap<Ngram, u32> = HashMap::new();
    for line in lines {
        let lowercased = line.to_lowercase();
        let chars: Vec<char> = lowercased.chars().collect();
        for window in chars.windows(ngram_length) {
            let slice: String = window.iter().collect();
            if regex.is_match(&slice) {
                *frequencies.entry(Ngram::new(slice)).or_insert(0) += 1;
            }
        }
    }
    Ok(frequencies)
}

fn compute_relative_frequencies(
    ngram_length: usize,
    absolute_frequencies: &HashMap<Ngram, u32>,
    lower_ngram_absolute_frequencies: &HashMap<Ngram, u32>,
) -> HashMap<Ngram, Fraction> {
    let total: u32 = absolute_frequencies.values().sum();
    let mut probabilities = HashMap::with_capacity(absolute_frequencies.len());
    for (ngram, &frequency) in absolute_frequencies {
        let denominator = if ngram_length == 1 || lower_ngram_absolute_frequencies.is_empty() {
            total
        } else {
            let prefix = ngram.decrement();
            lower_ngram_absolute_frequencies
                .get(&prefix)
                .copied()
                .unwrap_or(0)
        };
        probabilities.insert(ngram.clone(), Fraction::new(frequency, denominator));
    }
    probabilities
}
