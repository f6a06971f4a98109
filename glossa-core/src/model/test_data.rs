//! N-gram extraction from input text

use crate::ngram::{Ngram, MAX_NGRAM_LENGTH};
use std::collections::HashSet;

/// The deduplicated set of letter-only n-grams of one order found in an
/// input text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestDataLanguageModel {
    ngrams: HashSet<Ngram>,
}

impl TestDataLanguageModel {
    /// Collects every distinct contiguous substring of `ngram_length`
    /// characters whose characters are all letters.
    ///
    /// # Panics
    ///
    /// Panics if `ngram_length` is outside `1..=5`.
    pub fn from_text(text: &str, ngram_length: usize) -> Self {
        assert!(
            (1..=MAX_NGRAM_LENGTH).contains(&ngram_length),
            "ngram length {ngram_length} is not in range 1..={MAX_NGRAM_LENGTH}"
        );
        let chars: Vec<char> = text.chars().collect();
        let mut ngrams = HashSet::new();
        for window in chars.windows(ngram_length) {
            if window.iter().all(|ch| ch.is_alphabetic()) {
                ngrams.insert(Ngram::new(window.iter().collect::<String>()));
            }
        }
        Self { ngrams }
    }

    /// The extracted n-grams
    pub fn ngrams(&self) -> &HashSet<Ngram> {
        &self.ngrams
    }
}
