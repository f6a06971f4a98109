//! The n-gram value type and its back-off range

use std::cmp::Ordering;
use std::fmt;

/// The largest n-gram order used by the statistical models
pub const MAX_NGRAM_LENGTH: usize = 5;

/// An immutable sequence of up to five letter codepoints.
///
/// Equality and hashing go by content; ordering goes by length first, so a
/// bigram always sorts below a trigram. The zerogram (empty value) exists
/// only as an exhausted iterator state and must never be decremented.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Ngram {
    value: String,
}

impl Ngram {
    /// Creates an n-gram from the given characters.
    ///
    /// # Panics
    ///
    /// Panics if `value` is longer than [`MAX_NGRAM_LENGTH`] characters.
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let length = value.chars().count();
        assert!(
            length <= MAX_NGRAM_LENGTH,
            "length {length} of ngram '{value}' is not in range 0..={MAX_NGRAM_LENGTH}"
        );
        Self { value }
    }

    /// The underlying characters
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Number of characters in this n-gram
    pub fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    /// True for the zerogram
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Returns the prefix that is one character shorter.
    ///
    /// # Panics
    ///
    /// Panics when called on the zerogram, which has no shorter prefix.
    pub fn decrement(&self) -> Ngram {
        let mut chars = self.value.chars();
        assert!(
            chars.next_back().is_some(),
            "the zerogram is the ngram of lowest order and cannot be decremented"
        );
        Self {
            value: chars.as_str().to_string(),
        }
    }

    /// Iterates over this n-gram and all of its shorter prefixes down to
    /// the unigram, in decreasing order of length.
    pub fn range_of_lower_order_ngrams(&self) -> NgramRange {
        NgramRange {
            current: Some(self.clone()),
        }
    }
}

impl PartialOrd for Ngram {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Ngram {
    fn cmp(&self, other: &Self) -> Ordering {
        self.char_count()
            .cmp(&other.char_count())
            .then_with(|| self.value.cmp(&other.value))
    }
}

impl fmt::Display for Ngram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// Iterator over the back-off range ⟨n_k, n_{k-1}, …, n_1⟩ of an n-gram
#[derive(Clone, Debug)]
pub struct NgramRange {
    current: Option<Ngram>,
}

impl Iterator for NgramRange {
    type Item = Ngram;

    fn next(&mut self) -> Option<Ngram> {
        let current = self.current.take()?;
        if current.char_count() > 1 {
            self.current = Some(current.decrement());
        }
        Some(current)
    }
}

/// Maps an n-gram order to its conventional name.
///
/// # Panics
///
/// Panics if `ngram_length` is outside `1..=5`.
pub fn ngram_name_by_length(ngram_length: usize) -> &'static str {
    match ngram_length {
        1 => "unigram",
        2 => "bigram",
        3 => "trigram",
        4 => "quadrigram",
        5 => "fivegram",
        _ => panic!("ngram length {ngram_length} is not in range 1..=5"),
    }
}
