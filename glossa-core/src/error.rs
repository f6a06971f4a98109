//! Core error types

use thiserror::Error;

/// Errors raised by the domain layer
#[derive(Error, Debug)]
pub enum CoreError {
    /// A fraction literal did not have the form `numerator/denominator`
    #[error("malformed fraction literal '{literal}'")]
    MalformedFraction {
        /// The rejected literal
        literal: String,
    },

    /// A fraction literal had a zero denominator
    #[error("zero denominator in fraction '{literal}'")]
    ZeroDenominator {
        /// The rejected literal
        literal: String,
    },

    /// The character class handed to the training model is not a valid
    /// regex character set
    #[error("invalid character class '{char_class}': {source}")]
    InvalidCharClass {
        /// The rejected character class
        char_class: String,
        /// The underlying regex error
        source: regex::Error,
    },

    /// Serializing a language model failed
    #[error("language model serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
