//! Domain types and static language data for glossa
//!
//! This crate holds everything the detection runtime consumes but does not
//! mutate: the n-gram value type, exact fractions for the model wire format,
//! Unicode script classification, the language catalog, and the training
//! and test language models.

#![warn(missing_docs)]

pub mod alphabet;
pub mod constant;
pub mod error;
pub mod fraction;
pub mod language;
pub mod model;
pub mod ngram;

pub use alphabet::{is_japanese_script, is_logogram, Alphabet};
pub use error::{CoreError, Result};
pub use fraction::Fraction;
pub use language::Language;
pub use model::{JsonLanguageModel, TestDataLanguageModel, TrainingDataLanguageModel};
pub use ngram::{ngram_name_by_length, Ngram, NgramRange, MAX_NGRAM_LENGTH};
