//! Detection runtime for glossa
//!
//! This crate owns everything that happens between a raw input string and
//! a sorted confidence map: input cleanup, rule-based filtering, lazy model
//! loading, and the parallel statistical scoring passes.

#![warn(missing_docs)]

pub mod config;
pub mod detector;
pub mod error;
pub mod storage;
pub mod text;

pub use config::DetectorConfig;
pub use detector::LanguageDetector;
pub use error::{EngineError, Result};
pub use storage::ModelStorage;

// Re-export the domain types the runtime hands back to callers
pub use glossa_core::{Alphabet, Language};
