//! Engine error types

use glossa_core::CoreError;
use thiserror::Error;

/// Errors raised while configuring or running the detection engine
#[derive(Error, Debug)]
pub enum EngineError {
    /// Domain-layer error
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A detector needs at least two languages to choose from
    #[error("language detectors need at least two languages to choose from")]
    NotEnoughLanguages,

    /// The minimum relative distance is outside its valid range
    #[error("minimum relative distance {distance} must lie in between 0.0 and 0.99")]
    InvalidMinimumRelativeDistance {
        /// The rejected value
        distance: f64,
    },
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
