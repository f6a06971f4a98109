//! API error types

use glossa_engine::EngineError;
use thiserror::Error;

/// Errors surfaced by the public API
#[derive(Error, Debug)]
pub enum ApiError {
    /// The detector configuration is invalid
    #[error("configuration error: {0}")]
    Configuration(#[from] EngineError),

    /// An ISO 639 code that names no supported language
    #[error("unknown ISO 639 code '{code}'")]
    UnknownIsoCode {
        /// The rejected code
        code: String,
    },
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
