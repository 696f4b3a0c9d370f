//! Error types for hslstat-color

use thiserror::Error;

/// Errors that can occur during conversion and accumulation
#[derive(Debug, Error)]
pub enum ColorError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] hslstat_core::Error),

    /// I/O error while opening or flushing a persisted table
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Lightness came out NaN or infinite; the conversion is broken
    #[error("non-finite lightness: {0}")]
    NonFiniteLightness(f64),

    /// A counter would exceed 64 bits
    #[error("counter overflow at bin {index}")]
    CounterOverflow { index: usize },

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// The average was requested before any image was accumulated
    #[error("no images accumulated")]
    NoImages,
}

/// Result type for color operations
pub type ColorResult<T> = Result<T, ColorError>;
