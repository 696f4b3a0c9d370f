//! I/O error types
//!
//! Provides a unified error type for image decode and encode. The PNG
//! module maps its underlying library errors into `IoError` variants so
//! that callers only need to handle one error type.

use thiserror::Error;

/// Error type for image I/O operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// Standard I/O error (file not found, permission denied, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The image format is not supported
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// The decoder returned an error
    #[error("decode error: {0}")]
    DecodeError(String),

    /// The encoder returned an error
    #[error("encode error: {0}")]
    EncodeError(String),

    /// An error from the core library (e.g. buffer size mismatch)
    #[error("core error: {0}")]
    Core(#[from] hslstat_core::Error),
}

/// Convenience alias for I/O results.
pub type IoResult<T> = Result<T, IoError>;
