//! Error types for hslstat-core
//!
//! Provides a unified error type for buffer construction and the flat
//! binary persistence used by the accumulators.
//!
//! # See also
//!
//! The batch tools abort on the first failure. This module only reports the
//! failure; deciding that it is fatal is left to the caller.

use thiserror::Error;

/// hslstat-core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Pixel buffer length does not match the stated dimensions
    #[error("buffer size mismatch: expected {expected} bytes, got {actual}")]
    BufferSize { expected: usize, actual: usize },

    /// Persisted buffer ended before every element was read
    #[error("truncated data: read {read} of {expected} bytes")]
    Truncated { read: usize, expected: usize },

    /// A persisted counter holds a negative value
    #[error("corrupt counter at element {index}: value {value}")]
    CorruptCounter { index: usize, value: i64 },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for hslstat-core operations
pub type Result<T> = std::result::Result<T, Error>;
