//! Error types for batch runs

use thiserror::Error;

/// Errors that end a batch run
#[derive(Debug, Error)]
pub enum BatchError {
    /// Conversion, accumulation or table persistence failed
    #[error(transparent)]
    Color(#[from] hslstat_color::ColorError),

    /// An image could not be read or written
    #[error("{path}: {source}")]
    Image {
        path: String,
        #[source]
        source: hslstat_io::IoError,
    },
}

/// Result type for batch runs
pub type BatchResult<T> = Result<T, BatchError>;
