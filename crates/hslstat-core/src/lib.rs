//! hslstat Core - Basic data structures for color statistics
//!
//! This crate provides the pieces shared by every other hslstat crate:
//!
//! - [`RgbaImage`] - Dense 8-bit RGBA pixel buffer
//! - [`serial`] - Flat native-endian persistence of counter and sum arrays
//! - [`Error`] / [`Result`] - Error type for the above

pub mod error;
pub mod image;
pub mod serial;

pub use error::{Error, Result};
pub use image::{CHANNELS, RgbaImage, sample_from_f64};

/// Conversions between 8-bit samples and unit-range channel values.
pub mod sample {
    /// Largest 8-bit sample value as a float
    pub const MAX: f64 = 255.0;

    /// Number of distinct 8-bit sample values
    pub const LEVELS: usize = 256;

    /// Scale an 8-bit sample into [0, 1].
    #[inline]
    pub fn to_unit(v: u8) -> f64 {
        v as f64 / MAX
    }
}
