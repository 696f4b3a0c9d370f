//! hslstat - HSL color statistics for image collections
//!
//! Accumulates two statistics over a collection of PNG images:
//!
//! - an average image over a fixed target size
//! - a histogram of every pixel in discretized HSL space
//!
//! A third table, the RGB cube, counts 8-bit RGB combinations directly and
//! can be converted to an HSL histogram afterwards.
//!
//! # Example
//!
//! ```
//! use hslstat::color::{HslHistogram, discretize_rgb8};
//! use hslstat::RgbaImage;
//!
//! let mut img = RgbaImage::new(4, 4);
//! img.set_rgb(0, 0, 255, 0, 0).unwrap();
//!
//! let mut hist = HslHistogram::new();
//! hist.accumulate_image(&img).unwrap();
//! assert_eq!(hist.total(), 16);
//! assert_eq!(hist.get(discretize_rgb8(255, 0, 0).unwrap()), 1);
//! ```

pub mod batch;
pub mod error;

// Re-export the primary image type
pub use hslstat_core::RgbaImage;

// Re-export domain crates as modules to avoid name conflicts
pub use hslstat_color as color;
pub use hslstat_io as io;

pub use error::{BatchError, BatchResult};
