//! hslstat Color - Color space conversion and color statistics
//!
//! This crate turns pixels into color statistics:
//!
//! - **Color space conversion** ([`colorspace`]): RGB <-> HSL with explicit
//!   undefined hue and saturation
//! - **Discretization** ([`discretize`]): HSL -> integer bins, with sentinel
//!   bins for undefined components
//! - **HSL histogram** ([`histogram`]): 361x257x256 counters, fed per pixel,
//!   by weight, or by merging an RGB cube
//! - **RGB cube** ([`cube`]): 256^3 counts of 8-bit RGB combinations
//! - **Average image** ([`average`]): per-position running RGB sums
//! - **Run state** ([`state`]): average and histogram persisted together
//!
//! Every table persists as a raw native-endian array; see [`serial`].

pub mod average;
pub mod colorspace;
pub mod cube;
pub mod discretize;
pub mod error;
pub mod histogram;
pub mod serial;
pub mod state;

// Re-export core types
pub use hslstat_core;

// Re-export error types
pub use error::{ColorError, ColorResult};

// Re-export color space types and functions
pub use colorspace::{
    Color, Hsl, floored_mod, hsl_to_rgb, min_max_index, rgb_to_hsl, rgb8_to_hsl,
};

// Re-export discretization
pub use discretize::{
    DiscreteHsl, HUE_DIM, HUE_UNDEFINED, LIGHTNESS_DIM, SATURATION_DIM, SATURATION_UNDEFINED,
    discretize, discretize_rgb8,
};

// Re-export accumulators
pub use average::AverageImage;
pub use cube::{CUBE_LEN, RgbCube};
pub use histogram::{HSL_HISTOGRAM_LEN, HslHistogram};
pub use state::AccumulatorState;
