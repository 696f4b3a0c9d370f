//! HSL discretization
//!
//! Maps continuous HSL into integer bins for histogram indexing.
//!
//! | component  | scale | normal bins | sentinel (undefined) |
//! |------------|-------|-------------|----------------------|
//! | hue        | 360   | 0..=359     | 360                  |
//! | saturation | 255   | 0..=255     | 256                  |
//! | lightness  | 255   | 0..=255     | none                 |
//!
//! Values are truncated toward zero, then clamped. The clamp only absorbs
//! round-off at the ends of the range.

use crate::colorspace::{Hsl, rgb8_to_hsl};
use crate::{ColorError, ColorResult};

/// Number of defined hue bins
pub const HUE_BINS: usize = 360;
/// Number of defined saturation bins
pub const SATURATION_BINS: usize = 256;
/// Number of lightness bins
pub const LIGHTNESS_BINS: usize = 256;

/// Hue bin reserved for undefined hue
pub const HUE_UNDEFINED: u16 = HUE_BINS as u16;
/// Saturation bin reserved for undefined saturation
pub const SATURATION_UNDEFINED: u16 = SATURATION_BINS as u16;

/// Hue dimension of the histogram, sentinel included
pub const HUE_DIM: usize = HUE_BINS + 1;
/// Saturation dimension of the histogram, sentinel included
pub const SATURATION_DIM: usize = SATURATION_BINS + 1;
/// Lightness dimension of the histogram
pub const LIGHTNESS_DIM: usize = LIGHTNESS_BINS;

const HUE_SCALE: f64 = HUE_BINS as f64;
const SL_SCALE: f64 = 255.0;

/// Discrete HSL bin coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiscreteHsl {
    /// Hue bin, 0..=359 or [`HUE_UNDEFINED`]
    pub h: u16,
    /// Saturation bin, 0..=255 or [`SATURATION_UNDEFINED`]
    pub s: u16,
    /// Lightness bin, 0..=255
    pub l: u16,
}

impl DiscreteHsl {
    /// Create bin coordinates, checking each against its dimension.
    pub fn new(h: u16, s: u16, l: u16) -> ColorResult<Self> {
        if h as usize >= HUE_DIM || s as usize >= SATURATION_DIM || l as usize >= LIGHTNESS_DIM {
            return Err(ColorError::InvalidParameters(format!(
                "bin ({h}, {s}, {l}) outside {HUE_DIM}x{SATURATION_DIM}x{LIGHTNESS_DIM}"
            )));
        }
        Ok(Self { h, s, l })
    }

    /// Flat row-major index: hue slowest, lightness fastest
    #[inline]
    pub fn index(self) -> usize {
        (self.h as usize * SATURATION_DIM + self.s as usize) * LIGHTNESS_DIM + self.l as usize
    }

    /// Inverse of [`DiscreteHsl::index`]
    pub fn from_index(index: usize) -> Option<Self> {
        if index >= HUE_DIM * SATURATION_DIM * LIGHTNESS_DIM {
            return None;
        }
        let l = index % LIGHTNESS_DIM;
        let s = (index / LIGHTNESS_DIM) % SATURATION_DIM;
        let h = index / (LIGHTNESS_DIM * SATURATION_DIM);
        Some(Self {
            h: h as u16,
            s: s as u16,
            l: l as u16,
        })
    }

    /// Whether the hue bin is a real value rather than the sentinel
    pub fn has_hue(self) -> bool {
        self.h != HUE_UNDEFINED
    }

    /// Whether the saturation bin is a real value rather than the sentinel
    pub fn has_saturation(self) -> bool {
        self.s != SATURATION_UNDEFINED
    }
}

/// Scale, truncate toward zero, clamp to `[0, max]`.
#[inline]
fn bin(value: f64, scale: f64, max: u16) -> u16 {
    ((value * scale) as i64).clamp(0, max as i64) as u16
}

/// Discretize an HSL color
///
/// A hue or saturation that is undefined, or defined but not finite, maps
/// to its sentinel bin.
///
/// # Errors
///
/// Returns [`ColorError::NonFiniteLightness`] if lightness is NaN or
/// infinite. Valid RGB input never produces that, so it indicates a broken
/// conversion rather than bad data.
#[inline]
pub fn discretize(hsl: Hsl) -> ColorResult<DiscreteHsl> {
    if !hsl.l.is_finite() {
        return Err(ColorError::NonFiniteLightness(hsl.l));
    }
    let h = match hsl.h {
        Some(h) if h.is_finite() => bin(h, HUE_SCALE, HUE_UNDEFINED - 1),
        _ => HUE_UNDEFINED,
    };
    let s = match hsl.s {
        Some(s) if s.is_finite() => bin(s, SL_SCALE, SATURATION_UNDEFINED - 1),
        _ => SATURATION_UNDEFINED,
    };
    let l = bin(hsl.l, SL_SCALE, (LIGHTNESS_BINS - 1) as u16);
    Ok(DiscreteHsl { h, s, l })
}

/// Convert 8-bit RGB samples straight to histogram bins
#[inline]
pub fn discretize_rgb8(r: u8, g: u8, b: u8) -> ColorResult<DiscreteHsl> {
    discretize(rgb8_to_hsl(r, g, b))
}
