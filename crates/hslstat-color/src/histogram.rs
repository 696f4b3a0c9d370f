//! HSL histogram accumulation
//!
//! [`HslHistogram`] owns one fixed allocation of 361x257x256 counters,
//! indexed by [`DiscreteHsl`]: hue slowest, lightness fastest. Counters
//! only ever grow; their sum is the total weight accumulated.
//!
//! Three accumulation paths feed it:
//!
//! - one pixel at a time (`accumulate_pixel`, `accumulate_rgb8`,
//!   `accumulate_image`), each adding 1
//! - an arbitrary weight (`accumulate_weighted`)
//! - a whole [`RgbCube`] (`merge_rgb_cube`), visiting every one of the
//!   16,777,216 combinations exactly once

use crate::colorspace::{Color, rgb_to_hsl};
use crate::cube::RgbCube;
use crate::discretize::{
    DiscreteHsl, HUE_DIM, LIGHTNESS_DIM, SATURATION_DIM, discretize, discretize_rgb8,
};
use crate::{ColorError, ColorResult};
use hslstat_core::RgbaImage;
use log::info;

/// Number of counters in the histogram
pub const HSL_HISTOGRAM_LEN: usize = HUE_DIM * SATURATION_DIM * LIGHTNESS_DIM;

/// Joint hue/saturation/lightness histogram
#[derive(Clone, PartialEq, Eq)]
pub struct HslHistogram {
    pub(crate) counts: Box<[u64]>,
}

impl std::fmt::Debug for HslHistogram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HslHistogram")
            .field("total", &self.total())
            .finish()
    }
}

impl Default for HslHistogram {
    fn default() -> Self {
        Self::new()
    }
}

impl HslHistogram {
    /// Create a zero-filled histogram
    pub fn new() -> Self {
        Self {
            counts: vec![0u64; HSL_HISTOGRAM_LEN].into_boxed_slice(),
        }
    }

    #[inline]
    fn add(&mut self, bin: DiscreteHsl, weight: u64) -> ColorResult<()> {
        let index = bin.index();
        let cell = &mut self.counts[index];
        *cell = cell
            .checked_add(weight)
            .ok_or(ColorError::CounterOverflow { index })?;
        Ok(())
    }

    /// Count one pixel of the given color.
    pub fn accumulate_pixel(&mut self, color: Color) -> ColorResult<()> {
        self.accumulate_weighted(color, 1)
    }

    /// Add `weight` to the bin of the given color.
    pub fn accumulate_weighted(&mut self, color: Color, weight: u64) -> ColorResult<()> {
        let bin = discretize(rgb_to_hsl(color))?;
        self.add(bin, weight)
    }

    /// Count one pixel given as 8-bit samples.
    #[inline]
    pub fn accumulate_rgb8(&mut self, r: u8, g: u8, b: u8) -> ColorResult<()> {
        let bin = discretize_rgb8(r, g, b)?;
        self.add(bin, 1)
    }

    /// Count every pixel of an image. Alpha is ignored.
    pub fn accumulate_image(&mut self, image: &RgbaImage) -> ColorResult<()> {
        for (r, g, b) in image.pixels() {
            self.accumulate_rgb8(r, g, b)?;
        }
        Ok(())
    }

    /// Merge a pre-aggregated RGB cube.
    ///
    /// Each of the 256^3 combinations is converted to HSL, discretized, and
    /// its cube count added to the matching bin. Zero counts are visited
    /// too; the loop does not allocate.
    pub fn merge_rgb_cube(&mut self, cube: &RgbCube) -> ColorResult<()> {
        let mut cell = 0usize;
        for r in 0..=255u8 {
            for g in 0..=255u8 {
                for b in 0..=255u8 {
                    let weight = cube.counts[cell];
                    cell += 1;
                    self.add(discretize_rgb8(r, g, b)?, weight)?;
                }
            }
        }
        info!("merged RGB cube: {} pixels", cube.total());
        Ok(())
    }

    /// Counter for a bin
    #[inline]
    pub fn get(&self, bin: DiscreteHsl) -> u64 {
        self.counts[bin.index()]
    }

    /// Sum of all counters
    ///
    /// Widened to `u128`: every counter fits in `u64`, their sum need not.
    pub fn total(&self) -> u128 {
        self.counts.iter().map(|&c| u128::from(c)).sum()
    }

    /// Number of nonzero bins
    pub fn occupied_bins(&self) -> usize {
        self.counts.iter().filter(|&&c| c != 0).count()
    }

    /// Raw counters in storage order
    pub fn as_slice(&self) -> &[u64] {
        &self.counts
    }
}
