//! RGB cube counts
//!
//! A dense count table over all 256^3 8-bit RGB combinations, flattened
//! with red slowest and blue fastest. A cube is the pre-aggregated form of
//! a pixel population: it can be built from images, persisted, summed with
//! other cubes, and merged into an [`HslHistogram`](crate::HslHistogram).

use crate::{ColorError, ColorResult};
use hslstat_core::RgbaImage;
use hslstat_core::sample::LEVELS;

/// Number of cells in the cube
pub const CUBE_LEN: usize = LEVELS * LEVELS * LEVELS;

/// Dense 256x256x256 table of pixel counts
#[derive(Clone, PartialEq, Eq)]
pub struct RgbCube {
    pub(crate) counts: Box<[u64]>,
}

impl std::fmt::Debug for RgbCube {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RgbCube")
            .field("total", &self.total())
            .finish()
    }
}

impl Default for RgbCube {
    fn default() -> Self {
        Self::new()
    }
}

impl RgbCube {
    /// Create a zero-filled cube
    pub fn new() -> Self {
        Self {
            counts: vec![0u64; CUBE_LEN].into_boxed_slice(),
        }
    }

    /// Flat index of an RGB combination
    #[inline]
    pub fn index(r: u8, g: u8, b: u8) -> usize {
        ((r as usize * LEVELS) + g as usize) * LEVELS + b as usize
    }

    /// Count stored for an RGB combination
    #[inline]
    pub fn get(&self, r: u8, g: u8, b: u8) -> u64 {
        self.counts[Self::index(r, g, b)]
    }

    /// Add `weight` to the count of an RGB combination.
    pub fn add(&mut self, r: u8, g: u8, b: u8, weight: u64) -> ColorResult<()> {
        let index = Self::index(r, g, b);
        let cell = &mut self.counts[index];
        *cell = cell
            .checked_add(weight)
            .ok_or(ColorError::CounterOverflow { index })?;
        Ok(())
    }

    /// Count every pixel of an image. Alpha is ignored.
    pub fn accumulate_image(&mut self, image: &RgbaImage) -> ColorResult<()> {
        for (r, g, b) in image.pixels() {
            self.add(r, g, b, 1)?;
        }
        Ok(())
    }

    /// Add another cube cell by cell.
    pub fn merge(&mut self, other: &RgbCube) -> ColorResult<()> {
        for (index, (dst, &src)) in self.counts.iter_mut().zip(other.counts.iter()).enumerate() {
            *dst = dst
                .checked_add(src)
                .ok_or(ColorError::CounterOverflow { index })?;
        }
        Ok(())
    }

    /// Sum of all counts
    ///
    /// Widened to `u128`: every count fits in `u64`, their sum need not.
    pub fn total(&self) -> u128 {
        self.counts.iter().map(|&c| u128::from(c)).sum()
    }

    /// Raw counts in storage order
    pub fn as_slice(&self) -> &[u64] {
        &self.counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_order() {
        assert_eq!(RgbCube::index(0, 0, 1), 1);
        assert_eq!(RgbCube::index(0, 1, 0), 256);
        assert_eq!(RgbCube::index(1, 0, 0), 65536);
        assert_eq!(RgbCube::index(255, 255, 255), CUBE_LEN - 1);
    }

    #[test]
    fn test_add_and_total() {
        let mut cube = RgbCube::new();
        cube.add(1, 2, 3, 5).unwrap();
        cube.add(1, 2, 3, 2).unwrap();
        cube.add(9, 9, 9, 1).unwrap();
        assert_eq!(cube.get(1, 2, 3), 7);
        assert_eq!(cube.total(), 8);
    }

    #[test]
    fn test_total_exceeds_u64() {
        let mut cube = RgbCube::new();
        for r in 1..=4 {
            cube.add(r, 0, 0, 1 << 62).unwrap();
        }
        assert_eq!(cube.total(), 1u128 << 64);
    }

    #[test]
    fn test_overflow_detected() {
        let mut cube = RgbCube::new();
        cube.add(0, 0, 0, u64::MAX).unwrap();
        assert!(matches!(
            cube.add(0, 0, 0, 1),
            Err(ColorError::CounterOverflow { index: 0 })
        ));
    }

    #[test]
    fn test_accumulate_image() {
        let mut img = RgbaImage::new(2, 2);
        img.set_rgba(0, 0, 10, 20, 30, 0).unwrap();
        img.set_rgba(1, 0, 10, 20, 30, 255).unwrap();
        let mut cube = RgbCube::new();
        cube.accumulate_image(&img).unwrap();
        assert_eq!(cube.get(10, 20, 30), 2);
        assert_eq!(cube.get(0, 0, 0), 2);
        assert_eq!(cube.total(), 4);
    }

    #[test]
    fn test_merge() {
        let mut a = RgbCube::new();
        let mut b = RgbCube::new();
        a.add(1, 1, 1, 3).unwrap();
        b.add(1, 1, 1, 4).unwrap();
        b.add(2, 2, 2, 1).unwrap();
        a.merge(&b).unwrap();
        assert_eq!(a.get(1, 1, 1), 7);
        assert_eq!(a.get(2, 2, 2), 1);
    }
}
