//! Per-position average image
//!
//! [`AverageImage`] keeps running RGB sums for a fixed target size and
//! counts the images fed to it. Images of any size are accepted: only the
//! top-left-aligned overlap with the target contributes to the sums, but
//! every image increments the counter. Positions an image does not cover
//! therefore average toward black.

use crate::{ColorError, ColorResult};
use hslstat_core::{CHANNELS, RgbaImage};
use log::debug;

/// Running per-position RGB sums and an image counter
#[derive(Debug, Clone, PartialEq)]
pub struct AverageImage {
    width: u32,
    height: u32,
    /// Row-major, channel-interleaved sums (r, g, b per position)
    pub(crate) sums: Vec<f64>,
    pub(crate) image_count: u64,
}

impl AverageImage {
    /// Create a zeroed accumulator for a `width` x `height` target.
    ///
    /// # Errors
    ///
    /// Returns [`hslstat_core::Error::InvalidDimension`] if either dimension
    /// is 0.
    pub fn new(width: u32, height: u32) -> ColorResult<Self> {
        if width == 0 || height == 0 {
            return Err(hslstat_core::Error::InvalidDimension { width, height }.into());
        }
        Ok(Self {
            width,
            height,
            sums: vec![0.0; width as usize * height as usize * 3],
            image_count: 0,
        })
    }

    /// Target width
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Target height
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of images accumulated
    pub fn image_count(&self) -> u64 {
        self.image_count
    }

    /// Raw sums, row-major and channel-interleaved
    pub fn sums(&self) -> &[f64] {
        &self.sums
    }

    /// Add an RGBA row buffer of `width` x `height` pixels.
    ///
    /// # Errors
    ///
    /// Returns a core `BufferSize` error if `pixels` does not hold exactly
    /// `width * height * 4` samples. Nothing is accumulated in that case.
    pub fn accumulate_rgba(&mut self, pixels: &[u8], width: u32, height: u32) -> ColorResult<()> {
        let expected = width as usize * height as usize * CHANNELS;
        if pixels.len() != expected {
            return Err(hslstat_core::Error::BufferSize {
                expected,
                actual: pixels.len(),
            }
            .into());
        }

        let overlap_w = width.min(self.width) as usize;
        let overlap_h = height.min(self.height) as usize;
        debug!(
            "averaging {}x{} image over {}x{} overlap",
            width, height, overlap_w, overlap_h
        );

        let src_stride = width as usize * CHANNELS;
        let dst_stride = self.width as usize * 3;
        for y in 0..overlap_h {
            let src = &pixels[y * src_stride..y * src_stride + overlap_w * CHANNELS];
            let dst = &mut self.sums[y * dst_stride..y * dst_stride + overlap_w * 3];
            for (d, s) in dst.chunks_exact_mut(3).zip(src.chunks_exact(CHANNELS)) {
                d[0] += s[0] as f64;
                d[1] += s[1] as f64;
                d[2] += s[2] as f64;
            }
        }

        self.image_count += 1;
        Ok(())
    }

    /// Add an image.
    pub fn accumulate_image(&mut self, image: &RgbaImage) -> ColorResult<()> {
        self.accumulate_rgba(image.as_raw(), image.width(), image.height())
    }

    /// Per-position mean of every channel, in the layout of [`Self::sums`].
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::NoImages`] if nothing was accumulated.
    pub fn finalize(&self) -> ColorResult<Vec<f64>> {
        if self.image_count == 0 {
            return Err(ColorError::NoImages);
        }
        let n = self.image_count as f64;
        Ok(self.sums.iter().map(|&s| s / n).collect())
    }

    /// Finalize into an opaque 8-bit image.
    ///
    /// Means are clamped to [0, 255] and truncated.
    pub fn to_rgba_image(&self) -> ColorResult<RgbaImage> {
        let means = self.finalize()?;
        Ok(RgbaImage::from_rgb_f64(self.width, self.height, &means)?)
    }
}
