//! RGBA pixel buffer
//!
//! `RgbaImage` is the hand-off format between the image codecs and the
//! accumulators: a dense row-major buffer with four 8-bit samples per
//! pixel. Alpha is carried through decode and encode but ignored by every
//! statistic.

use crate::error::{Error, Result};

/// Samples per pixel (red, green, blue, alpha)
pub const CHANNELS: usize = 4;

/// Dense RGBA image with 8 bits per channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaImage {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl RgbaImage {
    /// Create a new image with all samples zero.
    ///
    /// Zero-sized images are allowed: a decoded file may legitimately be
    /// empty and still counts as one processed image.
    pub fn new(width: u32, height: u32) -> Self {
        let len = width as usize * height as usize * CHANNELS;
        Self {
            width,
            height,
            data: vec![0; len],
        }
    }

    /// Wrap an existing RGBA row buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferSize`] if `data.len() != width * height * 4`.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * CHANNELS;
        if data.len() != expected {
            return Err(Error::BufferSize {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Build an opaque image from interleaved RGB floating-point samples.
    ///
    /// Each sample is clamped to [0, 255] and truncated toward zero.
    /// Non-finite samples become 0.
    pub fn from_rgb_f64(width: u32, height: u32, samples: &[f64]) -> Result<Self> {
        let npixels = width as usize * height as usize;
        if samples.len() != npixels * 3 {
            return Err(Error::BufferSize {
                expected: npixels * 3,
                actual: samples.len(),
            });
        }
        let mut data = Vec::with_capacity(npixels * CHANNELS);
        for rgb in samples.chunks_exact(3) {
            data.extend(rgb.iter().map(|&v| sample_from_f64(v)));
            data.push(0xff);
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Image width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA samples, row-major
    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    /// One row of RGBA samples
    pub fn row(&self, y: u32) -> &[u8] {
        let stride = self.width as usize * CHANNELS;
        let start = y as usize * stride;
        &self.data[start..start + stride]
    }

    /// Iterate over `(r, g, b)` of every pixel in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = (u8, u8, u8)> + '_ {
        self.data.chunks_exact(CHANNELS).map(|p| (p[0], p[1], p[2]))
    }

    /// Get the RGB value at (x, y), or `None` if out of bounds.
    pub fn get_rgb(&self, x: u32, y: u32) -> Option<(u8, u8, u8)> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * CHANNELS;
        Some((self.data[idx], self.data[idx + 1], self.data[idx + 2]))
    }

    /// Get the alpha value at (x, y), or `None` if out of bounds.
    pub fn get_alpha(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * CHANNELS;
        Some(self.data[idx + 3])
    }

    /// Set the RGBA value at (x, y).
    pub fn set_rgba(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8, a: u8) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::InvalidParameter(format!(
                "pixel ({x}, {y}) outside {}x{} image",
                self.width, self.height
            )));
        }
        let idx = (y as usize * self.width as usize + x as usize) * CHANNELS;
        self.data[idx..idx + CHANNELS].copy_from_slice(&[r, g, b, a]);
        Ok(())
    }

    /// Set an opaque RGB value at (x, y).
    pub fn set_rgb(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8) -> Result<()> {
        self.set_rgba(x, y, r, g, b, 0xff)
    }
}

/// Clamp and truncate a floating-point sample to 8 bits.
#[inline]
pub fn sample_from_f64(v: f64) -> u8 {
    if v.is_nan() { 0 } else { v.clamp(0.0, 255.0) as u8 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_checks_length() {
        assert!(RgbaImage::from_raw(2, 2, vec![0; 16]).is_ok());
        assert!(matches!(
            RgbaImage::from_raw(2, 2, vec![0; 15]),
            Err(Error::BufferSize {
                expected: 16,
                actual: 15
            })
        ));
    }

    #[test]
    fn test_set_and_get() {
        let mut img = RgbaImage::new(3, 2);
        img.set_rgba(2, 1, 10, 20, 30, 40).unwrap();
        assert_eq!(img.get_rgb(2, 1), Some((10, 20, 30)));
        assert_eq!(img.get_alpha(2, 1), Some(40));
        assert_eq!(img.get_rgb(3, 0), None);
        assert!(img.set_rgb(0, 2, 1, 1, 1).is_err());
        assert_eq!(img.row(1)[8..12], [10, 20, 30, 40]);
    }

    #[test]
    fn test_pixels_order() {
        let mut img = RgbaImage::new(2, 1);
        img.set_rgb(0, 0, 1, 2, 3).unwrap();
        img.set_rgb(1, 0, 4, 5, 6).unwrap();
        let px: Vec<_> = img.pixels().collect();
        assert_eq!(px, vec![(1, 2, 3), (4, 5, 6)]);
    }

    #[test]
    fn test_from_rgb_f64_clamps_and_truncates() {
        let img = RgbaImage::from_rgb_f64(2, 1, &[20.9, -3.0, 300.0, f64::NAN, 0.5, 255.0])
            .unwrap();
        assert_eq!(img.as_raw(), &[20, 0, 255, 255, 0, 0, 255, 255]);
    }

    #[test]
    fn test_sample_from_f64() {
        assert_eq!(sample_from_f64(254.99), 254);
        assert_eq!(sample_from_f64(f64::INFINITY), 255);
        assert_eq!(sample_from_f64(f64::NEG_INFINITY), 0);
    }
}
