//! hslstat-test - Regression test helpers for hslstat
//!
//! This crate provides the small framework the regression tests share:
//!
//! - [`RegParams`]: indexed value/count/byte comparisons that collect every
//!   failure and report them together
//! - Synthetic image builders, so tests need no image files on disk
//! - A scratch directory (`tests/regout`) for tests that exercise files
//!
//! # Usage
//!
//! ```ignore
//! use hslstat_test::RegParams;
//!
//! let mut rp = RegParams::new("histogram");
//! rp.compare_counts(400, hist.total());
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "display" to print every comparison

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use hslstat_core::RgbaImage;
use std::fs;

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // hslstat-test is at crates/hslstat-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}

/// Get a path inside the regout directory, creating the directory first.
pub fn regout_path(name: &str) -> TestResult<String> {
    let dir = regout_dir();
    fs::create_dir_all(&dir).map_err(|e| TestError::DirectoryCreate {
        path: dir.clone(),
        message: e.to_string(),
    })?;
    Ok(format!("{}/{}", dir, name))
}

/// Write an image as PNG into the regout directory and return its path.
pub fn write_test_png(name: &str, image: &RgbaImage) -> TestResult<String> {
    let path = regout_path(name)?;
    hslstat_io::write_image(image, &path).map_err(|e| TestError::ImageWrite {
        path: path.clone(),
        message: e.to_string(),
    })?;
    Ok(path)
}

/// Create an opaque image of a single color
pub fn make_uniform_rgba(r: u8, g: u8, b: u8, w: u32, h: u32) -> TestResult<RgbaImage> {
    let mut img = RgbaImage::new(w, h);
    for y in 0..h {
        for x in 0..w {
            img.set_rgb(x, y, r, g, b)?;
        }
    }
    Ok(img)
}

/// Create a 3-color image: red (left), green (middle), blue (right)
pub fn make_tricolor(w: u32, h: u32) -> TestResult<RgbaImage> {
    let mut img = RgbaImage::new(w, h);
    let third = w / 3;
    for y in 0..h {
        for x in 0..w {
            let (r, g, b) = if x < third {
                (255, 0, 0)
            } else if x < 2 * third {
                (0, 255, 0)
            } else {
                (0, 0, 255)
            };
            img.set_rgb(x, y, r, g, b)?;
        }
    }
    Ok(img)
}

/// Create a deterministic multi-color image
///
/// Red ramps with x, green with y, and blue cycles with a prime stride so
/// nearby pixels land in different hue sectors.
pub fn make_gradient(w: u32, h: u32) -> TestResult<RgbaImage> {
    let mut img = RgbaImage::new(w, h);
    for y in 0..h {
        for x in 0..w {
            let r = ((x * 255) / w.max(2).saturating_sub(1)).min(255) as u8;
            let g = ((y * 255) / h.max(2).saturating_sub(1)).min(255) as u8;
            let b = ((x * 37 + y * 101) % 256) as u8;
            img.set_rgb(x, y, r, g, b)?;
        }
    }
    Ok(img)
}
