//! Accumulation run state
//!
//! A batch run keeps two accumulators side by side: the average image of
//! every processed image and the HSL histogram of every processed pixel.
//! [`AccumulatorState`] bundles them so the run can be resumed from a
//! single data file across invocations.

use crate::ColorResult;
use crate::average::AverageImage;
use crate::histogram::HslHistogram;
use hslstat_core::RgbaImage;
use log::info;
use std::path::Path;

/// Average image and HSL histogram of one accumulation run
#[derive(Debug, Clone, PartialEq)]
pub struct AccumulatorState {
    pub average: AverageImage,
    pub histogram: HslHistogram,
}

impl AccumulatorState {
    /// Create a fresh state for a `width` x `height` average target.
    pub fn new(width: u32, height: u32) -> ColorResult<Self> {
        Ok(Self {
            average: AverageImage::new(width, height)?,
            histogram: HslHistogram::new(),
        })
    }

    /// Load the state at `path` if the file exists, otherwise start fresh.
    ///
    /// An existing file that cannot be read in full is an error, not a
    /// reason to start over.
    pub fn load_or_new(path: impl AsRef<Path>, width: u32, height: u32) -> ColorResult<Self> {
        let path = path.as_ref();
        if path.exists() {
            let state = Self::read_from_file(path, width, height)?;
            info!(
                "loaded state from {}: {} images, {} pixels",
                path.display(),
                state.image_count(),
                state.histogram.total()
            );
            Ok(state)
        } else {
            info!("no state at {}, starting fresh", path.display());
            Self::new(width, height)
        }
    }

    /// Add one image: every pixel goes into the histogram, the overlap
    /// with the target goes into the average.
    pub fn process_image(&mut self, image: &RgbaImage) -> ColorResult<()> {
        self.histogram.accumulate_image(image)?;
        self.average.accumulate_image(image)
    }

    /// Number of images processed
    pub fn image_count(&self) -> u64 {
        self.average.image_count()
    }
}
