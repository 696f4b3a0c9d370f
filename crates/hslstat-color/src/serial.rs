//! Persistence for the accumulators
//!
//! All tables are raw native-endian arrays with no header:
//!
//! ```text
//! RgbCube:          256*256*256 i64            (red slowest, blue fastest)
//! HslHistogram:     361*257*256 i64            (hue slowest, lightness fastest)
//! AverageImage:     i64 image count, then w*h*3 f64 sums
//! AccumulatorState: AverageImage, then HslHistogram
//! ```
//!
//! Dimensions are never stored. The histogram and cube sizes are fixed;
//! the average target size must be supplied by the reader. A stream that
//! ends early fails the whole read. Bytes past the expected end are left
//! unread.

use crate::ColorResult;
use crate::average::AverageImage;
use crate::cube::RgbCube;
use crate::histogram::HslHistogram;
use crate::state::AccumulatorState;
use hslstat_core::serial;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

fn open(path: &Path) -> ColorResult<BufReader<File>> {
    Ok(BufReader::new(File::open(path)?))
}

fn create(path: &Path) -> ColorResult<BufWriter<File>> {
    Ok(BufWriter::new(File::create(path)?))
}

// ============================================================================
// HslHistogram
// ============================================================================

impl HslHistogram {
    /// Read a histogram from a reader.
    pub fn read_from_reader(reader: &mut impl Read) -> ColorResult<Self> {
        let mut hist = Self::new();
        serial::read_counters(reader, &mut hist.counts)?;
        Ok(hist)
    }

    /// Read a histogram from a file.
    pub fn read_from_file(path: impl AsRef<Path>) -> ColorResult<Self> {
        Self::read_from_reader(&mut open(path.as_ref())?)
    }

    /// Write the histogram to a writer.
    pub fn write_to_writer(&self, writer: &mut impl Write) -> ColorResult<()> {
        serial::write_counters(writer, &self.counts)?;
        Ok(())
    }

    /// Write the histogram to a file.
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> ColorResult<()> {
        let mut writer = create(path.as_ref())?;
        self.write_to_writer(&mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

// ============================================================================
// RgbCube
// ============================================================================

impl RgbCube {
    /// Read a cube from a reader.
    pub fn read_from_reader(reader: &mut impl Read) -> ColorResult<Self> {
        let mut cube = Self::new();
        serial::read_counters(reader, &mut cube.counts)?;
        Ok(cube)
    }

    /// Read a cube from a file.
    pub fn read_from_file(path: impl AsRef<Path>) -> ColorResult<Self> {
        Self::read_from_reader(&mut open(path.as_ref())?)
    }

    /// Write the cube to a writer.
    pub fn write_to_writer(&self, writer: &mut impl Write) -> ColorResult<()> {
        serial::write_counters(writer, &self.counts)?;
        Ok(())
    }

    /// Write the cube to a file.
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> ColorResult<()> {
        let mut writer = create(path.as_ref())?;
        self.write_to_writer(&mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

// ============================================================================
// AverageImage
// ============================================================================

impl AverageImage {
    /// Read the image counter and sums for a `width` x `height` target.
    pub fn read_from_reader(reader: &mut impl Read, width: u32, height: u32) -> ColorResult<Self> {
        let mut avg = Self::new(width, height)?;
        avg.image_count = serial::read_counter(reader)?;
        serial::read_f64s(reader, &mut avg.sums)?;
        Ok(avg)
    }

    /// Write the image counter and sums.
    pub fn write_to_writer(&self, writer: &mut impl Write) -> ColorResult<()> {
        serial::write_counter(writer, self.image_count)?;
        serial::write_f64s(writer, &self.sums)?;
        Ok(())
    }
}

// ============================================================================
// AccumulatorState
// ============================================================================

impl AccumulatorState {
    /// Read a state for a `width` x `height` average target.
    pub fn read_from_reader(reader: &mut impl Read, width: u32, height: u32) -> ColorResult<Self> {
        let average = AverageImage::read_from_reader(reader, width, height)?;
        let histogram = HslHistogram::read_from_reader(reader)?;
        Ok(Self { average, histogram })
    }

    /// Read a state file.
    pub fn read_from_file(path: impl AsRef<Path>, width: u32, height: u32) -> ColorResult<Self> {
        Self::read_from_reader(&mut open(path.as_ref())?, width, height)
    }

    /// Write the state to a writer.
    pub fn write_to_writer(&self, writer: &mut impl Write) -> ColorResult<()> {
        self.average.write_to_writer(writer)?;
        self.histogram.write_to_writer(writer)
    }

    /// Write the state to a file.
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> ColorResult<()> {
        let mut writer = create(path.as_ref())?;
        self.write_to_writer(&mut writer)?;
        writer.flush()?;
        Ok(())
    }
}
