//! Batch operations over image files and persisted tables
//!
//! Each function here is one complete run of the command-line tool: load
//! what is on disk, feed every image, write the result back. Nothing is
//! written if any input fails.

use crate::error::{BatchError, BatchResult};
use hslstat_color::{AccumulatorState, HslHistogram, RgbCube};
use hslstat_core::RgbaImage;
use log::{debug, info};
use std::path::Path;

fn load_image(path: &Path) -> BatchResult<RgbaImage> {
    debug!("reading {}", path.display());
    hslstat_io::read_image(path).map_err(|source| BatchError::Image {
        path: path.display().to_string(),
        source,
    })
}

/// Add a set of PNG images to the run state stored in `data_file`.
///
/// The state is created if `data_file` does not exist yet. `width` and
/// `height` give the average target size and must match the size the
/// state was created with.
pub fn accumulate_images<P: AsRef<Path>>(
    data_file: impl AsRef<Path>,
    width: u32,
    height: u32,
    images: &[P],
) -> BatchResult<AccumulatorState> {
    let data_file = data_file.as_ref();
    let mut state = AccumulatorState::load_or_new(data_file, width, height)?;

    for path in images {
        let image = load_image(path.as_ref())?;
        state.process_image(&image)?;
    }

    state.write_to_file(data_file)?;
    info!(
        "added {} images to {}: {} images, {} pixels",
        images.len(),
        data_file.display(),
        state.image_count(),
        state.histogram.total()
    );
    Ok(state)
}

/// Write the average image and the HSL histogram held in `data_file`.
pub fn export_results(
    data_file: impl AsRef<Path>,
    width: u32,
    height: u32,
    out_png: impl AsRef<Path>,
    out_hsl: impl AsRef<Path>,
) -> BatchResult<()> {
    let state = AccumulatorState::read_from_file(data_file, width, height)?;
    let average = state.average.to_rgba_image()?;

    let out_png = out_png.as_ref();
    hslstat_io::write_image(&average, out_png).map_err(|source| BatchError::Image {
        path: out_png.display().to_string(),
        source,
    })?;
    state.histogram.write_to_file(&out_hsl)?;

    info!(
        "wrote average of {} images to {} and histogram to {}",
        state.image_count(),
        out_png.display(),
        out_hsl.as_ref().display()
    );
    Ok(())
}

/// Convert the RGB cube in `in_cube` into an HSL histogram at `out_hsl`.
pub fn cube_to_hsl(
    in_cube: impl AsRef<Path>,
    out_hsl: impl AsRef<Path>,
) -> BatchResult<HslHistogram> {
    let cube = RgbCube::read_from_file(&in_cube)?;
    let mut hist = HslHistogram::new();
    hist.merge_rgb_cube(&cube)?;
    hist.write_to_file(&out_hsl)?;
    Ok(hist)
}

/// Count the RGB combinations of a set of PNG images into `out_cube`.
///
/// An existing cube file is added to rather than replaced.
pub fn count_cube<P: AsRef<Path>>(
    out_cube: impl AsRef<Path>,
    images: &[P],
) -> BatchResult<RgbCube> {
    let out_cube = out_cube.as_ref();
    let mut cube = if out_cube.exists() {
        info!("adding to existing cube {}", out_cube.display());
        RgbCube::read_from_file(out_cube)?
    } else {
        RgbCube::new()
    };

    for path in images {
        let image = load_image(path.as_ref())?;
        cube.accumulate_image(&image)?;
    }

    cube.write_to_file(out_cube)?;
    info!(
        "counted {} images into {}: {} pixels",
        images.len(),
        out_cube.display(),
        cube.total()
    );
    Ok(cube)
}
