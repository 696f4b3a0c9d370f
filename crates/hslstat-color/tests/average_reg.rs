//! Average image and run state regression test
//!
//! Tests per-position averaging across images of differing sizes, and the
//! persisted run state written to and read back from disk.

use hslstat_color::{AccumulatorState, AverageImage, HslHistogram};
use hslstat_core::RgbaImage;
use hslstat_test::{RegParams, make_gradient, make_uniform_rgba, regout_path};
use std::fs;

#[test]
fn average_reg() {
    let mut rp = RegParams::new("average");

    // --- Two 2x1 images into a 2x1 target ---

    let mut avg = AverageImage::new(2, 1).unwrap();
    let img1 = RgbaImage::from_raw(2, 1, vec![10, 10, 10, 255, 20, 20, 20, 255]).unwrap();
    let img2 = RgbaImage::from_raw(2, 1, vec![30, 30, 30, 255, 40, 40, 40, 255]).unwrap();
    avg.accumulate_image(&img1).unwrap();
    avg.accumulate_image(&img2).unwrap();

    rp.compare_counts(2, avg.image_count());
    let means = avg.finalize().unwrap();
    for (i, expected) in [20.0, 20.0, 20.0, 30.0, 30.0, 30.0].into_iter().enumerate() {
        rp.compare_values(expected, means[i], 0.0);
    }

    // --- Mixed sizes: only the overlap is summed, every image counts ---

    let mut avg = AverageImage::new(4, 4).unwrap();
    avg.accumulate_image(&make_uniform_rgba(200, 100, 50, 2, 2).unwrap())
        .unwrap();
    avg.accumulate_image(&make_uniform_rgba(100, 100, 100, 8, 8).unwrap())
        .unwrap();
    avg.accumulate_image(&make_uniform_rgba(0, 0, 0, 4, 1).unwrap())
        .unwrap();
    rp.compare_counts(3, avg.image_count());

    let out = avg.to_rgba_image().unwrap();
    // (0,0): (200 + 100 + 0) / 3 = 100 red
    rp.compare_values(100.0, out.get_rgb(0, 0).unwrap().0 as f64, 0.0);
    // (3,3): only the 8x8 image reaches it: 100 / 3 = 33.3 -> 33
    rp.compare_values(33.0, out.get_rgb(3, 3).unwrap().1 as f64, 0.0);
    rp.compare_values(255.0, out.get_alpha(3, 3).unwrap() as f64, 0.0);

    // --- Run state persists through a file ---

    let path = regout_path("average_reg.state").unwrap();
    let _ = fs::remove_file(&path);

    let mut state = AccumulatorState::load_or_new(&path, 16, 8).unwrap();
    rp.compare_counts(0, state.image_count());
    state.process_image(&make_gradient(20, 10).unwrap()).unwrap();
    state.write_to_file(&path).unwrap();

    let mut resumed = AccumulatorState::load_or_new(&path, 16, 8).unwrap();
    rp.compare_counts(1, resumed.image_count());
    rp.compare_counts(200, resumed.histogram.total());
    rp.compare_values(1.0, if resumed == state { 1.0 } else { 0.0 }, 0.0);

    resumed.process_image(&make_gradient(5, 5).unwrap()).unwrap();
    resumed.write_to_file(&path).unwrap();
    let reloaded = AccumulatorState::read_from_file(&path, 16, 8).unwrap();
    rp.compare_counts(2, reloaded.image_count());
    rp.compare_counts(225, reloaded.histogram.total());

    // The histogram section of the state file is a valid histogram table
    let bytes = fs::read(&path).unwrap();
    let hist_offset = 8 + 16 * 8 * 3 * 8;
    let hist = HslHistogram::read_from_reader(&mut &bytes[hist_offset..]).unwrap();
    rp.compare_counts(225, hist.total());

    // A truncated state file is rejected, not silently restarted
    fs::write(&path, &bytes[..bytes.len() - 1]).unwrap();
    let truncated = AccumulatorState::load_or_new(&path, 16, 8);
    rp.compare_values(1.0, if truncated.is_err() { 1.0 } else { 0.0 }, 0.0);

    let _ = fs::remove_file(&path);
    assert!(rp.cleanup());
}
