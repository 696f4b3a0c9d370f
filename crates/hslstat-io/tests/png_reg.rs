//! PNG file I/O regression test
//!
//! Tests writing and reading PNG files on disk, and rejection of files
//! that are not PNG.

use hslstat_io::{read_image, read_image_mem, write_image, write_image_mem};
use hslstat_test::{RegParams, make_gradient, make_tricolor, regout_path};
use std::fs;

#[test]
fn png_reg() {
    let mut rp = RegParams::new("png");

    // --- File round trip keeps every byte ---

    let img = make_gradient(37, 21).unwrap();
    let path = regout_path("png_reg_gradient.png").unwrap();
    write_image(&img, &path).unwrap();
    let back = read_image(&path).unwrap();
    rp.compare_counts(37, back.width() as u64);
    rp.compare_counts(21, back.height() as u64);
    rp.compare_strings(img.as_raw(), back.as_raw());

    // File and memory encodings decode to the same pixels
    let img = make_tricolor(12, 5).unwrap();
    let encoded = write_image_mem(&img).unwrap();
    let from_mem = read_image_mem(&encoded).unwrap();
    fs::write(&path, &encoded).unwrap();
    let from_file = read_image(&path).unwrap();
    rp.compare_strings(from_mem.as_raw(), from_file.as_raw());
    rp.compare_strings(img.as_raw(), from_file.as_raw());

    // --- Non-PNG input is rejected ---

    fs::write(&path, b"P6\n2 2\n255\n").unwrap();
    let rejected = read_image(&path).is_err();
    rp.compare_values(1.0, if rejected { 1.0 } else { 0.0 }, 0.0);

    fs::write(&path, b"").unwrap();
    let rejected = read_image(&path).is_err();
    rp.compare_values(1.0, if rejected { 1.0 } else { 0.0 }, 0.0);

    let missing = read_image(regout_path("png_reg_missing.png").unwrap()).is_err();
    rp.compare_values(1.0, if missing { 1.0 } else { 0.0 }, 0.0);

    let _ = fs::remove_file(&path);
    assert!(rp.cleanup());
}
