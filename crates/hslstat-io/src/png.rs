//! PNG image format support
//!
//! Every PNG is normalized to 8-bit RGBA on read: palettes are expanded,
//! low bit-depth grey is widened, 16-bit samples are stripped to their high
//! byte, grey is replicated into the color channels, and a missing alpha
//! channel is filled with 0xff.

use crate::{IoError, IoResult};
use hslstat_core::{CHANNELS, RgbaImage};
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use std::io::{BufRead, Seek, Write};

/// Read a PNG image as 8-bit RGBA
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<RgbaImage> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::normalize_to_color8());
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let (color_type, bit_depth) = reader.output_color_type();
    if bit_depth != BitDepth::Eight {
        return Err(IoError::UnsupportedFormat(format!(
            "unexpected PNG output depth after normalization: {:?}",
            bit_depth
        )));
    }
    let samples = match color_type {
        ColorType::Grayscale => 1,
        ColorType::GrayscaleAlpha => 2,
        ColorType::Rgb => 3,
        ColorType::Rgba => 4,
        ColorType::Indexed => {
            return Err(IoError::UnsupportedFormat(
                "indexed PNG was not expanded".to_string(),
            ));
        }
    };

    let width = output_info.width;
    let height = output_info.height;
    let bytes_per_row = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];

    let mut rgba = Vec::with_capacity(width as usize * height as usize * CHANNELS);
    for y in 0..height as usize {
        let row = &data[y * bytes_per_row..y * bytes_per_row + width as usize * samples];
        for px in row.chunks_exact(samples) {
            let pixel = match samples {
                1 => [px[0], px[0], px[0], 0xff],
                2 => [px[0], px[0], px[0], px[1]],
                3 => [px[0], px[1], px[2], 0xff],
                _ => [px[0], px[1], px[2], px[3]],
            };
            rgba.extend_from_slice(&pixel);
        }
    }

    Ok(RgbaImage::from_raw(width, height, rgba)?)
}

/// Write an 8-bit RGBA PNG image
pub fn write_png<W: Write>(image: &RgbaImage, writer: W) -> IoResult<()> {
    let mut encoder = Encoder::new(writer, image.width(), image.height());
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;

    writer
        .write_image_data(image.as_raw())
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;
    writer
        .finish()
        .map_err(|e| IoError::EncodeError(format!("PNG finish error: {}", e)))?;

    Ok(())
}
