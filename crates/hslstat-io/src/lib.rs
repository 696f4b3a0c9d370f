//! hslstat IO - Image decode and encode for hslstat
//!
//! Images enter and leave the statistics pipeline as [`RgbaImage`]
//! buffers. Only PNG is supported; [`read_image`] rejects anything else by
//! its signature.

pub mod error;
pub mod png;

pub use error::{IoError, IoResult};
pub use crate::png::{read_png, write_png};

use hslstat_core::RgbaImage;
use std::fs::File;
use std::io::{BufReader, BufWriter, Cursor, ErrorKind, Read, Seek, SeekFrom, Write};
use std::path::Path;

/// PNG file signature
const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

/// Read an image from a file path.
///
/// # Errors
///
/// Returns [`IoError::UnsupportedFormat`] if the file is not a PNG.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<RgbaImage> {
    let file = File::open(path.as_ref())?;
    let mut reader = BufReader::new(file);

    let mut signature = [0u8; 8];
    let complete = match reader.read_exact(&mut signature) {
        Ok(()) => true,
        Err(e) if e.kind() == ErrorKind::UnexpectedEof => false,
        Err(e) => return Err(e.into()),
    };
    if !complete || signature != PNG_SIGNATURE {
        return Err(IoError::UnsupportedFormat(format!(
            "{} is not a PNG file",
            path.as_ref().display()
        )));
    }
    reader.seek(SeekFrom::Start(0))?;

    read_png(reader)
}

/// Read an image from memory.
pub fn read_image_mem(data: &[u8]) -> IoResult<RgbaImage> {
    if !data.starts_with(&PNG_SIGNATURE) {
        return Err(IoError::UnsupportedFormat(
            "data is not a PNG stream".to_string(),
        ));
    }
    read_png(Cursor::new(data))
}

/// Write an image to a file path as PNG.
pub fn write_image<P: AsRef<Path>>(image: &RgbaImage, path: P) -> IoResult<()> {
    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);
    write_png(image, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Encode an image into an in-memory PNG.
pub fn write_image_mem(image: &RgbaImage) -> IoResult<Vec<u8>> {
    let mut buffer = Vec::new();
    write_png(image, &mut buffer)?;
    Ok(buffer)
}
