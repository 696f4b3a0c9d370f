//! Flat binary persistence for fixed-size numeric arrays
//!
//! Accumulator state is stored as raw arrays with no header, no magic
//! number and no version:
//!
//! ```text
//! <element 0><element 1>...<element n-1>
//! ```
//!
//! Every element is 8 bytes in native byte order. Counters are written as
//! signed 64-bit integers; sums as 64-bit floats. The reader must know the
//! element count in advance, and a stream that ends early is an error.
//!
//! Transfers go through a fixed block buffer so multi-hundred-megabyte
//! tables never need a second full-size byte copy.

use crate::error::{Error, Result};
use std::io::{ErrorKind, Read, Write};

/// Bytes per stored element
pub const ELEMENT_SIZE: usize = 8;

/// Elements moved per block transfer
const BLOCK_ELEMENTS: usize = 1024;

const BLOCK_BYTES: usize = BLOCK_ELEMENTS * ELEMENT_SIZE;

/// Read until `buf` is full or the stream ends; returns the bytes read.
fn fill(reader: &mut impl Read, buf: &mut [u8]) -> Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }
    Ok(filled)
}

/// Read `count` elements, handing each decoded 8-byte group to `store`.
fn read_elements(
    reader: &mut impl Read,
    count: usize,
    mut store: impl FnMut(usize, [u8; ELEMENT_SIZE]) -> Result<()>,
) -> Result<()> {
    let expected = count * ELEMENT_SIZE;
    let mut block = [0u8; BLOCK_BYTES];
    let mut index = 0;

    while index < count {
        let n = (count - index).min(BLOCK_ELEMENTS);
        let want = n * ELEMENT_SIZE;
        let got = fill(reader, &mut block[..want])?;
        if got != want {
            return Err(Error::Truncated {
                read: index * ELEMENT_SIZE + got,
                expected,
            });
        }
        for chunk in block[..want].chunks_exact(ELEMENT_SIZE) {
            let mut bytes = [0u8; ELEMENT_SIZE];
            bytes.copy_from_slice(chunk);
            store(index, bytes)?;
            index += 1;
        }
    }
    Ok(())
}

/// Write elements produced by `load`, block by block.
fn write_elements(
    writer: &mut impl Write,
    count: usize,
    load: impl Fn(usize) -> [u8; ELEMENT_SIZE],
) -> Result<()> {
    let mut block = [0u8; BLOCK_BYTES];
    let mut index = 0;

    while index < count {
        let n = (count - index).min(BLOCK_ELEMENTS);
        for (i, chunk) in block[..n * ELEMENT_SIZE]
            .chunks_exact_mut(ELEMENT_SIZE)
            .enumerate()
        {
            chunk.copy_from_slice(&load(index + i));
        }
        writer.write_all(&block[..n * ELEMENT_SIZE])?;
        index += n;
    }
    Ok(())
}

/// Read stored signed counters into `dst`.
///
/// # Errors
///
/// - [`Error::Truncated`] if the stream holds fewer than `dst.len()` elements
/// - [`Error::CorruptCounter`] if a stored counter is negative
pub fn read_counters(reader: &mut impl Read, dst: &mut [u64]) -> Result<()> {
    read_elements(reader, dst.len(), |i, bytes| {
        let value = i64::from_ne_bytes(bytes);
        if value < 0 {
            return Err(Error::CorruptCounter { index: i, value });
        }
        dst[i] = value as u64;
        Ok(())
    })
}

/// Write counters as signed 64-bit integers.
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`] if a counter exceeds `i64::MAX`,
/// since it could not be read back.
pub fn write_counters(writer: &mut impl Write, src: &[u64]) -> Result<()> {
    if let Some(pos) = src.iter().position(|&v| v > i64::MAX as u64) {
        return Err(Error::InvalidParameter(format!(
            "counter {pos} overflows the signed 64-bit storage format"
        )));
    }
    write_elements(writer, src.len(), |i| (src[i] as i64).to_ne_bytes())
}

/// Read a single stored counter.
pub fn read_counter(reader: &mut impl Read) -> Result<u64> {
    let mut value = [0u64; 1];
    read_counters(reader, &mut value)?;
    Ok(value[0])
}

/// Write a single counter.
pub fn write_counter(writer: &mut impl Write, value: u64) -> Result<()> {
    write_counters(writer, &[value])
}

/// Read stored 64-bit floats into `dst`.
pub fn read_f64s(reader: &mut impl Read, dst: &mut [f64]) -> Result<()> {
    read_elements(reader, dst.len(), |i, bytes| {
        dst[i] = f64::from_ne_bytes(bytes);
        Ok(())
    })
}

/// Write 64-bit floats.
pub fn write_f64s(writer: &mut impl Write, src: &[f64]) -> Result<()> {
    write_elements(writer, src.len(), |i| src[i].to_ne_bytes())
}
