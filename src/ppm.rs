//! Binary pixmap output.  Strips the alpha byte off each packed color
//! and streams the remaining RGB triples to disk as a binary P6 file:
//! `P6\n<width> <height>\n255\n` followed by exactly
//! width * height * 3 body bytes in row-major order.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use RenderError;

/// Flatten packed 0xAARRGGBB colors into RGB byte triples, one per
/// pixel, in the same flat order.  Alpha is discarded.
pub fn to_rgb_bytes(colors: &[u32]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(colors.len() * 3);
    for &argb in colors {
        bytes.push(((argb & 0x00ff_0000) >> 16) as u8);
        bytes.push(((argb & 0x0000_ff00) >> 8) as u8);
        bytes.push((argb & 0x0000_00ff) as u8);
    }
    bytes
}

/// Write a square color buffer to `path` as a binary P6 pixmap,
/// overwriting any existing file.  The header is written byte for
/// byte as `P6\n<side> <side>\n255\n`; creation and write failures
/// are returned to the caller, never swallowed.
pub fn write_ppm<P: AsRef<Path>>(path: P, colors: &[u32], side: usize) -> Result<(), RenderError> {
    let mut output = BufWriter::new(File::create(path.as_ref())?);
    write!(output, "P6\n{} {}\n255\n", side, side)?;
    output.write_all(&to_rgb_bytes(colors))?;
    output.flush()?;
    Ok(())
}
