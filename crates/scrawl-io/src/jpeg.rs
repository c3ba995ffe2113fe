//! JPEG image format support
//!
//! Reads JPEG images using the `jpeg-decoder` crate. Grayscale and RGB
//! images are expanded to the packed-RGB [`Raster`]; CMYK and 16-bit
//! grayscale are rejected as unsupported.
//!
//! Decode-only by design: the pipeline consumes images, it never writes
//! them.

use crate::{IoError, IoResult};
use jpeg_decoder::{Decoder, PixelFormat};
use scrawl_core::{Color, Raster, color};
use std::io::Read;

/// Read a JPEG image into a raster.
pub fn read_jpeg<R: Read>(reader: R) -> IoResult<Raster> {
    let mut decoder = Decoder::new(reader);
    let data = decoder
        .decode()
        .map_err(|e| IoError::Decode(format!("JPEG decode error: {e}")))?;
    let info = decoder
        .info()
        .ok_or_else(|| IoError::Decode("JPEG header info missing after decode".to_string()))?;

    let width = info.width as u32;
    let height = info.height as u32;
    let mut raster = Raster::new(width, height, Color::WHITE)?;

    match info.pixel_format {
        PixelFormat::L8 => {
            for y in 0..height {
                let row_start = y as usize * width as usize;
                for x in 0..width {
                    let g = data[row_start + x as usize];
                    raster.set_pixel_unchecked(x, y, color::compose_rgb(g, g, g));
                }
            }
        }
        PixelFormat::RGB24 => {
            for y in 0..height {
                let row_start = y as usize * width as usize * 3;
                for x in 0..width {
                    let idx = row_start + x as usize * 3;
                    let pixel = color::compose_rgb(data[idx], data[idx + 1], data[idx + 2]);
                    raster.set_pixel_unchecked(x, y, pixel);
                }
            }
        }
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported JPEG pixel format: {other:?}"
            )));
        }
    }

    Ok(raster)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_garbage_fails() {
        assert!(matches!(
            read_jpeg(Cursor::new(b"not a jpeg".to_vec())),
            Err(IoError::Decode(_))
        ));
    }
}
