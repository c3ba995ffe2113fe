//! PNG image format support
//!
//! Reads PNG images using the `png` crate. Every supported color type is
//! expanded to the packed-RGB [`Raster`] the recognition pipeline consumes;
//! only 8-bit channel depth is accepted, which is what drawing surfaces
//! produce in practice.

use crate::{IoError, IoResult};
use png::{BitDepth, ColorType, Decoder};
use scrawl_core::{Color, Raster, color};
use std::io::{BufRead, Seek};

/// Read a PNG image into a raster.
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<Raster> {
    let decoder = Decoder::new(reader);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::Decode(format!("PNG decode error: {e}")))?;

    let info = reader.info();
    let width = info.width;
    let height = info.height;
    let color_type = info.color_type;
    let bit_depth = info.bit_depth;
    let palette = info.palette.as_deref().map(<[u8]>::to_vec);

    if bit_depth != BitDepth::Eight {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported PNG bit depth: {bit_depth:?}"
        )));
    }

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::Decode("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::Decode(format!("PNG frame error: {e}")))?;

    let bytes_per_row = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];

    let mut raster = Raster::new(width, height, Color::WHITE)?;
    match color_type {
        ColorType::Grayscale => {
            for y in 0..height {
                let row_start = y as usize * bytes_per_row;
                for x in 0..width {
                    let g = data[row_start + x as usize];
                    raster.set_pixel_unchecked(x, y, color::compose_rgb(g, g, g));
                }
            }
        }
        ColorType::GrayscaleAlpha => {
            for y in 0..height {
                let row_start = y as usize * bytes_per_row;
                for x in 0..width {
                    let g = data[row_start + x as usize * 2];
                    raster.set_pixel_unchecked(x, y, color::compose_rgb(g, g, g));
                }
            }
        }
        ColorType::Rgb => {
            for y in 0..height {
                let row_start = y as usize * bytes_per_row;
                for x in 0..width {
                    let idx = row_start + x as usize * 3;
                    let pixel = color::compose_rgb(data[idx], data[idx + 1], data[idx + 2]);
                    raster.set_pixel_unchecked(x, y, pixel);
                }
            }
        }
        ColorType::Rgba => {
            for y in 0..height {
                let row_start = y as usize * bytes_per_row;
                for x in 0..width {
                    let idx = row_start + x as usize * 4;
                    let pixel = color::compose_rgb(data[idx], data[idx + 1], data[idx + 2]);
                    raster.set_pixel_unchecked(x, y, pixel);
                }
            }
        }
        ColorType::Indexed => {
            let palette = palette
                .ok_or_else(|| IoError::Decode("indexed PNG without palette".to_string()))?;
            for y in 0..height {
                let row_start = y as usize * bytes_per_row;
                for x in 0..width {
                    let entry = data[row_start + x as usize] as usize * 3;
                    let rgb = palette.get(entry..entry + 3).ok_or_else(|| {
                        IoError::Decode(format!("palette index {} out of range", entry / 3))
                    })?;
                    raster.set_pixel_unchecked(x, y, color::compose_rgb(rgb[0], rgb[1], rgb[2]));
                }
            }
        }
    }

    Ok(raster)
}
