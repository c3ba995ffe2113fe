//! scrawl-io - image decoding for the scrawl recognition library
//!
//! The recognition pipeline itself only consumes an in-memory
//! [`Raster`]; this crate is the collaborator that produces one from a
//! file on disk. The format is detected from magic bytes, never from the
//! file extension.
//!
//! # Example
//!
//! ```no_run
//! let raster = scrawl_io::read_raster("canvas.png").unwrap();
//! println!("{}x{}", raster.width(), raster.height());
//! ```

mod error;
mod format;
mod jpeg;
mod png;

pub use error::{IoError, IoResult};
pub use format::{RasterFormat, detect_format, detect_format_from_bytes};
pub use jpeg::read_jpeg;
pub use png::read_png;

use scrawl_core::Raster;
use std::fs::File;
use std::io::{BufReader, Read, Seek, SeekFrom};
use std::path::Path;

/// Read an image file into a raster, detecting the format from its header.
///
/// # Errors
///
/// Returns [`IoError::Io`] if the file cannot be opened,
/// [`IoError::UnsupportedFormat`] if the header matches no known format,
/// and [`IoError::Decode`] if the file is structurally invalid.
pub fn read_raster<P: AsRef<Path>>(path: P) -> IoResult<Raster> {
    let file = File::open(path).map_err(IoError::Io)?;
    let mut reader = BufReader::new(file);

    let mut header = [0u8; 8];
    let bytes_read = reader.read(&mut header).map_err(IoError::Io)?;
    reader.seek(SeekFrom::Start(0)).map_err(IoError::Io)?;

    match detect_format_from_bytes(&header[..bytes_read])? {
        RasterFormat::Png => read_png(reader),
        RasterFormat::Jpeg => read_jpeg(reader),
    }
}
