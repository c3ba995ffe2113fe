//! Image format detection
//!
//! Detects image formats by examining magic numbers in the file header.

use crate::{IoError, IoResult};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Magic numbers for image format detection
mod magic {
    /// PNG: 89 50 4E 47 0D 0A 1A 0A
    pub const PNG: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    /// JPEG: FF D8 FF
    pub const JPEG: &[u8] = &[0xFF, 0xD8, 0xFF];
}

/// Raster image formats the decoder understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RasterFormat {
    /// PNG format
    Png,
    /// JFIF JPEG format
    Jpeg,
}

impl RasterFormat {
    /// Get the conventional file extension for this format.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpg",
        }
    }
}

/// Detect the image format of a file from its header bytes.
pub fn detect_format<P: AsRef<Path>>(path: P) -> IoResult<RasterFormat> {
    let mut file = File::open(path).map_err(IoError::Io)?;
    let mut header = [0u8; 8];
    let bytes_read = file.read(&mut header).map_err(IoError::Io)?;
    detect_format_from_bytes(&header[..bytes_read])
}

/// Detect the image format from leading bytes.
pub fn detect_format_from_bytes(data: &[u8]) -> IoResult<RasterFormat> {
    if data.len() >= magic::PNG.len() && data.starts_with(magic::PNG) {
        return Ok(RasterFormat::Png);
    }
    if data.len() >= magic::JPEG.len() && data.starts_with(magic::JPEG) {
        return Ok(RasterFormat::Jpeg);
    }
    Err(IoError::UnsupportedFormat(
        "unknown image signature".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_png() {
        let header = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00];
        assert_eq!(
            detect_format_from_bytes(&header).unwrap(),
            RasterFormat::Png
        );
        assert_eq!(RasterFormat::Png.extension(), "png");
    }

    #[test]
    fn test_detect_jpeg() {
        let header = [0xFF, 0xD8, 0xFF, 0xE0];
        assert_eq!(
            detect_format_from_bytes(&header).unwrap(),
            RasterFormat::Jpeg
        );
    }

    #[test]
    fn test_detect_unknown() {
        assert!(matches!(
            detect_format_from_bytes(b"not an image"),
            Err(IoError::UnsupportedFormat(_))
        ));
        assert!(detect_format_from_bytes(&[]).is_err());
    }
}
