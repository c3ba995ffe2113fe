//! Raster - the in-memory pixel grid
//!
//! A `Raster` is the only image type the recognition pipeline consumes.
//! How the pixels got there (file decoding, a drawing canvas, synthetic
//! test data) is a caller concern.
//!
//! # Pixel layout
//!
//! - One 32-bit `0xRRGGBBAA` word per pixel
//! - Row-major, no row padding
//!
//! Checked accessors return `Option` / `Result`; the `_unchecked`
//! variants panic on out-of-bounds coordinates and are meant for inner
//! loops that have already validated their ranges.

use crate::color::Color;
use crate::error::{Error, Result};

/// Rectangular pixel grid with width and height of at least 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    data: Vec<u32>,
}

impl Raster {
    /// Create a raster filled with `fill`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if either dimension is zero.
    pub fn new(width: u32, height: u32, fill: Color) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        Ok(Self {
            width,
            height,
            data: vec![fill.pack(); (width as usize) * (height as usize)],
        })
    }

    /// Raster width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Raster height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the packed pixel at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.get_pixel_unchecked(x, y))
    }

    /// Get the packed pixel at (x, y) without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u32 {
        self.data[(y as usize) * (self.width as usize) + (x as usize)]
    }

    /// Get the color at (x, y), dropping alpha.
    pub fn color_at(&self, x: u32, y: u32) -> Option<Color> {
        self.get_pixel(x, y).map(Color::from_packed)
    }

    /// Set the packed pixel at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::PixelOutOfBounds`] if coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, val: u32) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::PixelOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        self.set_pixel_unchecked(x, y, val);
        Ok(())
    }

    /// Set the packed pixel at (x, y) without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, val: u32) {
        self.data[(y as usize) * (self.width as usize) + (x as usize)] = val;
    }

    /// Fill the whole raster with one color.
    pub fn fill(&mut self, color: Color) {
        self.data.fill(color.pack());
    }

    /// Fill the axis-aligned rectangle with origin (x, y), width `w` and
    /// height `h`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PixelOutOfBounds`] if any part of the rectangle
    /// falls outside the raster.
    pub fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, color: Color) -> Result<()> {
        let (x1, y1) = (x + w, y + h);
        if x1 > self.width || y1 > self.height {
            return Err(Error::PixelOutOfBounds {
                x: x1.saturating_sub(1),
                y: y1.saturating_sub(1),
                width: self.width,
                height: self.height,
            });
        }
        let packed = color.pack();
        for yy in y..y1 {
            for xx in x..x1 {
                self.set_pixel_unchecked(xx, yy, packed);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_dimensions() {
        let raster = Raster::new(10, 5, Color::WHITE).unwrap();
        assert_eq!(raster.width(), 10);
        assert_eq!(raster.height(), 5);
        assert_eq!(raster.get_pixel(9, 4), Some(Color::WHITE.pack()));
    }

    #[test]
    fn test_new_rejects_zero_dimension() {
        assert!(matches!(
            Raster::new(0, 5, Color::WHITE),
            Err(Error::InvalidDimension { width: 0, height: 5 })
        ));
        assert!(Raster::new(5, 0, Color::WHITE).is_err());
    }

    #[test]
    fn test_get_set_pixel() {
        let mut raster = Raster::new(4, 4, Color::WHITE).unwrap();
        raster.set_pixel(2, 3, Color::BLACK.pack()).unwrap();
        assert_eq!(raster.get_pixel(2, 3), Some(Color::BLACK.pack()));
        assert_eq!(raster.color_at(2, 3), Some(Color::BLACK));
        assert_eq!(raster.get_pixel(4, 0), None);
        assert!(raster.set_pixel(0, 4, 0).is_err());
    }

    #[test]
    fn test_fill_rect() {
        let mut raster = Raster::new(6, 6, Color::WHITE).unwrap();
        raster.fill_rect(1, 2, 3, 2, Color::BLACK).unwrap();
        assert_eq!(raster.color_at(1, 2), Some(Color::BLACK));
        assert_eq!(raster.color_at(3, 3), Some(Color::BLACK));
        assert_eq!(raster.color_at(0, 2), Some(Color::WHITE));
        assert_eq!(raster.color_at(4, 2), Some(Color::WHITE));
    }

    #[test]
    fn test_fill_rect_out_of_bounds() {
        let mut raster = Raster::new(6, 6, Color::WHITE).unwrap();
        assert!(raster.fill_rect(4, 4, 3, 1, Color::BLACK).is_err());
    }

    #[test]
    fn test_fill() {
        let mut raster = Raster::new(3, 3, Color::WHITE).unwrap();
        raster.fill(Color::BLACK);
        assert_eq!(raster.get_pixel(1, 1), Some(Color::BLACK.pack()));
    }
}
