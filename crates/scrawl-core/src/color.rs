//! Color values and packed-pixel helpers.
//!
//! # Pixel format
//!
//! 32-bit pixels are stored as `0xRRGGBBAA` (red in MSB, alpha in LSB).
//! Alpha is carried through decoding but ignored by the recognition
//! pipeline, which only distinguishes background from non-background.

/// Shift amounts for extracting color channels
pub const RED_SHIFT: u32 = 24;
pub const GREEN_SHIFT: u32 = 16;
pub const BLUE_SHIFT: u32 = 8;
pub const ALPHA_SHIFT: u32 = 0;

/// Extract red component from a 32-bit pixel.
#[inline]
pub fn red(pixel: u32) -> u8 {
    ((pixel >> RED_SHIFT) & 0xff) as u8
}

/// Extract green component from a 32-bit pixel.
#[inline]
pub fn green(pixel: u32) -> u8 {
    ((pixel >> GREEN_SHIFT) & 0xff) as u8
}

/// Extract blue component from a 32-bit pixel.
#[inline]
pub fn blue(pixel: u32) -> u8 {
    ((pixel >> BLUE_SHIFT) & 0xff) as u8
}

/// Compose a 32-bit RGB pixel (alpha = 255).
#[inline]
pub fn compose_rgb(r: u8, g: u8, b: u8) -> u32 {
    ((r as u32) << RED_SHIFT)
        | ((g as u32) << GREEN_SHIFT)
        | ((b as u32) << BLUE_SHIFT)
        | (255 << ALPHA_SHIFT)
}

/// An RGB color value.
///
/// Used for the background color configuration and for drawing helpers.
/// Comparison against raster pixels goes through [`Color::pack`], which
/// fixes alpha at 255; decoded pixels are composed the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Create a new color
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black color
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };
    /// White color
    pub const WHITE: Color = Color {
        r: 255,
        g: 255,
        b: 255,
    };

    /// Pack into a 32-bit `0xRRGGBBAA` pixel word (alpha = 255).
    #[inline]
    pub fn pack(self) -> u32 {
        compose_rgb(self.r, self.g, self.b)
    }

    /// Extract the RGB components of a packed pixel word, dropping alpha.
    #[inline]
    pub fn from_packed(pixel: u32) -> Self {
        Self {
            r: red(pixel),
            g: green(pixel),
            b: blue(pixel),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_extract_roundtrip() {
        let pixel = compose_rgb(0x12, 0x34, 0x56);
        assert_eq!(red(pixel), 0x12);
        assert_eq!(green(pixel), 0x34);
        assert_eq!(blue(pixel), 0x56);
        assert_eq!(pixel & 0xff, 0xff);
    }

    #[test]
    fn test_color_pack() {
        assert_eq!(Color::WHITE.pack(), 0xffff_ffff);
        assert_eq!(Color::BLACK.pack(), 0x0000_00ff);
        assert_eq!(Color::from_packed(Color::new(1, 2, 3).pack()), Color::new(1, 2, 3));
    }
}
