//! Scrawl Core - Basic data structures for handwriting recognition
//!
//! This crate provides the fundamental data structures used throughout
//! the scrawl recognition library:
//!
//! - [`Raster`] - The in-memory pixel grid consumed by the pipeline
//! - [`ColSpan`] - An inclusive column range marking one character's ink
//! - [`color`] - Packed-pixel helpers and the [`Color`] value type
//!
//! # Pixel layout
//!
//! Rasters store one 32-bit word per pixel, packed as `0xRRGGBBAA`
//! (red in MSB, alpha in LSB), row-major with no row padding.

pub mod color;
pub mod error;
pub mod raster;
pub mod span;

pub use color::Color;
pub use error::{Error, Result};
pub use raster::Raster;
pub use span::ColSpan;
