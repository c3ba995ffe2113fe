//! Scrawl - handwritten text recognition for raster images
//!
//! Scrawl reads a line of handwritten characters drawn as ink on a
//! known background color. It is built to sit behind a freehand-drawing
//! surface that periodically rasterizes its canvas and asks "what text
//! does this picture contain?"
//!
//! # Example
//!
//! ```no_run
//! use scrawl::recog::{Reader, TemplateStore};
//!
//! let reader = Reader::new(TemplateStore::new("packs")).unwrap();
//! let text = reader.read_path("canvas.png").unwrap();
//! println!("recognized: {text}");
//! ```

// Re-export core types (primary data structures used everywhere)
pub use scrawl_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use scrawl_io as io;
pub use scrawl_recog as recog;
