//! scrawl-recog - handwritten character recognition
//!
//! Recognizes a line of handwritten characters rendered as ink on a
//! known background color inside a raster image.
//!
//! # Pipeline
//!
//! 1. **Segmentation** ([`segment()`]): column projection partitions the
//!    raster into ordered per-character regions
//! 2. **Normalization** ([`normalize()`]): each region is boxed, padded to
//!    a square, and resampled to a 9x9 ink pattern
//! 3. **Classification** ([`Reader::read`]): patterns are matched
//!    against the loaded language's template dictionary; misses become
//!    a sentinel character instead of errors
//!
//! # Quick start
//!
//! ```no_run
//! use scrawl_recog::{Reader, TemplateStore};
//!
//! let store = TemplateStore::new("packs");
//! let mut reader = Reader::new(store).unwrap();
//!
//! let raster = scrawl_io::read_raster("canvas.png").unwrap();
//! println!("{}", reader.read(&raster));
//!
//! reader.set_language("English").unwrap();
//! ```

mod error;
pub mod normalize;
pub mod reader;
pub mod segment;
pub mod template;

pub use error::{RecogError, RecogResult};

// Re-export commonly used types
pub use normalize::normalize;
pub use reader::{DEFAULT_LANGUAGE, MatchRule, Reader, UNRECOGNIZED};
pub use segment::{MIN_SPAN_WIDTH, segment};
pub use template::{GlyphPattern, SCALE_SIZE, TemplateDict, TemplateStore, parse_pack};

// Re-export core for convenience
pub use scrawl_core;
