//! Glyph normalization
//!
//! Reduces one ink region of a raster to a [`GlyphPattern`] comparable
//! against a template dictionary:
//!
//! 1. Find the minimal bounding box of ink within the region
//! 2. Pad the shorter dimension with background so the box becomes a
//!    centered square (no aspect-ratio distortion in the next step)
//! 3. Resample the square to [`SCALE_SIZE`] x [`SCALE_SIZE`] cells; each
//!    cell takes the majority ink/background classification of the
//!    source pixels it covers, ties classify as ink
//!
//! The whole pass is a pure function of its inputs.

use crate::template::{GlyphPattern, SCALE_SIZE};
use scrawl_core::{ColSpan, Color, Raster};

/// Minimal axis-aligned box of ink pixels, in raster coordinates.
#[derive(Debug, Clone, Copy)]
struct InkBox {
    x: u32,
    y: u32,
    w: u32,
    h: u32,
}

/// Normalize the ink inside `span` to a glyph pattern.
///
/// Any pixel whose color differs from `background` is ink. A region
/// with no ink normalizes to the empty pattern. Padding added in the
/// squaring step is synthetic background; pixels of the raster outside
/// the bounding box never leak into the sample.
pub fn normalize(raster: &Raster, span: ColSpan, background: Color) -> GlyphPattern {
    let bg = background.pack();
    let Some(bbox) = ink_bbox(raster, span, bg) else {
        return GlyphPattern::new();
    };

    let side = u64::from(bbox.w.max(bbox.h));
    // Square origin; goes negative when the centered padding extends
    // past the raster edge. Odd remainders pad the trailing side.
    let sq_x = i64::from(bbox.x) - ((side - u64::from(bbox.w)) / 2) as i64;
    let sq_y = i64::from(bbox.y) - ((side - u64::from(bbox.h)) / 2) as i64;

    let mut pattern = GlyphPattern::new();
    for cy in 0..SCALE_SIZE {
        let (y0, y1) = cell_range(cy, side);
        for cx in 0..SCALE_SIZE {
            let (x0, x1) = cell_range(cx, side);
            let mut ink = 0u64;
            let mut total = 0u64;
            for sy in y0..y1 {
                for sx in x0..x1 {
                    total += 1;
                    if is_ink(raster, bbox, sq_x + sx as i64, sq_y + sy as i64, bg) {
                        ink += 1;
                    }
                }
            }
            // Majority rule, ties to ink: a stroke kept is cheaper than
            // a stroke lost.
            if 2 * ink >= total {
                pattern.insert(cx, cy);
            }
        }
    }
    pattern
}

/// Source pixel range `[lo, hi)` of a `side`-pixel square covered by
/// output cell `c`. Never empty: downscaling partitions the square,
/// upscaling replicates pixels across neighboring cells.
fn cell_range(c: u32, side: u64) -> (u64, u64) {
    let scale = u64::from(SCALE_SIZE);
    let lo = u64::from(c) * side / scale;
    let hi = (u64::from(c + 1) * side).div_ceil(scale);
    (lo, hi)
}

/// Whether square pixel (px, py) is ink. Coordinates outside the
/// bounding box are padding and always background.
#[inline]
fn is_ink(raster: &Raster, bbox: InkBox, px: i64, py: i64, bg: u32) -> bool {
    px >= i64::from(bbox.x)
        && px < i64::from(bbox.x) + i64::from(bbox.w)
        && py >= i64::from(bbox.y)
        && py < i64::from(bbox.y) + i64::from(bbox.h)
        && raster.get_pixel_unchecked(px as u32, py as u32) != bg
}

/// Minimal bounding box of ink within the span, or `None` if the span
/// holds no ink.
fn ink_bbox(raster: &Raster, span: ColSpan, bg: u32) -> Option<InkBox> {
    if span.lo >= raster.width() {
        return None;
    }
    let hi = span.hi.min(raster.width() - 1);

    let mut min_x = u32::MAX;
    let mut max_x = 0;
    let mut min_y = u32::MAX;
    let mut max_y = 0;
    let mut found = false;

    for y in 0..raster.height() {
        for x in span.lo..=hi {
            if raster.get_pixel_unchecked(x, y) != bg {
                min_x = min_x.min(x);
                max_x = max_x.max(x);
                min_y = min_y.min(y);
                max_y = max_y.max(y);
                found = true;
            }
        }
    }

    found.then(|| InkBox {
        x: min_x,
        y: min_y,
        w: max_x - min_x + 1,
        h: max_y - min_y + 1,
    })
}
