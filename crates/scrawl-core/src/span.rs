//! Column spans
//!
//! A [`ColSpan`] is an inclusive range of raster columns `[lo, hi]`,
//! paired implicitly with the full row range of the raster it was cut
//! from. The segmenter produces one span per character candidate, in
//! reading order.

/// Inclusive column range `[lo, hi]` believed to hold one character's ink.
///
/// Ordering is by `lo` first, which matches left-to-right reading order
/// for the non-overlapping spans the segmenter produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ColSpan {
    pub lo: u32,
    pub hi: u32,
}

impl ColSpan {
    /// Create a span covering columns `lo..=hi`.
    ///
    /// # Panics
    ///
    /// Debug-panics if `lo > hi`.
    pub fn new(lo: u32, hi: u32) -> Self {
        debug_assert!(lo <= hi, "span lo {lo} exceeds hi {hi}");
        Self { lo, hi }
    }

    /// Number of columns covered.
    pub fn width(&self) -> u32 {
        self.hi - self.lo + 1
    }

    /// Whether column `x` falls inside the span.
    pub fn contains(&self, x: u32) -> bool {
        self.lo <= x && x <= self.hi
    }
}
