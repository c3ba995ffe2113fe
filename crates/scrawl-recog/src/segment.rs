//! Character segmentation
//!
//! Partitions a raster into ordered per-character column spans using
//! column projection:
//!
//! 1. Mark every column containing at least one ink pixel
//! 2. Maximal runs of ink columns, bounded by background columns or the
//!    raster edges, are candidate character spans
//! 3. Runs narrower than [`MIN_SPAN_WIDTH`] are dropped as noise
//!
//! Characters that touch (no blank column between them) merge into one
//! span. That is an inherent limitation of column projection and is
//! asserted, not worked around, by the tests.

use scrawl_core::{ColSpan, Color, Raster};

/// Minimum span width in columns; narrower runs are treated as
/// antialiasing noise.
pub const MIN_SPAN_WIDTH: u32 = 2;

/// Split `raster` into per-character column spans, left to right.
///
/// Any pixel whose color differs from `background` counts as ink. A
/// raster with no ink yields an empty vector.
pub fn segment(raster: &Raster, background: Color) -> Vec<ColSpan> {
    let ink = column_ink_profile(raster, background);

    let mut spans = Vec::new();
    let mut run_start: Option<u32> = None;
    for (x, &has_ink) in ink.iter().enumerate() {
        match (has_ink, run_start) {
            (true, None) => run_start = Some(x as u32),
            (false, Some(lo)) => {
                push_span(&mut spans, lo, x as u32 - 1);
                run_start = None;
            }
            _ => {}
        }
    }
    if let Some(lo) = run_start {
        push_span(&mut spans, lo, raster.width() - 1);
    }
    spans
}

fn push_span(spans: &mut Vec<ColSpan>, lo: u32, hi: u32) {
    let span = ColSpan::new(lo, hi);
    if span.width() >= MIN_SPAN_WIDTH {
        spans.push(span);
    }
}

/// Per-column ink flags (vertical projection).
fn column_ink_profile(raster: &Raster, background: Color) -> Vec<bool> {
    let bg = background.pack();
    (0..raster.width())
        .map(|x| (0..raster.height()).any(|y| raster.get_pixel_unchecked(x, y) != bg))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// White canvas with black bars at the given column spans.
    fn bars(width: u32, height: u32, spans: &[(u32, u32)]) -> Raster {
        let mut raster = Raster::new(width, height, Color::WHITE).unwrap();
        for &(lo, hi) in spans {
            raster
                .fill_rect(lo, 1, hi - lo + 1, height - 2, Color::BLACK)
                .unwrap();
        }
        raster
    }

    #[test]
    fn test_blank_raster_yields_no_spans() {
        let raster = Raster::new(20, 10, Color::WHITE).unwrap();
        assert!(segment(&raster, Color::WHITE).is_empty());
    }

    #[test]
    fn test_separated_bars_yield_ordered_spans() {
        let raster = bars(30, 10, &[(2, 5), (10, 13), (20, 26)]);
        let spans = segment(&raster, Color::WHITE);

        assert_eq!(
            spans,
            vec![ColSpan::new(2, 5), ColSpan::new(10, 13), ColSpan::new(20, 26)]
        );
    }

    #[test]
    fn test_touching_bars_merge_into_one_span() {
        // No background column between the two bars: column projection
        // cannot split them, they come back as a single region.
        let raster = bars(20, 10, &[(3, 6), (7, 10)]);
        let spans = segment(&raster, Color::WHITE);

        assert_eq!(spans, vec![ColSpan::new(3, 10)]);
    }

    #[test]
    fn test_single_column_run_is_discarded() {
        let raster = bars(20, 10, &[(4, 4), (10, 12)]);
        let spans = segment(&raster, Color::WHITE);

        assert_eq!(spans, vec![ColSpan::new(10, 12)]);
    }

    #[test]
    fn test_span_reaching_raster_edge() {
        let raster = bars(10, 6, &[(7, 9)]);
        let spans = segment(&raster, Color::WHITE);

        assert_eq!(spans, vec![ColSpan::new(7, 9)]);
    }

    #[test]
    fn test_nondefault_background() {
        // Black background: the white gaps become the ink.
        let mut raster = Raster::new(12, 4, Color::BLACK).unwrap();
        raster.fill_rect(2, 0, 3, 4, Color::WHITE).unwrap();

        let spans = segment(&raster, Color::BLACK);
        assert_eq!(spans, vec![ColSpan::new(2, 4)]);
    }

    #[test]
    fn test_fully_inked_raster_is_one_span() {
        let raster = Raster::new(8, 4, Color::BLACK).unwrap();
        let spans = segment(&raster, Color::WHITE);
        assert_eq!(spans, vec![ColSpan::new(0, 7)]);
    }
}
