//! Reading-order sort for detected boxes.
//!
//! Imposes a row/column structure on an unordered set of boxes:
//!
//! - Boxes are stably sorted by `center_x + center_y`, a cheap proxy for
//!   "closest to the top-left corner". The first one anchors row 0,
//!   column 0.
//! - A vertical scan line pinned to the anchor's horizontal span walks down
//!   from the anchor's bottom edge. Each box it meets becomes the pivot
//!   (column 0) of the next row, and the line jumps to that box's bottom.
//! - For every pivot a horizontal scan line restricted to the pivot's
//!   vertical span walks right from the pivot's right edge, numbering the
//!   boxes it meets from column 1 and jumping past each one.
//!
//! Output is pivot-major, column-minor: natural reading order for sheets laid
//! out as a (possibly irregular) grid of non-overlapping boxes.
//!
//! Limitations
//! - One pivot anchors a whole row, and a row is whatever overlaps the
//!   pivot's vertical span. Staggered layouts or rows that only partially
//!   overlap get no well-defined row.
//! - Boxes that no scan line reaches are not dropped: the pass is repeated on
//!   the leftovers with the top-left-most leftover as a new anchor, and its
//!   rows are numbered after the existing ones.
//!
//! Each scan step inspects every unplaced box, so sorting is O(n^2) in the
//! number of boxes and independent of the pixel dimensions.

mod scanline;

use crate::bounds::BoundingBox;
use log::debug;

/// Assign `row`/`column` to every box and return them in reading order.
pub fn sort_reading_order(boxes: Vec<BoundingBox>) -> Vec<BoundingBox> {
    if boxes.is_empty() {
        return boxes;
    }
    let count = boxes.len();
    let mut resolver = scanline::RowResolver::new(boxes);
    while resolver.resolve_pass() {}
    debug!(
        "sort: {} boxes -> {} rows in {} pass(es)",
        count,
        resolver.rows(),
        resolver.passes()
    );
    resolver.into_sorted()
}
