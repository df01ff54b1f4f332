//! Manual merging of already sorted boxes.
//!
//! Automatic particle merging only looks at distances; when a sprite was
//! still split into several boxes the caller can fold a run of neighbours
//! back together here. Runs must be consecutive in the sorted output, see
//! [`BoundingBox::is_consecutive`].

use crate::bounds::BoundingBox;
use crate::error::{Result, SplitError};

/// Union of a consecutive run of boxes. The inputs are left untouched; the
/// result keeps the id and grid cell of the first box.
pub fn blend(boxes: &[BoundingBox]) -> Result<BoundingBox> {
    let (first, rest) = boxes
        .split_first()
        .ok_or_else(|| SplitError::InvalidMergeRequest("empty selection".to_string()))?;

    let mut result = first.clone();
    for pair in boxes.windows(2) {
        if !pair[0].is_consecutive(&pair[1]) {
            return Err(SplitError::InvalidMergeRequest(format!(
                "boxes {:?} at {} and {:?} at {} are not consecutive",
                pair[0].id,
                cell_label(&pair[0]),
                pair[1].id,
                cell_label(&pair[1])
            )));
        }
    }
    for b in rest {
        result.cover(b);
    }
    Ok(result)
}

/// Replace the inclusive range `from..=to` of `boxes` with its blend and
/// return the blended box.
pub fn blend_range(boxes: &mut Vec<BoundingBox>, from: usize, to: usize) -> Result<BoundingBox> {
    if from > to || to >= boxes.len() {
        return Err(SplitError::InvalidMergeRequest(format!(
            "range {from}..={to} outside {} boxes",
            boxes.len()
        )));
    }
    let merged = blend(&boxes[from..=to])?;
    boxes.splice(from..=to, std::iter::once(merged.clone()));
    Ok(merged)
}

fn cell_label(b: &BoundingBox) -> String {
    match (b.row, b.column) {
        (Some(r), Some(c)) => format!("({r}, {c})"),
        _ => "(unplaced)".to_string(),
    }
}
