//! Bounding boxes of detected sprites.
//!
//! Coordinates are in pixels of the source sheet; `x`/`y` is the top-left
//! corner and the box spans the half-open ranges `[x, x + width)` and
//! `[y, y + height)`.
use crate::error::{Result, SplitError};
use serde::{Deserialize, Serialize};

/// Sequential identifier assigned when a box joins the accepted set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpriteId(pub u32);

/// Axis-aligned box of one sprite.
///
/// Boxes built by this crate are at least one pixel wide and tall. The fields
/// are public, so a box edited or deserialized by the caller is not checked.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundingBox {
    pub id: SpriteId,
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<usize>,
}

impl BoundingBox {
    pub fn new(x: usize, y: usize, width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(SplitError::InvalidBounds { width, height });
        }
        Ok(Self::from_extent(x, y, width, height))
    }

    /// Box spanning the inclusive corners `(min_x, min_y)`..=`(max_x, max_y)`.
    pub fn from_corners(min_x: usize, min_y: usize, max_x: usize, max_y: usize) -> Self {
        debug_assert!(min_x <= max_x && min_y <= max_y);
        Self::from_extent(min_x, min_y, max_x - min_x + 1, max_y - min_y + 1)
    }

    pub(crate) fn from_extent(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self {
            id: SpriteId::default(),
            x,
            y,
            width,
            height,
            row: None,
            column: None,
        }
    }

    pub fn with_cell(mut self, row: usize, column: usize) -> Self {
        self.row = Some(row);
        self.column = Some(column);
        self
    }

    #[inline]
    pub fn right(&self) -> usize {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> usize {
        self.y + self.height
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.width * self.height
    }

    /// Half of the right edge; used as a cheap "how far right" key.
    #[inline]
    pub fn center_x(&self) -> usize {
        self.right() / 2
    }

    /// Half of the bottom edge; used as a cheap "how far down" key.
    #[inline]
    pub fn center_y(&self) -> usize {
        self.bottom() / 2
    }

    pub fn is_placed(&self) -> bool {
        self.row.is_some() && self.column.is_some()
    }

    /// Same position and size, ignoring id and grid placement.
    pub fn same_extent(&self, other: &BoundingBox) -> bool {
        self.x == other.x
            && self.y == other.y
            && self.width == other.width
            && self.height == other.height
    }

    /// Interiors overlap. Boxes that only share an edge do not intersect.
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Euclidean distance between the top-left corners, truncated.
    pub fn distance(&self, other: &BoundingBox) -> usize {
        let dx = self.x.abs_diff(other.x) as f64;
        let dy = self.y.abs_diff(other.y) as f64;
        (dx * dx + dy * dy).sqrt() as usize
    }

    /// Euclidean length of the gap between the nearest edges, truncated.
    /// Zero when the boxes touch or overlap.
    pub fn edge_distance(&self, other: &BoundingBox) -> usize {
        let gap = |a0: usize, a1: usize, b0: usize, b1: usize| -> f64 {
            if a1 <= b0 {
                (b0 - a1) as f64
            } else if b1 <= a0 {
                (a0 - b1) as f64
            } else {
                0.0
            }
        };
        let dx = gap(self.x, self.right(), other.x, other.right());
        let dy = gap(self.y, self.bottom(), other.y, other.bottom());
        (dx * dx + dy * dy).sqrt() as usize
    }

    /// Neighbours in the sorted output: one step along exactly one of the
    /// row or column axes. Unplaced boxes are never consecutive.
    pub fn is_consecutive(&self, other: &BoundingBox) -> bool {
        match (self.row, self.column, other.row, other.column) {
            (Some(r0), Some(c0), Some(r1), Some(c1)) => {
                (r0.abs_diff(r1) == 1) ^ (c0.abs_diff(c1) == 1)
            }
            _ => false,
        }
    }

    /// Grow to cover `other`. Each axis widens independently; nothing shrinks.
    pub fn cover(&mut self, other: &BoundingBox) {
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        self.x = self.x.min(other.x);
        self.y = self.y.min(other.y);
        self.width = right - self.x;
        self.height = bottom - self.y;
    }
}
