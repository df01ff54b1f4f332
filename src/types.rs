use crate::bounds::BoundingBox;
use crate::diagnostics::TimingBreakdown;
use crate::scan::ScanStats;
use serde::Serialize;

#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitResult {
    pub sprites: Vec<BoundingBox>, // reading order, row/column set
    pub stats: ScanStats,
    pub timings: TimingBreakdown,
    pub latency_ms: f64,
}

impl SplitResult {
    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }

    /// Sprite at a grid cell, if any.
    pub fn at(&self, row: usize, column: usize) -> Option<&BoundingBox> {
        self.sprites
            .iter()
            .find(|s| s.row == Some(row) && s.column == Some(column))
    }
}
