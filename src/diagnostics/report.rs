use super::timing::TimingBreakdown;
use crate::image::PixelBuffer;
use crate::scan::ScanStats;
use crate::splitter::SplitParams;
use crate::types::SplitResult;
use serde::Serialize;

/// Shape of the pixel view a split ran on.
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
    pub stride: usize,
}

impl InputDescriptor {
    pub fn from_view(view: &PixelBuffer<'_>) -> Self {
        Self {
            width: view.w,
            height: view.h,
            stride: view.stride,
        }
    }
}

/// Split result together with what produced it.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitReport {
    pub input: InputDescriptor,
    pub params: SplitParams,
    pub result: SplitResult,
}

impl SplitReport {
    pub fn stats(&self) -> &ScanStats {
        &self.result.stats
    }

    pub fn timings(&self) -> &TimingBreakdown {
        &self.result.timings
    }

    /// Number of rows assigned by the sorter.
    pub fn rows(&self) -> usize {
        self.result
            .sprites
            .iter()
            .filter_map(|s| s.row)
            .max()
            .map_or(0, |r| r + 1)
    }
}
