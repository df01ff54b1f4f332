//! Connected-component scanner.
//!
//! Finds every non-background region of a sheet and reports its bounding
//! box. The algorithm performs:
//!
//! - Raster scan in row-major order. Each foreground pixel that has not been
//!   visited yet seeds a flood fill.
//! - Queue-based flood fill over the 4-neighbourhood (optionally 8). Visited
//!   pixels are recorded in a private mask, so the caller's buffer is never
//!   written and no pixel is visited twice. The region's extent is tracked as
//!   min/max coordinates, which gives exact bounds.
//! - Particle merging: a new region is compared with every accepted box that
//!   intersects it or lies within `particle_distance`. When the smaller of
//!   the two has an area of at most `particle_size`, it is folded into the
//!   larger one. A box that grew is checked again and absorbs any box it
//!   now overlaps. See [`ScanOptions`].
//!
//! Accepted boxes get sequential ids in acceptance order. Output order is
//! otherwise unspecified; see `crate::sort` for reading order.
//!
//! Complexity
//! - The fill visits each pixel once: O(W*H). Every fold removes a box, so
//!   merging is O(n^2) overall in the number of regions.

mod flood;
mod merge;
mod options;
mod region;

pub use options::{Connectivity, DistanceMetric, ScanOptions};

use crate::background::BackgroundPredicate;
use crate::bounds::BoundingBox;
use crate::error::Result;
use crate::image::PixelBuffer;
use log::debug;
use serde::Serialize;

/// Counters describing one scan.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanStats {
    /// Connected regions found by the flood fill.
    pub regions: usize,
    /// Regions (or accepted boxes) folded into a larger neighbour.
    pub particles_merged: usize,
    pub foreground_pixels: usize,
}

#[derive(Clone, Debug)]
pub struct ScanResult {
    pub boxes: Vec<BoundingBox>,
    pub stats: ScanStats,
    pub elapsed_ms: f64,
}

/// Extract the bounding boxes of all foreground regions in `view`.
///
/// Fails with `NullBuffer` or `InvalidDimensions` before touching any pixel
/// when the view does not describe its buffer.
pub fn scan_components<P>(
    view: PixelBuffer<'_>,
    background: &P,
    options: &ScanOptions,
) -> Result<ScanResult>
where
    P: BackgroundPredicate + ?Sized,
{
    view.validate()?;
    let result = flood::ComponentScanner::new(view, background, *options).scan();
    debug!(
        "scan: {}x{} -> {} regions, {} particles merged, {} boxes ({:.3} ms)",
        view.w,
        view.h,
        result.stats.regions,
        result.stats.particles_merged,
        result.boxes.len(),
        result.elapsed_ms
    );
    Ok(result)
}

#[cfg(test)]
mod tests;
