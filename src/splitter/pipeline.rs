//! Splitter pipeline.
//!
//! Typical usage:
//! ```no_run
//! use sprite_splitter::{PixelBuffer, SplitParams, SpriteSplitter};
//!
//! # fn example(pixels: &[u32], w: usize, h: usize) -> sprite_splitter::Result<()> {
//! let splitter = SpriteSplitter::new(SplitParams::default());
//! let result = splitter.process(PixelBuffer::new(pixels, w, h)?)?;
//! for sprite in &result.sprites {
//!     println!("{:?} at row {:?}", sprite.id, sprite.row);
//! }
//! # Ok(())
//! # }
//! ```

use super::params::SplitParams;
use crate::background::{Background, BackgroundPredicate};
use crate::diagnostics::timing::elapsed_ms;
use crate::diagnostics::{InputDescriptor, SplitReport, TimingBreakdown};
use crate::error::Result;
use crate::image::PixelBuffer;
use crate::scan::{scan_components, ScanOptions};
use crate::sort::sort_reading_order;
use crate::types::SplitResult;
use log::debug;
use std::time::Instant;

/// Reusable splitter. Holds only configuration; every call works on its own
/// buffers, so one instance can serve any number of independent sheets.
#[derive(Clone, Debug, Default)]
pub struct SpriteSplitter {
    params: SplitParams,
}

impl SpriteSplitter {
    /// Create a splitter with the supplied parameters.
    pub fn new(params: SplitParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &SplitParams {
        &self.params
    }

    /// Detect and order the sprites of `view` using the configured background.
    pub fn process(&self, view: PixelBuffer<'_>) -> Result<SplitResult> {
        let background = self.params.background;
        self.process_with(view, &background)
    }

    /// Like [`process`](Self::process) with a caller-supplied background
    /// predicate instead of the configured one.
    pub fn process_with<P>(&self, view: PixelBuffer<'_>, background: &P) -> Result<SplitResult>
    where
        P: BackgroundPredicate + ?Sized,
    {
        let total_start = Instant::now();
        let mut timings = TimingBreakdown::default();

        let scan = scan_components(view, background, &self.params.scan)?;
        timings.push("scan", scan.elapsed_ms);

        let sprites = timings.measure("sort", || sort_reading_order(scan.boxes));

        let latency_ms = elapsed_ms(total_start);
        timings.total_ms = latency_ms;
        debug!(
            "SpriteSplitter::process {}x{} -> {} sprites in {:.3} ms",
            view.w,
            view.h,
            sprites.len(),
            latency_ms
        );

        Ok(SplitResult {
            sprites,
            stats: scan.stats,
            timings,
            latency_ms,
        })
    }

    /// Run [`process`](Self::process) and wrap the result with the input
    /// shape and parameters.
    pub fn process_with_diagnostics(&self, view: PixelBuffer<'_>) -> Result<SplitReport> {
        let result = self.process(view)?;
        Ok(SplitReport {
            input: InputDescriptor::from_view(&view),
            params: self.params,
            result,
        })
    }

    /// Convenience over a tightly packed `width * height` buffer.
    pub fn split_pixels(&self, pixels: &[u32], width: usize, height: usize) -> Result<SplitResult> {
        self.process(PixelBuffer::new(pixels, width, height)?)
    }

    /// Update the background predicate.
    pub fn set_background(&mut self, background: Background) {
        self.params.background = background;
    }

    /// Update the maximum particle area (pixels).
    pub fn set_particle_size(&mut self, size: usize) {
        self.params.scan.particle_size = size;
    }

    /// Update the maximum particle-to-sprite distance (pixels).
    pub fn set_particle_distance(&mut self, distance: usize) {
        self.params.scan.particle_distance = distance;
    }

    /// Replace all scan options.
    pub fn set_scan_options(&mut self, options: ScanOptions) {
        self.params.scan = options;
    }
}
