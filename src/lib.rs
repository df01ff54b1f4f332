#![doc = include_str!("../README.md")]

// Public modules
pub mod background;
pub mod blend;
pub mod bounds;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod grid;
pub mod image;
pub mod splitter;
pub mod types;

// Pipeline stages, usable on their own.
pub mod scan;
pub mod sort;

// --- High-level re-exports -------------------------------------------------

// Main entry points: splitter + results.
pub use crate::splitter::{SplitParams, SpriteSplitter};
pub use crate::types::SplitResult;

// Inputs and outputs.
pub use crate::background::{Background, BackgroundPredicate};
pub use crate::bounds::{BoundingBox, SpriteId};
pub use crate::error::{Result, SplitError};
pub use crate::image::PixelBuffer;
pub use crate::scan::ScanOptions;

// Diagnostics returned by the splitter.
pub use crate::diagnostics::SplitReport;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use sprite_splitter::prelude::*;
///
/// # fn main() -> sprite_splitter::Result<()> {
/// let (w, h) = (8usize, 4usize);
/// let mut pixels = vec![0u32; w * h];
/// pixels[1 + w] = 0xFF00_00FF;
/// pixels[5 + 2 * w] = 0xFF00_FF00;
///
/// let splitter = SpriteSplitter::new(SplitParams::default());
/// let result = splitter.process(PixelBuffer::new(&pixels, w, h)?)?;
/// assert_eq!(result.len(), 2);
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::image::PixelBuffer;
    pub use crate::{Background, BoundingBox, SplitParams, SplitResult, SpriteSplitter};
}
