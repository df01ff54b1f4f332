//! Diagnostics returned alongside split results.
//!
//! `SplitReport` bundles the result with the input shape and the parameters
//! it was produced with; `TimingBreakdown` records per-stage latency.

pub mod report;
pub mod timing;

pub use report::{InputDescriptor, SplitReport};
pub use timing::{StageTiming, TimingBreakdown};
