//! Sprite splitter orchestrating detection and ordering.
//!
//! Overview
//! - Validates the pixel view (`NullBuffer`, `InvalidDimensions`) before any
//!   work is done.
//! - Runs the connected-component scanner with the configured background and
//!   particle thresholds (see [`crate::scan`]).
//! - Sorts the surviving boxes into reading order and assigns rows and
//!   columns (see [`crate::sort`]).
//! - Records per-stage timings and logs a one-line summary per stage.
//!
//! Modules
//! - [`params`] – configuration consumed by the splitter and the CLI.
//! - `pipeline` – the [`SpriteSplitter`] implementation.

pub mod params;
mod pipeline;

pub use params::SplitParams;
pub use pipeline::SpriteSplitter;
