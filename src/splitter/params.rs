//! Parameter types configuring a split.
//!
//! Defaults match a transparent sheet with particle merging disabled. When
//! sprites come out fragmented, raise `scan.particle_size` first and then
//! `scan.particle_distance`; both make it more likely that small real sprites
//! get swallowed by their neighbours.

use crate::background::Background;
use crate::scan::ScanOptions;
use serde::{Deserialize, Serialize};

/// Splitter-wide parameters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SplitParams {
    /// Which pixels count as background.
    pub background: Background,
    /// Flood fill and particle merging options.
    pub scan: ScanOptions,
}
