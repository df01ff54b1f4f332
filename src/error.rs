use thiserror::Error;

/// Precondition failures reported by the splitter, the grid helpers and blend.
///
/// Every variant is detected before any pixel or box is processed; there is
/// no partial-result mode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SplitError {
    /// Width/height/stride do not describe the supplied buffer.
    #[error("invalid dimensions {width}x{height} for a buffer of {len} pixels")]
    InvalidDimensions {
        width: usize,
        height: usize,
        len: usize,
    },

    /// Grid parameters leave no room for a single cell.
    #[error("invalid grid for a {width}x{height} image: {reason}")]
    InvalidGrid {
        width: usize,
        height: usize,
        reason: String,
    },

    /// No pixel data was supplied.
    #[error("pixel buffer is empty")]
    NullBuffer,

    /// Blend requested on an empty, out-of-range or non-consecutive selection.
    #[error("invalid merge request: {0}")]
    InvalidMergeRequest(String),

    /// A bounding box must be at least one pixel wide and tall.
    #[error("bounding box {width}x{height} has zero area")]
    InvalidBounds { width: usize, height: usize },
}

pub type Result<T> = std::result::Result<T, SplitError>;
