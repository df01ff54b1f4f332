//! Background predicates.
//!
//! A predicate decides whether a packed ARGB pixel belongs to the sheet
//! background. The scanner only ever asks "is this background?", so any pure
//! `Fn(u32) -> bool` works; [`Background`] covers the two common cases and is
//! what the JSON configuration deserializes into.
use serde::{Deserialize, Serialize};

/// Pure, total classification of a pixel as background or foreground.
pub trait BackgroundPredicate {
    fn is_background(&self, pixel: u32) -> bool;
}

impl<F> BackgroundPredicate for F
where
    F: Fn(u32) -> bool,
{
    #[inline]
    fn is_background(&self, pixel: u32) -> bool {
        self(pixel)
    }
}

/// Built-in background kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Background {
    /// Exact match against a single ARGB color.
    Solid(u32),
    /// Background when the alpha channel is at most the threshold.
    AlphaThreshold(u8),
}

impl Background {
    pub const WHITE: Background = Background::Solid(0xFFFF_FFFF);
    pub const BLACK: Background = Background::Solid(0);
    /// Nearly transparent pixels (alpha <= 0x33) count as background.
    pub const TRANSPARENT: Background = Background::AlphaThreshold(0x33);
}

impl Default for Background {
    fn default() -> Self {
        Background::TRANSPARENT
    }
}

impl BackgroundPredicate for Background {
    #[inline]
    fn is_background(&self, pixel: u32) -> bool {
        match *self {
            Background::Solid(color) => pixel == color,
            Background::AlphaThreshold(threshold) => (pixel >> 24) <= u32::from(threshold),
        }
    }
}
