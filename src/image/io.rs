//! I/O helpers for the command-line tool.
//!
//! - `load_argb_image`: decode a PNG/JPEG/etc. into an owned ARGB buffer.
//! - `pack_argb` / `unpack_argb`: convert between RGBA bytes and `0xAARRGGBB`.
//! - `to_json_pretty`: pretty-print a serializable value.
use super::PixelBuffer;
use serde::Serialize;
use std::path::Path;

/// Owned ARGB buffer with borrowed view conversion.
#[derive(Clone, Debug)]
pub struct ArgbImage {
    width: usize,
    height: usize,
    data: Vec<u32>,
}

impl ArgbImage {
    /// Construct an owned buffer from packed pixels.
    pub fn new(width: usize, height: usize, data: Vec<u32>) -> Self {
        Self {
            width,
            height,
            data,
        }
    }

    /// Image width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[u32] {
        &self.data
    }

    /// Borrow as a read-only `PixelBuffer`. Dimensions are trusted; the
    /// splitter validates them again before use.
    pub fn as_view(&self) -> PixelBuffer<'_> {
        PixelBuffer {
            w: self.width,
            h: self.height,
            stride: self.width,
            data: &self.data,
        }
    }
}

#[inline]
pub fn pack_argb([r, g, b, a]: [u8; 4]) -> u32 {
    u32::from_be_bytes([a, r, g, b])
}

#[inline]
pub fn unpack_argb(pixel: u32) -> [u8; 4] {
    let [a, r, g, b] = pixel.to_be_bytes();
    [r, g, b, a]
}

/// Load an image from disk and convert it to packed ARGB.
pub fn load_argb_image(path: &Path) -> Result<ArgbImage, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_rgba8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    let data = img.pixels().map(|p| pack_argb(p.0)).collect();
    Ok(ArgbImage::new(width, height, data))
}

/// Serialize a value as pretty JSON.
pub fn to_json_pretty<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string_pretty(value).map_err(|e| format!("Failed to serialize JSON: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argb_packing_places_alpha_in_high_byte() {
        let px = pack_argb([0x11, 0x22, 0x33, 0x80]);
        assert_eq!(px, 0x8011_2233);
        assert_eq!(unpack_argb(px), [0x11, 0x22, 0x33, 0x80]);
    }
}
