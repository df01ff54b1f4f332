//! Borrowed ARGB pixel view.
//!
//! Pixels are packed `0xAARRGGBB` words in row-major order. The view never
//! owns or mutates its data; the scanner keeps its own visited mask.
use crate::error::{Result, SplitError};

#[derive(Clone, Copy, Debug)]
pub struct PixelBuffer<'a> {
    pub w: usize,
    pub h: usize,
    pub stride: usize, // pixels between rows
    pub data: &'a [u32],
}

impl<'a> PixelBuffer<'a> {
    /// Tightly packed view; `data.len()` must equal `w * h`.
    pub fn new(data: &'a [u32], w: usize, h: usize) -> Result<Self> {
        let view = Self {
            w,
            h,
            stride: w,
            data,
        };
        view.validate()?;
        Ok(view)
    }

    /// View over a buffer whose rows are `stride` pixels apart, e.g. a
    /// region of a wider sheet.
    pub fn with_stride(data: &'a [u32], w: usize, h: usize, stride: usize) -> Result<Self> {
        let view = Self {
            w,
            h,
            stride,
            data,
        };
        view.validate()?;
        Ok(view)
    }

    /// Check that the dimensions describe the backing slice.
    ///
    /// The buffer must cover the last row and may not extend past `h` full
    /// strides.
    pub fn validate(&self) -> Result<()> {
        if self.data.is_empty() {
            return Err(SplitError::NullBuffer);
        }
        let invalid = SplitError::InvalidDimensions {
            width: self.w,
            height: self.h,
            len: self.data.len(),
        };
        if self.stride < self.w {
            return Err(invalid);
        }
        let required = match self.h {
            0 => 0,
            h => (h - 1)
                .checked_mul(self.stride)
                .and_then(|v| v.checked_add(self.w))
                .ok_or_else(|| invalid.clone())?,
        };
        let capacity = self.h.checked_mul(self.stride).ok_or_else(|| invalid.clone())?;
        let len = self.data.len();
        if len < required || len > capacity {
            return Err(invalid);
        }
        Ok(())
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u32 {
        self.data[y * self.stride + x]
    }

    /// Number of addressable pixels (`w * h`).
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.w * self.h
    }
}

impl<'a> crate::image::traits::ImageView for PixelBuffer<'a> {
    type Pixel = u32;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.stride
    }
    #[inline]
    fn row(&self, y: usize) -> &[u32] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
    #[inline]
    fn as_slice(&self) -> Option<&[u32]> {
        (self.stride == self.w).then_some(&self.data[..self.w * self.h])
    }
}
