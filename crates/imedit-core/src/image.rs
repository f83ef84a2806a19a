//! Image representation for the editing pipeline.

use crate::error::TransformError;

/// Number of samples per pixel (R, G, B, A).
pub const CHANNELS: usize = 4;

/// Immutable RGBA8 raster. Row-major, pixel `(x, y)` starts at `(y * width + x) * 4`.
///
/// There are no setters: every edit builds a new buffer, so an "original"
/// and an "edited" buffer held side by side can never alias.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    samples: Vec<u8>,
}

impl PixelBuffer {
    /// Wrap decoded samples, checking `samples.len() == width * height * 4`.
    pub fn new(width: u32, height: u32, samples: Vec<u8>) -> Result<Self, TransformError> {
        let expected = sample_len(width, height).ok_or(TransformError::ShapeMismatch {
            expected: usize::MAX,
            actual: samples.len(),
        })?;
        if samples.len() != expected {
            return Err(TransformError::ShapeMismatch {
                expected,
                actual: samples.len(),
            });
        }
        Ok(Self {
            width,
            height,
            samples,
        })
    }

    /// Build a buffer from whole pixels.
    pub fn from_pixels(width: u32, height: u32, pixels: &[[u8; 4]]) -> Result<Self, TransformError> {
        Self::new(width, height, bytemuck::cast_slice::<[u8; 4], u8>(pixels).to_vec())
    }

    /// A buffer where every pixel has the same value.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Result<Self, TransformError> {
        let len = sample_len(width, height).ok_or_else(|| {
            TransformError::InvalidArgument(format!("{width}x{height} image is too large"))
        })?;
        let samples = rgba.iter().copied().cycle().take(len).collect();
        Ok(Self {
            width,
            height,
            samples,
        })
    }

    /// Transforms build their output through this; the length is already right.
    pub(crate) fn from_parts(width: u32, height: u32, samples: Vec<u8>) -> Self {
        debug_assert_eq!(Some(samples.len()), sample_len(width, height));
        Self {
            width,
            height,
            samples,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel at `(x, y)`, or `None` outside the image.
    pub fn get(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = y as usize * self.width as usize + x as usize;
        self.pixels().get(idx).copied()
    }

    /// Flat sample slice, four bytes per pixel.
    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    /// Samples viewed as whole pixels.
    pub fn pixels(&self) -> &[[u8; 4]] {
        bytemuck::cast_slice(&self.samples)
    }

    /// One row of pixels. `y` must be in range.
    pub(crate) fn row(&self, y: u32) -> &[[u8; 4]] {
        let w = self.width as usize;
        let start = y as usize * w;
        &self.pixels()[start..start + w]
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Hand the samples back, e.g. to an encoder.
    pub fn into_samples(self) -> Vec<u8> {
        self.samples
    }
}

/// `width * height * 4`, or `None` on overflow.
fn sample_len(width: u32, height: u32) -> Option<usize> {
    (width as usize)
        .checked_mul(height as usize)?
        .checked_mul(CHANNELS)
}
