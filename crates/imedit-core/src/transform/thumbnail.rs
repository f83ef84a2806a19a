//! Downscaled previews.
//!
//! Resampling goes through `image::imageops` with a Lanczos3 filter, which
//! averages over the source footprint instead of picking single pixels.

use ::image::RgbaImage;
use ::image::imageops::{self, FilterType};

use crate::error::TransformError;
use crate::image::PixelBuffer;

/// Preview width used by the editor.
pub const DEFAULT_THUMBNAIL_WIDTH: u32 = 64;

/// Scale down to `max_width` columns, keeping the aspect ratio.
///
/// ```text
/// out_w = max_width
/// out_h = round(max_width × height / width)   (at least 1 if height > 0)
/// ```
///
/// Upscaling is not supported: `max_width` must be in `1..=width`.
pub fn thumbnail(buf: &PixelBuffer, max_width: u32) -> Result<PixelBuffer, TransformError> {
    if max_width == 0 {
        return Err(TransformError::InvalidArgument(
            "thumbnail width must be greater than zero".to_string(),
        ));
    }
    if max_width > buf.width() {
        return Err(TransformError::InvalidArgument(format!(
            "thumbnail width {max_width} exceeds image width {}",
            buf.width()
        )));
    }
    if max_width == buf.width() {
        return Ok(buf.clone());
    }

    let out_h = scaled_height(buf.width(), buf.height(), max_width);
    if out_h == 0 {
        return Ok(PixelBuffer::from_parts(max_width, 0, Vec::new()));
    }

    let src = RgbaImage::from_raw(buf.width(), buf.height(), buf.samples().to_vec()).ok_or(
        TransformError::ShapeMismatch {
            expected: buf.width() as usize * buf.height() as usize * 4,
            actual: buf.samples().len(),
        },
    )?;
    let resized = imageops::resize(&src, max_width, out_h, FilterType::Lanczos3);

    tracing::debug!(
        "thumbnail {}x{} -> {}x{}",
        buf.width(),
        buf.height(),
        max_width,
        out_h
    );
    Ok(PixelBuffer::from_parts(max_width, out_h, resized.into_raw()))
}

/// `round(target_w × height / width)`, half away from zero, never 0 unless
/// `height` is.
fn scaled_height(width: u32, height: u32, target_w: u32) -> u32 {
    if height == 0 {
        return 0;
    }
    let (w, h, t) = (width as u64, height as u64, target_w as u64);
    let rounded = (2 * t * h + w) / (2 * w);
    rounded.clamp(1, u32::MAX as u64) as u32
}
