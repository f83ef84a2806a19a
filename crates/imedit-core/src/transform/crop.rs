//! Rectangular crop.

use crate::error::TransformError;
use crate::image::PixelBuffer;
use crate::transform::params::Rectangle;

/// Copy the pixels with `x in [x_left, x_right)` and `y in [y_top, y_bottom)`.
///
/// The input is borrowed, so the caller keeps the uncropped original.
/// A rectangle that fits but has zero width or height yields a valid
/// empty buffer; one that does not fit is rejected, never clamped.
pub fn crop(buf: &PixelBuffer, rect: Rectangle) -> Result<PixelBuffer, TransformError> {
    if !rect.fits(buf.width(), buf.height()) {
        return Err(TransformError::OutOfBounds {
            x_left: rect.x_left,
            x_right: rect.x_right,
            y_top: rect.y_top,
            y_bottom: rect.y_bottom,
            width: buf.width(),
            height: buf.height(),
        });
    }

    let (out_w, out_h) = (rect.width(), rect.height());
    let x0 = rect.x_left as usize;
    let x1 = rect.x_right as usize;

    let mut out: Vec<u8> = Vec::with_capacity(out_w as usize * out_h as usize * 4);
    for y in rect.y_top..rect.y_bottom {
        out.extend_from_slice(bytemuck::cast_slice(&buf.row(y)[x0..x1]));
    }
    Ok(PixelBuffer::from_parts(out_w, out_h, out))
}
