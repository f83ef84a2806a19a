//! Mirroring across the image axes.
//!
//! Both transforms copy all four channels untouched and keep the dimensions.

use crate::image::PixelBuffer;

/// Reflect across the vertical axis: output column `x` is input column
/// `width - 1 - x`, same row.
pub fn mirror_vertical(buf: &PixelBuffer) -> PixelBuffer {
    let mut out: Vec<u8> = Vec::with_capacity(buf.samples().len());
    for y in 0..buf.height() {
        for px in buf.row(y).iter().rev() {
            out.extend_from_slice(px);
        }
    }
    PixelBuffer::from_parts(buf.width(), buf.height(), out)
}

/// Reflect across the horizontal axis: output row `y` is input row
/// `height - 1 - y`, same column.
pub fn mirror_horizontal(buf: &PixelBuffer) -> PixelBuffer {
    let mut out: Vec<u8> = Vec::with_capacity(buf.samples().len());
    for y in (0..buf.height()).rev() {
        out.extend_from_slice(bytemuck::cast_slice(buf.row(y)));
    }
    PixelBuffer::from_parts(buf.width(), buf.height(), out)
}
