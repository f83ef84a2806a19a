//! Per-pixel color operations (grayscale, channel shift).

use crate::image::{CHANNELS, PixelBuffer};
use crate::transform::params::ColorAdjustment;

/// Equal-weight gray of one pixel, truncated toward zero.
fn gray_level(px: &[u8]) -> u8 {
    let sum = px[0] as u16 + px[1] as u16 + px[2] as u16;
    (sum / 3) as u8
}

/// Convert to grayscale.
///
/// ```text
/// v   = floor((r + g + b) / 3)
/// out = (v, v, v, 255)
/// ```
///
/// Alpha is forced to fully opaque; any transparency in the input is
/// flattened.
pub fn grayscale(buf: &PixelBuffer) -> PixelBuffer {
    let mut out: Vec<u8> = Vec::with_capacity(buf.samples().len());
    for px in buf.samples().chunks_exact(CHANNELS) {
        let v = gray_level(px);
        out.extend_from_slice(&[v, v, v, u8::MAX]);
    }
    PixelBuffer::from_parts(buf.width(), buf.height(), out)
}

/// Add `adjustment` to every pixel, saturating each channel at 0 and 255.
///
/// `+1000` on a channel at 250 gives 255, `-10` on 5 gives 0.
pub fn shift_color(buf: &PixelBuffer, adjustment: ColorAdjustment) -> PixelBuffer {
    if adjustment.is_identity() {
        return buf.clone();
    }

    let deltas = adjustment.as_array();
    let mut out: Vec<u8> = Vec::with_capacity(buf.samples().len());
    for px in buf.samples().chunks_exact(CHANNELS) {
        for (c, delta) in px.iter().zip(deltas) {
            out.push(shift_channel(*c, delta));
        }
    }
    PixelBuffer::from_parts(buf.width(), buf.height(), out)
}

fn shift_channel(value: u8, delta: i32) -> u8 {
    (value as i32)
        .saturating_add(delta)
        .clamp(0, u8::MAX as i32) as u8
}
