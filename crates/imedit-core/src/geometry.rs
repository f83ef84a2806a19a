//! Dimension helpers for displaying images.

use crate::error::TransformError;
use crate::image::PixelBuffer;

/// `(width, height)` of a buffer.
pub fn get_dimensions(buf: &PixelBuffer) -> (u32, u32) {
    (buf.width(), buf.height())
}

/// Largest size with the image's aspect ratio that fits the container.
///
/// ```text
/// container_ratio = container_w / container_h
/// image_ratio     = image_w / image_h
///
/// container_ratio > image_ratio  →  (floor(container_h × image_ratio), container_h)
/// container_ratio < image_ratio  →  (container_w, floor(container_w / image_ratio))
/// otherwise                      →  (container_w, container_h)
/// ```
///
/// The ratios are compared by cross-multiplication so equal ratios are
/// detected exactly.
pub fn aspect_fit(
    container_w: u32,
    container_h: u32,
    image_w: u32,
    image_h: u32,
) -> Result<(u32, u32), TransformError> {
    if container_w == 0 || container_h == 0 || image_w == 0 || image_h == 0 {
        return Err(TransformError::InvalidArgument(format!(
            "aspect fit needs non-zero sizes, got container {container_w}x{container_h} \
             and image {image_w}x{image_h}"
        )));
    }

    let (cw, ch, iw, ih) = (
        container_w as u64,
        container_h as u64,
        image_w as u64,
        image_h as u64,
    );

    // cw/ch vs iw/ih
    let lhs = cw * ih;
    let rhs = iw * ch;

    let fit = if lhs > rhs {
        // Container too wide, height constrains.
        ((ch * iw / ih) as u32, container_h)
    } else if lhs < rhs {
        // Container too tall, width constrains.
        (container_w, (cw * ih / iw) as u32)
    } else {
        (container_w, container_h)
    };
    Ok(fit)
}
