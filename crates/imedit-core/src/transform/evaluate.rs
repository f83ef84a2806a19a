//! Operation dispatch — applies one edit, or a chain of edits, to a buffer.

use crate::error::TransformError;
use crate::image::PixelBuffer;
use crate::transform::color::{grayscale, shift_color};
use crate::transform::crop::crop;
use crate::transform::mirror::{mirror_horizontal, mirror_vertical};
use crate::transform::params::Operation;
use crate::transform::thumbnail::thumbnail;

/// Run a single operation. The input is never modified.
pub fn apply_operation(buf: &PixelBuffer, op: &Operation) -> Result<PixelBuffer, TransformError> {
    let out = match *op {
        Operation::Grayscale => grayscale(buf),
        Operation::ShiftColor(adjustment) => shift_color(buf, adjustment),
        Operation::MirrorVertical => mirror_vertical(buf),
        Operation::MirrorHorizontal => mirror_horizontal(buf),
        Operation::Crop(rect) => crop(buf, rect)?,
        Operation::Thumbnail { max_width } => thumbnail(buf, max_width)?,
    };
    Ok(out)
}

/// Run `ops` left to right, each on the previous output. Stops at the first
/// failure.
pub fn apply_pipeline(buf: &PixelBuffer, ops: &[Operation]) -> Result<PixelBuffer, TransformError> {
    let mut current = buf.clone();
    for (step, op) in ops.iter().enumerate() {
        current = apply_operation(&current, op).inspect_err(|e| {
            tracing::debug!("step {step} ({}) failed: {e}", op.label());
        })?;
        tracing::debug!(
            "step {step} ({}) -> {}x{}",
            op.label(),
            current.width(),
            current.height()
        );
    }
    Ok(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::params::{ColorAdjustment, Rectangle};

    #[test]
    fn test_empty_pipeline_is_identity() {
        let buf = PixelBuffer::filled(3, 3, [1, 2, 3, 4]).unwrap();
        assert_eq!(apply_pipeline(&buf, &[]).unwrap(), buf);
    }

    #[test]
    fn test_pipeline_chains_outputs() {
        let buf = PixelBuffer::filled(4, 4, [30, 60, 90, 10]).unwrap();
        let ops = [
            Operation::Crop(Rectangle::new(0, 2, 0, 1)),
            Operation::Grayscale,
            Operation::ShiftColor(ColorAdjustment::rgb(0, 0, 500)),
        ];
        let out = apply_pipeline(&buf, &ops).unwrap();
        assert_eq!((out.width(), out.height()), (2, 1));
        assert!(out.pixels().iter().all(|p| *p == [60, 60, 255, 255]));
    }

    #[test]
    fn test_pipeline_stops_at_error() {
        let buf = PixelBuffer::filled(2, 2, [0; 4]).unwrap();
        let ops = [
            Operation::Thumbnail { max_width: 1 },
            Operation::Crop(Rectangle::new(0, 2, 0, 1)),
        ];
        let err = apply_pipeline(&buf, &ops).unwrap_err();
        assert!(matches!(err, TransformError::OutOfBounds { width: 1, .. }));
    }

    #[test]
    fn test_apply_matches_free_function() {
        let buf = PixelBuffer::from_pixels(2, 1, &[[1, 2, 3, 4], [5, 6, 7, 8]]).unwrap();
        assert_eq!(
            apply_operation(&buf, &Operation::MirrorVertical).unwrap(),
            mirror_vertical(&buf)
        );
        assert_eq!(
            apply_operation(&buf, &Operation::MirrorHorizontal).unwrap(),
            buf
        );
    }
}
