//! imedit Core — pixel transforms for the image editor.
//!
//! This crate contains the RGBA buffer model and every editing operation:
//! grayscale, color shift, mirroring, cropping, thumbnails and the
//! aspect-fit helper used for display. No codec or UI dependencies.

pub mod error;
pub mod geometry;
pub mod image;
pub mod transform;

// Re-exports for convenience.
pub use error::TransformError;
pub use geometry::{aspect_fit, get_dimensions};
pub use crate::image::PixelBuffer;
pub use transform::color::{grayscale, shift_color};
pub use transform::crop::crop;
pub use transform::evaluate::{apply_operation, apply_pipeline};
pub use transform::mirror::{mirror_horizontal, mirror_vertical};
pub use transform::params::{ColorAdjustment, Operation, Rectangle};
pub use transform::thumbnail::{thumbnail, DEFAULT_THUMBNAIL_WIDTH};
