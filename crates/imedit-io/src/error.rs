use std::path::PathBuf;

use imedit_core::TransformError;

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("failed to decode image: {0}")]
    Decode(image::ImageError),
    #[error("failed to encode image: {0}")]
    Encode(image::ImageError),
    #[error("unsupported image extension: {}", .0.display())]
    UnsupportedExtension(PathBuf),
    #[error("decoded image has an invalid shape: {0}")]
    Buffer(#[from] TransformError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
