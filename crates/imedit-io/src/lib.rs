//! imedit I/O — decoding files into `PixelBuffer`s and encoding them back.
//!
//! All codec work lives here so `imedit-core` stays free of file formats.

mod error;

use std::path::Path;

use image::ExtendedColorType;
use imedit_core::PixelBuffer;

pub use error::IoError;

/// File extensions the editor opens and saves.
pub const ALLOWED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "webp"];

/// Extensions whose encoders keep the alpha channel.
const ALPHA_EXTENSIONS: &[&str] = &["png", "webp"];

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
}

/// Whether `path` has one of [`ALLOWED_EXTENSIONS`] (case-insensitive).
pub fn is_supported(path: &Path) -> bool {
    extension(path).is_some_and(|ext| ALLOWED_EXTENSIONS.contains(&ext.as_str()))
}

/// Load an image from disk as RGBA8.
///
/// Whatever the source color type, the result has four channels; images
/// without alpha come back fully opaque.
pub fn load_image(path: &Path) -> Result<PixelBuffer, IoError> {
    if !is_supported(path) {
        return Err(IoError::UnsupportedExtension(path.to_path_buf()));
    }
    let img = image::open(path).map_err(IoError::Decode)?;
    let rgba = img.into_rgba8();
    let (width, height) = rgba.dimensions();
    tracing::info!("loaded {} ({width}x{height})", path.display());
    Ok(PixelBuffer::new(width, height, rgba.into_raw())?)
}

/// Save a buffer, picking the format from the file extension.
///
/// PNG and WebP keep the alpha channel. Every other format is written as
/// RGB with alpha dropped.
pub fn save_image(buf: &PixelBuffer, path: &Path) -> Result<(), IoError> {
    let Some(ext) = extension(path).filter(|_| is_supported(path)) else {
        return Err(IoError::UnsupportedExtension(path.to_path_buf()));
    };

    let (width, height) = (buf.width(), buf.height());
    if ALPHA_EXTENSIONS.contains(&ext.as_str()) {
        image::save_buffer(path, buf.samples(), width, height, ExtendedColorType::Rgba8)
            .map_err(IoError::Encode)?;
    } else {
        tracing::debug!("{ext} has no alpha channel, saving as RGB");
        let rgb = strip_alpha(buf);
        image::save_buffer(path, &rgb, width, height, ExtendedColorType::Rgb8)
            .map_err(IoError::Encode)?;
    }
    tracing::info!("saved {} ({width}x{height})", path.display());
    Ok(())
}

fn strip_alpha(buf: &PixelBuffer) -> Vec<u8> {
    let mut rgb = Vec::with_capacity(buf.pixels().len() * 3);
    for px in buf.pixels() {
        rgb.extend_from_slice(&px[..3]);
    }
    rgb
}
