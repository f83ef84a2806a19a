//! Original/edited buffer pair for one open image.

use imedit_core::{Operation, PixelBuffer, TransformError, apply_operation};

/// The image as loaded, and the result of every edit applied so far.
///
/// Both buffers are owned here and passed into the transforms explicitly;
/// `original` is never touched after construction.
#[derive(Debug, Clone)]
pub struct EditSession {
    original: PixelBuffer,
    edited: PixelBuffer,
}

impl EditSession {
    pub fn new(original: PixelBuffer) -> Self {
        Self {
            edited: original.clone(),
            original,
        }
    }

    pub fn original(&self) -> &PixelBuffer {
        &self.original
    }

    pub fn edited(&self) -> &PixelBuffer {
        &self.edited
    }

    /// Apply `op` to the edited buffer. On failure the edited buffer is
    /// left as it was.
    pub fn apply(&mut self, op: &Operation) -> Result<(), TransformError> {
        self.edited = apply_operation(&self.edited, op)?;
        tracing::info!(
            "{} applied, image is now {}x{}",
            op.label(),
            self.edited().width(),
            self.edited().height()
        );
        Ok(())
    }

    pub fn into_edited(self) -> PixelBuffer {
        self.edited
    }
}
