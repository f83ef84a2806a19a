//! Parameter types passed into the transforms.
//!
//! Everything here is plain data with serde support so a front end can
//! describe an edit (or a whole chain of edits) without touching buffers.

use serde::{Deserialize, Serialize};

/// Signed per-channel deltas added to every pixel.
///
/// The editor only ever drives R, G and B; `da` is carried for completeness
/// and defaults to 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorAdjustment {
    pub dr: i32,
    pub dg: i32,
    pub db: i32,
    #[serde(default)]
    pub da: i32,
}

impl ColorAdjustment {
    /// Deltas for R, G, B with alpha left alone.
    pub const fn rgb(dr: i32, dg: i32, db: i32) -> Self {
        Self { dr, dg, db, da: 0 }
    }

    pub const fn as_array(&self) -> [i32; 4] {
        [self.dr, self.dg, self.db, self.da]
    }

    pub fn is_identity(&self) -> bool {
        self.as_array() == [0; 4]
    }
}

/// Crop region in pixel coordinates. Right and bottom edges are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rectangle {
    pub x_left: u32,
    pub x_right: u32,
    pub y_top: u32,
    pub y_bottom: u32,
}

impl Rectangle {
    pub const fn new(x_left: u32, x_right: u32, y_top: u32, y_bottom: u32) -> Self {
        Self {
            x_left,
            x_right,
            y_top,
            y_bottom,
        }
    }

    /// Whether `x_left <= x_right <= width` and `y_top <= y_bottom <= height`.
    pub const fn fits(&self, width: u32, height: u32) -> bool {
        self.x_left <= self.x_right
            && self.x_right <= width
            && self.y_top <= self.y_bottom
            && self.y_bottom <= height
    }

    /// Only meaningful once [`Rectangle::fits`] holds.
    pub const fn width(&self) -> u32 {
        self.x_right.saturating_sub(self.x_left)
    }

    pub const fn height(&self) -> u32 {
        self.y_bottom.saturating_sub(self.y_top)
    }
}

/// One editing step. A closed set; front ends pick one by value rather than
/// looking anything up by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    Grayscale,
    ShiftColor(ColorAdjustment),
    MirrorVertical,
    MirrorHorizontal,
    Crop(Rectangle),
    Thumbnail { max_width: u32 },
}

impl Operation {
    /// Short label for logs and status text.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Grayscale => "grayscale",
            Self::ShiftColor(_) => "shift color",
            Self::MirrorVertical => "mirror vertical",
            Self::MirrorHorizontal => "mirror horizontal",
            Self::Crop(_) => "crop",
            Self::Thumbnail { .. } => "thumbnail",
        }
    }

    /// Whether the output can have different dimensions than the input.
    pub const fn changes_shape(&self) -> bool {
        matches!(self, Self::Crop(_) | Self::Thumbnail { .. })
    }
}
