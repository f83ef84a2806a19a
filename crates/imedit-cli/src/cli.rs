use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use imedit_core::{ColorAdjustment, Operation, Rectangle};

#[derive(Parser)]
#[command(name = "imedit")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Apply simple edits to image files", long_about = None)]
pub struct Cli {
    /// Enable debug output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Source and destination of a single edit.
#[derive(Args)]
pub struct Files {
    pub input: PathBuf,
    pub output: PathBuf,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert to grayscale (alpha becomes opaque)
    Grayscale {
        #[command(flatten)]
        files: Files,
    },

    /// Add a per-channel offset, clamped to 0..=255
    Shift {
        #[arg(short, long, default_value = "0", allow_negative_numbers = true)]
        red: i32,

        #[arg(short, long, default_value = "0", allow_negative_numbers = true)]
        green: i32,

        #[arg(short, long, default_value = "0", allow_negative_numbers = true)]
        blue: i32,

        #[command(flatten)]
        files: Files,
    },

    /// Flip left to right
    MirrorVertical {
        #[command(flatten)]
        files: Files,
    },

    /// Flip top to bottom
    MirrorHorizontal {
        #[command(flatten)]
        files: Files,
    },

    /// Keep only the given region (right and bottom edges exclusive)
    Crop {
        #[arg(long)]
        x_left: u32,

        #[arg(long)]
        x_right: u32,

        #[arg(long)]
        y_top: u32,

        #[arg(long)]
        y_bottom: u32,

        #[command(flatten)]
        files: Files,
    },

    /// Scale down to a fixed width, keeping the aspect ratio
    Thumbnail {
        /// Defaults to IMEDIT_THUMBNAIL_WIDTH, or 64
        #[arg(short, long)]
        width: Option<u32>,

        #[command(flatten)]
        files: Files,
    },

    /// Apply a JSON list of operations in order
    Pipeline {
        #[arg(long)]
        ops: PathBuf,

        #[command(flatten)]
        files: Files,
    },

    /// Print the size an image would be displayed at inside a container
    Fit {
        container_width: u32,
        container_height: u32,
        input: PathBuf,
    },
}

impl Commands {
    /// The single operation this command stands for, if any.
    ///
    /// `pipeline` and `fit` return `None`; they are handled separately.
    pub fn operation(&self, default_thumbnail_width: u32) -> Option<Operation> {
        let op = match self {
            Self::Grayscale { .. } => Operation::Grayscale,
            Self::Shift {
                red, green, blue, ..
            } => Operation::ShiftColor(ColorAdjustment::rgb(*red, *green, *blue)),
            Self::MirrorVertical { .. } => Operation::MirrorVertical,
            Self::MirrorHorizontal { .. } => Operation::MirrorHorizontal,
            Self::Crop {
                x_left,
                x_right,
                y_top,
                y_bottom,
                ..
            } => Operation::Crop(Rectangle::new(*x_left, *x_right, *y_top, *y_bottom)),
            Self::Thumbnail { width, .. } => Operation::Thumbnail {
                max_width: width.unwrap_or(default_thumbnail_width),
            },
            Self::Pipeline { .. } | Self::Fit { .. } => return None,
        };
        Some(op)
    }

    pub fn files(&self) -> Option<&Files> {
        match self {
            Self::Grayscale { files }
            | Self::Shift { files, .. }
            | Self::MirrorVertical { files }
            | Self::MirrorHorizontal { files }
            | Self::Crop { files, .. }
            | Self::Thumbnail { files, .. }
            | Self::Pipeline { files, .. } => Some(files),
            Self::Fit { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_shift_accepts_negative() {
        let cli = Cli::try_parse_from([
            "imedit", "shift", "--red", "10", "--green", "-10", "in.png", "out.png",
        ])
        .unwrap();
        assert_eq!(
            cli.command.operation(64),
            Some(Operation::ShiftColor(ColorAdjustment::rgb(10, -10, 0)))
        );
    }

    #[test]
    fn test_thumbnail_default_width() {
        let cli = Cli::try_parse_from(["imedit", "thumbnail", "a.png", "b.png"]).unwrap();
        assert_eq!(
            cli.command.operation(32),
            Some(Operation::Thumbnail { max_width: 32 })
        );
        assert_eq!(cli.command.files().unwrap().output, PathBuf::from("b.png"));
    }

    #[test]
    fn test_crop_args() {
        let cli = Cli::try_parse_from([
            "imedit", "crop", "--x-left", "1", "--x-right", "3", "--y-top", "0", "--y-bottom",
            "2", "a.png", "b.png",
        ])
        .unwrap();
        assert_eq!(
            cli.command.operation(64),
            Some(Operation::Crop(Rectangle::new(1, 3, 0, 2)))
        );
    }

    #[test]
    fn test_fit_has_no_operation() {
        let cli = Cli::try_parse_from(["imedit", "fit", "800", "600", "a.png"]).unwrap();
        assert!(cli.command.operation(64).is_none());
        assert!(cli.command.files().is_none());
    }
}
