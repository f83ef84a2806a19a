#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransformError {
    #[error("sample buffer has {actual} bytes, expected {expected} for the given dimensions")]
    ShapeMismatch { expected: usize, actual: usize },
    #[error(
        "region x {x_left}..{x_right}, y {y_top}..{y_bottom} does not fit a {width}x{height} image"
    )]
    OutOfBounds {
        x_left: u32,
        x_right: u32,
        y_top: u32,
        y_bottom: u32,
        width: u32,
        height: u32,
    },
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
