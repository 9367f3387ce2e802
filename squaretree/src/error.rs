use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SquareTreeError {
    #[error("min size must be a finite, positive power of two (min_size: {min_size})")]
    InvalidMinSize { min_size: f64 },

    #[error(
        "size must be a finite power of two no smaller than min size (size: {size}, min_size: {min_size})"
    )]
    InvalidSize { size: f64, min_size: f64 },

    #[error("origin must be finite (x: {x}, y: {y})")]
    InvalidOrigin { x: f64, y: f64 },

    #[error("max stack size must be at least 1")]
    InvalidMaxStackSize,

    #[error("point coordinates must be finite (x: {x}, y: {y})")]
    InvalidCoordinates { x: f64, y: f64 },

    #[error("bounding square overflowed while growing to fit (x: {x}, y: {y})")]
    BoundsOverflow { x: f64, y: f64 },
}

pub type SquareTreeResult<T> = Result<T, SquareTreeError>;
