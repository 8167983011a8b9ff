use thiserror::Error;

/// Top-level error type for the planar geometry toolkit.
#[derive(Debug, Error)]
pub enum PlanarError {
    #[error(transparent)]
    Matrix(#[from] MatrixError),
}

/// Errors related to grid access.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum MatrixError {
    #[error("point ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: f64,
        y: f64,
        width: usize,
        height: usize,
    },
}

/// Convenience type alias for results using [`PlanarError`].
pub type Result<T> = std::result::Result<T, PlanarError>;
