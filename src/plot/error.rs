//! Plotting error types

use thiserror::Error;

/// Errors that can occur while rendering digits
#[derive(Error, Debug)]
pub enum PlotError {
    #[error("too many digits to plot: got {got}, maximum is {max} (disable the secure cap to override)")]
    TooManyDigits { got: usize, max: usize },

    #[error("digit record has {len} pixels, which is not a perfect square")]
    NotSquare { len: usize },

    #[error("reshape failed: {0}")]
    Shape(#[from] ndarray::ShapeError),

    #[error("a {rows}x{cols} grid cannot hold {n} digits")]
    GridTooSmall { rows: usize, cols: usize, n: usize },
}

/// Result type alias for plotting operations
pub type PlotResult<T> = Result<T, PlotError>;
