//! Digit rendering
//!
//! Renders flattened digit records as inverted grayscale images, either one
//! at a time ([`DigitRenderer`]) or many into a grid of cells
//! ([`GridRenderer`]). Higher pixel intensities render darker, the usual
//! presentation of MNIST digits on a white background.

mod digit;
mod error;
mod grid;

pub use digit::DigitRenderer;
pub use error::{PlotError, PlotResult};
pub use grid::{grid_shape, FigureSize, GridRenderer, MAX_DIGITS};

use image::Luma;
use ndarray::{ArrayView1, CowArray, Ix2};

/// Cell background and the shade of a zero-intensity pixel.
pub(crate) const BACKGROUND: Luma<u8> = Luma([255]);

/// Reshape a flattened record into a square matrix, row-major.
pub(crate) fn reshape_square<'a>(
    digit: &'a ArrayView1<'_, f64>,
) -> PlotResult<CowArray<'a, f64, Ix2>> {
    let len = digit.len();
    let side = (len as f64).sqrt() as usize;
    if side * side != len {
        return Err(PlotError::NotSquare { len });
    }
    Ok(digit.to_shape((side, side))?)
}

/// Minimum value and span of a record, for per-record normalization.
pub(crate) fn value_range<'a>(values: impl Iterator<Item = &'a f64>) -> (f64, f64) {
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
        (lo.min(v), hi.max(v))
    });
    let span = max - min;
    if span.is_finite() && span > 0.0 {
        (min, span)
    } else {
        (min, 0.0)
    }
}

/// Map a pixel intensity to an inverted 8-bit shade.
///
/// The record's minimum renders white and its maximum black; a constant
/// record (zero span) renders white throughout.
pub(crate) fn inverted_shade(value: f64, min: f64, span: f64) -> u8 {
    if span == 0.0 {
        return 255;
    }
    let normalized = ((value - min) / span).clamp(0.0, 1.0);
    255 - (normalized * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_inverted_shade_endpoints() {
        assert_eq!(inverted_shade(0.0, 0.0, 255.0), 255);
        assert_eq!(inverted_shade(255.0, 0.0, 255.0), 0);
        assert_eq!(inverted_shade(127.5, 0.0, 255.0), 127);
    }

    #[test]
    fn test_constant_record_renders_white() {
        let digits = array![5.0, 5.0, 5.0, 5.0];
        let (min, span) = value_range(digits.iter());
        assert_eq!(span, 0.0);
        assert_eq!(inverted_shade(5.0, min, span), 255);
    }

    #[test]
    fn test_reshape_square() {
        let digit = array![0.0, 1.0, 2.0, 3.0];
        let view = digit.view();
        let square = reshape_square(&view).unwrap();
        assert_eq!(square.nrows(), 2);
        assert_eq!(square[[1, 0]], 2.0);
    }

    #[test]
    fn test_reshape_rejects_non_square_length() {
        let digit = array![0.0, 1.0, 2.0];
        assert!(matches!(
            reshape_square(&digit.view()),
            Err(PlotError::NotSquare { len: 3 })
        ));
    }
}
