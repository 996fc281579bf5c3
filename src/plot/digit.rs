//! Single digit rendering

use image::{GrayImage, Luma};
use ndarray::ArrayView1;

use super::{inverted_shade, reshape_square, value_range, PlotResult};

/// Renders one flattened digit record as an inverted grayscale image.
///
/// The record is reshaped row-major into a square matrix; a length that is
/// not a perfect square fails with [`super::PlotError::NotSquare`]. The
/// output carries no axis decorations of any kind, just pixels.
#[derive(Debug, Clone)]
pub struct DigitRenderer {
    scale: u32,
}

impl DigitRenderer {
    /// Create a renderer with the default scale of 10 output pixels per
    /// source pixel (280x280 for a 784-length MNIST record).
    pub fn new() -> Self {
        Self { scale: 10 }
    }

    /// Set the number of output pixels per source pixel.
    pub fn with_scale(mut self, scale: u32) -> Self {
        self.scale = scale.max(1);
        self
    }

    /// Render a record into a grayscale image.
    pub fn render(&self, digit: ArrayView1<'_, f64>) -> PlotResult<GrayImage> {
        let square = reshape_square(&digit)?;
        let side = square.nrows();
        let (min, span) = value_range(square.iter());

        let px = side as u32 * self.scale;
        let mut img = GrayImage::new(px, px);

        for y in 0..px {
            for x in 0..px {
                let sy = (y / self.scale) as usize;
                let sx = (x / self.scale) as usize;
                let shade = inverted_shade(square[[sy, sx]], min, span);
                img.put_pixel(x, y, Luma([shade]));
            }
        }

        Ok(img)
    }
}

impl Default for DigitRenderer {
    fn default() -> Self {
        Self::new()
    }
}
