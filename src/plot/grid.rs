//! Grid rendering for collections of digits
//!
//! Lays out N digits in a near-square grid of cells (or a caller-supplied
//! shape), renders each record into its own cell, and leaves leftover cells
//! blank. A secure cap refuses to render more than [`MAX_DIGITS`] digits
//! unless explicitly disabled.

use image::GrayImage;
use image::Luma;
use ndarray::ArrayView2;
use tracing::debug;

use super::{inverted_shade, reshape_square, value_range, PlotError, PlotResult, BACKGROUND};
use crate::data::DigitSource;

/// Maximum digits the secure cap allows in a single grid.
pub const MAX_DIGITS: usize = 100;

/// Default figure budget, in abstract inches, when no size is given.
const DEFAULT_SIZE: f64 = 8.0;

/// Pixels per figure inch.
const DEFAULT_DPI: f64 = 100.0;

/// Physical figure dimensions.
///
/// `Scalar` sizing derives width and height from the grid's aspect ratio
/// (rows/cols): width is `s / ratio` and height `s * ratio`. `Pair` is taken
/// as (height, width) and used as-is; note the two branches order the axes
/// differently.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum FigureSize {
    /// No explicit size; a scalar budget of 8 is used.
    #[default]
    Auto,
    /// A single budget split across both axes by the grid's aspect ratio.
    Scalar(f64),
    /// Explicit (height, width) in figure inches.
    Pair { height: f64, width: f64 },
}

/// Find the near-square (rows, cols) grid that fits `n` cells.
///
/// Searches increasing i, accepting the square (i, i) when it fits and the
/// one-wider (i, i+1) otherwise, which yields the first acceptable pair in
/// that order. `n <= 1` short-circuits to a 1x1 grid.
pub fn grid_shape(n: usize) -> (usize, usize) {
    if n <= 1 {
        return (1, 1);
    }

    let mut i = 1;
    loop {
        if i * i >= n {
            return (i, i);
        }
        if i * (i + 1) >= n {
            return (i, i + 1);
        }
        i += 1;
    }
}

/// Renders a collection of digits into a single grid image.
///
/// Cells are filled in source iteration order; each digit is reshaped into
/// a square, normalized, inverted, and scaled to fit its cell. Cells beyond
/// the collection's length stay background white.
#[derive(Debug, Clone)]
pub struct GridRenderer {
    size: FigureSize,
    shape: Option<(usize, usize)>,
    secure: bool,
    dpi: f64,
}

impl GridRenderer {
    /// Create a renderer with automatic layout, automatic sizing, and the
    /// secure cap enabled.
    pub fn new() -> Self {
        Self {
            size: FigureSize::Auto,
            shape: None,
            secure: true,
            dpi: DEFAULT_DPI,
        }
    }

    /// Set the figure size.
    pub fn with_size(mut self, size: FigureSize) -> Self {
        self.size = size;
        self
    }

    /// Override the automatic layout with an explicit (rows, cols) shape.
    pub fn with_shape(mut self, rows: usize, cols: usize) -> Self {
        self.shape = Some((rows, cols));
        self
    }

    /// Enable or disable the secure digit-count cap.
    pub fn with_secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    /// Set the pixels-per-inch conversion used for the output image.
    pub fn with_dpi(mut self, dpi: f64) -> Self {
        self.dpi = dpi.max(1.0);
        self
    }

    /// Render the collection into a grayscale grid image.
    pub fn render<S: DigitSource>(&self, digits: &S) -> PlotResult<GrayImage> {
        let n = digits.len();
        if self.secure && n > MAX_DIGITS {
            return Err(PlotError::TooManyDigits {
                got: n,
                max: MAX_DIGITS,
            });
        }

        let (rows, cols, size) = match self.shape {
            None => {
                let (rows, cols) = grid_shape(n);
                (rows, cols, self.size)
            }
            Some((rows, cols)) => {
                if rows * cols < n {
                    return Err(PlotError::GridTooSmall { rows, cols, n });
                }
                // An explicit shape coerces any non-scalar size to the
                // shape itself, read as (height, width).
                let size = match self.size {
                    FigureSize::Scalar(s) => FigureSize::Scalar(s),
                    _ => FigureSize::Pair {
                        height: rows as f64,
                        width: cols as f64,
                    },
                };
                (rows.max(1), cols.max(1), size)
            }
        };

        let ratio = rows as f64 / cols as f64;
        let (height_in, width_in) = match size {
            FigureSize::Auto => (DEFAULT_SIZE * ratio, DEFAULT_SIZE / ratio),
            FigureSize::Scalar(s) => (s * ratio, s / ratio),
            FigureSize::Pair { height, width } => (height, width),
        };

        let img_w = ((width_in * self.dpi).round() as u32).max(1);
        let img_h = ((height_in * self.dpi).round() as u32).max(1);
        debug!(
            "rendering {} digits into a {}x{} grid ({}x{} px)",
            n, rows, cols, img_w, img_h
        );

        let mut img = GrayImage::from_pixel(img_w, img_h, BACKGROUND);
        let cell_w = img_w as f64 / cols as f64;
        let cell_h = img_h as f64 / rows as f64;

        for idx in 0..n {
            let digit = digits.digit(idx);
            let square = reshape_square(&digit)?;

            let row = idx / cols;
            let col = idx % cols;

            // Square patch, centered in the cell.
            let patch = cell_w.min(cell_h).floor().max(1.0) as u32;
            let x0 = (col as f64 * cell_w + (cell_w - patch as f64) / 2.0) as u32;
            let y0 = (row as f64 * cell_h + (cell_h - patch as f64) / 2.0) as u32;

            draw_digit(&mut img, square.view(), x0, y0, patch);
        }

        Ok(img)
    }
}

impl Default for GridRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Blit a square digit matrix into the image, nearest-neighbor scaled to a
/// `patch`-sided square at (x0, y0).
fn draw_digit(img: &mut GrayImage, square: ArrayView2<'_, f64>, x0: u32, y0: u32, patch: u32) {
    let side = square.nrows();
    if side == 0 {
        return;
    }
    let (min, span) = value_range(square.iter());
    let (img_w, img_h) = (img.width(), img.height());

    for dy in 0..patch {
        for dx in 0..patch {
            let px = x0 + dx;
            let py = y0 + dy;
            if px >= img_w || py >= img_h {
                continue;
            }
            let sy = (dy as usize * side) / patch as usize;
            let sx = (dx as usize * side) / patch as usize;
            let shade = inverted_shade(square[[sy, sx]], min, span);
            img.put_pixel(px, py, Luma([shade]));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array2;

    /// n rows of a 2x2 digit with a dark lower-right pixel.
    fn sample_digits(n: usize) -> Array2<f64> {
        let mut digits = Array2::zeros((n, 4));
        for mut row in digits.rows_mut() {
            row[3] = 1.0;
        }
        digits
    }

    #[test]
    fn test_grid_shape_small_counts() {
        assert_eq!(grid_shape(0), (1, 1));
        assert_eq!(grid_shape(1), (1, 1));
        assert_eq!(grid_shape(2), (1, 2));
        assert_eq!(grid_shape(3), (2, 2));
        assert_eq!(grid_shape(4), (2, 2));
        assert_eq!(grid_shape(5), (2, 3));
        assert_eq!(grid_shape(12), (3, 4));
        assert_eq!(grid_shape(100), (10, 10));
    }

    #[test]
    fn test_grid_shape_fits_and_is_first_in_search_order() {
        for n in 1..=100 {
            let (rows, cols) = grid_shape(n);
            assert!(rows * cols >= n, "{}x{} cannot fit {}", rows, cols, n);

            // No earlier candidate in the square-then-wider search order fits.
            for i in 1..rows {
                assert!(i * i < n);
                assert!(i * (i + 1) < n);
            }
            if cols == rows + 1 {
                assert!(rows * rows < n);
            }
        }
    }

    #[test]
    fn test_secure_cap_rejects_101_digits() {
        let digits = sample_digits(101);
        let err = GridRenderer::new().render(&digits).unwrap_err();
        assert!(matches!(
            err,
            PlotError::TooManyDigits { got: 101, max: 100 }
        ));
    }

    #[test]
    fn test_insecure_renders_101_digits() {
        let digits = sample_digits(101);
        let img = GridRenderer::new()
            .with_secure(false)
            .render(&digits)
            .unwrap();
        assert!(img.width() > 0 && img.height() > 0);
    }

    #[test]
    fn test_undersized_explicit_shape_fails() {
        let digits = sample_digits(5);
        let err = GridRenderer::new().with_shape(2, 2).render(&digits).unwrap_err();
        assert!(matches!(
            err,
            PlotError::GridTooSmall {
                rows: 2,
                cols: 2,
                n: 5
            }
        ));
    }

    #[test]
    fn test_auto_size_square_grid_dimensions() {
        // 4 digits -> 2x2 grid, ratio 1: default budget 8 -> 800x800 px.
        let digits = sample_digits(4);
        let img = GridRenderer::new().render(&digits).unwrap();
        assert_eq!(img.width(), 800);
        assert_eq!(img.height(), 800);
    }

    #[test]
    fn test_scalar_size_uses_aspect_ratio() {
        // 2 digits -> 1x2 grid, ratio 0.5: width 4/0.5 = 8in, height 2in.
        let digits = sample_digits(2);
        let img = GridRenderer::new()
            .with_size(FigureSize::Scalar(4.0))
            .render(&digits)
            .unwrap();
        assert_eq!(img.width(), 800);
        assert_eq!(img.height(), 200);
    }

    #[test]
    fn test_pair_size_is_height_width() {
        let digits = sample_digits(2);
        let img = GridRenderer::new()
            .with_size(FigureSize::Pair {
                height: 2.0,
                width: 4.0,
            })
            .render(&digits)
            .unwrap();
        assert_eq!(img.width(), 400);
        assert_eq!(img.height(), 200);
    }

    #[test]
    fn test_explicit_shape_coerces_auto_size() {
        // Shape (1, 2) with a non-scalar size becomes Pair(1, 2): 200x100 px.
        let digits = sample_digits(2);
        let img = GridRenderer::new()
            .with_shape(1, 2)
            .render(&digits)
            .unwrap();
        assert_eq!(img.width(), 200);
        assert_eq!(img.height(), 100);
    }

    #[test]
    fn test_explicit_shape_keeps_scalar_size() {
        // Shape (1, 2), scalar 3: ratio 0.5 -> width 6in, height 1.5in.
        let digits = sample_digits(2);
        let img = GridRenderer::new()
            .with_shape(1, 2)
            .with_size(FigureSize::Scalar(3.0))
            .render(&digits)
            .unwrap();
        assert_eq!(img.width(), 600);
        assert_eq!(img.height(), 150);
    }

    #[test]
    fn test_leftover_cells_stay_blank() {
        // 3 digits in a 2x2 grid: the bottom-right cell has no digit.
        let digits = sample_digits(3);
        let img = GridRenderer::new().render(&digits).unwrap();
        let (w, h) = (img.width(), img.height());

        for y in h / 2..h {
            for x in w / 2..w {
                assert_eq!(img.get_pixel(x, y).0[0], 255);
            }
        }

        // The first cell did render a dark pixel.
        let dark = (0..h / 2)
            .flat_map(|y| (0..w / 2).map(move |x| (x, y)))
            .any(|(x, y)| img.get_pixel(x, y).0[0] == 0);
        assert!(dark);
    }

    #[test]
    fn test_table_and_array_render_identically() {
        use crate::data::DigitTable;

        let digits = sample_digits(4);
        let table = DigitTable::new(
            (0..4).map(|i| format!("digit{}", i)).collect(),
            digits.clone(),
        );

        let renderer = GridRenderer::new().with_size(FigureSize::Scalar(1.0));
        let from_array = renderer.render(&digits).unwrap();
        let from_table = renderer.render(&table).unwrap();

        assert_eq!(from_array.as_raw(), from_table.as_raw());
    }

    #[test]
    fn test_non_square_record_surfaces_shape_error() {
        let digits = Array2::zeros((2, 3));
        let err = GridRenderer::new().render(&digits).unwrap_err();
        assert!(matches!(err, PlotError::NotSquare { len: 3 }));
    }

    #[test]
    fn test_empty_collection_renders_single_blank_cell() {
        let digits = Array2::zeros((0, 4));
        let img = GridRenderer::new().render(&digits).unwrap();
        assert!(img.pixels().all(|p| p.0[0] == 255));
    }
}
