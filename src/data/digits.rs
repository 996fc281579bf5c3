//! Digit collections
//!
//! Rendering accepts any read-only collection of flattened digit records.
//! Two concrete shapes are supported: a plain `Array2<f64>` addressed by
//! row position, and a [`DigitTable`] addressed by string row labels.

use ndarray::{Array2, ArrayView1, ArrayView2};

/// Read-only access to an ordered collection of flattened digit records.
///
/// Each record is one row of pixel intensities; its length must be a
/// perfect square for rendering to succeed.
pub trait DigitSource {
    /// Number of records in the collection.
    fn len(&self) -> usize;

    /// Whether the collection holds no records.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Record at position `idx`, in the collection's iteration order.
    fn digit(&self, idx: usize) -> ArrayView1<'_, f64>;
}

impl DigitSource for Array2<f64> {
    fn len(&self) -> usize {
        self.nrows()
    }

    fn digit(&self, idx: usize) -> ArrayView1<'_, f64> {
        self.row(idx)
    }
}

impl DigitSource for ArrayView2<'_, f64> {
    fn len(&self) -> usize {
        self.nrows()
    }

    fn digit(&self, idx: usize) -> ArrayView1<'_, f64> {
        self.row(idx)
    }
}

/// A table of digit records with string row labels.
///
/// Rows can be looked up by label, and iteration follows index order.
#[derive(Debug, Clone)]
pub struct DigitTable {
    labels: Vec<String>,
    pixels: Array2<f64>,
}

impl DigitTable {
    /// Create a table from a label index and a pixel matrix.
    pub fn new(labels: Vec<String>, pixels: Array2<f64>) -> Self {
        assert_eq!(
            labels.len(),
            pixels.nrows(),
            "label count must match pixel rows"
        );
        Self { labels, pixels }
    }

    /// Build a table from labeled rows. All rows must have the same width.
    pub fn from_rows(rows: Vec<(String, Vec<f64>)>) -> Self {
        let width = rows.first().map_or(0, |(_, values)| values.len());
        let mut labels = Vec::with_capacity(rows.len());
        let mut pixels = Array2::zeros((rows.len(), width));

        for (i, (label, values)) in rows.into_iter().enumerate() {
            assert_eq!(values.len(), width, "all rows must have the same width");
            pixels
                .row_mut(i)
                .iter_mut()
                .zip(values)
                .for_each(|(cell, value)| *cell = value);
            labels.push(label);
        }

        Self { labels, pixels }
    }

    /// Row labels in iteration order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Look up a record by its row label (first match).
    pub fn get(&self, label: &str) -> Option<ArrayView1<'_, f64>> {
        self.labels
            .iter()
            .position(|l| l == label)
            .map(|idx| self.pixels.row(idx))
    }

    /// The underlying pixel matrix.
    pub fn pixels(&self) -> ArrayView2<'_, f64> {
        self.pixels.view()
    }
}

impl DigitSource for DigitTable {
    fn len(&self) -> usize {
        self.pixels.nrows()
    }

    fn digit(&self, idx: usize) -> ArrayView1<'_, f64> {
        self.pixels.row(idx)
    }
}
