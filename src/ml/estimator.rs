//! The estimator capability seam
//!
//! Any classifier exposing fit/predict plus a display name can be
//! benchmarked; the benchmark runner never looks past this trait.

use ndarray::{Array1, Array2};

/// Type-erased estimator failure.
///
/// Errors cross the benchmark boundary unmodified; no wrapping, no retry.
pub type EstimatorError = Box<dyn std::error::Error + Send + Sync>;

/// A classifier that can be fitted to labeled data and then predict labels.
pub trait Estimator {
    /// Human-readable label, used as the results-table row key.
    fn name(&self) -> &str;

    /// Fit on training data, mutating internal state in place.
    fn fit(&mut self, x: &Array2<f64>, y: &Array1<f64>) -> Result<(), EstimatorError>;

    /// Predict labels for the given samples.
    fn predict(&self, x: &Array2<f64>) -> Result<Array1<f64>, EstimatorError>;
}
