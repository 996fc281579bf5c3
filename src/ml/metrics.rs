//! Evaluation metrics for classification

use ndarray::Array1;

/// Metrics calculator
pub struct Metrics;

impl Metrics {
    /// Calculate accuracy: (correct predictions) / (total predictions)
    pub fn accuracy(y_true: &Array1<f64>, y_pred: &Array1<f64>) -> f64 {
        assert_eq!(y_true.len(), y_pred.len(), "Arrays must have same length");

        if y_true.is_empty() {
            return 0.0;
        }

        let correct = y_true
            .iter()
            .zip(y_pred.iter())
            .filter(|(t, p)| (*t - *p).abs() < 1e-10)
            .count();

        correct as f64 / y_true.len() as f64
    }

    /// Calculate error rate: 1 - accuracy
    pub fn error_rate(y_true: &Array1<f64>, y_pred: &Array1<f64>) -> f64 {
        1.0 - Self::accuracy(y_true, y_pred)
    }
}
