//! Multi-estimator benchmarking
//!
//! Fits a list of estimators on the same train/test split, timing each fit
//! and scoring train/test accuracy into an ordered results table.

use ndarray::{Array1, Array2};
use std::fmt;
use std::time::{Duration, Instant};
use tracing::info;

use super::estimator::{Estimator, EstimatorError};
use super::metrics::Metrics;

/// One benchmark row: a single estimator's scores and fit duration.
#[derive(Debug, Clone)]
pub struct BenchmarkRecord {
    /// Estimator display name
    pub name: String,
    /// Fraction of training labels predicted exactly
    pub train_accuracy: f64,
    /// Fraction of test labels predicted exactly
    pub test_accuracy: f64,
    /// Wall-clock duration of the fit call
    pub fit_time: Duration,
}

/// Benchmark results, one row per estimator in input order.
///
/// A duplicate display name overwrites the earlier row in place, keeping
/// its position; there is no collision detection.
#[derive(Debug, Clone, Default)]
pub struct BenchmarkResults {
    rows: Vec<BenchmarkRecord>,
}

impl BenchmarkResults {
    /// Create an empty results table.
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Number of rows in the table.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows in insertion order.
    pub fn rows(&self) -> &[BenchmarkRecord] {
        &self.rows
    }

    /// Look up a row by estimator name.
    pub fn get(&self, name: &str) -> Option<&BenchmarkRecord> {
        self.rows.iter().find(|row| row.name == name)
    }

    /// Iterate over rows in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &BenchmarkRecord> {
        self.rows.iter()
    }

    fn insert(&mut self, record: BenchmarkRecord) {
        match self.rows.iter().position(|row| row.name == record.name) {
            Some(idx) => self.rows[idx] = record,
            None => self.rows.push(record),
        }
    }
}

impl fmt::Display for BenchmarkResults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<24} {:>12} {:>12} {:>12}",
            "Estimator", "Train Acc", "Test Acc", "Fit Time"
        )?;
        writeln!(f, "{:-<62}", "")?;
        for row in &self.rows {
            writeln!(
                f,
                "{:<24} {:>12.4} {:>12.4} {:>10.2}ms",
                row.name,
                row.train_accuracy,
                row.test_accuracy,
                row.fit_time.as_secs_f64() * 1000.0
            )?;
        }
        Ok(())
    }
}

/// Fit and score each estimator on the given train/test split.
///
/// Estimators are mutated in place and end the call fitted. The first
/// fit/predict failure aborts the run and propagates unmodified; rows
/// recorded before the failure are dropped with the call.
pub fn benchmark_estimators(
    estimators: &mut [Box<dyn Estimator>],
    x_train: &Array2<f64>,
    y_train: &Array1<f64>,
    x_test: &Array2<f64>,
    y_test: &Array1<f64>,
) -> Result<BenchmarkResults, EstimatorError> {
    let mut results = BenchmarkResults::new();

    for estimator in estimators.iter_mut() {
        let name = estimator.name().to_string();

        let start = Instant::now();
        estimator.fit(x_train, y_train)?;
        let fit_time = start.elapsed();

        let train_pred = estimator.predict(x_train)?;
        let train_accuracy = Metrics::accuracy(y_train, &train_pred);

        let test_pred = estimator.predict(x_test)?;
        let test_accuracy = Metrics::accuracy(y_test, &test_pred);

        info!(
            "{}: train acc {:.4}, test acc {:.4}, fit {:.2}ms",
            name,
            train_accuracy,
            test_accuracy,
            fit_time.as_secs_f64() * 1000.0
        );

        results.insert(BenchmarkRecord {
            name,
            train_accuracy,
            test_accuracy,
            fit_time,
        });
    }

    Ok(results)
}
