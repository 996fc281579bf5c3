//! Reference estimators
//!
//! Cheap classifiers that give benchmarks a floor to compare against.

use ndarray::{Array1, Array2};
use std::collections::HashMap;

use super::error::ModelError;
use super::estimator::{Estimator, EstimatorError};
use super::knn::DistanceMetric;

/// Nearest-centroid classifier: one centroid per class, samples take the
/// label of the closest centroid.
#[derive(Debug, Clone)]
pub struct NearestCentroid {
    metric: DistanceMetric,
    centroids: Vec<(f64, Array1<f64>)>,
}

impl NearestCentroid {
    /// Create an unfitted nearest-centroid classifier.
    pub fn new() -> Self {
        Self {
            metric: DistanceMetric::Euclidean,
            centroids: Vec::new(),
        }
    }

    /// Set the distance metric
    pub fn with_metric(mut self, metric: DistanceMetric) -> Self {
        self.metric = metric;
        self
    }

    /// Compute per-class mean vectors.
    pub fn fit(&mut self, x: &Array2<f64>, y: &Array1<f64>) -> Result<(), ModelError> {
        if x.nrows() != y.len() {
            return Err(ModelError::SampleMismatch {
                x_rows: x.nrows(),
                y_len: y.len(),
            });
        }

        let mut sums: HashMap<i64, (Array1<f64>, usize)> = HashMap::new();
        for (row, &label) in x.rows().into_iter().zip(y.iter()) {
            let entry = sums
                .entry(label as i64)
                .or_insert_with(|| (Array1::zeros(x.ncols()), 0));
            entry.0 += &row;
            entry.1 += 1;
        }

        let mut centroids: Vec<(f64, Array1<f64>)> = sums
            .into_iter()
            .map(|(label, (sum, count))| (label as f64, sum / count as f64))
            .collect();
        centroids.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

        self.centroids = centroids;
        Ok(())
    }

    /// Predict the label of the closest centroid for each sample.
    pub fn predict(&self, x: &Array2<f64>) -> Result<Array1<f64>, ModelError> {
        if self.centroids.is_empty() {
            return Err(ModelError::NotFitted);
        }

        let expected = self.centroids[0].1.len();
        if x.ncols() != expected {
            return Err(ModelError::FeatureMismatch {
                expected,
                got: x.ncols(),
            });
        }

        let predictions = x
            .rows()
            .into_iter()
            .map(|sample| {
                let sample = sample.to_vec();
                self.centroids
                    .iter()
                    .map(|(label, centroid)| {
                        (*label, self.metric.distance(&sample, &centroid.to_vec()))
                    })
                    .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
                    .map(|(label, _)| label)
                    .unwrap_or(0.0)
            })
            .collect();

        Ok(Array1::from_vec(predictions))
    }
}

impl Default for NearestCentroid {
    fn default() -> Self {
        Self::new()
    }
}

impl Estimator for NearestCentroid {
    fn name(&self) -> &str {
        "NearestCentroid"
    }

    fn fit(&mut self, x: &Array2<f64>, y: &Array1<f64>) -> Result<(), EstimatorError> {
        NearestCentroid::fit(self, x, y).map_err(EstimatorError::from)
    }

    fn predict(&self, x: &Array2<f64>) -> Result<Array1<f64>, EstimatorError> {
        NearestCentroid::predict(self, x).map_err(EstimatorError::from)
    }
}

/// Majority-class baseline: always predicts the most frequent training
/// label, ignoring features.
#[derive(Debug, Clone, Default)]
pub struct MajorityClass {
    majority: Option<f64>,
}

impl MajorityClass {
    /// Create an unfitted majority-class baseline.
    pub fn new() -> Self {
        Self { majority: None }
    }

    /// Record the most frequent training label.
    pub fn fit(&mut self, x: &Array2<f64>, y: &Array1<f64>) -> Result<(), ModelError> {
        if x.nrows() != y.len() {
            return Err(ModelError::SampleMismatch {
                x_rows: x.nrows(),
                y_len: y.len(),
            });
        }

        let mut counts: HashMap<i64, usize> = HashMap::new();
        for &label in y.iter() {
            *counts.entry(label as i64).or_insert(0) += 1;
        }

        self.majority = counts
            .into_iter()
            .max_by_key(|&(label, count)| (count, std::cmp::Reverse(label)))
            .map(|(label, _)| label as f64);

        Ok(())
    }

    /// Predict the majority label for every sample.
    pub fn predict(&self, x: &Array2<f64>) -> Result<Array1<f64>, ModelError> {
        let majority = self.majority.ok_or(ModelError::NotFitted)?;
        Ok(Array1::from_elem(x.nrows(), majority))
    }
}

impl Estimator for MajorityClass {
    fn name(&self) -> &str {
        "MajorityClass"
    }

    fn fit(&mut self, x: &Array2<f64>, y: &Array1<f64>) -> Result<(), EstimatorError> {
        MajorityClass::fit(self, x, y).map_err(EstimatorError::from)
    }

    fn predict(&self, x: &Array2<f64>) -> Result<Array1<f64>, EstimatorError> {
        MajorityClass::predict(self, x).map_err(EstimatorError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_nearest_centroid_separates_clusters() {
        let x_train = array![[0.0, 0.0], [0.0, 1.0], [10.0, 10.0], [10.0, 11.0]];
        let y_train = array![0.0, 0.0, 1.0, 1.0];

        let mut model = NearestCentroid::new();
        model.fit(&x_train, &y_train).unwrap();

        let predictions = model.predict(&array![[1.0, 1.0], [9.0, 9.0]]).unwrap();
        assert_eq!(predictions[0], 0.0);
        assert_eq!(predictions[1], 1.0);
    }

    #[test]
    fn test_nearest_centroid_unfitted_fails() {
        let model = NearestCentroid::new();
        assert!(matches!(
            model.predict(&array![[0.0]]).unwrap_err(),
            ModelError::NotFitted
        ));
    }

    #[test]
    fn test_majority_class_picks_mode() {
        let x = array![[0.0], [0.0], [0.0], [0.0]];
        let y = array![1.0, 2.0, 2.0, 0.0];

        let mut model = MajorityClass::new();
        model.fit(&x, &y).unwrap();

        let predictions = model.predict(&array![[5.0], [6.0]]).unwrap();
        assert_eq!(predictions, array![2.0, 2.0]);
    }

    #[test]
    fn test_majority_class_tie_prefers_smaller_label() {
        let x = array![[0.0], [0.0]];
        let y = array![3.0, 1.0];

        let mut model = MajorityClass::new();
        model.fit(&x, &y).unwrap();

        assert_eq!(model.predict(&array![[0.0]]).unwrap()[0], 1.0);
    }
}
