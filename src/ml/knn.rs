//! K-Nearest Neighbors classifier
//!
//! A simple yet effective algorithm that classifies a sample by majority
//! vote among the k closest training examples.

use ndarray::{Array1, Array2};
use std::collections::HashMap;

use super::error::ModelError;
use super::estimator::{Estimator, EstimatorError};

/// Distance metric for KNN
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistanceMetric {
    /// Euclidean distance (L2)
    Euclidean,
    /// Manhattan distance (L1)
    Manhattan,
}

impl DistanceMetric {
    pub(crate) fn distance(&self, a: &[f64], b: &[f64]) -> f64 {
        match self {
            DistanceMetric::Euclidean => a
                .iter()
                .zip(b.iter())
                .map(|(x, y)| (x - y).powi(2))
                .sum::<f64>()
                .sqrt(),
            DistanceMetric::Manhattan => {
                a.iter().zip(b.iter()).map(|(x, y)| (x - y).abs()).sum()
            }
        }
    }
}

/// Neighbor weighting scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightScheme {
    /// All neighbors have equal weight
    Uniform,
    /// Weight by inverse of distance
    Distance,
}

/// KNN Classifier
#[derive(Debug, Clone)]
pub struct KnnClassifier {
    k: usize,
    metric: DistanceMetric,
    weights: WeightScheme,
    x_train: Option<Array2<f64>>,
    y_train: Option<Array1<f64>>,
}

impl KnnClassifier {
    /// Create a new KNN classifier considering `k` neighbors.
    pub fn new(k: usize) -> Self {
        Self {
            k: k.max(1),
            metric: DistanceMetric::Euclidean,
            weights: WeightScheme::Uniform,
            x_train: None,
            y_train: None,
        }
    }

    /// Set the distance metric
    pub fn with_metric(mut self, metric: DistanceMetric) -> Self {
        self.metric = metric;
        self
    }

    /// Set the weighting scheme
    pub fn with_weights(mut self, weights: WeightScheme) -> Self {
        self.weights = weights;
        self
    }

    /// Get the number of neighbors
    pub fn k(&self) -> usize {
        self.k
    }

    /// Fit the classifier by memorizing the training data.
    pub fn fit(&mut self, x: &Array2<f64>, y: &Array1<f64>) -> Result<(), ModelError> {
        if x.nrows() != y.len() {
            return Err(ModelError::SampleMismatch {
                x_rows: x.nrows(),
                y_len: y.len(),
            });
        }
        self.x_train = Some(x.clone());
        self.y_train = Some(y.clone());
        Ok(())
    }

    /// Predict class labels for samples.
    pub fn predict(&self, x: &Array2<f64>) -> Result<Array1<f64>, ModelError> {
        let x_train = self.x_train.as_ref().ok_or(ModelError::NotFitted)?;
        let y_train = self.y_train.as_ref().ok_or(ModelError::NotFitted)?;

        if x.ncols() != x_train.ncols() {
            return Err(ModelError::FeatureMismatch {
                expected: x_train.ncols(),
                got: x.ncols(),
            });
        }

        let mut predictions = Vec::with_capacity(x.nrows());

        for sample in x.rows() {
            let sample = sample.to_vec();

            // Distances to all training points
            let mut distances: Vec<(usize, f64)> = x_train
                .rows()
                .into_iter()
                .enumerate()
                .map(|(i, train_sample)| {
                    (i, self.metric.distance(&sample, &train_sample.to_vec()))
                })
                .collect();

            distances.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

            let neighbors: Vec<(usize, f64)> = distances.into_iter().take(self.k).collect();

            let prediction = match self.weights {
                WeightScheme::Distance => Self::weighted_vote(&neighbors, y_train),
                WeightScheme::Uniform => Self::uniform_vote(&neighbors, y_train),
            };

            predictions.push(prediction);
        }

        Ok(Array1::from_vec(predictions))
    }

    /// Uniform voting (majority vote)
    fn uniform_vote(neighbors: &[(usize, f64)], y_train: &Array1<f64>) -> f64 {
        let mut votes: HashMap<i64, usize> = HashMap::new();

        for (idx, _) in neighbors {
            let label = y_train[*idx] as i64;
            *votes.entry(label).or_insert(0) += 1;
        }

        votes
            .into_iter()
            .max_by_key(|&(label, count)| (count, std::cmp::Reverse(label)))
            .map(|(label, _)| label as f64)
            .unwrap_or(0.0)
    }

    /// Distance-weighted voting
    fn weighted_vote(neighbors: &[(usize, f64)], y_train: &Array1<f64>) -> f64 {
        let mut votes: HashMap<i64, f64> = HashMap::new();

        for (idx, dist) in neighbors {
            let label = y_train[*idx] as i64;
            let weight = if *dist > 0.0 { 1.0 / dist } else { 1e10 };
            *votes.entry(label).or_insert(0.0) += weight;
        }

        votes
            .into_iter()
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(label, _)| label as f64)
            .unwrap_or(0.0)
    }
}

impl Estimator for KnnClassifier {
    fn name(&self) -> &str {
        "KnnClassifier"
    }

    fn fit(&mut self, x: &Array2<f64>, y: &Array1<f64>) -> Result<(), EstimatorError> {
        KnnClassifier::fit(self, x, y).map_err(EstimatorError::from)
    }

    fn predict(&self, x: &Array2<f64>) -> Result<Array1<f64>, EstimatorError> {
        KnnClassifier::predict(self, x).map_err(EstimatorError::from)
    }
}
