//! Machine learning: estimators, metrics, and benchmarking

pub mod baseline;
pub mod benchmark;
pub mod error;
pub mod estimator;
pub mod knn;
pub mod metrics;

pub use baseline::{MajorityClass, NearestCentroid};
pub use benchmark::{benchmark_estimators, BenchmarkRecord, BenchmarkResults};
pub use error::ModelError;
pub use estimator::{Estimator, EstimatorError};
pub use knn::{DistanceMetric, KnnClassifier, WeightScheme};
pub use metrics::Metrics;
