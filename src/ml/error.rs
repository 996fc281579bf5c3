//! Estimator error types

use thiserror::Error;

/// Errors raised by the estimators shipped with this crate
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("estimator used before fit")]
    NotFitted,

    #[error("X has {x_rows} samples but y has {y_len} labels")]
    SampleMismatch { x_rows: usize, y_len: usize },

    #[error("estimator was fitted with {expected} features, got {got}")]
    FeatureMismatch { expected: usize, got: usize },
}
