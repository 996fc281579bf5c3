//! # MNIST Tools - digit visualization and estimator benchmarking
//!
//! This library provides small utilities for working with MNIST-style
//! handwritten digit data (flattened 28x28 pixel vectors):
//!
//! - Rendering a single digit as an inverted grayscale image
//! - Rendering many digits into a near-square grid of cells
//! - Benchmarking a list of classifiers on a train/test split
//!
//! Rendering produces in-memory [`image::GrayImage`] values; saving them is
//! the caller's business. Benchmarking fits each estimator in place, times
//! the fit, and scores train/test accuracy into an ordered results table.

pub mod data;
pub mod ml;
pub mod plot;

pub use data::{Dataset, DigitSource, DigitTable};
pub use ml::{benchmark_estimators, BenchmarkResults, Estimator, KnnClassifier, Metrics};
pub use plot::{grid_shape, DigitRenderer, FigureSize, GridRenderer, PlotError};
