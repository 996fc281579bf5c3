//! Data structures for digit records and labeled datasets

pub mod dataset;
pub mod digits;

pub use dataset::Dataset;
pub use digits::{DigitSource, DigitTable};
