//! Features-and-labels container for classification experiments

use ndarray::{s, Array1, Array2};

/// Feature matrix and label vector for a supervised learning task.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Feature matrix (n_samples x n_features)
    pub x: Array2<f64>,
    /// Label vector (n_samples)
    pub y: Array1<f64>,
}

impl Dataset {
    /// Create a new dataset
    pub fn new(x: Array2<f64>, y: Array1<f64>) -> Self {
        assert_eq!(x.nrows(), y.len(), "X rows must match y length");
        Self { x, y }
    }

    /// Get number of samples
    pub fn n_samples(&self) -> usize {
        self.x.nrows()
    }

    /// Get number of features
    pub fn n_features(&self) -> usize {
        self.x.ncols()
    }

    /// Split into train and test sets, the test set taking the tail.
    pub fn train_test_split(&self, test_ratio: f64) -> (Dataset, Dataset) {
        let n = self.n_samples();
        let test_size = (n as f64 * test_ratio).round() as usize;
        let train_size = n - test_size;

        let train = Dataset::new(
            self.x.slice(s![..train_size, ..]).to_owned(),
            self.y.slice(s![..train_size]).to_owned(),
        );
        let test = Dataset::new(
            self.x.slice(s![train_size.., ..]).to_owned(),
            self.y.slice(s![train_size..]).to_owned(),
        );

        (train, test)
    }
}
