use crate::dataset::Rows;
use crate::error::BoxError;
use crate::estimator::{Estimator, FreshClone};

use super::score_regressor;

/// Predicts the mean target of its training rows, whatever the features
#[derive(Debug, Clone, Default)]
pub struct MeanRegressor {
    mean: Option<f64>,
}

impl MeanRegressor {
    pub fn new() -> Self {
        MeanRegressor { mean: None }
    }

    /// predict target value for a single feature vector
    pub fn predict(&self, _x: &[f64]) -> Option<f64> {
        self.mean
    }
}

impl Estimator<f64, f64> for MeanRegressor {
    fn fit(&mut self, rows: &Rows<f64, f64>) -> Result<(), BoxError> {
        if rows.is_empty() {
            return Err("cannot fit on an empty training set".into());
        }
        let sum: f64 = rows.targets().sum();
        self.mean = Some(sum / rows.len() as f64);
        Ok(())
    }

    fn score(&self, rows: &Rows<f64, f64>) -> Result<f64, BoxError> {
        let mean = self.mean.ok_or("model is not fitted")?;
        score_regressor(rows, |_| mean)
    }
}

impl FreshClone for MeanRegressor {
    fn fresh_clone(&self) -> Self {
        MeanRegressor::new()
    }
}
