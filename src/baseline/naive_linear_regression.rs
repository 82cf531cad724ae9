//! Implementation of a Naive Linear Regression model

use std::f64;
use std::iter::FromIterator;

use crate::dataset::Rows;
use crate::error::BoxError;
use crate::estimator::{Estimator, FreshClone};

use super::score_regressor;

/// A Naive Linear Regression model
///
/// This is univariate regression on a single feature. During training the best feature is selected.
/// The model can be trained by consuming an iterator over the training data:
/// ```
/// # use kfold::baseline::NaiveLinearRegression;
/// # let data: Vec<(&[f64], &f64)> = vec![];
/// let model: NaiveLinearRegression = data
///     .into_iter()
///     .collect();
/// ```
/// or used as an [`Estimator`] by the cross-validation engines.
#[derive(Debug, Clone)]
pub struct NaiveLinearRegression {
    slope: f64,
    intercept: f64,
    feature: usize,
    n_train: usize,
}

impl Default for NaiveLinearRegression {
    fn default() -> Self {
        NaiveLinearRegression::new()
    }
}

impl<'a, J> FromIterator<(J, &'a f64)> for NaiveLinearRegression
where
    J: IntoIterator<Item = &'a f64>,
{
    fn from_iter<I: IntoIterator<Item = (J, &'a f64)>>(iter: I) -> Self {
        let mut feature_columns = Vec::new();
        let mut target_column = Vec::new();

        for (x, &y) in iter {
            target_column.push(y);
            for (i, &xi) in x.into_iter().enumerate() {
                if i >= feature_columns.len() {
                    feature_columns.push(Vec::new());
                }

                feature_columns[i].push(xi);
            }
        }

        let mut y_mean = 0.0;
        for y in &target_column {
            y_mean += *y;
        }
        y_mean /= target_column.len() as f64;

        let mut best_err = f64::INFINITY;
        let mut best_slope = 0.0;
        let mut best_intercept = y_mean;
        let mut best_feature = 0;

        for (i, feature) in feature_columns.iter().enumerate() {
            let mut x_mean = 0.0;
            for x in feature {
                x_mean += *x;
            }
            x_mean /= feature.len() as f64;

            let mut x_var = 0.0;
            let mut covar = 0.0;
            for (x, y) in feature.iter().zip(target_column.iter()) {
                let x = *x - x_mean;
                let y = *y - y_mean;

                x_var += x * x;
                covar += x * y;
            }

            // a constant feature carries no information; fall back to the mean
            let slope = if x_var > 0.0 { covar / x_var } else { 0.0 };
            let intercept = y_mean - slope * x_mean;

            let err: f64 = feature
                .iter()
                .zip(target_column.iter())
                .map(|(&x, &y)| intercept + slope * x - y)
                .map(|r| r * r)
                .sum();

            if err < best_err {
                best_err = err;
                best_slope = slope;
                best_intercept = intercept;
                best_feature = i;
            }
        }

        NaiveLinearRegression {
            slope: best_slope,
            intercept: best_intercept,
            feature: best_feature,
            n_train: target_column.len(),
        }
    }
}

impl NaiveLinearRegression {
    /// an untrained model
    pub fn new() -> Self {
        NaiveLinearRegression {
            slope: f64::NAN,
            intercept: f64::NAN,
            feature: 0,
            n_train: 0,
        }
    }

    /// predict target value for a single feature vector
    pub fn predict(&self, x: &[f64]) -> f64 {
        self.intercept + x[self.feature] * self.slope
    }

    /// index of the feature selected during training
    pub fn feature(&self) -> usize {
        self.feature
    }

    pub fn is_fitted(&self) -> bool {
        self.n_train > 0
    }
}

impl Estimator<f64, f64> for NaiveLinearRegression {
    fn fit(&mut self, rows: &Rows<f64, f64>) -> Result<(), BoxError> {
        if rows.is_empty() {
            return Err("cannot fit on an empty training set".into());
        }
        *self = rows.iter().collect();
        Ok(())
    }

    fn score(&self, rows: &Rows<f64, f64>) -> Result<f64, BoxError> {
        if !self.is_fitted() {
            return Err("model is not fitted".into());
        }
        score_regressor(rows, |x| self.predict(x))
    }
}

impl FreshClone for NaiveLinearRegression {
    fn fresh_clone(&self) -> Self {
        NaiveLinearRegression::new()
    }
}

#[test]
fn nlr_flat() {
    let data = vec![
        (vec![1.0, 2.0], 3.0),
        (vec![2.0, 1.0], 3.0),
        (vec![1.0, 5.0], 3.0),
        (vec![2.0, 6.0], 3.0),
    ];

    let nlr: NaiveLinearRegression = data.iter().map(|(x, y)| (x, y)).collect();

    assert_eq!(nlr.predict(&[1.5, 1.5]), 3.0);
    assert_eq!(nlr.predict(&[5.5, 1.5]), 3.0);
    assert_eq!(nlr.predict(&[1.5, 5.5]), 3.0);
    assert_eq!(nlr.predict(&[5.5, 5.5]), 3.0);
}

#[test]
fn nlr_slope() {
    let data = vec![
        (vec![1.0, 2.0], 8.0),
        (vec![2.0, 1.0], 9.0),
        (vec![1.0, 5.0], 5.0),
        (vec![2.0, 6.0], 4.0),
    ];

    let nlr: NaiveLinearRegression = data.iter().map(|(x, y)| (x, y)).collect();

    assert_eq!(nlr.feature(), 1);
    assert_eq!(nlr.predict(&[1.5, 1.5]), 8.5);
    assert_eq!(nlr.predict(&[5.5, 1.5]), 8.5);
    assert_eq!(nlr.predict(&[1.5, 5.5]), 4.5);
    assert_eq!(nlr.predict(&[5.5, 5.5]), 4.5);
}

#[test]
fn nlr_estimator() {
    use crate::dataset::DataSet;

    let x = [0.0, 7.0, 1.0, 3.0, 2.0, 1.0, 3.0, 9.0, 4.0, 2.0];
    let y = [1.0, 3.0, 5.0, 7.0, 9.0];
    let data = DataSet::new(&x, 2, &y).unwrap();

    let mut model = NaiveLinearRegression::new();
    assert!(!model.is_fitted());
    assert!(model.score(&data.rows(&[0, 1])).is_err());

    model.fit(&data.rows(&[0, 1, 2])).unwrap();
    assert_eq!(model.feature(), 0);
    let r2 = model.score(&data.rows(&[3, 4])).unwrap();
    assert!((r2 - 1.0).abs() < 1e-12);

    assert!(!model.fresh_clone().is_fitted());
}
