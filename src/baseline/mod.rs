//! Implementation of simple baseline models, used for testing and demonstration.

mod mean_regressor;
mod naive_linear_regression;

pub use self::mean_regressor::MeanRegressor;
pub use self::naive_linear_regression::NaiveLinearRegression;

use crate::dataset::Rows;
use crate::error::BoxError;
use crate::measure_accumulator::r_squared;

/// R² of a regressor's predictions on `rows`
pub(crate) fn score_regressor<F>(rows: &Rows<f64, f64>, predict: F) -> Result<f64, BoxError>
where
    F: Fn(&[f64]) -> f64,
{
    if rows.is_empty() {
        return Err("cannot score on an empty set of rows".into());
    }
    Ok(r_squared(rows.iter().map(|(x, &y)| (y, predict(x)))))
}
