//! The estimator contract consumed by the evaluation engines.
//!
//! An estimator is trained with [`Estimator::fit`] and evaluated with [`Estimator::score`]. The
//! engines never reuse a trained estimator for another fold; every fold obtains a new, untrained
//! instance from an [`EstimatorFactory`]. Any closure returning an estimator is a factory:
//! ```
//! # use kfold::baseline::MeanRegressor;
//! # use kfold::prelude::*;
//! let x = [1.0, 2.0, 3.0, 4.0];
//! let y = [2.0, 4.0, 6.0, 8.0];
//! let data = DataSet::new(&x, 1, &y).unwrap();
//! let scores = cross_val_score(&|| MeanRegressor::new(), &data, &CrossValidationConfig::with_k(2))
//!     .unwrap();
//! assert_eq!(scores.test_scores.len(), 2);
//! ```
//! Estimators that know how to produce an untrained copy of themselves implement
//! [`FreshClone`] and can be passed wrapped in a [`Prototype`].

use crate::dataset::Rows;
use crate::error::BoxError;

/// A supervised model that can be trained on and scored against selected rows
pub trait Estimator<X, Y> {
    /// train the model, replacing any previously learned parameters
    fn fit(&mut self, rows: &Rows<X, Y>) -> Result<(), BoxError>;

    /// goodness of fit on `rows`; for regression models the coefficient of determination
    fn score(&self, rows: &Rows<X, Y>) -> Result<f64, BoxError>;
}

/// Estimators that can produce an untrained copy with the same configuration
pub trait FreshClone {
    fn fresh_clone(&self) -> Self;
}

/// Source of untrained estimators, one per fold
pub trait EstimatorFactory<X, Y> {
    type Estimator: Estimator<X, Y>;

    fn create(&self) -> Self::Estimator;
}

impl<X, Y, F, E> EstimatorFactory<X, Y> for F
where
    F: Fn() -> E,
    E: Estimator<X, Y>,
{
    type Estimator = E;

    #[inline(always)]
    fn create(&self) -> E {
        self()
    }
}

/// Factory that derives each fold's estimator from a template via [`FreshClone`]
#[derive(Debug, Clone)]
pub struct Prototype<E>(pub E);

impl<X, Y, E> EstimatorFactory<X, Y> for Prototype<E>
where
    E: Estimator<X, Y> + FreshClone,
{
    type Estimator = E;

    #[inline(always)]
    fn create(&self) -> E {
        self.0.fresh_clone()
    }
}
