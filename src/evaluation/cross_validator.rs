use std::sync::atomic::{AtomicBool, Ordering};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::config::CrossValidationConfig;
use crate::dataset::DataSet;
use crate::error::{Error, Result};
use crate::estimator::EstimatorFactory;
use crate::procedures::{partition, FoldSequence, Procedure};

use super::evaluate_fold;

/// Per-fold scores of one cross-validation run, indexed by fold
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CrossValidationScores {
    pub train_scores: Vec<f64>,
    pub test_scores: Vec<f64>,
}

impl CrossValidationScores {
    pub fn n_folds(&self) -> usize {
        self.test_scores.len()
    }

    pub fn mean_train(&self) -> f64 {
        mean(&self.train_scores)
    }

    pub fn mean_test(&self) -> f64 {
        mean(&self.test_scores)
    }

    /// population standard deviation of the test scores
    pub fn std_test(&self) -> f64 {
        let m = self.mean_test();
        let var = self.test_scores.iter().map(|s| (s - m) * (s - m)).sum::<f64>()
            / self.test_scores.len() as f64;
        var.sqrt()
    }
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// A configured cross-validation runner
///
/// Folds are evaluated one after another in fold order. If a cancellation flag is attached, it
/// is checked before every fold and a raised flag aborts the run with [`Error::Cancelled`].
#[derive(Debug, Clone)]
pub struct CrossValidation<'c> {
    config: CrossValidationConfig,
    cancel: Option<&'c AtomicBool>,
}

impl<'c> CrossValidation<'c> {
    pub fn new(config: CrossValidationConfig) -> Self {
        CrossValidation {
            config,
            cancel: None,
        }
    }

    /// abort between folds once `flag` is set
    pub fn cancel_on(mut self, flag: &'c AtomicBool) -> Self {
        self.cancel = Some(flag);
        self
    }

    pub fn config(&self) -> &CrossValidationConfig {
        &self.config
    }

    pub(crate) fn check_cancelled(&self, fold: usize, size: Option<usize>) -> Result<()> {
        match self.cancel {
            Some(flag) if flag.load(Ordering::SeqCst) => {
                debug!("cancelled before fold {} (size {:?})", fold, size);
                Err(Error::Cancelled { fold, size })
            }
            _ => Ok(()),
        }
    }

    /// Validate the options against `n` rows and partition them
    pub(crate) fn folds(&self, n: usize) -> Result<FoldSequence> {
        self.config.validate()?;
        partition(n, self.config.k, self.config.seed, self.config.shuffle)
    }

    /// Fit a new estimator per fold and score it on the fold's training and test rows.
    pub fn run<X, Y, F>(&self, factory: &F, data: &DataSet<X, Y>) -> Result<CrossValidationScores>
    where
        F: EstimatorFactory<X, Y> + ?Sized,
    {
        let folds = self.folds(data.n_rows())?;

        let mut train_scores = Vec::with_capacity(folds.len());
        let mut test_scores = Vec::with_capacity(folds.len());

        for (j, fold) in folds.iter().enumerate() {
            self.check_cancelled(j, None)?;
            let (train, test) =
                evaluate_fold(factory, data, &fold.trainset, &fold.testset, j, None)?;
            train_scores.push(train);
            test_scores.push(test);
        }

        let scores = CrossValidationScores {
            train_scores,
            test_scores,
        };

        info!(
            "{}-fold cross-validation on {} rows: mean train score {:.4}, mean test score {:.4}",
            scores.n_folds(),
            data.n_rows(),
            scores.mean_train(),
            scores.mean_test()
        );

        Ok(scores)
    }

    /// Like [`run`](#method.run), but evaluates the folds on the rayon thread pool.
    ///
    /// Scores are still placed by fold index. If several folds fail, any one of their errors
    /// may be reported.
    #[cfg(feature = "parallel")]
    pub fn run_parallel<X, Y, F>(
        &self,
        factory: &F,
        data: &DataSet<X, Y>,
    ) -> Result<CrossValidationScores>
    where
        F: EstimatorFactory<X, Y> + Sync + ?Sized,
        X: Sync,
        Y: Sync,
    {
        let folds = self.folds(data.n_rows())?;

        let pairs: Vec<(f64, f64)> = folds
            .folds()
            .par_iter()
            .enumerate()
            .map(|(j, fold)| {
                self.check_cancelled(j, None)?;
                evaluate_fold(factory, data, &fold.trainset, &fold.testset, j, None)
            })
            .collect::<Result<_>>()?;

        let (train_scores, test_scores) = pairs.into_iter().unzip();
        let scores = CrossValidationScores {
            train_scores,
            test_scores,
        };

        info!(
            "{}-fold parallel cross-validation on {} rows: mean train score {:.4}, mean test score {:.4}",
            scores.n_folds(),
            data.n_rows(),
            scores.mean_train(),
            scores.mean_test()
        );

        Ok(scores)
    }
}

/// Cross-validate the estimators produced by `factory` on `data`.
///
/// Returns one train and one test score per fold, in fold order. Any estimator failure aborts
/// the run.
pub fn cross_val_score<X, Y, F>(
    factory: &F,
    data: &DataSet<X, Y>,
    config: &CrossValidationConfig,
) -> Result<CrossValidationScores>
where
    F: EstimatorFactory<X, Y> + ?Sized,
{
    CrossValidation::new(config.clone()).run(factory, data)
}
