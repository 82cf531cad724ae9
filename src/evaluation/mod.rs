//! Cross-validated evaluation of estimators

mod cross_validator;
mod learning;
mod score_matrix;

pub use self::cross_validator::{cross_val_score, CrossValidation, CrossValidationScores};
pub use self::learning::{learning_curve, training_subset, LearningCurve};
pub use self::score_matrix::ScoreMatrix;

use crate::dataset::DataSet;
use crate::error::{BoxError, Error, Result, Stage};
use crate::estimator::{Estimator, EstimatorFactory};

/// Train a new estimator on `trainset` and score it on both `trainset` and `testset`.
///
/// Returns `(train_score, test_score)`. Failures carry the fold index and, for learning curves,
/// the requested training size.
pub(crate) fn evaluate_fold<X, Y, F>(
    factory: &F,
    data: &DataSet<X, Y>,
    trainset: &[usize],
    testset: &[usize],
    fold: usize,
    size: Option<usize>,
) -> Result<(f64, f64)>
where
    F: EstimatorFactory<X, Y> + ?Sized,
{
    let fail = move |stage: Stage| move |source: BoxError| Error::EstimatorFailure {
        fold,
        size,
        stage,
        source,
    };

    let train = data.rows(trainset);
    let test = data.rows(testset);

    let mut estimator = factory.create();
    estimator.fit(&train).map_err(fail(Stage::Fit))?;

    let train_score = estimator.score(&train).map_err(fail(Stage::ScoreTrain))?;
    let test_score = estimator.score(&test).map_err(fail(Stage::ScoreTest))?;

    trace!(
        "fold {}: {} training rows, {} test rows, train score {}, test score {}",
        fold,
        train.len(),
        test.len(),
        train_score,
        test_score
    );

    Ok((train_score, test_score))
}
