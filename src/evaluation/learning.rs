use crate::config::LearningCurveConfig;
use crate::dataset::DataSet;
use crate::error::Result;
use crate::estimator::EstimatorFactory;
use crate::procedures::Procedure;

use super::cross_validator::CrossValidation;
use super::evaluate_fold;
use super::score_matrix::ScoreMatrix;

/// Train and test scores over a schedule of training-set sizes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LearningCurve {
    /// training rows actually used per schedule entry (the smallest over folds)
    pub sizes: Vec<usize>,
    /// shape `(sizes, folds)`
    pub train_scores: ScoreMatrix,
    /// shape `(sizes, folds)`
    pub test_scores: ScoreMatrix,
}

impl LearningCurve {
    /// mean test score per training size
    pub fn mean_test_scores(&self) -> Vec<f64> {
        self.test_scores.row_means()
    }

    pub fn mean_train_scores(&self) -> Vec<f64> {
        self.train_scores.row_means()
    }
}

/// The first `size` entries of a fold's training set (all of it if it is shorter).
///
/// Growing `size` only ever appends rows, so every smaller subset is a prefix of every larger
/// one.
pub fn training_subset(trainset: &[usize], size: usize) -> &[usize] {
    &trainset[..size.min(trainset.len())]
}

impl<'c> CrossValidation<'c> {
    /// Cross-validate on nested training subsets of the given sizes.
    ///
    /// The folds are partitioned once; each fold keeps its test set for every size.
    pub fn learning_curve<X, Y, F>(
        &self,
        factory: &F,
        data: &DataSet<X, Y>,
        sizes: &[usize],
    ) -> Result<LearningCurve>
    where
        F: EstimatorFactory<X, Y> + ?Sized,
    {
        let n = data.n_rows();
        let schedule = LearningCurveConfig {
            sizes: sizes.to_vec(),
            k: self.config().k,
            seed: self.config().seed,
            shuffle: self.config().shuffle,
        };
        schedule.validate(n)?;

        let folds = self.folds(n)?;

        let mut train_scores = ScoreMatrix::zeros(sizes.len(), folds.len());
        let mut test_scores = ScoreMatrix::zeros(sizes.len(), folds.len());
        let mut sizes_out = Vec::with_capacity(sizes.len());

        for (row, &size) in sizes.iter().enumerate() {
            let mut effective = n;
            for (j, fold) in folds.iter().enumerate() {
                self.check_cancelled(j, Some(size))?;

                let subset = training_subset(&fold.trainset, size);
                effective = effective.min(subset.len());

                let (train, test) =
                    evaluate_fold(factory, data, subset, &fold.testset, j, Some(size))?;
                train_scores.set(row, j, train);
                test_scores.set(row, j, test);
            }

            debug!(
                "learning curve: requested size {}, used {} training rows",
                size, effective
            );
            sizes_out.push(effective);
        }

        let curve = LearningCurve {
            sizes: sizes_out,
            train_scores,
            test_scores,
        };

        info!(
            "learning curve over sizes {:?} with {} folds: mean test scores {:?}",
            curve.sizes,
            folds.len(),
            curve.mean_test_scores()
        );

        Ok(curve)
    }
}

/// Compute a learning curve for the estimators produced by `factory`.
///
/// Returns matrices of shape `(config.sizes.len(), config.k)`.
pub fn learning_curve<X, Y, F>(
    factory: &F,
    data: &DataSet<X, Y>,
    config: &LearningCurveConfig,
) -> Result<LearningCurve>
where
    F: EstimatorFactory<X, Y> + ?Sized,
{
    CrossValidation::new(config.cross_validation()).learning_curve(factory, data, &config.sizes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use crate::baseline::NaiveLinearRegression;
    use crate::error::{Error, Stage};
    use crate::evaluation::CrossValidation;
    use std::sync::atomic::{AtomicBool, Ordering};
    use crate::evaluation::mock::{Counting, FailsOn, SizeProportional};
    use crate::procedures::partition;

    fn data_of(n: usize) -> (Vec<f64>, Vec<f64>) {
        let x: Vec<f64> = (0..n).map(|i| i as f64).collect();
        let y: Vec<f64> = x.iter().map(|v| 2.0 * v + 1.0).collect();
        (x, y)
    }

    #[test]
    fn test_scores_grow_with_training_size() {
        let (x, y) = data_of(10);
        let data = DataSet::new(&x, 1, &y).unwrap();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let factory = || SizeProportional {
            total: 10,
            n_train: 0,
            seen: seen.clone(),
        };

        let curve = learning_curve(&factory, &data, &LearningCurveConfig::new(vec![2, 4, 8]).k(2))
            .unwrap();

        assert_eq!(curve.sizes, vec![2, 4, 5]);
        assert_eq!(curve.test_scores.shape(), (3, 2));
        assert_eq!(curve.train_scores.shape(), (3, 2));

        let means = curve.mean_test_scores();
        assert!(means.windows(2).all(|w| w[0] < w[1]), "{:?}", means);
        assert_eq!(means, vec![0.2, 0.4, 0.5]);
    }

    #[test]
    fn smaller_training_sets_are_prefixes_of_larger_ones() {
        let (x, y) = data_of(30);
        let data = DataSet::new(&x, 1, &y).unwrap();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let factory = || SizeProportional {
            total: 30,
            n_train: 0,
            seen: seen.clone(),
        };
        let config = LearningCurveConfig::new(vec![3, 7, 12, 24]).k(3).seed(8);

        learning_curve(&factory, &data, &config).unwrap();

        // fits are recorded size-major: seen[row * k + fold]
        let seen = seen.borrow();
        assert_eq!(seen.len(), 4 * 3);
        for fold in 0..3 {
            for row in 1..4 {
                let smaller = &seen[(row - 1) * 3 + fold];
                let larger = &seen[row * 3 + fold];
                assert!(smaller.len() < larger.len());
                assert_eq!(&larger[..smaller.len()], &smaller[..]);
            }
        }

        // and they are drawn from the same folds plain cross-validation uses
        let folds = partition(30, 3, Some(8), true).unwrap();
        for (j, fold) in folds.folds().iter().enumerate() {
            assert_eq!(seen[3 * 3 + j], training_subset(&fold.trainset, 24));
        }
    }

    #[test]
    fn training_subset_is_capped() {
        let train = [4, 1, 3];
        assert_eq!(training_subset(&train, 2), &[4, 1]);
        assert_eq!(training_subset(&train, 10), &[4, 1, 3]);
    }

    #[test]
    fn one_fit_per_size_and_fold() {
        let (x, y) = data_of(20);
        let data = DataSet::new(&x, 1, &y).unwrap();
        let fits = Rc::new(Cell::new(0));
        let factory = || Counting {
            fits: fits.clone(),
            fitted: false,
        };

        let curve =
            learning_curve(&factory, &data, &LearningCurveConfig::new(vec![5, 10, 16])).unwrap();

        assert_eq!(fits.get(), 3 * 5);
        assert_eq!(curve.sizes, vec![5, 10, 16]);
    }

    #[test]
    fn schedule_is_checked_before_fitting() {
        let (x, y) = data_of(20);
        let data = DataSet::new(&x, 1, &y).unwrap();
        let fits = Rc::new(Cell::new(0));
        let factory = || Counting {
            fits: fits.clone(),
            fitted: false,
        };

        for sizes in vec![vec![], vec![4, 10], vec![10, 10], vec![12, 8], vec![10, 21]] {
            match learning_curve(&factory, &data, &LearningCurveConfig::new(sizes.clone())) {
                Err(Error::InvalidArguments(_)) => {}
                other => panic!("{:?}: unexpected {:?}", sizes, other.map(|c| c.sizes)),
            }
        }
        assert_eq!(fits.get(), 0);
    }

    #[test]
    fn failure_carries_fold_and_size() {
        let (x, y) = data_of(10);
        let data = DataSet::new(&x, 1, &y).unwrap();
        let config = LearningCurveConfig::new(vec![2, 6]).k(2).shuffle(false);

        // fold 1 trains on 0, 2, 4, 6, 8; row 6 enters at size 4 and later
        match learning_curve(&|| FailsOn { poison: 6 }, &data, &config) {
            Err(Error::EstimatorFailure {
                fold, size, stage, ..
            }) => {
                assert_eq!((fold, size, stage), (1, Some(6), Stage::Fit));
            }
            other => panic!("unexpected {:?}", other.map(|c| c.sizes)),
        }
    }

    #[test]
    fn cancellation_reports_fold_and_size() {
        let (x, y) = data_of(10);
        let data = DataSet::new(&x, 1, &y).unwrap();
        let flag = AtomicBool::new(true);
        let cv = CrossValidation::new(LearningCurveConfig::new(vec![2, 4]).k(2).cross_validation())
            .cancel_on(&flag);

        match cv.learning_curve(&NaiveLinearRegression::new, &data, &[2, 4]) {
            Err(Error::Cancelled { fold, size }) => assert_eq!((fold, size), (0, Some(2))),
            other => panic!("unexpected {:?}", other.map(|c| c.sizes)),
        }

        flag.store(false, Ordering::SeqCst);
        assert!(cv.learning_curve(&NaiveLinearRegression::new, &data, &[2, 4]).is_ok());
    }

    #[test]
    fn linear_model_learns_linear_data() {
        let (x, y) = data_of(40);
        let data = DataSet::new(&x, 1, &y).unwrap();
        let config = LearningCurveConfig::new(vec![5, 16, 32]).k(4).seed(1);

        let curve = learning_curve(&NaiveLinearRegression::new, &data, &config).unwrap();

        assert_eq!(curve.sizes, vec![5, 16, 30]);
        for &m in &curve.mean_test_scores() {
            assert!(m > 0.999_999);
        }
    }
}
