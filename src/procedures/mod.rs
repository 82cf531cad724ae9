//! Validation procedures

mod k_fold;

pub use self::k_fold::{partition, KFold};

use crate::error::{Error, Result};

/// Validation procedures support iteration over cross-validation folds
pub trait Procedure {
    fn iter<'a>(&'a self) -> Box<dyn Iterator<Item = &'a Fold> + 'a>;
}

/// A single cross-validation fold, consisting of a training set and a testing set
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fold {
    pub trainset: Vec<usize>,
    pub testset: Vec<usize>,
}

impl Fold {
    pub fn new() -> Self {
        Fold {
            trainset: Vec::new(),
            testset: Vec::new(),
        }
    }
}

impl Default for Fold {
    fn default() -> Self {
        Fold::new()
    }
}

/// The ordered folds produced by one partitioning of `n_samples` indices
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FoldSequence {
    n_samples: usize,
    folds: Vec<Fold>,
}

impl FoldSequence {
    pub(crate) fn new(n_samples: usize, folds: Vec<Fold>) -> Self {
        FoldSequence { n_samples, folds }
    }

    /// number of indices that were partitioned
    pub fn n_samples(&self) -> usize {
        self.n_samples
    }

    /// number of folds
    pub fn len(&self) -> usize {
        self.folds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.folds.is_empty()
    }

    pub fn folds(&self) -> &[Fold] {
        &self.folds
    }

    pub fn get(&self, fold: usize) -> Option<&Fold> {
        self.folds.get(fold)
    }

    pub fn test_fold_sizes(&self) -> Vec<usize> {
        self.folds.iter().map(|f| f.testset.len()).collect()
    }

    /// Check that the test sets partition `0..n_samples`, that every training set is the
    /// complement of its test set, and that test set sizes differ by at most one.
    pub fn verify(&self) -> Result<()> {
        let n = self.n_samples;
        let mut owner = vec![usize::max_value(); n];

        for (j, fold) in self.folds.iter().enumerate() {
            for &i in &fold.testset {
                if i >= n {
                    return Err(violation(format!("test index {} of fold {} is out of range", i, j)));
                }
                if owner[i] != usize::max_value() {
                    return Err(violation(format!(
                        "index {} is tested in folds {} and {}",
                        i, owner[i], j
                    )));
                }
                owner[i] = j;
            }
        }

        if let Some(i) = owner.iter().position(|&o| o == usize::max_value()) {
            return Err(violation(format!("index {} is not tested in any fold", i)));
        }

        let mut stamp = vec![usize::max_value(); n];
        for (j, fold) in self.folds.iter().enumerate() {
            if fold.trainset.len() + fold.testset.len() != n {
                return Err(violation(format!(
                    "fold {} has {} training and {} test indices for {} samples",
                    j,
                    fold.trainset.len(),
                    fold.testset.len(),
                    n
                )));
            }
            for &i in &fold.trainset {
                if i >= n || owner[i] == j || stamp[i] == j {
                    return Err(violation(format!(
                        "training index {} of fold {} overlaps its test set or repeats",
                        i, j
                    )));
                }
                stamp[i] = j;
            }
        }

        let sizes = self.test_fold_sizes();
        if let (Some(lo), Some(hi)) = (sizes.iter().min(), sizes.iter().max()) {
            if hi - lo > 1 {
                return Err(violation(format!("unbalanced test folds {:?}", sizes)));
            }
        }

        Ok(())
    }
}

fn violation(msg: String) -> Error {
    Error::InternalInvariantViolation(msg)
}

impl Procedure for FoldSequence {
    fn iter<'a>(&'a self) -> Box<dyn Iterator<Item = &'a Fold> + 'a> {
        Box::new(self.folds.iter())
    }
}
