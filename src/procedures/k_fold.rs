//! k-fold partitioning of sample indices

use crate::error::{Error, Result};
use crate::random::{permutation, seeded_rng};

use super::{Fold, FoldSequence};

/// k-fold cross-validation splitter
///
/// Indices are (optionally) shuffled, then the index at position `p` of the resulting order is
/// tested in fold `p % k`. Training sets list the remaining indices in that same order.
/// ```
/// # use kfold::procedures::KFold;
/// let folds = KFold::new(5).shuffle(false).split(10).unwrap();
/// assert_eq!(folds.folds()[0].testset, vec![0, 5]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KFold {
    k: usize,
    seed: Option<u64>,
    shuffle: bool,
}

impl KFold {
    /// `k` folds with shuffling enabled and no explicit seed
    pub fn new(k: usize) -> Self {
        KFold {
            k,
            seed: None,
            shuffle: true,
        }
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    pub fn split(&self, n: usize) -> Result<FoldSequence> {
        partition(n, self.k, self.seed, self.shuffle)
    }
}

/// Partition the indices `0..n` into `k` disjoint test folds.
///
/// Requires `n >= k >= 2`. The seed is ignored when `shuffle` is false.
pub fn partition(n: usize, k: usize, seed: Option<u64>, shuffle: bool) -> Result<FoldSequence> {
    if k < 2 {
        return Err(Error::invalid(format!("k must be at least 2, got {}", k)));
    }
    if n < k {
        return Err(Error::invalid(format!(
            "cannot split {} samples into {} folds",
            n, k
        )));
    }

    let order = if shuffle {
        permutation(n, &mut seeded_rng(seed))
    } else {
        (0..n).collect()
    };

    let mut folds = vec![Fold::new(); k];
    for fold in &mut folds {
        fold.testset.reserve(n / k + 1);
        fold.trainset.reserve(n - n / k);
    }

    for (position, &index) in order.iter().enumerate() {
        let owner = position % k;
        for (j, fold) in folds.iter_mut().enumerate() {
            if j == owner {
                fold.testset.push(index);
            } else {
                fold.trainset.push(index);
            }
        }
    }

    let folds = FoldSequence::new(n, folds);
    folds.verify()?;

    debug!(
        "partitioned {} samples into {} folds (shuffle: {}, seed: {:?}), test sizes {:?}",
        n,
        k,
        shuffle,
        seed,
        folds.test_fold_sizes()
    );

    Ok(folds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn identity_partition() {
        let folds = partition(10, 5, None, false).unwrap();
        let tests: Vec<_> = folds.folds().iter().map(|f| f.testset.clone()).collect();
        assert_eq!(
            tests,
            vec![vec![0, 5], vec![1, 6], vec![2, 7], vec![3, 8], vec![4, 9]]
        );
        assert_eq!(folds.folds()[0].trainset, vec![1, 2, 3, 4, 6, 7, 8, 9]);
    }

    #[test]
    fn unbalanced_partition() {
        let folds = partition(11, 5, None, false).unwrap();
        assert_eq!(folds.test_fold_sizes(), vec![3, 2, 2, 2, 2]);
        let mut all: Vec<usize> = folds
            .folds()
            .iter()
            .flat_map(|f| f.testset.iter().cloned())
            .collect();
        all.sort();
        assert_eq!(all, (0..11).collect::<Vec<_>>());
    }

    #[test]
    fn shuffle_off_ignores_seed() {
        for k in 2..7 {
            let a = partition(23, k, Some(1), false).unwrap();
            let b = partition(23, k, Some(99), false).unwrap();
            assert_eq!(a, b);
            for (j, fold) in a.folds().iter().enumerate() {
                assert!(fold.testset.iter().all(|i| i % k == j));
                assert_eq!(fold.testset.len(), (0..23).filter(|i| i % k == j).count());
            }
        }
    }

    #[test]
    fn coverage_and_balance() {
        for n in 2..40 {
            for k in 2..=n.min(12) {
                let folds = partition(n, k, Some(n as u64 * 31 + k as u64), true).unwrap();
                assert_eq!(folds.len(), k);

                let mut seen = HashSet::new();
                for fold in folds.folds() {
                    for &i in &fold.testset {
                        assert!(seen.insert(i), "index {} tested twice", i);
                    }
                }
                assert_eq!(seen.len(), n);

                let sizes = folds.test_fold_sizes();
                let lo = *sizes.iter().min().unwrap();
                let hi = *sizes.iter().max().unwrap();
                assert!(hi - lo <= 1);
                assert!(lo == n / k);
            }
        }
    }

    #[test]
    fn train_and_test_are_complementary() {
        let folds = partition(37, 6, Some(3), true).unwrap();
        for fold in folds.folds() {
            let train: HashSet<_> = fold.trainset.iter().cloned().collect();
            let test: HashSet<_> = fold.testset.iter().cloned().collect();
            assert!(train.is_disjoint(&test));
            let union: HashSet<_> = train.union(&test).cloned().collect();
            assert_eq!(union, (0..37).collect::<HashSet<_>>());
        }
    }

    #[test]
    fn seeded_partition_is_deterministic() {
        let a = KFold::new(4).seed(2024).split(50).unwrap();
        let b = KFold::new(4).seed(2024).split(50).unwrap();
        let c = KFold::new(4).seed(2025).split(50).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn seeded_folds_are_pinned() {
        let folds = partition(10, 3, Some(1), true).unwrap();
        let tests: Vec<_> = folds.folds().iter().map(|f| f.testset.clone()).collect();
        assert_eq!(tests, vec![vec![8, 0, 1, 5], vec![7, 4, 3], vec![2, 6, 9]]);
        assert_eq!(folds.folds()[0].trainset, vec![7, 2, 4, 6, 3, 9]);

        let unseeded = partition(10, 5, None, true).unwrap();
        assert_eq!(unseeded.folds()[0].testset, vec![3, 1]);
        assert_eq!(unseeded.folds()[4].testset, vec![7, 6]);
    }

    #[test]
    fn default_shuffle_is_reproducible() {
        let a = partition(30, 3, None, true).unwrap();
        let b = partition(30, 3, None, true).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, partition(30, 3, None, false).unwrap());
    }

    #[test]
    fn leave_one_out() {
        let folds = partition(6, 6, Some(5), true).unwrap();
        assert!(folds.folds().iter().all(|f| f.testset.len() == 1));
        assert!(folds.folds().iter().all(|f| f.trainset.len() == 5));
    }

    #[test]
    fn invalid_arguments() {
        for &(n, k) in &[(10, 1), (10, 0), (3, 4), (0, 2)] {
            match partition(n, k, None, true) {
                Err(Error::InvalidArguments(_)) => {}
                other => panic!("n={}, k={}: unexpected {:?}", n, k, other),
            }
        }
    }
}
