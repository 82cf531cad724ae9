//! Seeded randomness for fold assignment.
//!
//! Every partition owns its generator. `ChaCha8Rng` produces the same stream on every platform,
//! so a seed fully determines the folds.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Seed used when shuffling is requested without an explicit seed
pub const DEFAULT_SEED: u64 = 0;

/// Create the generator for one partitioning call
pub fn seeded_rng(seed: Option<u64>) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed.unwrap_or(DEFAULT_SEED))
}

/// Indices `0..n`, permuted in place with a Fisher-Yates shuffle
pub fn permutation(n: usize, rng: &mut ChaCha8Rng) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..n).collect();
    indices.shuffle(rng);
    indices
}
