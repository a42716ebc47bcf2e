// src/rotation/shuffle.rs

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::rotation::seed::RotationSeed;

/// Return a seeded permutation of `pool`, leaving the input untouched.
///
/// A fresh `ChaCha8Rng` is built from the seed on every call; ChaCha output
/// is specified independently of platform word size, so the permutation is
/// identical everywhere for the same `(pool, seed)`.
pub fn shuffle<T: Clone>(pool: &[T], seed: RotationSeed) -> Vec<T> {
    let mut rng = ChaCha8Rng::seed_from_u64(u64::from(seed));
    let mut shuffled = pool.to_vec();
    shuffled.shuffle(&mut rng);
    shuffled
}
