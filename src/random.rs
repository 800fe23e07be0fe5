//! Random permutations and subsampling without replacement.
//!
//! Every function takes the generator explicitly. Production callers can
//! pass the thread-local `rand::rng()`; tests and reproducible runs use
//! [`create_rng`] with a fixed seed.
//!
//! # Reproducibility
//!
//! The underlying algorithm (SmallRng) is deterministic for a given seed
//! on the same platform.

use rand::Rng;

/// Creates a fast, seeded random number generator.
///
/// # Examples
/// ```
/// use tpcf_helpers::random::create_rng;
/// use rand::Rng;
/// let mut rng = create_rng(42);
/// let x: f64 = rng.random();
/// assert!(x >= 0.0 && x < 1.0);
/// ```
pub fn create_rng(seed: u64) -> rand::rngs::SmallRng {
    use rand::SeedableRng;
    rand::rngs::SmallRng::seed_from_u64(seed)
}

/// Fisher-Yates (Durstenfeld) in-place shuffle.
///
/// Each of the n! permutations is equally likely.
///
/// Reference: Knuth (1997), *TAOCP* Vol. 2, §3.4.2, Algorithm P.
///
/// # Complexity
/// Time: O(n), Space: O(1)
pub fn shuffle<T, R: Rng>(slice: &mut [T], rng: &mut R) {
    let n = slice.len();
    if n <= 1 {
        return;
    }
    for i in (1..n).rev() {
        let j = rng.random_range(0..=i);
        slice.swap(i, j);
    }
}

/// Returns a shuffled index permutation of `[0, n)`.
///
/// # Examples
/// ```
/// use tpcf_helpers::random::{create_rng, shuffled_indices};
/// let mut rng = create_rng(42);
/// let mut indices = shuffled_indices(5, &mut rng);
/// indices.sort();
/// assert_eq!(indices, vec![0, 1, 2, 3, 4]);
/// ```
pub fn shuffled_indices<R: Rng>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..n).collect();
    shuffle(&mut indices, rng);
    indices
}

/// Draws `k` distinct indices from `[0, n)` uniformly at random.
///
/// The result is the first `k` entries of a uniformly random permutation,
/// so its order is random too. If `k >= n` the whole permutation is
/// returned.
///
/// # Complexity
/// Time: O(n), Space: O(n)
pub fn sample_indices_without_replacement<R: Rng>(
    n: usize,
    k: usize,
    rng: &mut R,
) -> Vec<usize> {
    let mut indices = shuffled_indices(n, rng);
    indices.truncate(k);
    indices
}

// ============================================================================
// Tests
// ============================================================================
