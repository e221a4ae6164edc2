//! In-place shuffling.
//!
//! This is the only module that mutates caller data: [`shuffle`] and
//! [`shuffle_with`] permute a `&mut [T]` and return nothing. Every other
//! function in the crate returns a fresh collection.
//!
//! # Reproducibility
//!
//! [`shuffle`] draws from the thread-local RNG, which is seeded from the
//! operating system and is not suitable for cryptographic use. For
//! reproducible permutations, pass an RNG built by [`create_rng`] to
//! [`shuffle_with`].

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Builds the seeded generator to pass to [`shuffle_with`].
///
/// Backed by `SmallRng`: fast, not cryptographic, and reproducible for a
/// given seed on the same platform.
///
/// # Examples
/// ```
/// use u_slices::random::{create_rng, shuffle_with};
/// let mut deck: Vec<u8> = (1..=52).collect();
/// shuffle_with(&mut deck, &mut create_rng(42));
/// assert_eq!(deck.len(), 52);
/// ```
pub fn create_rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

/// Shuffles `slice` in place using the thread-local RNG.
///
/// See [`shuffle_with`] for the algorithm.
///
/// # Examples
/// ```
/// use u_slices::random::shuffle;
/// let mut v = vec![1, 2, 3, 4, 5];
/// shuffle(&mut v);
/// v.sort();
/// assert_eq!(v, vec![1, 2, 3, 4, 5]);
/// ```
pub fn shuffle<T>(slice: &mut [T]) {
    shuffle_with(slice, &mut rand::rng());
}

/// Fisher-Yates in-place shuffle driven by `rng`.
///
/// For `i` from the last index down to 1, swaps element `i` with an
/// element at a uniformly chosen index in `[0, i]`. Each of the n!
/// permutations is equally likely given a uniform `rng`.
///
/// # Complexity
/// Time: O(n), Space: O(1)
///
/// # Examples
/// ```
/// use u_slices::random::{create_rng, shuffle_with};
/// let mut a = vec!['a', 'b', 'c', 'd'];
/// let mut b = a.clone();
/// shuffle_with(&mut a, &mut create_rng(7));
/// shuffle_with(&mut b, &mut create_rng(7));
/// assert_eq!(a, b);
/// ```
pub fn shuffle_with<T, R: Rng>(slice: &mut [T], rng: &mut R) {
    tracing::trace!(len = slice.len(), "shuffling slice");
    for i in (1..slice.len()).rev() {
        slice.swap(i, rng.random_range(0..=i));
    }
}

/// Returns `0..n` in shuffled order, leaving any data indexed by it alone.
///
/// # Examples
/// ```
/// use u_slices::random::{create_rng, shuffled_indices};
/// let names = ["ann", "bo", "cy"];
/// let order = shuffled_indices(names.len(), &mut create_rng(1));
/// let visited: Vec<&str> = order.iter().map(|&i| names[i]).collect();
/// assert_eq!(visited.len(), 3);
/// ```
pub fn shuffled_indices<R: Rng>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut order: Vec<usize> = (0..n).collect();
    shuffle_with(&mut order, rng);
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn sorted<T: Ord + Clone>(v: &[T]) -> Vec<T> {
        let mut out = v.to_vec();
        out.sort();
        out
    }

    #[test]
    fn test_thread_rng_shuffle_keeps_multiset() {
        let mut words = vec!["x", "y", "z", "y", "w"];
        shuffle(&mut words);
        assert_eq!(sorted(&words), vec!["w", "x", "y", "y", "z"]);
    }

    #[test]
    fn test_thread_rng_shuffle_trivial_lengths() {
        let mut none: [char; 0] = [];
        shuffle(&mut none);
        let mut one = ['q'];
        shuffle(&mut one);
        assert_eq!(one, ['q']);
    }

    #[test]
    fn test_seeded_shuffle_is_reproducible() {
        let mut a: Vec<u32> = (0..32).collect();
        let mut b = a.clone();
        shuffle_with(&mut a, &mut create_rng(11));
        shuffle_with(&mut b, &mut create_rng(11));
        assert_eq!(a, b);
    }

    #[test]
    fn test_seeded_shuffle_moves_elements() {
        // identity has probability 1/20!, so any seed must move something
        let identity: Vec<u32> = (0..20).collect();
        let mut v = identity.clone();
        shuffle_with(&mut v, &mut create_rng(5));
        assert_ne!(v, identity);
    }

    #[test]
    fn test_shuffle_with_subslice() {
        let mut v = vec![0, 1, 2, 3, 4, 5];
        shuffle_with(&mut v[2..], &mut create_rng(3));
        assert_eq!(&v[..2], &[0, 1]);
        assert_eq!(sorted(&v[2..]), vec![2, 3, 4, 5]);
    }

    #[test]
    fn test_shuffle_uniform_over_permutations() {
        // 3 elements have 6 permutations; each should appear ~1/6 of the time
        let trials: u32 = 60_000;
        let mut rng = create_rng(2024);
        let mut counts: HashMap<[u8; 3], u32> = HashMap::new();
        for _ in 0..trials {
            let mut v = [0_u8, 1, 2];
            shuffle_with(&mut v, &mut rng);
            *counts.entry(v).or_insert(0) += 1;
        }
        assert_eq!(counts.len(), 6);
        let expected = f64::from(trials) / 6.0;
        for (perm, &count) in &counts {
            let deviation = (f64::from(count) - expected).abs() / expected;
            assert!(
                deviation < 0.05,
                "permutation {perm:?} seen {count} times, expected ~{expected}"
            );
        }
    }

    #[test]
    fn test_shuffle_each_position_uniform() {
        let n = 5;
        let trials: u32 = 50_000;
        let mut rng = create_rng(99);
        let mut counts = vec![[0_u32; 5]; n];
        for _ in 0..trials {
            let mut v: Vec<usize> = (0..n).collect();
            shuffle_with(&mut v, &mut rng);
            for (pos, &x) in v.iter().enumerate() {
                counts[x][pos] += 1;
            }
        }
        let expected = f64::from(trials) / n as f64;
        for row in &counts {
            for &c in row {
                assert!((f64::from(c) - expected).abs() / expected < 0.05);
            }
        }
    }

    #[test]
    fn test_shuffled_indices_cover_range() {
        let order = shuffled_indices(12, &mut create_rng(8));
        assert_eq!(sorted(&order), (0..12).collect::<Vec<_>>());
        assert!(shuffled_indices(0, &mut create_rng(8)).is_empty());
    }

    #[test]
    fn test_shuffled_indices_match_shuffle_with() {
        let mut direct: Vec<usize> = (0..9).collect();
        shuffle_with(&mut direct, &mut create_rng(17));
        assert_eq!(shuffled_indices(9, &mut create_rng(17)), direct);
    }
}
