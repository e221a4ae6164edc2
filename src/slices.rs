//! Element-level transforms and queries over slices.
//!
//! Every function here borrows its input and, when it returns a sequence,
//! returns a freshly allocated `Vec`. Nothing in this module mutates the
//! caller's data; for the one in-place operation see
//! [`shuffle`](crate::random::shuffle).

use std::collections::HashMap;
use std::hash::Hash;

use crate::error::SliceError;

/// Returns a copy of `data` without the first element equal to `item`.
///
/// If no element equals `item` the copy is identical to `data`.
///
/// # Examples
/// ```
/// use u_slices::slices::remove;
/// assert_eq!(remove(&[1, 2, 3, 2], &2), vec![1, 3, 2]);
/// assert_eq!(remove(&[1, 2, 3], &7), vec![1, 2, 3]);
/// ```
pub fn remove<T: PartialEq + Clone>(data: &[T], item: &T) -> Vec<T> {
    match index_of(data, item) {
        Some(i) => remove_at(data, i),
        None => data.to_vec(),
    }
}

/// Returns a copy of `data` without the element at `index`.
///
/// # Panics
/// Panics if `index >= data.len()`.
///
/// # Examples
/// ```
/// use u_slices::slices::remove_at;
/// assert_eq!(remove_at(&['a', 'b', 'c'], 1), vec!['a', 'c']);
/// ```
pub fn remove_at<T: Clone>(data: &[T], index: usize) -> Vec<T> {
    let len = data.len();
    assert!(
        index < len,
        "removal index (is {index}) should be < len (is {len})"
    );
    let mut result = Vec::with_capacity(len - 1);
    result.extend_from_slice(&data[..index]);
    result.extend_from_slice(&data[index + 1..]);
    result
}

/// Checked version of [`remove_at`].
///
/// # Errors
/// Returns [`SliceError::IndexOutOfRange`] if `index >= data.len()`.
pub fn try_remove_at<T: Clone>(data: &[T], index: usize) -> Result<Vec<T>, SliceError> {
    if index >= data.len() {
        tracing::debug!(index, len = data.len(), "removal index out of range");
        return Err(SliceError::IndexOutOfRange {
            index,
            len: data.len(),
        });
    }
    Ok(remove_at(data, index))
}

/// Returns the elements satisfying `predicate`, in their original order.
///
/// # Examples
/// ```
/// use u_slices::slices::filter;
/// assert_eq!(filter(&[1, 2, 3, 4], |x| x % 2 == 0), vec![2, 4]);
/// ```
pub fn filter<T, F>(data: &[T], mut predicate: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    data.iter().filter(|&x| predicate(x)).cloned().collect()
}

/// Applies `f` to every element, preserving order and length.
///
/// # Examples
/// ```
/// use u_slices::slices::map;
/// assert_eq!(map(&[1, 2, 3], |x| x.to_string()), vec!["1", "2", "3"]);
/// ```
pub fn map<T, U, F>(data: &[T], f: F) -> Vec<U>
where
    F: FnMut(&T) -> U,
{
    data.iter().map(f).collect()
}

/// Returns `true` if any element equals `item`.
pub fn contains<T: PartialEq>(data: &[T], item: &T) -> bool {
    data.iter().any(|x| x == item)
}

/// Returns the index of the first element equal to `item`, or `None`.
///
/// `None` plays the role of a "not found" sentinel such as `-1`, so the
/// index itself stays a plain `usize`.
///
/// # Examples
/// ```
/// use u_slices::slices::index_of;
/// assert_eq!(index_of(&["a", "b", "b"], &"b"), Some(1));
/// assert_eq!(index_of(&["a"], &"z"), None);
/// ```
pub fn index_of<T: PartialEq>(data: &[T], item: &T) -> Option<usize> {
    data.iter().position(|x| x == item)
}

/// Returns the distinct elements of `data` in order of first appearance.
///
/// # Algorithm
/// A hash map records the rank at which each distinct value was first
/// seen. The output is then rebuilt by writing every value into the slot
/// for its rank, so the result never depends on map iteration order.
///
/// # Complexity
/// Time: O(n) expected, Space: O(n)
///
/// # Examples
/// ```
/// use u_slices::slices::unique;
/// assert_eq!(unique(&[1, 2, 2, 3, 1]), vec![1, 2, 3]);
/// ```
pub fn unique<T: Eq + Hash + Clone>(data: &[T]) -> Vec<T> {
    let mut seen: HashMap<&T, usize> = HashMap::with_capacity(data.len());
    for x in data {
        let rank = seen.len();
        seen.entry(x).or_insert(rank);
    }

    let mut slots: Vec<Option<T>> = vec![None; seen.len()];
    for (x, rank) in seen {
        slots[rank] = Some(x.clone());
    }
    slots.into_iter().flatten().collect()
}

/// Like [`unique`], but two elements are duplicates when `key` maps them
/// to equal values. The first element for each key is kept.
///
/// # Examples
/// ```
/// use u_slices::slices::unique_by;
/// let words = ["apple", "avocado", "banana", "blueberry", "cherry"];
/// assert_eq!(
///     unique_by(&words, |w| w.chars().next()),
///     vec!["apple", "banana", "cherry"],
/// );
/// ```
pub fn unique_by<T, K, F>(data: &[T], mut key: F) -> Vec<T>
where
    T: Clone,
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let mut seen: HashMap<K, (usize, &T)> = HashMap::with_capacity(data.len());
    for x in data {
        let rank = seen.len();
        seen.entry(key(x)).or_insert((rank, x));
    }

    let mut slots: Vec<Option<T>> = vec![None; seen.len()];
    for (rank, x) in seen.into_values() {
        slots[rank] = Some(x.clone());
    }
    slots.into_iter().flatten().collect()
}

/// Left fold: starts from `initial` and applies `f(acc, element)` in order.
///
/// # Examples
/// ```
/// use u_slices::slices::reduce;
/// let total_len = reduce(&["ab", "cde"], 0, |acc, s| acc + s.len());
/// assert_eq!(total_len, 5);
/// ```
pub fn reduce<T, U, F>(data: &[T], initial: U, f: F) -> U
where
    F: FnMut(U, &T) -> U,
{
    data.iter().fold(initial, f)
}

/// Returns `true` if at least one element satisfies `predicate`.
///
/// An empty slice yields `false`.
pub fn some<T, F>(data: &[T], predicate: F) -> bool
where
    F: FnMut(&T) -> bool,
{
    data.iter().any(predicate)
}

/// Returns `true` if every element satisfies `predicate`.
///
/// An empty slice yields `true`.
pub fn every<T, F>(data: &[T], predicate: F) -> bool
where
    F: FnMut(&T) -> bool,
{
    data.iter().all(predicate)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn remove_drops_exactly_one(
            data in proptest::collection::vec(0_i32..10, 0..40),
            item in 0_i32..10,
        ) {
            let out = remove(&data, &item);
            let count = |v: &[i32]| v.iter().filter(|&&x| x == item).count();
            if data.contains(&item) {
                prop_assert_eq!(out.len(), data.len() - 1);
                prop_assert_eq!(count(out.as_slice()), count(data.as_slice()) - 1);
            } else {
                prop_assert_eq!(out, data);
            }
        }

        #[test]
        fn filter_is_matching_subsequence(
            data in proptest::collection::vec(-50_i32..50, 0..40),
        ) {
            let out = filter(&data, |&x| x >= 0);
            prop_assert!(out.iter().all(|&x| x >= 0));
            let expected: Vec<i32> = data.iter().copied().filter(|&x| x >= 0).collect();
            prop_assert_eq!(out, expected);
        }

        #[test]
        fn map_is_pointwise(
            data in proptest::collection::vec(-1000_i64..1000, 0..40),
        ) {
            let out = map(&data, |x| x * 3 + 1);
            prop_assert_eq!(out.len(), data.len());
            for (i, &x) in data.iter().enumerate() {
                prop_assert_eq!(out[i], x * 3 + 1);
            }
        }

        #[test]
        fn unique_first_occurrences_in_order(
            data in proptest::collection::vec(0_u8..20, 0..60),
        ) {
            let mut expected = Vec::new();
            for &x in &data {
                if !expected.contains(&x) {
                    expected.push(x);
                }
            }
            prop_assert_eq!(unique(&data), expected);
        }

        #[test]
        fn unique_by_matches_unique_on_identity_key(
            data in proptest::collection::vec(0_u8..20, 0..60),
        ) {
            prop_assert_eq!(unique_by(&data, |&x| x), unique(&data));
        }

        #[test]
        fn index_of_agrees_with_contains(
            data in proptest::collection::vec(0_i32..10, 0..30),
            item in 0_i32..10,
        ) {
            match index_of(&data, &item) {
                Some(i) => {
                    prop_assert!(contains(&data, &item));
                    prop_assert_eq!(data[i], item);
                    prop_assert!(!data[..i].contains(&item));
                }
                None => prop_assert!(!contains(&data, &item)),
            }
        }
    }
}
