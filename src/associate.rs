//! Building hash maps from slices.
//!
//! All three functions insert in slice order, so when two entries share a
//! key the later one wins.

use std::collections::HashMap;
use std::hash::Hash;

/// Pairs `keys[i]` with `values[i]` for every index present in both slices.
///
/// Surplus keys (or values) are ignored.
///
/// # Examples
/// ```
/// use u_slices::associate::associate;
/// let m = associate(&["a", "b"], &[1, 2, 3]);
/// assert_eq!(m.len(), 2);
/// assert_eq!(m["a"], 1);
/// assert_eq!(m["b"], 2);
/// ```
pub fn associate<K, V>(keys: &[K], values: &[V]) -> HashMap<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    keys.iter().zip(values).map(|(k, v)| (k.clone(), v.clone())).collect()
}

/// Maps every key to `value(key)`.
///
/// # Examples
/// ```
/// use u_slices::associate::associate_by;
/// let lens = associate_by(&["one", "three"], |s| s.len());
/// assert_eq!(lens["three"], 5);
/// ```
pub fn associate_by<K, V, F>(keys: &[K], mut value: F) -> HashMap<K, V>
where
    K: Eq + Hash + Clone,
    F: FnMut(&K) -> V,
{
    keys.iter().map(|k| (k.clone(), value(k))).collect()
}

/// Maps `key(value)` to every value, indexing the slice by a derived key.
///
/// # Examples
/// ```
/// use u_slices::associate::associate_reverse_by;
/// let by_initial = associate_reverse_by(&["apple", "banana", "avocado"], |s| s.as_bytes()[0]);
/// assert_eq!(by_initial[&b'a'], "avocado");
/// assert_eq!(by_initial[&b'b'], "banana");
/// ```
pub fn associate_reverse_by<V, K, F>(values: &[V], mut key: F) -> HashMap<K, V>
where
    V: Clone,
    K: Eq + Hash,
    F: FnMut(&V) -> K,
{
    values.iter().map(|v| (key(v), v.clone())).collect()
}
