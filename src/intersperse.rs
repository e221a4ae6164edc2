//! Inserting separators between adjacent elements.
//!
//! For an input of length `n > 0` the output has length `2n - 1`: the
//! original elements sit at even positions and separators at odd ones.
//! An empty input produces an empty `Vec`.

/// Places `separator` between every pair of adjacent elements.
///
/// # Examples
/// ```
/// use u_slices::intersperse::intersperse;
/// assert_eq!(intersperse(&["a", "b", "c"], "-"), vec!["a", "-", "b", "-", "c"]);
/// assert_eq!(intersperse(&["solo"], "-"), vec!["solo"]);
/// ```
pub fn intersperse<T: Clone>(data: &[T], separator: T) -> Vec<T> {
    intersperse_by_index(data, |_| separator.clone())
}

/// Places `separator(prev)` after every element but the last, where
/// `prev` is the element immediately before the separator.
///
/// # Examples
/// ```
/// use u_slices::intersperse::intersperse_by;
/// let words = ["first", "second", "third"].map(String::from);
/// let out = intersperse_by(&words, |s| format!("after {s}"));
/// assert_eq!(out, vec!["first", "after first", "second", "after second", "third"]);
/// ```
pub fn intersperse_by<T, F>(data: &[T], mut separator: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T) -> T,
{
    intersperse_by_index(data, |i| separator(&data[i]))
}

/// Places `separator(i)` after every element but the last, where `i` is
/// the index in `data` of the element immediately before the separator.
///
/// # Examples
/// ```
/// use u_slices::intersperse::intersperse_by_index;
/// let words = ["first", "second", "third"].map(String::from);
/// let out = intersperse_by_index(&words, |i| format!("after {i}"));
/// assert_eq!(out, vec!["first", "after 0", "second", "after 1", "third"]);
/// ```
pub fn intersperse_by_index<T, F>(data: &[T], mut separator: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(usize) -> T,
{
    let Some((first, rest)) = data.split_first() else {
        return Vec::new();
    };

    let mut result = Vec::with_capacity(2 * data.len() - 1);
    result.push(first.clone());
    for (i, x) in rest.iter().enumerate() {
        result.push(separator(i));
        result.push(x.clone());
    }
    result
}
