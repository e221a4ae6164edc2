//! Numeric aggregation over slices.
//!
//! [`max`], [`min`] and [`sum`] are total: an empty slice yields
//! [`Numeric::ZERO`]. [`average`] is not, and panics on an empty slice;
//! use [`try_average`] to get an error instead.
//!
//! All arithmetic happens in `T`'s own domain, so integer averages
//! truncate and integer sums wrap on overflow in every build profile.

use crate::error::SliceError;
use crate::numeric::Numeric;

/// Returns the largest element, or zero if `data` is empty.
///
/// Elements are compared with `>`, so a NaN never replaces the current
/// maximum (but a leading NaN is never replaced either).
///
/// # Examples
/// ```
/// use u_slices::aggregate::max;
/// assert_eq!(max(&[3, 1, 4, 1, 5]), 5);
/// assert_eq!(max::<i32>(&[]), 0);
/// ```
pub fn max<T: Numeric>(data: &[T]) -> T {
    let Some((&first, rest)) = data.split_first() else {
        return T::ZERO;
    };
    rest.iter().fold(first, |acc, &x| if x > acc { x } else { acc })
}

/// Returns the smallest element, or zero if `data` is empty.
///
/// # Examples
/// ```
/// use u_slices::aggregate::min;
/// assert_eq!(min(&[3.0, 1.0, 4.0]), 1.0);
/// assert_eq!(min::<f64>(&[]), 0.0);
/// ```
pub fn min<T: Numeric>(data: &[T]) -> T {
    let Some((&first, rest)) = data.split_first() else {
        return T::ZERO;
    };
    rest.iter().fold(first, |acc, &x| if x < acc { x } else { acc })
}

/// Returns the sum of all elements, or zero if `data` is empty.
///
/// Plain left-to-right addition; no compensation is applied for floats.
/// Integer overflow wraps around rather than panicking.
///
/// # Examples
/// ```
/// use u_slices::aggregate::sum;
/// assert_eq!(sum(&[1_u8, 2, 3]), 6);
/// assert_eq!(sum::<f32>(&[]), 0.0);
/// assert_eq!(sum(&[200_u8, 100]), 44); // wrapped
/// ```
pub fn sum<T: Numeric>(data: &[T]) -> T {
    data.iter().fold(T::ZERO, |acc, &x| acc.add_wrapping(x))
}

/// Returns `sum(data) / len(data)` computed in `T`.
///
/// The sum wraps on integer overflow exactly as [`sum`] does.
///
/// # Panics
/// Panics if `data` is empty, for floating-point `T` as well as integers.
///
/// # Examples
/// ```
/// use u_slices::aggregate::average;
/// assert_eq!(average(&[1, 2, 3]), 2);
/// assert_eq!(average(&[1, 2]), 1); // truncated
/// assert_eq!(average(&[1.0, 2.0]), 1.5);
/// ```
pub fn average<T: Numeric>(data: &[T]) -> T {
    assert!(!data.is_empty(), "attempt to average an empty slice");
    sum(data).div_wrapping(T::from_len(data.len()))
}

/// Checked version of [`average`].
///
/// # Errors
/// Returns [`SliceError::Empty`] if `data` is empty.
///
/// # Examples
/// ```
/// use u_slices::aggregate::try_average;
/// use u_slices::SliceError;
/// assert_eq!(try_average(&[2.0, 4.0]), Ok(3.0));
/// assert_eq!(try_average::<i64>(&[]), Err(SliceError::Empty));
/// ```
pub fn try_average<T: Numeric>(data: &[T]) -> Result<T, SliceError> {
    if data.is_empty() {
        tracing::debug!("average requested for an empty slice");
        return Err(SliceError::Empty);
    }
    Ok(average(data))
}
