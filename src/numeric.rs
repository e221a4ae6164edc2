//! The numeric bound used by the aggregation functions.
//!
//! [`Numeric`] is implemented for a closed set of primitive types and
//! cannot be implemented outside this crate:
//!
//! | Signed | Unsigned | Float |
//! |---|---|---|
//! | `i8` `i16` `i32` `i64` `isize` | `u8` `u16` `u32` `u64` `usize` | `f32` `f64` |

use std::ops::{Add, Div};

mod private {
    pub trait Sealed {}
}

/// A primitive number supporting ordering, addition and division.
///
/// # Examples
/// ```
/// use u_slices::numeric::Numeric;
///
/// fn halve<T: Numeric>(x: T) -> T {
///     x / T::from_len(2)
/// }
/// assert_eq!(halve(9_u32), 4);
/// assert_eq!(halve(9.0_f64), 4.5);
/// ```
pub trait Numeric:
    Copy + PartialOrd + Add<Output = Self> + Div<Output = Self> + private::Sealed
{
    /// The additive identity.
    const ZERO: Self;

    /// Converts a slice length into `Self` with primitive `as` semantics.
    ///
    /// Lengths that do not fit a narrow integer type wrap, and very large
    /// lengths lose precision as floats.
    fn from_len(len: usize) -> Self;

    /// Addition that wraps around on integer overflow instead of panicking.
    ///
    /// Plain `+` for floats.
    fn add_wrapping(self, rhs: Self) -> Self;

    /// Division that wraps on the one overflowing integer case
    /// (`MIN / -1`). Still panics when `rhs` is an integer zero.
    fn div_wrapping(self, rhs: Self) -> Self;
}

macro_rules! impl_numeric {
    (int => $($t:ty),+) => {
        $(
            impl private::Sealed for $t {}

            impl Numeric for $t {
                const ZERO: Self = 0;

                #[inline]
                fn from_len(len: usize) -> Self {
                    len as $t
                }

                #[inline]
                fn add_wrapping(self, rhs: Self) -> Self {
                    self.wrapping_add(rhs)
                }

                #[inline]
                fn div_wrapping(self, rhs: Self) -> Self {
                    self.wrapping_div(rhs)
                }
            }
        )+
    };
    (float => $($t:ty),+) => {
        $(
            impl private::Sealed for $t {}

            impl Numeric for $t {
                const ZERO: Self = 0.0;

                #[inline]
                fn from_len(len: usize) -> Self {
                    len as $t
                }

                #[inline]
                fn add_wrapping(self, rhs: Self) -> Self {
                    self + rhs
                }

                #[inline]
                fn div_wrapping(self, rhs: Self) -> Self {
                    self / rhs
                }
            }
        )+
    };
}

impl_numeric!(int => i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_numeric!(float => f32, f64);
