//! Error type for the checked slice operations.
//!
//! Most functions in this crate are total. The two that are not,
//! [`remove_at`](crate::slices::remove_at) and
//! [`average`](crate::aggregate::average), panic on bad input; their
//! `try_` counterparts report the same condition as a [`SliceError`].

use thiserror::Error;

/// Precondition violations reported by the checked operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SliceError {
    #[error("index {index} out of range for slice of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("cannot average an empty slice")]
    Empty,
}
