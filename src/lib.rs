//! # u-slices
//!
//! Generic helpers over slices for the U-Engine ecosystem.
//!
//! This crate provides expression-level building blocks for working with
//! ordered sequences: filtering and mapping into fresh `Vec`s, uniqueness,
//! association into hash maps, interspersion, numeric aggregation and
//! shuffling. It defines no container types of its own.
//!
//! ## Modules
//!
//! - [`slices`] — Remove, filter, map, membership, uniqueness and folds
//! - [`aggregate`] — Max, min, sum and average over [`Numeric`] slices
//! - [`associate`] — Building `HashMap`s from keys, values or both
//! - [`intersperse`] — Separators between adjacent elements
//! - [`random`] — Fisher-Yates shuffle, in place
//! - [`numeric`] — The sealed [`Numeric`] bound
//!
//! ## Design Philosophy
//!
//! - **Pure by default**: every function borrows its input and returns a
//!   new collection, except [`shuffle`] which permutes `&mut [T]`
//! - **Total where possible**: empty input gives a documented result;
//!   only [`remove_at`] and [`average`] panic, and both have `try_` forms
//! - **Property-based testing**: invariants verified via proptest
//!
//! ## Example
//!
//! ```
//! use u_slices::{average, intersperse, unique};
//!
//! let scores = [3, 5, 5, 8, 3];
//! assert_eq!(unique(&scores), vec![3, 5, 8]);
//! assert_eq!(average(&scores), 4);
//! assert_eq!(intersperse(&["a", "b"], "|"), vec!["a", "|", "b"]);
//! ```

pub mod aggregate;
pub mod associate;
pub mod error;
pub mod intersperse;
pub mod numeric;
pub mod random;
pub mod slices;

pub use aggregate::{average, max, min, sum, try_average};
pub use associate::{associate, associate_by, associate_reverse_by};
pub use error::SliceError;
pub use intersperse::{intersperse, intersperse_by, intersperse_by_index};
pub use numeric::Numeric;
pub use random::{create_rng, shuffle, shuffle_with, shuffled_indices};
pub use slices::{
    contains, every, filter, index_of, map, reduce, remove, remove_at, some, try_remove_at,
    unique, unique_by,
};
