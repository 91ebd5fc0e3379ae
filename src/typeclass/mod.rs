//! Type class traits shared by every container.
//!
//! - [`TypeConstructor`]: Higher-kinded type emulation via GAT
//! - [`Foldable`]: Consuming left/right folds into a summary value
//! - [`Semigroup`]: Associative binary combination
//! - [`Monoid`]: Semigroup with an identity element
//!
//! Containers implement these next to their own definitions: a
//! [`Sequence`](crate::collection::Sequence) combines by concatenation, while
//! the hash-based sets combine by union.
//!
//! # Examples
//!
//! ```rust
//! use setgen::typeclass::{Foldable, Monoid, Semigroup};
//!
//! let numbers = vec![1, 2, 3];
//! assert_eq!(numbers.fold_left(0, |accumulator, element| accumulator + element), 6);
//!
//! assert_eq!(vec![1, 2].combine(vec![3]), vec![1, 2, 3]);
//! assert!(Vec::<i32>::empty().is_empty());
//! ```

mod foldable;
mod higher;
mod monoid;
mod semigroup;

pub use foldable::Foldable;
pub use higher::TypeConstructor;
pub use monoid::Monoid;
pub use semigroup::Semigroup;
