//! # setgen
//!
//! Typed set and sequence containers with a shared functional surface.
//!
//! ## Overview
//!
//! This library provides the runtime engine behind per-type collection
//! declarations: a container is chosen per element type, and every container
//! exposes the same combinators and set algebra.
//!
//! - **Sets**: [`UnorderedSet`](collection::UnorderedSet),
//!   [`InsertionOrderedSet`](collection::InsertionOrderedSet), and
//!   [`SortedSet`](collection::SortedSet)
//! - **Sequence**: a growable array with negative indexing
//! - **Combinators**: filter, map, fold, reduce, find, and group-by
//! - **Set Algebra**: union, intersection, difference, and subset relations
//! - **Type Classes**: Foldable, Semigroup, and Monoid for every container
//! - **Registry**: an explicit, non-global table of container declarations
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (`TypeConstructor`, `Foldable`, ...)
//! - `collection`: Set and sequence containers
//! - `registry`: Container declaration registry
//! - `serde`: Serialization support and the `JsonCodec` trait
//! - `fxhash`: Use `rustc_hash` for the hash index
//! - `ahash`: Use `ahash` for the hash index
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use setgen::prelude::*;
//!
//! let mut set = SortedSet::ascending_from_slice(&[3, 8, 1, 5, 3, 5, 4]);
//! set.remove(&5);
//! set.put(2);
//! assert_eq!(set.to_vec(), vec![1, 2, 3, 4, 8]);
//!
//! let doubled = set.map(|element| element * 2);
//! assert_eq!(doubled.to_vec(), vec![2, 4, 6, 8, 16]);
//!
//! let total = set.reduce(|left, right| left + right)?;
//! assert_eq!(total, 18);
//! # Ok::<(), setgen::CollectionError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use setgen::prelude::*;
/// ```
pub mod prelude {
    pub use crate::element::{Ascending, Comparator, Descending, Element, FnComparator};
    pub use crate::error::CollectionError;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "collection")]
    pub use crate::collection::*;

    #[cfg(feature = "registry")]
    pub use crate::registry::*;
}

pub mod element;
pub mod error;

pub use error::CollectionError;

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "collection")]
pub mod collection;

#[cfg(feature = "registry")]
pub mod registry;
