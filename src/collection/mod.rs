//! Set and sequence containers with a shared functional surface.
//!
//! This module provides three set variants and one dynamic array:
//!
//! - [`UnorderedSet`]: Hash set with unspecified iteration order
//! - [`InsertionOrderedSet`]: Hash set iterated in first-insertion order
//! - [`SortedSet`]: Hash set kept sorted by an injected comparator
//! - [`Sequence`]: Growable array with negative indexing and duplicates
//!
//! Behavior common to all of them is written once against two small
//! capability traits:
//!
//! - [`Container`] / [`SetContainer`]: iteration, size, `put`, membership
//! - [`Combinators`]: filter, map, fold, reduce, find, and group-by
//! - [`SetAlgebra`]: union, intersection, difference, and subset relations
//!
//! # Ordered Variants
//!
//! Both ordered sets keep a hash index from element to position next to the
//! backing sequence. Removal compacts the sequence, so positions stay dense
//! and `index[sequence[i]] == i` holds after every operation.
//!
//! # Examples
//!
//! ## `InsertionOrderedSet`
//!
//! ```rust
//! use setgen::prelude::*;
//!
//! let mut set = InsertionOrderedSet::from_slice(&[1, 2, 3]);
//! set.remove(&1);
//! set.put(4);
//! set.put(1);
//! assert_eq!(set.to_vec(), vec![2, 3, 4, 1]);
//!
//! // Equality ignores order
//! assert_eq!(set, InsertionOrderedSet::from_slice(&[1, 2, 3, 4]));
//! ```
//!
//! ## `SortedSet`
//!
//! ```rust
//! use setgen::prelude::*;
//!
//! let set = SortedSet::descending_from_slice(&[3, 8, 1, 5]);
//! assert_eq!(set.to_vec(), vec![8, 5, 3, 1]);
//!
//! // Derived sets keep the comparator
//! let small = set.filter(|element| *element < 5);
//! assert_eq!(small.to_vec(), vec![3, 1]);
//! ```
//!
//! ## `Sequence`
//!
//! ```rust
//! use setgen::prelude::*;
//!
//! let mut sequence = Sequence::from_vec(vec![1, 3, 5]);
//! sequence.insert(-1, [4]).unwrap();
//! assert_eq!(sequence.to_vec(), vec![1, 3, 4, 5]);
//!
//! let by_parity = sequence.group_by_bool(|element| element % 2 == 0);
//! assert_eq!(by_parity.0.to_vec(), vec![4]);
//! assert_eq!(by_parity.1.to_vec(), vec![1, 3, 5]);
//! ```

mod algebra;
mod combinators;
mod container;
mod insertion_ordered_set;
#[cfg(feature = "serde")]
mod json;
mod ordered_index;
mod sequence;
mod sorted_set;
mod unordered_set;

pub use algebra::SetAlgebra;
pub use combinators::Combinators;
pub use container::{Container, SetContainer};
pub use insertion_ordered_set::InsertionOrderedSet;
#[cfg(feature = "serde")]
pub use json::JsonCodec;
pub use sequence::Sequence;
pub use sorted_set::SortedSet;
pub use unordered_set::UnorderedSet;

// =============================================================================
// Static Assertions
// =============================================================================

static_assertions::assert_impl_all!(Sequence<i32>: Send, Sync, Clone, Default);
static_assertions::assert_impl_all!(UnorderedSet<i32>: Send, Sync, Clone, Default);
static_assertions::assert_impl_all!(InsertionOrderedSet<String>: Send, Sync, Clone, Default);
static_assertions::assert_impl_all!(SortedSet<i32>: Send, Sync, Clone, SetAlgebra);
static_assertions::assert_impl_all!(SortedSet<i32, crate::element::Descending>: Send, Sync, Clone, SetAlgebra);

// Containers add no thread-safety beyond the element's own.
static_assertions::assert_not_impl_any!(UnorderedSet<std::rc::Rc<i32>>: Send, Sync);
static_assertions::assert_not_impl_any!(InsertionOrderedSet<std::rc::Rc<i32>>: Send, Sync);
