//! Element contract and ordering relations.
//!
//! A type parameter must satisfy [`Element`] to be stored in any set variant.
//! [`SortedSet`](crate::collection::SortedSet) additionally requires a
//! [`Comparator`] deciding whether one element precedes another.
//!
//! # Examples
//!
//! ```rust
//! use setgen::element::{Ascending, Comparator, Descending, FnComparator};
//!
//! assert!(Ascending.precedes(&1, &2));
//! assert!(Descending.precedes(&2, &1));
//!
//! let by_length = FnComparator::new(|left: &String, right: &String| left.len() < right.len());
//! assert!(by_length.precedes(&"a".to_string(), &"bb".to_string()));
//! ```

#[cfg(any(feature = "collection", feature = "registry"))]
use std::collections::HashMap;
use std::hash::Hash;

/// The capability set a type must provide to be stored in a set.
///
/// Equality and hashing drive membership. `Clone` is needed because the
/// ordered variants keep every element both as an index key and in their
/// backing sequence.
///
/// This trait is implemented automatically for every qualifying type.
pub trait Element: Clone + Eq + Hash {}

impl<T: Clone + Eq + Hash> Element for T {}

/// A strict "precedes" relation used to keep a sorted sequence ordered.
///
/// Implementations must describe a strict weak ordering: `precedes(a, a)` is
/// `false` and the relation is transitive.
pub trait Comparator<T: ?Sized> {
    /// Returns `true` if `left` must appear before `right`.
    fn precedes(&self, left: &T, right: &T) -> bool;
}

/// Natural ascending order (`left < right`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Ascending;

impl<T: Ord + ?Sized> Comparator<T> for Ascending {
    #[inline]
    fn precedes(&self, left: &T, right: &T) -> bool {
        left < right
    }
}

/// Natural descending order (`left > right`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Descending;

impl<T: Ord + ?Sized> Comparator<T> for Descending {
    #[inline]
    fn precedes(&self, left: &T, right: &T) -> bool {
        left > right
    }
}

/// Adapts a binary predicate closure into a [`Comparator`].
///
/// Each closure has its own type, so two sorted sets built from different
/// closures have different comparator types and cannot be combined by the
/// set algebra.
#[derive(Clone, Copy)]
pub struct FnComparator<F> {
    function: F,
}

impl<F> FnComparator<F> {
    /// Wraps a `Fn(&T, &T) -> bool` predicate.
    #[inline]
    pub const fn new(function: F) -> Self {
        Self { function }
    }
}

impl<T: ?Sized, F: Fn(&T, &T) -> bool> Comparator<T> for FnComparator<F> {
    #[inline]
    fn precedes(&self, left: &T, right: &T) -> bool {
        (self.function)(left, right)
    }
}

impl<F> std::fmt::Debug for FnComparator<F> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("FnComparator(..)")
    }
}

// =============================================================================
// Hash Index
// =============================================================================

/// The `BuildHasher` used by every hash index in this crate.
///
/// Selected at compile time: `fxhash` takes priority over `ahash`, and the
/// standard library's `RandomState` is used when neither feature is enabled.
#[cfg(feature = "fxhash")]
pub type IndexHasher = rustc_hash::FxBuildHasher;

/// The `BuildHasher` used by every hash index in this crate.
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type IndexHasher = ahash::RandomState;

/// The `BuildHasher` used by every hash index in this crate.
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type IndexHasher = std::collections::hash_map::RandomState;

/// Hash table keyed by elements.
#[cfg(any(feature = "collection", feature = "registry"))]
pub(crate) type HashIndex<K, V> = HashMap<K, V, IndexHasher>;

#[cfg(any(feature = "collection", feature = "registry"))]
#[inline]
pub(crate) fn hash_index_with_capacity<K, V>(capacity: usize) -> HashIndex<K, V> {
    HashMap::with_capacity_and_hasher(capacity, IndexHasher::default())
}
