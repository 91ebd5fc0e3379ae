//! Capability surfaces shared by every container.
//!
//! [`Container`] is the minimal surface the functional combinators need:
//! iteration, size, and a way to build an empty container with the same
//! order policy and to `put` elements into it. [`SetContainer`] adds
//! membership, which is all the set algebra relies on.

use crate::typeclass::TypeConstructor;

/// Minimal iteration and construction surface of a container.
///
/// For a [`Sequence`](super::Sequence), `put` appends. For every set variant
/// `put` is an idempotent insert.
pub trait Container: TypeConstructor + Sized {
    /// Borrowing iterator in the container's natural iteration order.
    type Iter<'a>: Iterator<Item = &'a Self::Inner>
    where
        Self: 'a;

    /// Returns an iterator in natural iteration order.
    fn iter(&self) -> Self::Iter<'_>;

    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if the container holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Creates an empty container with the same order policy (and
    /// comparator, for sorted sets) as `self`.
    #[must_use]
    fn empty_like(&self, capacity: usize) -> Self;

    /// Adds an element.
    fn put(&mut self, element: Self::Inner);
}

/// A [`Container`] with set semantics.
pub trait SetContainer: Container {
    /// Returns `true` if `element` is a member.
    fn contains(&self, element: &Self::Inner) -> bool;

    /// Removes `element`, returning whether it was present.
    fn remove(&mut self, element: &Self::Inner) -> bool;

    /// Returns `true` if at least one of `elements` is a member.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setgen::prelude::*;
    ///
    /// let set = UnorderedSet::from_slice(&[1, 2, 3]);
    /// assert!(set.contains_any(&[9, 6, 3, 0]));
    /// assert!(!set.contains_any(&[9, 6, 0]));
    /// ```
    fn contains_any(&self, elements: &[Self::Inner]) -> bool {
        elements.iter().any(|element| self.contains(element))
    }

    /// Returns `true` if every one of `elements` is a member.
    ///
    /// Vacuously `true` for an empty slice.
    fn contains_all(&self, elements: &[Self::Inner]) -> bool {
        elements.iter().all(|element| self.contains(element))
    }
}
