//! Set algebra written once against the [`SetContainer`] surface.
//!
//! Every operation here relies only on `len`, `iter`, `contains`, `put` and
//! `empty_like`, so the same code serves [`UnorderedSet`](super::UnorderedSet),
//! [`InsertionOrderedSet`](super::InsertionOrderedSet) and
//! [`SortedSet`](super::SortedSet). All operations are non-mutating except
//! [`SetAlgebra::in_place_union`].
//!
//! Result ordering for the ordered variants:
//!
//! - `union` keeps the receiver's order, followed by the new elements of the
//!   argument in the argument's order.
//! - `difference` keeps the receiver's order.
//! - `intersect` walks the smaller operand, so it keeps that operand's order.
//! - A [`SortedSet`](super::SortedSet) result is always re-sorted by its
//!   comparator regardless.
//!
//! Two sorted sets only combine when their comparator types agree:
//!
//! ```compile_fail
//! use setgen::prelude::*;
//!
//! let ascending = SortedSet::ascending_from_slice(&[1, 2]);
//! let descending = SortedSet::descending_from_slice(&[2, 3]);
//! let _ = ascending.union(&descending);
//! ```

use super::container::SetContainer;

/// Union, intersection, difference, and subset relations.
pub trait SetAlgebra: SetContainer {
    /// Returns `true` if both sets hold exactly the same elements.
    ///
    /// Iteration order is ignored.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setgen::prelude::*;
    ///
    /// let left = InsertionOrderedSet::from_slice(&[1, 2, 3]);
    /// let right = InsertionOrderedSet::from_slice(&[3, 1, 2]);
    /// assert!(left.equal(&right));
    /// assert_ne!(left.to_vec(), right.to_vec());
    /// ```
    fn equal(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|element| other.contains(element))
    }

    /// Elements of `self` that are not in `other`.
    #[must_use]
    fn difference(&self, other: &Self) -> Self
    where
        Self::Inner: Clone,
    {
        let mut difference = self.empty_like(0);
        for element in self.iter() {
            if !other.contains(element) {
                difference.put(element.clone());
            }
        }
        difference
    }

    /// Elements present in both sets. Iterates the smaller operand.
    #[must_use]
    fn intersect(&self, other: &Self) -> Self
    where
        Self::Inner: Clone,
    {
        let (smaller, larger) = if self.len() < other.len() {
            (self, other)
        } else {
            (other, self)
        };
        let mut intersection = self.empty_like(smaller.len());
        for element in smaller.iter() {
            if larger.contains(element) {
                intersection.put(element.clone());
            }
        }
        intersection
    }

    /// A copy of `self` with every element of `other` added.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setgen::prelude::*;
    ///
    /// let left = InsertionOrderedSet::from_slice(&[3, 1]);
    /// let right = InsertionOrderedSet::from_slice(&[2, 3, 4]);
    /// assert_eq!(left.union(&right).to_vec(), vec![3, 1, 2, 4]);
    /// ```
    #[must_use]
    fn union(&self, other: &Self) -> Self
    where
        Self: Clone,
        Self::Inner: Clone,
    {
        let mut union = self.clone();
        union.in_place_union(other);
        union
    }

    /// Adds every element of `other` to `self`.
    fn in_place_union(&mut self, other: &Self)
    where
        Self::Inner: Clone,
    {
        for element in other.iter() {
            self.put(element.clone());
        }
    }

    /// Returns `true` if every element of `self` is in `other`.
    fn is_subset_of(&self, other: &Self) -> bool {
        self.len() <= other.len() && self.iter().all(|element| other.contains(element))
    }

    /// Returns `true` if every element of `other` is in `self`.
    fn is_superset_of(&self, other: &Self) -> bool {
        other.is_subset_of(self)
    }

    /// Subset that is not equal.
    fn is_proper_subset_of(&self, other: &Self) -> bool {
        !self.equal(other) && self.is_subset_of(other)
    }

    /// Superset that is not equal.
    fn is_proper_superset_of(&self, other: &Self) -> bool {
        !self.equal(other) && self.is_superset_of(other)
    }
}

impl<S: SetContainer> SetAlgebra for S {}
