//! Hash-based set kept sorted by an injected comparator.
//!
//! [`SortedSet`] shares the dual structure of
//! [`InsertionOrderedSet`](super::InsertionOrderedSet): a hash index from
//! element to position plus a backing sequence. The sequence is kept
//! monotonic under the comparator `C` at all times. `put` finds the insertion
//! point with a binary search (`O(log n)` comparisons) and shifts the tail
//! right (`O(n)`); `remove` compacts the same way as the insertion-ordered
//! variant.
//!
//! The comparator is part of the type. Ascending and descending sets of the
//! same element type are different types, and so are sets built from two
//! different closures, so the set algebra never mixes incompatible orders.
//!
//! A comparator is behavior, not data: encoding a sorted set produces a plain
//! array in sorted order, but decoding one is always rejected.
//!
//! # Examples
//!
//! ```rust
//! use setgen::collection::SortedSet;
//!
//! let mut set = SortedSet::ascending_from_slice(&[3, 8, 1, 5, 3, 5, 4]);
//! assert_eq!(set.len(), 5);
//! assert_eq!(set.to_vec(), vec![1, 3, 4, 5, 8]);
//!
//! set.remove(&5);
//! set.put(2);
//! assert_eq!(set.to_vec(), vec![1, 2, 3, 4, 8]);
//! ```

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;

use super::Sequence;
use super::algebra::SetAlgebra;
use super::container::{Container, SetContainer};
use super::ordered_index::OrderedIndex;
use crate::element::{Ascending, Comparator, Descending, Element};
use crate::typeclass::{Foldable, Monoid, Semigroup, TypeConstructor};

/// A set of unique elements iterated in comparator order.
///
/// `C` decides whether one element precedes another. It defaults to
/// [`Ascending`].
#[derive(Clone)]
pub struct SortedSet<T, C = Ascending> {
    index: OrderedIndex<T>,
    comparator: C,
}

impl<T: Element, C: Comparator<T>> SortedSet<T, C> {
    /// Creates an empty set ordered by `comparator`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setgen::collection::SortedSet;
    /// use setgen::element::FnComparator;
    ///
    /// let by_length = FnComparator::new(|left: &&str, right: &&str| left.len() < right.len());
    /// let mut set = SortedSet::with_comparator(0, by_length);
    /// set.extend(["ccc", "a", "bb"]);
    /// assert_eq!(set.to_vec(), vec!["a", "bb", "ccc"]);
    /// ```
    #[must_use]
    pub fn with_comparator(capacity: usize, comparator: C) -> Self {
        Self {
            index: OrderedIndex::with_capacity(capacity),
            comparator,
        }
    }

    /// Creates a set ordered by `comparator` from a slice. Duplicates collapse.
    #[must_use]
    pub fn from_slice_with(items: &[T], comparator: C) -> Self {
        let mut set = Self::with_comparator(items.len(), comparator);
        set.extend(items.iter().cloned());
        set
    }

    /// Returns the comparator fixed at construction.
    #[inline]
    pub const fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns `true` if the set holds no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.len() == 0
    }

    /// Inserts `element` at its sorted position if absent.
    ///
    /// Returns whether the element was newly inserted.
    pub fn put(&mut self, element: T) -> bool {
        if self.index.contains(&element) {
            return false;
        }
        let position = self
            .index
            .as_slice()
            .partition_point(|existing| !self.comparator.precedes(&element, existing));
        self.index.insert_at(position, element);
        true
    }

    /// Removes `element` if present, compacting later positions.
    ///
    /// Returns whether the element was present.
    #[inline]
    pub fn remove<Q>(&mut self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.remove(element).is_some()
    }

    /// Returns `true` if `element` is a member.
    #[inline]
    #[must_use]
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains(element)
    }

    /// Returns the sorted position of `element`.
    #[inline]
    #[must_use]
    pub fn position<Q>(&self, element: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.position(element)
    }

    /// Returns the element at sorted position `position`.
    #[inline]
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&T> {
        self.index.as_slice().get(position)
    }

    /// Removes every element. The comparator is kept.
    #[inline]
    pub fn clear(&mut self) {
        self.index.clear();
    }

    /// Returns an iterator in comparator order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.index.as_slice().iter()
    }

    /// Copies the elements into a [`Sequence`] in comparator order.
    #[must_use]
    pub fn to_sequence(&self) -> Sequence<T> {
        Sequence::from_slice(self.index.as_slice())
    }

    /// Copies the elements into a `Vec` in comparator order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.index.as_slice().to_vec()
    }

    /// Read-only reference view of the sorted backing sequence.
    #[inline]
    #[must_use]
    pub fn to_sequence_ref(&self) -> &[T] {
        self.index.as_slice()
    }

    #[cfg(test)]
    pub(crate) fn is_consistent(&self) -> bool {
        self.index.is_consistent()
            && self
                .index
                .as_slice()
                .windows(2)
                .all(|pair| !self.comparator.precedes(&pair[1], &pair[0]))
    }
}

impl<T: Element, C: Comparator<T> + Default> SortedSet<T, C> {
    /// Creates an empty set with a default-constructed comparator.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self::with_comparator(capacity, C::default())
    }

    /// Creates a set from a slice with a default-constructed comparator.
    #[must_use]
    pub fn from_slice(items: &[T]) -> Self {
        Self::from_slice_with(items, C::default())
    }
}

impl<T: Element + Ord> SortedSet<T, Ascending> {
    /// Creates an empty set in ascending natural order.
    #[must_use]
    pub fn ascending(capacity: usize) -> Self {
        Self::with_comparator(capacity, Ascending)
    }

    /// Creates a set in ascending natural order from a slice.
    #[must_use]
    pub fn ascending_from_slice(items: &[T]) -> Self {
        Self::from_slice_with(items, Ascending)
    }
}

impl<T: Element + Ord> SortedSet<T, Descending> {
    /// Creates an empty set in descending natural order.
    #[must_use]
    pub fn descending(capacity: usize) -> Self {
        Self::with_comparator(capacity, Descending)
    }

    /// Creates a set in descending natural order from a slice.
    #[must_use]
    pub fn descending_from_slice(items: &[T]) -> Self {
        Self::from_slice_with(items, Descending)
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T: Element, C: Comparator<T> + Default> Default for SortedSet<T, C> {
    fn default() -> Self {
        Self::new(0)
    }
}

impl<T: Element, C: Comparator<T> + Default> FromIterator<T> for SortedSet<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iterator: I) -> Self {
        let mut set = Self::new(0);
        set.extend(iterator);
        set
    }
}

impl<T: Element, C: Comparator<T>> Extend<T> for SortedSet<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iterator: I) {
        for element in iterator {
            self.put(element);
        }
    }
}

impl<T: Element, C> IntoIterator for SortedSet<T, C> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.index.into_vec().into_iter()
    }
}

impl<'a, T: Element, C: Comparator<T>> IntoIterator for &'a SortedSet<T, C> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Element, C: Comparator<T> + Clone> PartialEq for SortedSet<T, C> {
    fn eq(&self, other: &Self) -> bool {
        self.equal(other)
    }
}

impl<T: Element, C: Comparator<T> + Clone> Eq for SortedSet<T, C> {}

impl<T: Element + fmt::Debug, C: Comparator<T>> fmt::Debug for SortedSet<T, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<T: Element + fmt::Display, C: Comparator<T>> fmt::Display for SortedSet<T, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        for (position, element) in self.iter().enumerate() {
            if position > 0 {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "}}")
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<T, C> TypeConstructor for SortedSet<T, C> {
    type Inner = T;
    type WithType<B> = SortedSet<B, C>;
}

impl<T: Element, C: Comparator<T>> Foldable for SortedSet<T, C> {
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.into_iter().fold(init, function)
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        self.into_iter()
            .rev()
            .fold(init, |accumulator, element| function(element, accumulator))
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.index.len() == 0
    }

    #[inline]
    fn length(&self) -> usize {
        self.index.len()
    }
}

impl<T: Element, C: Comparator<T> + Clone> Semigroup for SortedSet<T, C> {
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }

    fn combine_ref(&self, other: &Self) -> Self {
        self.union(other)
    }
}

impl<T: Element, C: Comparator<T> + Clone + Default> Monoid for SortedSet<T, C> {
    fn empty() -> Self {
        Self::new(0)
    }
}

impl<T: Element, C: Comparator<T> + Clone> Container for SortedSet<T, C> {
    type Iter<'a>
        = std::slice::Iter<'a, T>
    where
        Self: 'a;

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        self.index.as_slice().iter()
    }

    #[inline]
    fn len(&self) -> usize {
        self.index.len()
    }

    fn empty_like(&self, capacity: usize) -> Self {
        Self::with_comparator(capacity, self.comparator.clone())
    }

    #[inline]
    fn put(&mut self, element: T) {
        SortedSet::put(self, element);
    }
}

impl<T: Element, C: Comparator<T> + Clone> SetContainer for SortedSet<T, C> {
    #[inline]
    fn contains(&self, element: &T) -> bool {
        self.index.contains(element)
    }

    #[inline]
    fn remove(&mut self, element: &T) -> bool {
        self.index.remove(element).is_some()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: Element + serde::Serialize, C> serde::Serialize for SortedSet<T, C> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.index.as_slice())
    }
}

/// Always fails: the comparator cannot be recovered from encoded data.
#[cfg(feature = "serde")]
impl<'de, T, C> serde::Deserialize<'de> for SortedSet<T, C> {
    fn deserialize<D>(_deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Err(serde::de::Error::custom(
            crate::error::CollectionError::Unsupported {
                container: "SortedSet",
                operation: "deserialize",
            },
        ))
    }
}

// =============================================================================
// Tests
// =============================================================================
