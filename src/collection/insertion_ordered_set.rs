//! Hash-based set that iterates in first-insertion order.
//!
//! [`InsertionOrderedSet`] pairs a hash index (element to position) with a
//! backing sequence. `put` appends an absent element at the end; putting a
//! present element leaves its position unchanged. `remove` compacts the
//! sequence so every later element moves down by one position.
//!
//! Equality ignores order even though iteration is ordered.
//!
//! # Examples
//!
//! ```rust
//! use setgen::collection::InsertionOrderedSet;
//!
//! let mut set = InsertionOrderedSet::from_slice(&[1, 2, 3]);
//! set.remove(&1);
//! assert_eq!(set.to_vec(), vec![2, 3]);
//! set.put(4);
//! set.put(3);
//! assert_eq!(set.to_vec(), vec![2, 3, 4]);
//! set.put(1);
//! assert_eq!(set.to_vec(), vec![2, 3, 4, 1]);
//! ```

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;

use super::Sequence;
use super::algebra::SetAlgebra;
use super::container::{Container, SetContainer};
use super::ordered_index::OrderedIndex;
use crate::element::Element;
use crate::typeclass::{Foldable, Monoid, Semigroup, TypeConstructor};

/// A set of unique elements iterated in first-insertion order.
#[derive(Clone)]
pub struct InsertionOrderedSet<T> {
    index: OrderedIndex<T>,
}

impl<T: Element> InsertionOrderedSet<T> {
    /// Creates an empty set with room for `capacity` elements.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            index: OrderedIndex::with_capacity(capacity),
        }
    }

    /// Creates a set from a slice, keeping the first occurrence of each
    /// element in slice order.
    #[must_use]
    pub fn from_slice(items: &[T]) -> Self {
        let mut set = Self::new(items.len());
        set.extend(items.iter().cloned());
        set
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

    /// Appends `element` if absent. A present element keeps its position.
    ///
    /// Returns whether the element was newly inserted.
    #[inline]
    pub fn put(&mut self, element: T) -> bool {
        self.index.push(element)
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

    /// Returns the iteration position of `element`.
    #[inline]
    #[must_use]
    pub fn position<Q>(&self, element: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.position(element)
    }

    /// Returns the element at iteration position `position`.
    #[inline]
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&T> {
        self.index.as_slice().get(position)
    }

    /// Removes every element.
    #[inline]
    pub fn clear(&mut self) {
        self.index.clear();
    }

    /// Returns an iterator in insertion order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.index.as_slice().iter()
    }

    /// Copies the elements into a [`Sequence`] in insertion order.
    #[must_use]
    pub fn to_sequence(&self) -> Sequence<T> {
        Sequence::from_slice(self.index.as_slice())
    }

    /// Copies the elements into a `Vec` in insertion order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.index.as_slice().to_vec()
    }

    /// Reference view of the backing sequence, without copying.
    ///
    /// The view is read-only: the borrow keeps the set from being mutated
    /// while it is alive, so the index cannot drift from the sequence.
    #[inline]
    #[must_use]
    pub fn to_sequence_ref(&self) -> &[T] {
        self.index.as_slice()
    }

    #[cfg(test)]
    pub(crate) fn is_consistent(&self) -> bool {
        self.index.is_consistent()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T: Element> Default for InsertionOrderedSet<T> {
    fn default() -> Self {
        Self::new(0)
    }
}

impl<T: Element> FromIterator<T> for InsertionOrderedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iterator: I) -> Self {
        let mut set = Self::new(0);
        set.extend(iterator);
        set
    }
}

impl<T: Element> Extend<T> for InsertionOrderedSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iterator: I) {
        for element in iterator {
            self.index.push(element);
        }
    }
}

impl<T: Element> IntoIterator for InsertionOrderedSet<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.index.into_vec().into_iter()
    }
}

impl<'a, T: Element> IntoIterator for &'a InsertionOrderedSet<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Element> PartialEq for InsertionOrderedSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.equal(other)
    }
}

impl<T: Element> Eq for InsertionOrderedSet<T> {}

impl<T: Element + fmt::Debug> fmt::Debug for InsertionOrderedSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<T: Element + fmt::Display> fmt::Display for InsertionOrderedSet<T> {
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

impl<T> TypeConstructor for InsertionOrderedSet<T> {
    type Inner = T;
    type WithType<B> = InsertionOrderedSet<B>;
}

impl<T: Element> Foldable for InsertionOrderedSet<T> {
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

impl<T: Element> Semigroup for InsertionOrderedSet<T> {
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }

    fn combine_ref(&self, other: &Self) -> Self {
        self.union(other)
    }
}

impl<T: Element> Monoid for InsertionOrderedSet<T> {
    fn empty() -> Self {
        Self::new(0)
    }
}

impl<T: Element> Container for InsertionOrderedSet<T> {
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
        Self::new(capacity)
    }

    #[inline]
    fn put(&mut self, element: T) {
        self.index.push(element);
    }
}

impl<T: Element> SetContainer for InsertionOrderedSet<T> {
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
impl<T: Element + serde::Serialize> serde::Serialize for InsertionOrderedSet<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.index.as_slice())
    }
}

#[cfg(feature = "serde")]
struct InsertionOrderedSetVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for InsertionOrderedSetVisitor<T>
where
    T: serde::Deserialize<'de> + Element,
{
    type Value = InsertionOrderedSet<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        // Array order becomes insertion order; later duplicates are dropped.
        let mut set = InsertionOrderedSet::new(seq.size_hint().unwrap_or(0));
        while let Some(element) = seq.next_element()? {
            set.put(element);
        }
        Ok(set)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for InsertionOrderedSet<T>
where
    T: serde::Deserialize<'de> + Element,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(InsertionOrderedSetVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
