//! Hash-based set without ordering guarantees.
//!
//! [`UnorderedSet`] is backed by a single hash table. Membership is the only
//! source of truth: iteration order is unspecified and may change across
//! mutations, so `find_last_by` is not offered and order-sensitive folds
//! give unspecified results.
//!
//! # Examples
//!
//! ```rust
//! use setgen::prelude::*;
//!
//! let mut set = UnorderedSet::from_slice(&[1, 2, 3]);
//! set.remove(&1);
//! set.put(4);
//! set.put(4);
//!
//! assert_eq!(set.len(), 3);
//! assert!(set.contains_all(&[2, 3, 4]));
//! assert!(set.equal(&UnorderedSet::from_slice(&[4, 3, 2])));
//! ```

use std::borrow::Borrow;
use std::collections::HashSet;
use std::collections::hash_set;
use std::fmt;
use std::hash::Hash;

use super::Sequence;
use super::algebra::SetAlgebra;
use super::container::{Container, SetContainer};
use crate::element::{Element, IndexHasher};
use crate::typeclass::{Foldable, Monoid, Semigroup, TypeConstructor};

/// A set of unique elements with unspecified iteration order.
#[derive(Clone)]
pub struct UnorderedSet<T> {
    elements: HashSet<T, IndexHasher>,
}

impl<T: Element> UnorderedSet<T> {
    /// Creates an empty set with room for `capacity` elements.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            elements: HashSet::with_capacity_and_hasher(capacity, IndexHasher::default()),
        }
    }

    /// Creates a set from a slice. Duplicates collapse.
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
        self.elements.len()
    }

    /// Returns `true` if the set holds no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Inserts `element`. Inserting a present element is a no-op.
    ///
    /// Returns whether the element was newly inserted.
    #[inline]
    pub fn put(&mut self, element: T) -> bool {
        self.elements.insert(element)
    }

    /// Removes `element`. Removing an absent element is a no-op.
    ///
    /// Returns whether the element was present.
    #[inline]
    pub fn remove<Q>(&mut self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.elements.remove(element)
    }

    /// Returns `true` if `element` is a member.
    #[inline]
    #[must_use]
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.elements.contains(element)
    }

    /// Removes every element.
    #[inline]
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Returns an iterator in unspecified order.
    #[inline]
    pub fn iter(&self) -> hash_set::Iter<'_, T> {
        self.elements.iter()
    }

    /// Copies the elements into a [`Sequence`] in unspecified order.
    #[must_use]
    pub fn to_sequence(&self) -> Sequence<T> {
        self.iter().cloned().collect()
    }

    /// Copies the elements into a `Vec` in unspecified order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T: Element> Default for UnorderedSet<T> {
    fn default() -> Self {
        Self::new(0)
    }
}

impl<T: Element> FromIterator<T> for UnorderedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iterator: I) -> Self {
        let mut set = Self::new(0);
        set.extend(iterator);
        set
    }
}

impl<T: Element> Extend<T> for UnorderedSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iterator: I) {
        self.elements.extend(iterator);
    }
}

impl<T> IntoIterator for UnorderedSet<T> {
    type Item = T;
    type IntoIter = hash_set::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a UnorderedSet<T> {
    type Item = &'a T;
    type IntoIter = hash_set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<T: Element> PartialEq for UnorderedSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.equal(other)
    }
}

impl<T: Element> Eq for UnorderedSet<T> {}

impl<T: fmt::Debug> fmt::Debug for UnorderedSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.elements.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for UnorderedSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
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

impl<T> TypeConstructor for UnorderedSet<T> {
    type Inner = T;
    type WithType<B> = UnorderedSet<B>;
}

impl<T: Element> Foldable for UnorderedSet<T> {
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
        // No defined order, so a right fold visits elements like a left fold.
        self.into_iter()
            .fold(init, |accumulator, element| function(element, accumulator))
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    #[inline]
    fn length(&self) -> usize {
        self.elements.len()
    }
}

impl<T: Element> Semigroup for UnorderedSet<T> {
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }

    fn combine_ref(&self, other: &Self) -> Self {
        self.union(other)
    }
}

impl<T: Element> Monoid for UnorderedSet<T> {
    fn empty() -> Self {
        Self::new(0)
    }
}

impl<T: Element> Container for UnorderedSet<T> {
    type Iter<'a>
        = hash_set::Iter<'a, T>
    where
        Self: 'a;

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        self.elements.iter()
    }

    #[inline]
    fn len(&self) -> usize {
        self.elements.len()
    }

    fn empty_like(&self, capacity: usize) -> Self {
        Self::new(capacity)
    }

    #[inline]
    fn put(&mut self, element: T) {
        self.elements.insert(element);
    }
}

impl<T: Element> SetContainer for UnorderedSet<T> {
    #[inline]
    fn contains(&self, element: &T) -> bool {
        self.elements.contains(element)
    }

    #[inline]
    fn remove(&mut self, element: &T) -> bool {
        self.elements.remove(element)
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for UnorderedSet<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(&self.elements)
    }
}

#[cfg(feature = "serde")]
struct UnorderedSetVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for UnorderedSetVisitor<T>
where
    T: serde::Deserialize<'de> + Element,
{
    type Value = UnorderedSet<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut set = UnorderedSet::new(seq.size_hint().unwrap_or(0));
        while let Some(element) = seq.next_element()? {
            set.put(element);
        }
        Ok(set)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for UnorderedSet<T>
where
    T: serde::Deserialize<'de> + Element,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(UnorderedSetVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
