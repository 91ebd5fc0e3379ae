//! Dynamic, index-addressable sequence.
//!
//! [`Sequence`] is a growable ordered array. Duplicates are allowed and
//! there is no hash index. Every index argument is an `isize`: a negative
//! index `i` is normalized to `i + len` before use, so `-1` addresses the last
//! element. An index that is still out of range after normalization is
//! reported as [`CollectionError::IndexOutOfBounds`]; nothing is clamped.
//!
//! Ranges are half-open (`from..to`) after normalization.
//!
//! # Examples
//!
//! ```rust
//! use setgen::collection::Sequence;
//!
//! let mut sequence = Sequence::from_vec(vec![1, 3, 5]);
//! sequence.insert(-1, [4]).unwrap();
//! assert_eq!(sequence.to_vec(), vec![1, 3, 4, 5]);
//!
//! assert_eq!(*sequence.get(-1).unwrap(), 5);
//! assert!(sequence.get(4).is_err());
//!
//! let middle = sequence.index_range(1, -1).unwrap();
//! assert_eq!(middle.to_vec(), vec![3, 4]);
//! ```

use std::fmt;
use std::ops::Range;

use super::container::Container;
use crate::error::CollectionError;
use crate::typeclass::{Foldable, Monoid, Semigroup, TypeConstructor};

/// A growable, index-addressable ordered collection.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Sequence<T> {
    elements: Vec<T>,
}

// =============================================================================
// Index Normalization
// =============================================================================

fn normalize(index: isize, length: usize) -> Option<usize> {
    if index < 0 {
        length.checked_add_signed(index)
    } else {
        usize::try_from(index).ok()
    }
}

fn element_position(index: isize, length: usize) -> Result<usize, CollectionError> {
    normalize(index, length)
        .filter(|position| *position < length)
        .ok_or(CollectionError::IndexOutOfBounds { index, length })
}

fn insert_position(index: isize, length: usize) -> Result<usize, CollectionError> {
    normalize(index, length)
        .filter(|position| *position <= length)
        .ok_or(CollectionError::IndexOutOfBounds { index, length })
}

fn span(from: isize, to: isize, length: usize) -> Result<Range<usize>, CollectionError> {
    match (normalize(from, length), normalize(to, length)) {
        (Some(start), Some(end)) if start <= end && end <= length => Ok(start..end),
        _ => Err(CollectionError::RangeOutOfBounds { from, to, length }),
    }
}

impl<T> Sequence<T> {
    /// Creates an empty sequence with room for `capacity` elements.
    #[inline]
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
        }
    }

    /// Wraps an existing `Vec` without copying.
    #[inline]
    #[must_use]
    pub const fn from_vec(elements: Vec<T>) -> Self {
        Self { elements }
    }

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the sequence holds no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns an iterator over the elements in order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// Appends one element.
    #[inline]
    pub fn push(&mut self, element: T) {
        self.elements.push(element);
    }

    /// Appends every element of `items`, in order.
    pub fn append<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.elements.extend(items);
    }

    /// Inserts `items` before the element at `index`.
    ///
    /// After normalization `index` may equal `len()`, which appends.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfBounds`] if the normalized index
    /// is negative or greater than `len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setgen::collection::Sequence;
    ///
    /// let mut sequence = Sequence::from_vec(vec![1, 3, 5]);
    /// sequence.insert(1, [1, 2, 2]).unwrap();
    /// assert_eq!(sequence.to_vec(), vec![1, 1, 2, 2, 3, 5]);
    /// ```
    pub fn insert<I>(&mut self, index: isize, items: I) -> Result<(), CollectionError>
    where
        I: IntoIterator<Item = T>,
    {
        let position = insert_position(index, self.len())?;
        self.elements.splice(position..position, items);
        Ok(())
    }

    /// Removes and returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfBounds`] if `index` does not
    /// address an element.
    pub fn remove(&mut self, index: isize) -> Result<T, CollectionError> {
        let position = element_position(index, self.len())?;
        Ok(self.elements.remove(position))
    }

    /// Removes the elements in `from..to`, returning them.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::RangeOutOfBounds`] if either bound is out
    /// of range or `from > to` after normalization.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setgen::collection::Sequence;
    ///
    /// let mut sequence = Sequence::from_vec(vec![4, 5, 6, 7, 8]);
    /// let removed = sequence.remove_range(1, -1).unwrap();
    /// assert_eq!(removed.to_vec(), vec![5, 6, 7]);
    /// assert_eq!(sequence.to_vec(), vec![4, 8]);
    /// ```
    pub fn remove_range(&mut self, from: isize, to: isize) -> Result<Self, CollectionError> {
        let range = span(from, to, self.len())?;
        Ok(self.elements.drain(range).collect())
    }

    /// Removes every element from `index` to the end, returning them.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfBounds`] if the normalized index
    /// is negative or greater than `len()`.
    pub fn remove_from(&mut self, index: isize) -> Result<Self, CollectionError> {
        let start = insert_position(index, self.len())?;
        Ok(self.elements.drain(start..).collect())
    }

    /// Removes every element before `index`, returning them.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfBounds`] if the normalized index
    /// is negative or greater than `len()`.
    pub fn remove_to(&mut self, index: isize) -> Result<Self, CollectionError> {
        let end = insert_position(index, self.len())?;
        Ok(self.elements.drain(..end).collect())
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// The reference aliases the sequence's storage.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfBounds`] if `index` does not
    /// address an element, including on an empty sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setgen::collection::Sequence;
    ///
    /// let mut sequence = Sequence::from_vec(vec![1, 2, 3]);
    /// *sequence.index(0).unwrap() = 100;
    /// assert_eq!(sequence.to_vec(), vec![100, 2, 3]);
    /// ```
    pub fn index(&mut self, index: isize) -> Result<&mut T, CollectionError> {
        let position = element_position(index, self.len())?;
        Ok(&mut self.elements[position])
    }

    /// Returns a shared reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfBounds`] if `index` does not
    /// address an element.
    pub fn get(&self, index: isize) -> Result<&T, CollectionError> {
        let position = element_position(index, self.len())?;
        Ok(&self.elements[position])
    }

    /// Reference view of the elements in `from..to`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::RangeOutOfBounds`] for an invalid range.
    pub fn index_range_ref(&self, from: isize, to: isize) -> Result<&[T], CollectionError> {
        let range = span(from, to, self.len())?;
        Ok(&self.elements[range])
    }

    /// Reference view of the whole backing array.
    #[inline]
    #[must_use]
    pub fn to_sequence_ref(&self) -> &[T] {
        &self.elements
    }

    /// Mutable reference view of the whole backing array.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.elements
    }

    /// Removes every element, keeping the allocation.
    #[inline]
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Unwraps the backing `Vec`.
    #[inline]
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }

    /// Returns the position of the first element satisfying `predicate`.
    pub fn position_by<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
    {
        self.elements.iter().position(predicate)
    }

    /// Returns the position of the last element satisfying `predicate`.
    pub fn position_last_by<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
    {
        self.elements.iter().rposition(predicate)
    }
}

impl<T: Clone> Sequence<T> {
    /// Creates a sequence holding a copy of `items`.
    #[must_use]
    pub fn from_slice(items: &[T]) -> Self {
        Self::from_vec(items.to_vec())
    }

    /// Returns a copy of the elements as a `Vec`.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.elements.clone()
    }

    /// Returns a fresh sequence holding the elements in `from..to`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::RangeOutOfBounds`] for an invalid range.
    pub fn index_range(&self, from: isize, to: isize) -> Result<Self, CollectionError> {
        self.index_range_ref(from, to).map(Self::from_slice)
    }

    /// Returns a fresh sequence holding the elements from `index` to the end.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfBounds`] if the normalized index
    /// is negative or greater than `len()`.
    pub fn index_from(&self, index: isize) -> Result<Self, CollectionError> {
        let start = insert_position(index, self.len())?;
        Ok(Self::from_slice(&self.elements[start..]))
    }

    /// Returns a fresh sequence holding the elements before `index`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfBounds`] if the normalized index
    /// is negative or greater than `len()`.
    pub fn index_to(&self, index: isize) -> Result<Self, CollectionError> {
        let end = insert_position(index, self.len())?;
        Ok(Self::from_slice(&self.elements[..end]))
    }

    /// Returns a new sequence holding `self` followed by `other`.
    #[must_use]
    pub fn concat(&self, other: &Self) -> Self {
        let mut elements = Vec::with_capacity(self.len() + other.len());
        elements.extend_from_slice(&self.elements);
        elements.extend_from_slice(&other.elements);
        Self::from_vec(elements)
    }

    /// Appends a copy of `other` to `self`.
    pub fn in_place_concat(&mut self, other: &Self) {
        self.elements.extend_from_slice(&other.elements);
    }
}

impl<T: PartialEq> Sequence<T> {
    /// Returns the position of the first element equal to `element`.
    pub fn find(&self, element: &T) -> Option<usize> {
        self.position_by(|candidate| candidate == element)
    }

    /// Returns the position of the last element equal to `element`.
    pub fn find_last(&self, element: &T) -> Option<usize> {
        self.position_last_by(|candidate| candidate == element)
    }

    /// Counts the elements equal to `element`.
    pub fn count(&self, element: &T) -> usize {
        self.elements
            .iter()
            .filter(|candidate| *candidate == element)
            .count()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::new(0)
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(elements: Vec<T>) -> Self {
        Self::from_vec(elements)
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iterator: I) -> Self {
        Self::from_vec(iterator.into_iter().collect())
    }
}

impl<T> Extend<T> for Sequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iterator: I) {
        self.elements.extend(iterator);
    }
}

impl<T> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for Sequence<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Sequence<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<T> TypeConstructor for Sequence<T> {
    type Inner = T;
    type WithType<B> = Sequence<B>;
}

impl<T> Foldable for Sequence<T> {
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.elements.into_iter().fold(init, function)
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        self.elements
            .into_iter()
            .rev()
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

impl<T: Clone> Semigroup for Sequence<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.elements.append(&mut other.elements);
        self
    }

    fn combine_ref(&self, other: &Self) -> Self {
        self.concat(other)
    }
}

impl<T: Clone> Monoid for Sequence<T> {
    fn empty() -> Self {
        Self::new(0)
    }
}

impl<T> Container for Sequence<T> {
    type Iter<'a>
        = std::slice::Iter<'a, T>
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
        self.elements.push(element);
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Sequence<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(&self.elements)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Sequence<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <Vec<T> as serde::Deserialize>::deserialize(deserializer).map(Self::from_vec)
    }
}

// =============================================================================
// Tests
// =============================================================================
