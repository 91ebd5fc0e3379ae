//! Hash index paired with an ordered backing sequence.
//!
//! Both ordered set variants store their elements twice: once as keys of a
//! hash index mapping each element to its position, and once in a `Vec`
//! holding the iteration order. [`OrderedIndex`] owns both and maintains the
//! bijection between them:
//!
//! ```text
//! for every position i < sequence.len():  positions[sequence[i]] == i
//! positions.len() == sequence.len()
//! ```
//!
//! Insertion at a position shifts every later element right by one and
//! re-indexes it. Removal compacts: every element after the removed position
//! shifts left by one and is re-indexed. Both are O(n) in the number of
//! shifted elements.

use std::borrow::Borrow;
use std::hash::Hash;

use crate::element::{HashIndex, hash_index_with_capacity};

#[derive(Clone)]
pub(crate) struct OrderedIndex<T> {
    positions: HashIndex<T, usize>,
    sequence: Vec<T>,
}

impl<T: Clone + Eq + Hash> OrderedIndex<T> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            positions: hash_index_with_capacity(capacity),
            sequence: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.sequence.len()
    }

    #[inline]
    pub(crate) fn as_slice(&self) -> &[T] {
        &self.sequence
    }

    #[inline]
    pub(crate) fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.positions.contains_key(element)
    }

    #[inline]
    pub(crate) fn position<Q>(&self, element: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.positions.get(element).copied()
    }

    /// Appends `element` if absent. Returns whether it was inserted.
    pub(crate) fn push(&mut self, element: T) -> bool {
        if self.positions.contains_key(&element) {
            return false;
        }
        self.positions.insert(element.clone(), self.sequence.len());
        self.sequence.push(element);
        true
    }

    /// Inserts an absent `element` at `position`, shifting later elements.
    ///
    /// The caller guarantees `element` is absent and `position <= len`.
    pub(crate) fn insert_at(&mut self, position: usize, element: T) {
        debug_assert!(!self.positions.contains_key(&element));
        self.sequence.insert(position, element.clone());
        self.positions.insert(element, position);
        self.reindex_from(position + 1);
    }

    /// Removes `element` if present and compacts the sequence.
    pub(crate) fn remove<Q>(&mut self, element: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let position = self.positions.remove(element)?;
        let removed = self.sequence.remove(position);
        self.reindex_from(position);
        Some(removed)
    }

    pub(crate) fn clear(&mut self) {
        self.positions.clear();
        self.sequence.clear();
    }

    pub(crate) fn into_vec(self) -> Vec<T> {
        self.sequence
    }

    fn reindex_from(&mut self, start: usize) {
        for (offset, element) in self.sequence[start..].iter().enumerate() {
            if let Some(slot) = self.positions.get_mut(element) {
                *slot = start + offset;
            }
        }
    }

    /// Checks the index/sequence bijection.
    #[cfg(test)]
    pub(crate) fn is_consistent(&self) -> bool {
        self.positions.len() == self.sequence.len()
            && self
                .sequence
                .iter()
                .enumerate()
                .all(|(position, element)| self.positions.get(element) == Some(&position))
    }
}
