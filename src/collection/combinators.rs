//! Functional combinators shared by sequences and every set variant.
//!
//! [`Combinators`] is implemented for every [`Container`]. All combinators
//! walk the container in its natural iteration order, so for the ordered
//! variants and for sequences the results are deterministic:
//!
//! - `filter` and the `group_by*` family keep the relative order of the
//!   elements they retain.
//! - `reduce` and `fold` are left folds.
//! - `find_last_by` is only available where iteration is double-ended, which
//!   excludes [`UnorderedSet`](super::UnorderedSet).
//!
//! # Examples
//!
//! ```rust
//! use setgen::prelude::*;
//!
//! let set = InsertionOrderedSet::from_slice(&[5, 1, 4, 2]);
//! let (even, odd) = set.group_by_bool(|element| element % 2 == 0);
//! assert_eq!(even.to_vec(), vec![4, 2]);
//! assert_eq!(odd.to_vec(), vec![5, 1]);
//!
//! let doubled = set.map(|element| element * 2);
//! assert_eq!(doubled.to_vec(), vec![10, 2, 8, 4]);
//! ```

use std::collections::HashMap;
use std::hash::Hash;

use super::Sequence;
use super::container::Container;
use crate::error::CollectionError;

/// Filter, map, fold, search, and grouping over any [`Container`].
pub trait Combinators: Container {
    /// Calls `function` on every element in iteration order.
    fn for_each<F>(&self, mut function: F)
    where
        F: FnMut(&Self::Inner),
    {
        for element in self.iter() {
            function(element);
        }
    }

    /// Returns a new container of the same kind holding the elements that
    /// satisfy `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setgen::prelude::*;
    ///
    /// let set = InsertionOrderedSet::from_slice(&[2, 3, 4, 1]);
    /// let even = set.filter(|element| element % 2 == 0);
    /// assert_eq!(even.to_vec(), vec![2, 4]);
    /// ```
    #[must_use]
    fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&Self::Inner) -> bool,
        Self::Inner: Clone,
    {
        let mut result = self.empty_like(0);
        for element in self.iter() {
            if predicate(element) {
                result.put(element.clone());
            }
        }
        result
    }

    /// Transforms every element, collecting the results into a [`Sequence`].
    ///
    /// The output may contain duplicates even when `self` is a set.
    fn map<U, F>(&self, function: F) -> Sequence<U>
    where
        F: FnMut(&Self::Inner) -> U,
    {
        self.iter().map(function).collect()
    }

    /// Transforms every element, keeping only the `Some` results.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setgen::prelude::*;
    ///
    /// let words = Sequence::from_vec(vec!["1", "x", "3"]);
    /// let numbers = words.filter_map(|word| word.parse::<i32>().ok());
    /// assert_eq!(numbers.to_vec(), vec![1, 3]);
    /// ```
    fn filter_map<U, F>(&self, function: F) -> Sequence<U>
    where
        F: FnMut(&Self::Inner) -> Option<U>,
    {
        self.iter().filter_map(function).collect()
    }

    /// Left fold with an explicit seed.
    fn fold<B, F>(&self, init: B, function: F) -> B
    where
        F: FnMut(B, &Self::Inner) -> B,
    {
        self.iter().fold(init, function)
    }

    /// Left fold seeded with the first element.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyCollection`] when the container is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setgen::prelude::*;
    ///
    /// let sequence = Sequence::from_vec(vec![1, 2, 3]);
    /// assert_eq!(sequence.reduce(|accumulator, element| accumulator + element).unwrap(), 6);
    ///
    /// let empty: Sequence<i32> = Sequence::new(0);
    /// assert!(empty.reduce(|accumulator, element| accumulator + element).is_err());
    /// ```
    fn reduce<F>(&self, mut function: F) -> Result<Self::Inner, CollectionError>
    where
        F: FnMut(Self::Inner, &Self::Inner) -> Self::Inner,
        Self::Inner: Clone,
    {
        let mut elements = self.iter();
        let first = elements
            .next()
            .ok_or(CollectionError::EmptyCollection {
                operation: "reduce",
            })?
            .clone();
        Ok(elements.fold(first, |accumulator, element| {
            function(accumulator, element)
        }))
    }

    /// Returns the first element satisfying `predicate`.
    fn find_by<P>(&self, mut predicate: P) -> Option<&Self::Inner>
    where
        P: FnMut(&Self::Inner) -> bool,
    {
        self.iter().find(|element| predicate(element))
    }

    /// Returns the last element satisfying `predicate`.
    ///
    /// Requires a double-ended iteration order, so it is not offered by
    /// [`UnorderedSet`](super::UnorderedSet).
    fn find_last_by<'a, P>(&'a self, mut predicate: P) -> Option<&'a Self::Inner>
    where
        P: FnMut(&Self::Inner) -> bool,
        Self::Iter<'a>: DoubleEndedIterator,
    {
        self.iter().rev().find(|element| predicate(element))
    }

    /// Counts the elements satisfying `predicate`.
    fn count_by<P>(&self, mut predicate: P) -> usize
    where
        P: FnMut(&Self::Inner) -> bool,
    {
        self.iter().filter(|element| predicate(element)).count()
    }

    /// Returns `true` if every element satisfies `predicate`.
    fn all<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
    {
        self.iter().all(predicate)
    }

    /// Returns `true` if any element satisfies `predicate`.
    fn any<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
    {
        self.iter().any(predicate)
    }

    /// Visits elements until `function` returns `true`, returning the
    /// position where iteration stopped, or `None` if it never did.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setgen::prelude::*;
    ///
    /// let set = InsertionOrderedSet::from_slice(&["a", "b", "c"]);
    /// assert_eq!(set.do_until(|element| *element == "b"), Some(1));
    /// assert_eq!(set.do_until(|_| false), None);
    /// ```
    fn do_until<F>(&self, function: F) -> Option<usize>
    where
        F: FnMut(&Self::Inner) -> bool,
    {
        self.iter().position(function)
    }

    /// Visits elements while `function` returns `true`, returning the
    /// position of the first element for which it returned `false`.
    fn do_while<F>(&self, mut function: F) -> Option<usize>
    where
        F: FnMut(&Self::Inner) -> bool,
    {
        self.iter().position(|element| !function(element))
    }

    /// Visits elements until `function` fails, returning the first error.
    ///
    /// # Errors
    ///
    /// Propagates the first error returned by `function`.
    fn try_for_each<E, F>(&self, function: F) -> Result<(), E>
    where
        F: FnMut(&Self::Inner) -> Result<(), E>,
    {
        self.iter().try_for_each(function)
    }

    /// Splits the elements into those satisfying `predicate` and the rest.
    ///
    /// Both halves are containers of the same kind as `self`.
    fn group_by_bool<P>(&self, mut predicate: P) -> (Self, Self)
    where
        P: FnMut(&Self::Inner) -> bool,
        Self::Inner: Clone,
    {
        let mut matching = self.empty_like(0);
        let mut rest = self.empty_like(0);
        for element in self.iter() {
            if predicate(element) {
                matching.put(element.clone());
            } else {
                rest.put(element.clone());
            }
        }
        (matching, rest)
    }

    /// Groups the elements by an arbitrary hashable key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setgen::prelude::*;
    ///
    /// let sequence = Sequence::from_vec(vec![1, 12, 2, 21, 22, 3]);
    /// let groups = sequence.group_by(|element| element.to_string().len());
    /// assert_eq!(groups[&1].to_vec(), vec![1, 2, 3]);
    /// assert_eq!(groups[&2].to_vec(), vec![12, 21, 22]);
    /// ```
    fn group_by<K, F>(&self, mut key: F) -> HashMap<K, Self>
    where
        K: Hash + Eq,
        F: FnMut(&Self::Inner) -> K,
        Self::Inner: Clone,
    {
        let mut groups: HashMap<K, Self> = HashMap::new();
        for element in self.iter() {
            groups
                .entry(key(element))
                .or_insert_with(|| self.empty_like(0))
                .put(element.clone());
        }
        groups
    }

    /// Groups the elements by an integer key.
    fn group_by_int<F>(&self, key: F) -> HashMap<i64, Self>
    where
        F: FnMut(&Self::Inner) -> i64,
        Self::Inner: Clone,
    {
        self.group_by(key)
    }

    /// Groups the elements by a string key.
    fn group_by_str<F>(&self, key: F) -> HashMap<String, Self>
    where
        F: FnMut(&Self::Inner) -> String,
        Self::Inner: Clone,
    {
        self.group_by(key)
    }
}

impl<C: Container> Combinators for C {}
