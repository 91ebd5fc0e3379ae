//! Foldable type class - folding over data structures.
//!
//! A `Foldable` consumes a structure and accumulates its elements into a
//! summary value. For ordered containers the fold follows iteration order;
//! for [`UnorderedSet`](crate::collection::UnorderedSet) the order is
//! unspecified, so only order-insensitive folds give stable results there.
//!
//! # Examples
//!
//! ```rust
//! use setgen::typeclass::Foldable;
//!
//! let numbers = vec![1, 2, 3, 4, 5];
//! let sum = numbers.fold_left(0, |accumulator, element| accumulator + element);
//! assert_eq!(sum, 15);
//!
//! let none_value: Option<i32> = None;
//! assert_eq!(none_value.fold_left(5, |accumulator, element| accumulator + element), 5);
//! ```

use super::higher::TypeConstructor;
use super::monoid::Monoid;

/// A type class for data structures that can be folded to a summary value.
///
/// # Required Methods
///
/// - `fold_left`: Left-associative fold
/// - `fold_right`: Right-associative fold
///
/// All other methods have default implementations based on `fold_left`.
pub trait Foldable: TypeConstructor {
    /// Folds the structure from left to right with an accumulator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setgen::typeclass::Foldable;
    ///
    /// let values = vec![1, 2, 3];
    /// assert_eq!(values.fold_left(0, |accumulator, element| accumulator + element), 6);
    /// ```
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Inner) -> B;

    /// Folds the structure from right to left with an accumulator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setgen::typeclass::Foldable;
    ///
    /// let values = vec![1, 2, 3];
    /// let result = values.fold_right(String::new(), |element, accumulator| {
    ///     format!("{element}{accumulator}")
    /// });
    /// assert_eq!(result, "123");
    /// ```
    fn fold_right<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(Self::Inner, B) -> B;

    /// Maps each element to a `Monoid` and combines all results.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setgen::typeclass::Foldable;
    ///
    /// let words = vec!["a", "b", "c"];
    /// let joined: String = words.fold_map(|word| word.to_string());
    /// assert_eq!(joined, "abc");
    /// ```
    fn fold_map<M, F>(self, mut function: F) -> M
    where
        M: Monoid,
        F: FnMut(Self::Inner) -> M,
        Self: Sized,
    {
        self.fold_left(M::empty(), |accumulator, element| {
            accumulator.combine(function(element))
        })
    }

    /// Returns whether the structure contains no elements.
    fn is_empty(&self) -> bool
    where
        Self: Clone,
    {
        self.clone().fold_left(true, |_, _| false)
    }

    /// Returns the number of elements in the structure.
    fn length(&self) -> usize
    where
        Self: Clone,
    {
        self.clone().fold_left(0, |count, _| count + 1)
    }

    /// Converts the structure to a `Vec` in fold order.
    fn to_list(self) -> Vec<Self::Inner>
    where
        Self: Sized,
    {
        self.fold_left(Vec::new(), |mut accumulator, element| {
            accumulator.push(element);
            accumulator
        })
    }

    /// Finds the first element (in fold order) satisfying a predicate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setgen::typeclass::Foldable;
    ///
    /// let values = vec![1, 2, 3, 4, 5];
    /// assert_eq!(values.clone().find_first(|element| *element > 3), Some(4));
    /// assert_eq!(values.find_first(|element| *element > 10), None);
    /// ```
    fn find_first<P>(self, mut predicate: P) -> Option<Self::Inner>
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Sized,
    {
        self.fold_left(None, |accumulator, element| {
            if accumulator.is_some() {
                accumulator
            } else if predicate(&element) {
                Some(element)
            } else {
                None
            }
        })
    }

    /// Checks if any element satisfies the predicate.
    fn exists<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Clone,
    {
        self.clone().find_first(|element| predicate(element)).is_some()
    }

    /// Checks if all elements satisfy the predicate. Vacuously `true` when empty.
    fn for_all<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Clone,
    {
        !self.exists(|element| !predicate(element))
    }
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Foldable for Option<A> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        match self {
            Some(element) => function(init, element),
            None => init,
        }
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        match self {
            Some(element) => function(element, init),
            None => init,
        }
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.is_none()
    }

    #[inline]
    fn length(&self) -> usize {
        usize::from(self.is_some())
    }
}

// =============================================================================
// Vec<T> Implementation
// =============================================================================

impl<T> Foldable for Vec<T> {
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
        Self::is_empty(self)
    }

    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_fold_right_reverses_order() {
        let digits = vec![1, 2, 3].fold_right(Vec::new(), |element, mut accumulator| {
            accumulator.push(element);
            accumulator
        });
        assert_eq!(digits, vec![3, 2, 1]);
    }

    #[rstest]
    #[case(vec![], true, 0)]
    #[case(vec![7], false, 1)]
    #[case(vec![7, 8, 9], false, 3)]
    fn test_vec_emptiness_and_length(
        #[case] values: Vec<i32>,
        #[case] expected_empty: bool,
        #[case] expected_length: usize,
    ) {
        assert_eq!(Foldable::is_empty(&values), expected_empty);
        assert_eq!(values.length(), expected_length);
    }

    #[rstest]
    fn test_option_fold() {
        assert_eq!(Some(3).fold_left(1, |accumulator, element| accumulator * element), 3);
        assert_eq!(None::<i32>.length(), 0);
        assert_eq!(Some(1).to_list(), vec![1]);
    }

    #[rstest]
    fn test_exists_and_for_all() {
        let values = vec![2, 4, 6];
        assert!(values.for_all(|element| element % 2 == 0));
        assert!(!values.exists(|element| *element > 6));
        assert!(Vec::<i32>::new().for_all(|_| false));
    }
}
