//! Monoid type class - semigroups with an identity element.
//!
//! # Laws
//!
//! ```text
//! T::empty().combine(a) == a
//! a.combine(T::empty()) == a
//! ```

use super::semigroup::Semigroup;

/// A type class for semigroups with an identity element.
///
/// # Examples
///
/// ```rust
/// use setgen::typeclass::{Monoid, Semigroup};
///
/// let s = String::from("hello");
/// assert_eq!(String::empty().combine(s.clone()), s);
/// assert_eq!(s.clone().combine(String::empty()), s);
/// ```
pub trait Monoid: Semigroup {
    /// Returns the identity element for this monoid.
    fn empty() -> Self;

    /// Combines all elements in an iterator, starting from the identity element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setgen::typeclass::Monoid;
    ///
    /// let chunks = vec![vec![1], vec![2, 3]];
    /// assert_eq!(Vec::combine_all(chunks), vec![1, 2, 3]);
    /// assert_eq!(Vec::<i32>::combine_all(Vec::new()), Vec::<i32>::new());
    /// ```
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| {
                accumulator.combine(element)
            })
    }

    /// Returns whether this value is the identity element.
    fn is_empty_value(&self) -> bool
    where
        Self: PartialEq + Sized,
    {
        *self == Self::empty()
    }
}

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T: Clone> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_identity_laws_for_string() {
        let value = String::from("xyz");
        assert_eq!(String::empty().combine(value.clone()), value);
        assert_eq!(value.clone().combine(String::empty()), value);
    }

    #[rstest]
    fn test_is_empty_value() {
        assert!(Vec::<u8>::empty().is_empty_value());
        assert!(!vec![1u8].is_empty_value());
    }
}
