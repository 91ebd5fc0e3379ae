//! Semigroup type class - types with an associative binary operation.
//!
//! # Laws
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use setgen::typeclass::Semigroup;
//!
//! let hello = String::from("Hello, ");
//! assert_eq!(hello.combine(String::from("World!")), "Hello, World!");
//! ```

/// A type class for types with an associative binary operation.
pub trait Semigroup {
    /// Combines two values into one. This operation must be associative.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Combines two values by reference, returning a new value.
    ///
    /// The default implementation clones both values and calls `combine`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setgen::typeclass::Semigroup;
    ///
    /// let a = vec![1];
    /// let b = vec![2];
    /// assert_eq!(a.combine_ref(&b), vec![1, 2]);
    /// assert_eq!(a, vec![1]);
    /// ```
    #[must_use]
    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().combine(other.clone())
    }

    /// Reduces all elements in an iterator using the semigroup operation.
    ///
    /// Returns `None` if the iterator is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setgen::typeclass::Semigroup;
    ///
    /// let parts = vec![String::from("a"), String::from("b")];
    /// assert_eq!(String::reduce_all(parts), Some(String::from("ab")));
    /// assert_eq!(String::reduce_all(Vec::<String>::new()), None);
    /// ```
    fn reduce_all<I>(iterator: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .reduce(|accumulator, element| accumulator.combine(element))
    }
}

// =============================================================================
// String Implementation
// =============================================================================

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }

    fn combine_ref(&self, other: &Self) -> Self {
        let mut result = Self::with_capacity(self.len() + other.len());
        result.push_str(self);
        result.push_str(other);
        result
    }
}

// =============================================================================
// Vec Implementation
// =============================================================================

impl<T: Clone> Semigroup for Vec<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }

    fn combine_ref(&self, other: &Self) -> Self {
        let mut result = Self::with_capacity(self.len() + other.len());
        result.extend(self.iter().cloned());
        result.extend(other.iter().cloned());
        result
    }
}
