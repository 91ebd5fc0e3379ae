//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `Sequence<_>`
//! directly. [`TypeConstructor`] records the element type a container is
//! applied to and how to re-apply the same constructor to another type.

/// A trait representing a type constructor.
///
/// # Associated Types
///
/// - `Inner`: The type parameter that this type constructor is currently applied to.
/// - `WithType<B>`: The same type constructor applied to a different type `B`.
///
/// # Example
///
/// ```rust
/// use setgen::collection::Sequence;
/// use setgen::typeclass::TypeConstructor;
///
/// fn element_name<C: TypeConstructor<Inner = i32>>(_: &C) -> &'static str {
///     "i32"
/// }
///
/// let sequence: Sequence<i32> = Sequence::from_vec(vec![1]);
/// assert_eq!(element_name(&sequence), "i32");
/// let _: <Sequence<i32> as TypeConstructor>::WithType<String> = Sequence::new(0);
/// ```
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}

impl<A> TypeConstructor for Vec<A> {
    type Inner = A;
    type WithType<B> = Vec<B>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn rewrap<C: TypeConstructor>(_: C) -> C::WithType<String>
    where
        C::WithType<String>: Default,
    {
        Default::default()
    }

    #[rstest]
    fn test_with_type_keeps_constructor() {
        let none: Option<String> = rewrap(Some(3));
        assert_eq!(none, None);

        let empty: Vec<String> = rewrap(vec![1, 2]);
        assert!(empty.is_empty());
    }
}
