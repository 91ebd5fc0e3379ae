//! Error types for container operations.
//!
//! Every fallible operation in this crate reports its failure synchronously
//! through [`CollectionError`]. There is no retry logic and no error is
//! swallowed: bounds violations, unsupported operations, and decode failures
//! are all returned to the caller as the operation's result.

use std::fmt;

/// Represents errors that can occur when operating on a container.
///
/// # Examples
///
/// ```rust
/// use setgen::CollectionError;
///
/// let error = CollectionError::IndexOutOfBounds { index: 7, length: 3 };
/// assert_eq!(format!("{error}"), "index 7 out of bounds for length 3");
/// ```
#[derive(Debug)]
pub enum CollectionError {
    /// An index was outside the valid span after negative-index normalization.
    IndexOutOfBounds {
        /// The index as supplied by the caller (before normalization).
        index: isize,
        /// The length of the sequence at the time of the call.
        length: usize,
    },
    /// A range was outside the valid span, or its bounds were reversed.
    RangeOutOfBounds {
        /// The start of the range as supplied by the caller.
        from: isize,
        /// The end of the range as supplied by the caller.
        to: isize,
        /// The length of the sequence at the time of the call.
        length: usize,
    },
    /// The operation requires at least one element.
    EmptyCollection {
        /// The operation that was attempted.
        operation: &'static str,
    },
    /// The container does not support the requested operation.
    Unsupported {
        /// The container type name.
        container: &'static str,
        /// The operation that was attempted.
        operation: &'static str,
    },
    /// An identifier given to the registry is not a valid type name.
    InvalidIdentifier {
        /// What the identifier names (`"element type"`, `"container name"`).
        kind: &'static str,
        /// The rejected identifier.
        identifier: String,
    },
    /// A container name was registered twice.
    DuplicateDeclaration {
        /// The conflicting container name.
        name: String,
    },
    /// The JSON input could not be decoded.
    #[cfg(feature = "serde")]
    Decode(serde_json::Error),
    /// The container could not be encoded to JSON.
    #[cfg(feature = "serde")]
    Encode(serde_json::Error),
}

impl CollectionError {
    /// Returns `true` if this error is a bounds violation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setgen::CollectionError;
    ///
    /// assert!(CollectionError::IndexOutOfBounds { index: 0, length: 0 }.is_bounds_error());
    /// assert!(!CollectionError::EmptyCollection { operation: "reduce" }.is_bounds_error());
    /// ```
    #[must_use]
    pub const fn is_bounds_error(&self) -> bool {
        matches!(
            self,
            Self::IndexOutOfBounds { .. } | Self::RangeOutOfBounds { .. }
        )
    }

    /// Returns `true` if this error reports an unsupported operation.
    #[must_use]
    pub const fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported { .. })
    }
}

impl fmt::Display for CollectionError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfBounds { index, length } => {
                write!(formatter, "index {index} out of bounds for length {length}")
            }
            Self::RangeOutOfBounds { from, to, length } => {
                write!(
                    formatter,
                    "range {from}..{to} out of bounds for length {length}"
                )
            }
            Self::EmptyCollection { operation } => {
                write!(formatter, "{operation} requires a non-empty collection")
            }
            Self::Unsupported {
                container,
                operation,
            } => write!(formatter, "{container}::{operation} is unsupported"),
            Self::InvalidIdentifier { kind, identifier } => {
                write!(formatter, "invalid {kind} identifier: {identifier:?}")
            }
            Self::DuplicateDeclaration { name } => {
                write!(formatter, "container {name:?} is already declared")
            }
            #[cfg(feature = "serde")]
            Self::Decode(error) => write!(formatter, "decode error: {error}"),
            #[cfg(feature = "serde")]
            Self::Encode(error) => write!(formatter, "encode error: {error}"),
        }
    }
}

impl std::error::Error for CollectionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            #[cfg(feature = "serde")]
            Self::Decode(error) | Self::Encode(error) => Some(error),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(CollectionError::IndexOutOfBounds { index: -4, length: 3 }, "index -4 out of bounds for length 3")]
    #[case(CollectionError::RangeOutOfBounds { from: 2, to: 1, length: 5 }, "range 2..1 out of bounds for length 5")]
    #[case(CollectionError::EmptyCollection { operation: "reduce" }, "reduce requires a non-empty collection")]
    #[case(CollectionError::Unsupported { container: "SortedSet", operation: "unmarshal" }, "SortedSet::unmarshal is unsupported")]
    #[case(CollectionError::DuplicateDeclaration { name: "IntSet".to_string() }, "container \"IntSet\" is already declared")]
    fn test_display(#[case] error: CollectionError, #[case] expected: &str) {
        assert_eq!(format!("{error}"), expected);
    }

    #[rstest]
    fn test_classification() {
        assert!(CollectionError::RangeOutOfBounds { from: 0, to: 9, length: 1 }.is_bounds_error());
        assert!(
            CollectionError::Unsupported {
                container: "SortedSet",
                operation: "unmarshal"
            }
            .is_unsupported()
        );
    }

    #[rstest]
    fn test_source_is_none_for_structural_errors() {
        use std::error::Error;
        let error = CollectionError::EmptyCollection { operation: "reduce" };
        assert!(error.source().is_none());
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn test_decode_error_keeps_source() {
        use std::error::Error;
        let json_error = serde_json::from_str::<Vec<i32>>("[1,").unwrap_err();
        let error = CollectionError::Decode(json_error);
        assert!(error.source().is_some());
        assert!(format!("{error}").starts_with("decode error:"));
    }
}
