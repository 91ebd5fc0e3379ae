//! JSON encoding and decoding of containers as plain arrays.
//!
//! Every container encodes to a JSON array in its natural iteration order.
//! Decoding replaces the container's contents only when the whole input
//! decodes; on failure the container is left untouched.
//!
//! [`SortedSet`] encodes like the others but never decodes: its comparator
//! cannot be recovered from the array, so `unmarshal` always reports
//! [`CollectionError::Unsupported`].
//!
//! # Examples
//!
//! ```rust
//! use setgen::collection::{InsertionOrderedSet, JsonCodec};
//!
//! let mut set = InsertionOrderedSet::<i32>::new(0);
//! set.unmarshal("[3, 7, 4, 7, 5]").unwrap();
//! assert_eq!(set.marshal().unwrap(), "[3,7,4,5]");
//! ```

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::{InsertionOrderedSet, Sequence, SortedSet, UnorderedSet};
use crate::element::{Comparator, Element};
use crate::error::CollectionError;

/// Marshal and unmarshal a container through a JSON array.
pub trait JsonCodec {
    /// Encodes the container as a JSON array in iteration order.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::Encode`] if an element fails to serialize.
    fn marshal(&self) -> Result<String, CollectionError>;

    /// Replaces the container's contents with the elements of a JSON array.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::Decode`] for malformed input, in which case
    /// the container is unchanged, or [`CollectionError::Unsupported`] for
    /// containers that cannot be decoded.
    fn unmarshal(&mut self, input: &str) -> Result<(), CollectionError>;
}

fn encode<S: Serialize + ?Sized>(value: &S) -> Result<String, CollectionError> {
    serde_json::to_string(value).map_err(CollectionError::Encode)
}

fn decode<D: DeserializeOwned>(input: &str) -> Result<D, CollectionError> {
    serde_json::from_str(input).map_err(CollectionError::Decode)
}

impl<T> JsonCodec for Sequence<T>
where
    T: Serialize + DeserializeOwned,
{
    fn marshal(&self) -> Result<String, CollectionError> {
        encode(self)
    }

    fn unmarshal(&mut self, input: &str) -> Result<(), CollectionError> {
        *self = decode(input)?;
        Ok(())
    }
}

impl<T> JsonCodec for UnorderedSet<T>
where
    T: Element + Serialize + DeserializeOwned,
{
    fn marshal(&self) -> Result<String, CollectionError> {
        encode(self)
    }

    fn unmarshal(&mut self, input: &str) -> Result<(), CollectionError> {
        *self = decode(input)?;
        Ok(())
    }
}

impl<T> JsonCodec for InsertionOrderedSet<T>
where
    T: Element + Serialize + DeserializeOwned,
{
    fn marshal(&self) -> Result<String, CollectionError> {
        encode(self)
    }

    fn unmarshal(&mut self, input: &str) -> Result<(), CollectionError> {
        *self = decode(input)?;
        Ok(())
    }
}

impl<T, C> JsonCodec for SortedSet<T, C>
where
    T: Element + Serialize,
    C: Comparator<T>,
{
    fn marshal(&self) -> Result<String, CollectionError> {
        encode(self)
    }

    fn unmarshal(&mut self, _input: &str) -> Result<(), CollectionError> {
        Err(CollectionError::Unsupported {
            container: "SortedSet",
            operation: "unmarshal",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_insertion_ordered_round_trip_keeps_array_order() {
        let mut set = InsertionOrderedSet::<i32>::new(0);
        set.unmarshal("[3,7,4,7,5]").unwrap();
        assert_eq!(set.to_vec(), vec![3, 7, 4, 5]);
        assert_eq!(set.marshal().unwrap(), "[3,7,4,5]");
    }

    #[rstest]
    fn test_sequence_keeps_duplicates() {
        let mut sequence: Sequence<i32> = Sequence::new(0);
        sequence.unmarshal("[1,1,2]").unwrap();
        assert_eq!(sequence.to_vec(), vec![1, 1, 2]);
        assert_eq!(sequence.marshal().unwrap(), "[1,1,2]");
    }

    #[rstest]
    fn test_unordered_round_trip() {
        let original = UnorderedSet::from_slice(&[4, 8, 15]);
        let mut decoded = UnorderedSet::new(0);
        decoded.unmarshal(&original.marshal().unwrap()).unwrap();
        assert_eq!(decoded, original);
    }

    #[rstest]
    fn test_sorted_set_encodes_but_never_decodes() {
        let mut set = SortedSet::descending_from_slice(&[1, 3, 2]);
        assert_eq!(set.marshal().unwrap(), "[3,2,1]");

        let error = set.unmarshal("[1,2,3]").unwrap_err();
        assert!(error.is_unsupported());
        assert_eq!(set.to_vec(), vec![3, 2, 1]);
    }

    #[rstest]
    #[case("[1,2")]
    #[case("{\"a\":1}")]
    #[case("[\"x\"]")]
    fn test_malformed_input_leaves_container_untouched(#[case] input: &str) {
        let mut set = InsertionOrderedSet::from_slice(&[9, 8]);
        let error = set.unmarshal(input).unwrap_err();
        assert!(matches!(error, CollectionError::Decode(_)));
        assert_eq!(set.to_vec(), vec![9, 8]);
    }
}
