#![cfg(all(feature = "serde", feature = "collection"))]

//! Integration tests for serde support in setgen.
//!
//! Every container encodes as a plain JSON array in iteration order. Every
//! container except `SortedSet` decodes from one.

use proptest::prelude::*;
use rstest::rstest;
use setgen::prelude::*;

// =============================================================================
// Encoding
// =============================================================================

#[rstest]
fn test_encode_follows_iteration_order() {
    let sequence = Sequence::from_vec(vec![3, 1, 3]);
    let insertion = InsertionOrderedSet::from_slice(&[3, 1, 2]);
    let sorted = SortedSet::ascending_from_slice(&[3, 1, 2]);

    assert_eq!(serde_json::to_string(&sequence).unwrap(), "[3,1,3]");
    assert_eq!(serde_json::to_string(&insertion).unwrap(), "[3,1,2]");
    assert_eq!(serde_json::to_string(&sorted).unwrap(), "[1,2,3]");
}

#[rstest]
fn test_encode_unordered_as_array() {
    let set = UnorderedSet::from_slice(&[5, 6]);
    let decoded: Vec<i32> = serde_json::from_str(&serde_json::to_string(&set).unwrap()).unwrap();
    assert_eq!(decoded.len(), 2);
    assert!(set.contains_all(&decoded));
}

// =============================================================================
// Decoding
// =============================================================================

#[rstest]
fn test_insertion_ordered_decodes_in_array_order() {
    let set: InsertionOrderedSet<i32> = serde_json::from_str("[3,7,4,7,5]").unwrap();
    assert_eq!(set.to_vec(), vec![3, 7, 4, 5]);
    assert_eq!(serde_json::to_string(&set).unwrap(), "[3,7,4,5]");
}

#[rstest]
fn test_unordered_decode_collapses_duplicates() {
    let set: UnorderedSet<String> = serde_json::from_str(r#"["a","b","a"]"#).unwrap();
    assert_eq!(set.len(), 2);
}

#[rstest]
#[case("[1,2,3]")]
#[case("[]")]
fn test_sorted_set_never_decodes(#[case] input: &str) {
    let error = serde_json::from_str::<SortedSet<i32>>(input).unwrap_err();
    assert!(error.to_string().contains("SortedSet::deserialize is unsupported"));
}

#[rstest]
fn test_nested_containers() {
    let outer = Sequence::from_vec(vec![
        InsertionOrderedSet::from_slice(&[2, 1]),
        InsertionOrderedSet::from_slice(&[9]),
    ]);
    let json = serde_json::to_string(&outer).unwrap();
    assert_eq!(json, "[[2,1],[9]]");

    let restored: Sequence<InsertionOrderedSet<i32>> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.get(0).unwrap().to_vec(), vec![2, 1]);
}

// =============================================================================
// JsonCodec
// =============================================================================

#[rstest]
fn test_codec_round_trip_and_failures() {
    let original = InsertionOrderedSet::from_slice(&[10, 20, 30]);
    let mut restored = InsertionOrderedSet::<i32>::new(0);
    restored.unmarshal(&original.marshal().unwrap()).unwrap();
    assert_eq!(restored.to_vec(), original.to_vec());

    let error = restored.unmarshal("not json").unwrap_err();
    assert!(matches!(error, CollectionError::Decode(_)));
    assert!(std::error::Error::source(&error).is_some());
    assert_eq!(restored.to_vec(), vec![10, 20, 30]);

    let mut sorted = SortedSet::ascending_from_slice(&[1]);
    assert!(matches!(
        sorted.unmarshal("[2]"),
        Err(CollectionError::Unsupported { container: "SortedSet", operation: "unmarshal" })
    ));
}

// =============================================================================
// Round-trip Laws
// Description: unmarshal(marshal(S)) equals S for decodable sets
// =============================================================================

proptest! {
    #[test]
    fn prop_unordered_round_trip(elements in prop::collection::vec(any::<i32>(), 0..50)) {
        let set = UnorderedSet::from_slice(&elements);
        let mut restored = UnorderedSet::new(0);
        restored.unmarshal(&set.marshal().unwrap()).unwrap();
        prop_assert!(restored.equal(&set));
    }
}

proptest! {
    #[test]
    fn prop_insertion_ordered_round_trip(elements in prop::collection::vec(any::<i32>(), 0..50)) {
        let set = InsertionOrderedSet::from_slice(&elements);
        let restored: InsertionOrderedSet<i32> =
            serde_json::from_str(&serde_json::to_string(&set).unwrap()).unwrap();
        prop_assert_eq!(restored.to_vec(), set.to_vec());
    }
}

proptest! {
    #[test]
    fn prop_sorted_decode_always_fails(elements in prop::collection::vec(any::<i32>(), 0..20)) {
        let mut set = SortedSet::descending_from_slice(&elements);
        let encoded = set.marshal().unwrap();
        prop_assert!(set.unmarshal(&encoded).is_err());
        prop_assert!(serde_json::from_str::<SortedSet<i32>>(&encoded).is_err());
    }
}
