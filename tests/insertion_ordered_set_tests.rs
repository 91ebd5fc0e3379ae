#![cfg(feature = "collection")]
//! Scenario tests for `InsertionOrderedSet`.
//!
//! Every test checks the index/sequence bijection through the public
//! accessors after mutating the set.

use rstest::rstest;
use setgen::prelude::*;

fn assert_bijection<T: Element + std::fmt::Debug>(set: &InsertionOrderedSet<T>) {
    for (position, element) in set.to_sequence_ref().iter().enumerate() {
        assert_eq!(set.position(element), Some(position), "element {element:?}");
    }
    assert_eq!(set.to_sequence_ref().len(), set.len());
}

// =============================================================================
// Insertion Order
// =============================================================================

#[rstest]
fn test_remove_then_put_scenario() {
    let mut set = InsertionOrderedSet::from_slice(&[1, 2, 3]);

    set.remove(&1);
    assert_eq!(set.to_vec(), vec![2, 3]);
    assert_bijection(&set);

    set.put(4);
    assert_eq!(set.to_vec(), vec![2, 3, 4]);

    set.put(3);
    assert_eq!(set.to_vec(), vec![2, 3, 4]);

    set.put(1);
    assert_eq!(set.to_vec(), vec![2, 3, 4, 1]);
    assert_bijection(&set);
}

#[rstest]
fn test_duplicate_put_keeps_original_position() {
    let mut set = InsertionOrderedSet::new(4);
    assert!(set.put("b"));
    assert!(set.put("a"));
    assert!(!set.put("b"));
    assert_eq!(set.position(&"b"), Some(0));
    assert_eq!(set.to_vec(), vec!["b", "a"]);
}

#[rstest]
fn test_remove_every_element_one_by_one() {
    let mut set: InsertionOrderedSet<i32> = (0..10).collect();
    for element in [5, 0, 9, 3, 7, 1, 8, 2, 6, 4] {
        assert!(set.remove(&element));
        assert!(!set.contains(&element));
        assert_bijection(&set);
    }
    assert!(set.is_empty());
}

#[rstest]
fn test_to_sequence_is_a_copy() {
    let set = InsertionOrderedSet::from_slice(&[4, 2]);
    let mut sequence = set.to_sequence();
    sequence.push(9);
    assert_eq!(sequence.to_vec(), vec![4, 2, 9]);
    assert_eq!(set.to_vec(), vec![4, 2]);
}

// =============================================================================
// Combinators
// =============================================================================

#[rstest]
fn test_group_by_preserves_relative_order() {
    let set = InsertionOrderedSet::from_slice(&[6, 1, 4, 3, 2, 5]);
    let groups = set.group_by(|element| element % 3);
    assert_eq!(groups[&0].to_vec(), vec![6, 3]);
    assert_eq!(groups[&1].to_vec(), vec![1, 4]);
    assert_eq!(groups[&2].to_vec(), vec![2, 5]);
}

#[rstest]
fn test_group_by_bool_splits_in_order() {
    let set = InsertionOrderedSet::from_slice(&[6, 1, 4, 3]);
    let (even, odd) = set.group_by_bool(|element| element % 2 == 0);
    assert_eq!(even.to_vec(), vec![6, 4]);
    assert_eq!(odd.to_vec(), vec![1, 3]);
}

#[rstest]
#[case(4, Some(2))]
#[case(6, Some(0))]
#[case(9, None)]
fn test_do_until_returns_stopping_index(#[case] target: i32, #[case] expected: Option<usize>) {
    let set = InsertionOrderedSet::from_slice(&[6, 1, 4, 3]);
    assert_eq!(set.do_until(|element| *element == target), expected);
}

#[rstest]
fn test_find_last_by() {
    let set = InsertionOrderedSet::from_slice(&[6, 1, 4, 3]);
    assert_eq!(set.find_last_by(|element| element % 2 == 0), Some(&4));
    assert_eq!(set.find_by(|element| element % 2 == 1), Some(&1));
}

#[rstest]
fn test_map_and_filter_map_produce_sequences() {
    let set = InsertionOrderedSet::from_slice(&[1, 2, 3, 4]);
    let halves = set.filter_map(|element| (element % 2 == 0).then_some(element / 2));
    assert_eq!(halves.to_vec(), vec![1, 2]);

    let parity = set.map(|element| element % 2);
    assert_eq!(parity.to_vec(), vec![1, 0, 1, 0]);
}

// =============================================================================
// Set Algebra
// =============================================================================

#[rstest]
fn test_union_appends_new_elements_in_argument_order() {
    let mut left = InsertionOrderedSet::from_slice(&[3, 1]);
    let right = InsertionOrderedSet::from_slice(&[5, 1, 4]);
    left.in_place_union(&right);
    assert_eq!(left.to_vec(), vec![3, 1, 5, 4]);
    assert_bijection(&left);
}

#[rstest]
fn test_equality_is_order_independent() {
    let forward: InsertionOrderedSet<i32> = (1..=5).collect();
    let backward: InsertionOrderedSet<i32> = (1..=5).rev().collect();
    assert_eq!(forward, backward);
    assert_ne!(forward.to_vec(), backward.to_vec());
    assert!(forward.is_subset_of(&backward));
    assert!(!forward.is_proper_subset_of(&backward));
}

#[rstest]
fn test_display_follows_insertion_order() {
    let set = InsertionOrderedSet::from_slice(&["z", "a", "m"]);
    assert_eq!(set.to_string(), "{z, a, m}");
}
