#![cfg(feature = "collection")]
//! Property-based tests for the ordered set variants.
//!
//! These tests drive `InsertionOrderedSet` and `SortedSet` with random
//! sequences of `put` and `remove` and check the structural invariants after
//! every step.

use proptest::prelude::*;
use setgen::prelude::*;

#[derive(Debug, Clone)]
enum Operation {
    Put(i16),
    Remove(i16),
}

fn operation() -> impl Strategy<Value = Operation> {
    prop_oneof![
        (0..40_i16).prop_map(Operation::Put),
        (0..40_i16).prop_map(Operation::Remove),
    ]
}

fn index_is_bijective(elements: &[i16], position: impl Fn(&i16) -> Option<usize>) -> bool {
    elements
        .iter()
        .enumerate()
        .all(|(expected, element)| position(element) == Some(expected))
}

// =============================================================================
// Bijection Law
// Description: After every put/remove, position(sequence[i]) == i
// =============================================================================

proptest! {
    #[test]
    fn prop_insertion_ordered_bijection(operations in prop::collection::vec(operation(), 0..80)) {
        let mut set = InsertionOrderedSet::new(0);
        for operation in operations {
            match operation {
                Operation::Put(element) => { set.put(element); }
                Operation::Remove(element) => { set.remove(&element); }
            }
            let elements = set.to_sequence_ref();
            prop_assert_eq!(elements.len(), set.len());
            prop_assert!(index_is_bijective(elements, |element| set.position(element)));
        }
    }
}

proptest! {
    #[test]
    fn prop_sorted_bijection(operations in prop::collection::vec(operation(), 0..80)) {
        let mut set = SortedSet::descending(0);
        for operation in operations {
            match operation {
                Operation::Put(element) => { set.put(element); }
                Operation::Remove(element) => { set.remove(&element); }
            }
            let elements = set.to_sequence_ref();
            prop_assert_eq!(elements.len(), set.len());
            prop_assert!(index_is_bijective(elements, |element| set.position(element)));
        }
    }
}

// =============================================================================
// Monotonicity Law
// Description: A sorted set's sequence is monotonic under its comparator
// =============================================================================

proptest! {
    #[test]
    fn prop_sorted_is_monotonic(operations in prop::collection::vec(operation(), 0..80)) {
        let mut set = SortedSet::ascending(0);
        for operation in operations {
            match operation {
                Operation::Put(element) => { set.put(element); }
                Operation::Remove(element) => { set.remove(&element); }
            }
        }
        let elements = set.to_vec();
        let mut expected = elements.clone();
        expected.sort_unstable();
        expected.dedup();
        prop_assert_eq!(elements, expected);
    }
}

// =============================================================================
// Insertion Order Law
// Description: Iteration order is the order of first insertion
// =============================================================================

proptest! {
    #[test]
    fn prop_insertion_order_is_first_occurrence(elements in prop::collection::vec(0..30_i16, 0..60)) {
        let set = InsertionOrderedSet::from_slice(&elements);
        let mut expected: Vec<i16> = Vec::new();
        for element in &elements {
            if !expected.contains(element) {
                expected.push(*element);
            }
        }
        prop_assert_eq!(set.to_vec(), expected);
    }
}

// =============================================================================
// Put Idempotence Law
// Description: put(k); put(k) yields the same container as a single put(k)
// =============================================================================

proptest! {
    #[test]
    fn prop_put_is_idempotent(
        elements in prop::collection::vec(0..30_i16, 0..40),
        element in 0..30_i16
    ) {
        let mut once = InsertionOrderedSet::from_slice(&elements);
        once.put(element);
        let mut twice = once.clone();
        twice.put(element);
        prop_assert_eq!(once.to_vec(), twice.to_vec());

        let mut sorted_once = SortedSet::ascending_from_slice(&elements);
        sorted_once.put(element);
        let mut sorted_twice = sorted_once.clone();
        sorted_twice.put(element);
        prop_assert_eq!(sorted_once.to_vec(), sorted_twice.to_vec());
    }
}

// =============================================================================
// Remove Absent Law
// Description: Removing an absent element is a no-op
// =============================================================================

proptest! {
    #[test]
    fn prop_remove_absent_is_noop(elements in prop::collection::vec(0..30_i16, 0..40)) {
        let mut set = InsertionOrderedSet::from_slice(&elements);
        let before = set.to_vec();
        prop_assert!(!set.remove(&100));
        prop_assert_eq!(set.to_vec(), before);
    }
}

// =============================================================================
// Order-Independent Equality Law
// Description: Sets built from permutations of the same elements are equal
// =============================================================================

proptest! {
    #[test]
    fn prop_equality_ignores_insertion_order(
        elements in prop::collection::vec(0..30_i16, 0..40).prop_shuffle()
    ) {
        let forward = InsertionOrderedSet::from_slice(&elements);
        let reversed: Vec<i16> = elements.iter().rev().copied().collect();
        let backward = InsertionOrderedSet::from_slice(&reversed);
        prop_assert!(forward.equal(&backward));
        prop_assert_eq!(forward, backward);
    }
}
