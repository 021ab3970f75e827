//! Property-based tests for GrowableArray invariants.
//!
//! Every operation history is replayed against a plain `Vec` model; the array
//! must agree with the model on contents and respect its capacity rules.

use growable_array::sequence::GrowableArray;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Operation {
    Append(u8),
    InsertAt(usize, u8),
    DeleteByValue(u8),
}

fn operation_strategy() -> impl Strategy<Value = Operation> {
    prop_oneof![
        any::<u8>().prop_map(Operation::Append),
        (0usize..64, any::<u8>()).prop_map(|(index, value)| Operation::InsertAt(index, value)),
        (0u8..16).prop_map(Operation::DeleteByValue),
    ]
}

fn assert_capacity_invariant(array: &GrowableArray<u8>) -> Result<(), TestCaseError> {
    prop_assert!(array.capacity() >= 1);
    prop_assert!(array.len() <= array.capacity());
    Ok(())
}

proptest! {
    /// Contents always match a Vec driven by the same history.
    #[test]
    fn prop_matches_vec_model(
        initial_capacity in 1usize..8,
        operations in prop::collection::vec(operation_strategy(), 0..200)
    ) {
        let mut array = GrowableArray::with_capacity(initial_capacity).unwrap();
        let mut model: Vec<u8> = Vec::new();

        for operation in operations {
            match operation {
                Operation::Append(value) => {
                    array.append(value);
                    model.push(value);
                }
                Operation::InsertAt(index, value) => {
                    let result = array.insert_at(index, value);
                    if index <= model.len() {
                        prop_assert!(result.is_ok());
                        model.insert(index, value);
                    } else {
                        prop_assert!(result.is_err());
                    }
                }
                Operation::DeleteByValue(value) => {
                    let removed = array.delete_by_value(&value);
                    let position = model.iter().position(|candidate| *candidate == value);
                    prop_assert_eq!(removed, position.is_some());
                    if let Some(position) = position {
                        model.remove(position);
                    }
                }
            }
            assert_capacity_invariant(&array)?;
            prop_assert_eq!(array.len(), model.len());
        }

        let contents: Vec<u8> = array.iter().copied().collect();
        prop_assert_eq!(contents, model);
    }

    /// Total elements moved by grows stays linear in the number of appends.
    #[test]
    fn prop_append_is_amortized_linear(
        initial_capacity in 1usize..16,
        count in 0usize..2000
    ) {
        let mut array = GrowableArray::with_capacity(initial_capacity).unwrap();
        let mut moved = 0usize;

        for value in 0..count {
            let before = array.capacity();
            let size_before = array.len();
            array.append(value);
            if array.capacity() != before {
                prop_assert_eq!(array.capacity(), before * 2);
                moved += size_before;
            }
        }

        prop_assert!(moved < 2 * count.max(1));
    }

    /// A deletion that lands exactly on a third of the capacity shrinks;
    /// one element more does not.
    #[test]
    fn prop_shrink_hysteresis(capacity in 3usize..200) {
        let third = capacity / 3;

        let mut at_threshold = GrowableArray::with_capacity(capacity).unwrap();
        for value in 0..=third {
            at_threshold.append(value);
        }
        prop_assert!(at_threshold.delete_by_value(&0));
        prop_assert_eq!(at_threshold.len(), third);
        prop_assert!(at_threshold.capacity() < capacity);
        prop_assert_eq!(at_threshold.capacity(), (capacity / 2).max(third).max(1));

        let mut above_threshold = GrowableArray::with_capacity(capacity).unwrap();
        for value in 0..=third + 1 {
            above_threshold.append(value);
        }
        prop_assert!(above_threshold.delete_by_value(&0));
        prop_assert_eq!(above_threshold.len(), third + 1);
        prop_assert_eq!(above_threshold.capacity(), capacity);
    }

    /// Inserting a fresh value and searching for it yields the insert position.
    #[test]
    fn prop_insert_then_search(
        elements in prop::collection::vec(0u8..100, 0..50),
        index_seed in any::<usize>()
    ) {
        let mut array: GrowableArray<u8> = elements.iter().copied().collect();
        let index = index_seed % (elements.len() + 1);

        array.insert_at(index, 200).unwrap();
        prop_assert_eq!(array.search(&200), Some(index));

        // With a duplicate already earlier in the array, search finds that one.
        let duplicate_index = index_seed % (array.len() + 1);
        array.insert_at(duplicate_index, 200).unwrap();
        let found = array.search(&200);
        prop_assert!(found.is_some_and(|position| position <= duplicate_index));
    }

    /// Deleting an absent value any number of times changes nothing.
    #[test]
    fn prop_delete_absent_is_idempotent(
        elements in prop::collection::vec(0u8..100, 0..50),
        repetitions in 1usize..5
    ) {
        let mut array: GrowableArray<u8> = elements.iter().copied().collect();
        let snapshot = array.clone();
        let capacity = array.capacity();

        for _ in 0..repetitions {
            prop_assert!(!array.delete_by_value(&255));
        }

        prop_assert_eq!(array.capacity(), capacity);
        prop_assert_eq!(array, snapshot);
    }

    /// Display lists exactly the live elements.
    #[test]
    fn prop_display_matches_elements(
        elements in prop::collection::vec(any::<u8>(), 0..30)
    ) {
        let array: GrowableArray<u8> = elements.iter().copied().collect();
        let expected = format!(
            "[{}]",
            elements.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
        );
        prop_assert_eq!(array.to_string(), expected);
    }
}
