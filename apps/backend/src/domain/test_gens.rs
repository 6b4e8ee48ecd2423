// Proptest generators for domain types.

use proptest::prelude::*;
use proptest::sample::subsequence;

/// A well-formed card: 15 distinct numbers from 1..=90 in arbitrary print order.
pub fn card_cells() -> impl Strategy<Value = Vec<i32>> {
    subsequence((1..=90).collect::<Vec<i32>>(), 15).prop_shuffle()
}

/// A card of any length, including empty and oversized ones.
pub fn ragged_cells() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(1..=90i32, 0..30)
}

/// A set of drawn numbers (distinct, 1..=90, draw order shuffled).
pub fn drawn_set() -> impl Strategy<Value = Vec<i32>> {
    (0usize..=90)
        .prop_flat_map(|n| subsequence((1..=90).collect::<Vec<i32>>(), n))
        .prop_shuffle()
}

/// A drawn set plus a superset of it.
pub fn drawn_subset_superset() -> impl Strategy<Value = (Vec<i32>, Vec<i32>)> {
    drawn_set().prop_flat_map(|superset| {
        let len = superset.len();
        (0..=len).prop_flat_map(move |k| {
            let sup = superset.clone();
            subsequence(sup.clone(), k).prop_map(move |sub| (sub, sup.clone()))
        })
    })
}

/// A sequence of distinct drawable numbers, in draw order.
pub fn draw_sequence() -> impl Strategy<Value = Vec<u8>> {
    (0usize..=90)
        .prop_flat_map(|n| subsequence((1..=90u8).collect::<Vec<u8>>(), n))
        .prop_shuffle()
}
