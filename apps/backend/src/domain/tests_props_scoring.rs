//! Property tests for card scoring (pure domain, no DB).
//!
//! Properties tested:
//! - Scoring is deterministic and leaves its inputs untouched
//! - Adding drawn numbers never lowers the tier
//! - Drawing every cell of a card always yields Tombola
//! - Scoring never panics on ragged cards

use proptest::prelude::*;

use crate::domain::scoring::{evaluate, WinTier};
use crate::domain::{test_gens, test_prelude};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    #[test]
    fn prop_evaluate_is_deterministic(
        cells in test_gens::card_cells(),
        drawn in test_gens::drawn_set(),
    ) {
        let cells_before = cells.clone();
        let drawn_before = drawn.clone();

        let first = evaluate(&cells, drawn.iter().copied());
        let second = evaluate(&cells, drawn.iter().copied());

        prop_assert_eq!(first, second);
        prop_assert_eq!(cells, cells_before);
        prop_assert_eq!(drawn, drawn_before);
    }

    #[test]
    fn prop_evaluate_is_monotonic(
        cells in test_gens::card_cells(),
        (subset, superset) in test_gens::drawn_subset_superset(),
    ) {
        let low = evaluate(&cells, subset.iter().copied());
        let high = evaluate(&cells, superset.iter().copied());
        prop_assert!(low <= high, "{:?} > {:?}", low, high);
    }

    #[test]
    fn prop_full_card_is_tombola(
        cells in test_gens::card_cells(),
        extra in test_gens::drawn_set(),
    ) {
        let drawn = cells.iter().copied().chain(extra);
        prop_assert_eq!(evaluate(&cells, drawn), WinTier::Tombola);
    }

    #[test]
    fn prop_below_fifteen_is_never_tombola(
        cells in test_gens::card_cells(),
        drawn in test_gens::drawn_set(),
    ) {
        let matched = cells.iter().filter(|c| drawn.contains(c)).count();
        let tier = evaluate(&cells, drawn.iter().copied());
        prop_assert_eq!(tier == WinTier::Tombola, matched == 15);
    }

    #[test]
    fn prop_ragged_cards_score_without_panicking(
        cells in test_gens::ragged_cells(),
        drawn in test_gens::drawn_set(),
    ) {
        let tier = evaluate(&cells, drawn.iter().copied());
        if cells.len() < 15 {
            prop_assert_ne!(tier, WinTier::Tombola);
        }
    }
}
