use crate::domain::cards::{CardLayout, ROWS};
use crate::domain::scoring::{evaluate, evaluate_layout, WinTier};

const CARD: [i32; 15] = [1, 2, 3, 4, 5, 10, 20, 30, 40, 50, 60, 70, 80, 90, 11];

fn score(drawn: &[i32]) -> WinTier {
    evaluate(&CARD, drawn.iter().copied())
}

#[test]
fn best_row_wins_over_other_rows() {
    // row0 has 2, row1 has 3
    assert_eq!(score(&[1, 2, 10, 20, 30]), WinTier::Terno);
}

#[test]
fn all_fifteen_is_tombola() {
    assert_eq!(score(&CARD), WinTier::Tombola);
}

#[test]
fn tombola_ignores_extra_drawn_numbers() {
    let mut drawn: Vec<i32> = CARD.to_vec();
    drawn.extend([6, 7, 8, 9]);
    assert_eq!(score(&drawn), WinTier::Tombola);
}

#[test]
fn single_match_is_no_win() {
    assert_eq!(score(&[1]), WinTier::None);
    assert_eq!(score(&[]), WinTier::None);
    // one per row is still no win
    assert_eq!(score(&[1, 10, 60]), WinTier::None);
}

#[test]
fn each_row_tier() {
    assert_eq!(score(&[60, 70]), WinTier::Ambo);
    assert_eq!(score(&[60, 70, 80]), WinTier::Terno);
    assert_eq!(score(&[60, 70, 80, 90]), WinTier::Quaterna);
    assert_eq!(score(&[60, 70, 80, 90, 11]), WinTier::Cinquina);
}

#[test]
fn fourteen_of_fifteen_is_cinquina() {
    assert_eq!(score(&CARD[..14]), WinTier::Cinquina);
}

#[test]
fn numbers_not_on_card_do_not_count() {
    assert_eq!(score(&[6, 7, 8, 9, 12, 13]), WinTier::None);
}

#[test]
fn short_card_still_scores() {
    let cells = [1, 2, 3, 4, 5, 6, 7];
    assert_eq!(evaluate(&cells, [6, 7]), WinTier::Ambo);
    assert_eq!(evaluate(&cells, cells), WinTier::Cinquina);
    assert_eq!(evaluate(&[], [1, 2, 3]), WinTier::None);
}

#[test]
fn long_card_reaches_tombola_at_fifteen_matches() {
    let cells: Vec<i32> = (1..=20).collect();
    assert_eq!(evaluate(&cells, 1..=14), WinTier::Cinquina);
    assert_eq!(evaluate(&cells, 1..=15), WinTier::Tombola);
}

#[test]
fn tags_and_labels() {
    let expected = [
        (WinTier::None, 0, "Nessuna vincita"),
        (WinTier::Ambo, 2, "Ambo"),
        (WinTier::Terno, 3, "Terno"),
        (WinTier::Quaterna, 4, "Quaterna"),
        (WinTier::Cinquina, 5, "Cinquina"),
        (WinTier::Tombola, 15, "Tombola"),
    ];
    for (tier, tag, label) in expected {
        assert_eq!(tier.tag(), tag);
        assert_eq!(tier.label(), label);
    }
}

#[test]
fn tier_ordering_matches_tags() {
    let tiers = [
        WinTier::None,
        WinTier::Ambo,
        WinTier::Terno,
        WinTier::Quaterna,
        WinTier::Cinquina,
        WinTier::Tombola,
    ];
    for pair in tiers.windows(2) {
        assert!(pair[0] < pair[1]);
        assert!(pair[0].tag() < pair[1].tag());
    }
}

#[test]
fn serializes_as_screaming_snake() {
    assert_eq!(
        serde_json::to_string(&WinTier::Quaterna).unwrap(),
        "\"QUATERNA\""
    );
    assert_eq!(serde_json::to_string(&WinTier::None).unwrap(), "\"NONE\"");
}

fn stored(cells: Vec<i32>) -> CardLayout {
    CardLayout {
        id: 3,
        name: "Card 3".into(),
        version: "2".into(),
        cells,
    }
}

#[test]
fn stored_card_scores_through_its_rows() {
    let card = stored(CARD.to_vec());
    assert_eq!(card.rows().count(), ROWS);

    for drawn in [&[1, 2, 10, 20, 30][..], &CARD[..], &[1][..], &[60, 70, 80, 90][..]] {
        assert_eq!(
            evaluate_layout(&card, drawn.iter().copied()),
            evaluate(&CARD, drawn.iter().copied())
        );
    }
    assert_eq!(evaluate_layout(&card, [60, 70, 80, 90]), WinTier::Quaterna);
}

#[test]
fn stored_short_card_scores_its_partial_row() {
    let card = stored(vec![1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(evaluate_layout(&card, [6, 7]), WinTier::Ambo);
    assert_eq!(evaluate_layout(&card, [1, 2, 3, 4, 5, 6, 7]), WinTier::Cinquina);
}
