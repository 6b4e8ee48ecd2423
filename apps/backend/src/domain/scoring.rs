//! Card scoring: (cells, drawn numbers) -> win tier.

use std::collections::HashSet;

use serde::Serialize;

use crate::domain::cards::{card_rows, CardLayout, CARD_CELLS};

/// Closed set of outcomes, ordered from no win to full house.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WinTier {
    None,
    Ambo,
    Terno,
    Quaterna,
    Cinquina,
    Tombola,
}

impl WinTier {
    /// Numeric tag: 0, 2, 3, 4, 5 or 15.
    pub const fn tag(self) -> u8 {
        match self {
            WinTier::None => 0,
            WinTier::Ambo => 2,
            WinTier::Terno => 3,
            WinTier::Quaterna => 4,
            WinTier::Cinquina => 5,
            WinTier::Tombola => 15,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            WinTier::None => "Nessuna vincita",
            WinTier::Ambo => "Ambo",
            WinTier::Terno => "Terno",
            WinTier::Quaterna => "Quaterna",
            WinTier::Cinquina => "Cinquina",
            WinTier::Tombola => "Tombola",
        }
    }

    /// Row-based tier for a best-row match count; 0 and 1 are no win.
    fn from_row_match(count: usize) -> Self {
        match count {
            0 | 1 => WinTier::None,
            2 => WinTier::Ambo,
            3 => WinTier::Terno,
            4 => WinTier::Quaterna,
            _ => WinTier::Cinquina,
        }
    }
}

/// Score `cells` against `drawn`.
///
/// Total over any input: cells are partitioned in runs of five in storage
/// order whatever their count, so a short or long card still scores. A full
/// house needs at least 15 matched cells and wins over every row tier. That is
/// `>= 15` rather than an exact `== 15`; the two agree on well-formed cards,
/// and on oversized cards `>=` keeps the tier monotonic in `drawn`.
pub fn evaluate<I>(cells: &[i32], drawn: I) -> WinTier
where
    I: IntoIterator<Item = i32>,
{
    score_rows(card_rows(cells), drawn)
}

/// [`evaluate`] over a stored card's rows.
pub fn evaluate_layout<I>(card: &CardLayout, drawn: I) -> WinTier
where
    I: IntoIterator<Item = i32>,
{
    score_rows(card.rows(), drawn)
}

fn score_rows<'a, R, I>(rows: R, drawn: I) -> WinTier
where
    R: IntoIterator<Item = &'a [i32]>,
    I: IntoIterator<Item = i32>,
{
    let drawn: HashSet<i32> = drawn.into_iter().collect();

    let mut max_row = 0usize;
    let mut total = 0usize;
    for row in rows {
        let matched = row.iter().filter(|n| drawn.contains(n)).count();
        total += matched;
        max_row = max_row.max(matched);
    }

    if total >= CARD_CELLS {
        WinTier::Tombola
    } else {
        WinTier::from_row_match(max_row)
    }
}
