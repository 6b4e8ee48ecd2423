//! Per-game draw ledger: append-only, ordered by draw, duplicate-free.
//!
//! `DrawLedger` is a snapshot taken under the per-game lock. It answers the
//! read-check half of a draw; the store performs the append.

use rand::seq::IndexedRandom;
use rand::Rng;
use serde::Serialize;
use time::OffsetDateTime;

use crate::domain::numbers::{DrawnNumber, MAX_NUMBER, TOTAL_NUMBERS};
use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind};

/// One ledger entry. `seq` is the 1-based position in draw order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Draw {
    pub id: i64,
    pub game_id: i64,
    pub seq: u8,
    pub number: DrawnNumber,
    #[serde(with = "time::serde::rfc3339")]
    pub drawn_at: OffsetDateTime,
}

#[derive(Debug, Clone)]
pub struct DrawLedger {
    game_id: i64,
    entries: Vec<Draw>,
    present: [bool; MAX_NUMBER as usize + 1],
}

impl DrawLedger {
    pub fn empty(game_id: i64) -> Self {
        Self {
            game_id,
            entries: Vec::new(),
            present: [false; MAX_NUMBER as usize + 1],
        }
    }

    /// Rebuild from stored entries in draw order. A repeated number means the
    /// storage broke the uniqueness guarantee and is reported as corruption.
    pub fn from_entries(game_id: i64, entries: Vec<Draw>) -> Result<Self, DomainError> {
        let mut ledger = Self::empty(game_id);
        for draw in entries {
            if ledger.contains(draw.number) {
                return Err(DomainError::infra(
                    InfraErrorKind::DataCorruption,
                    format!(
                        "Game {game_id} ledger holds number {} more than once",
                        draw.number
                    ),
                ));
            }
            ledger.present[draw.number.get() as usize] = true;
            ledger.entries.push(draw);
        }
        Ok(ledger)
    }

    pub fn game_id(&self) -> i64 {
        self.game_id
    }

    pub fn entries(&self) -> &[Draw] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<Draw> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, number: DrawnNumber) -> bool {
        self.present[number.get() as usize]
    }

    pub fn is_exhausted(&self) -> bool {
        self.entries.len() >= TOTAL_NUMBERS
    }

    pub fn last(&self) -> Option<&Draw> {
        self.entries.last()
    }

    /// Sequence number the next appended entry must carry.
    pub fn next_seq(&self) -> u8 {
        self.entries.len() as u8 + 1
    }

    pub fn check_can_append(&self, number: DrawnNumber) -> Result<(), DomainError> {
        if self.is_exhausted() {
            return Err(all_drawn(self.game_id));
        }
        if self.contains(number) {
            return Err(DomainError::conflict(
                ConflictKind::NumberAlreadyDrawn,
                format!("Number {number} has already been drawn in game {}", self.game_id),
            ));
        }
        Ok(())
    }

    /// Numbers not drawn yet, ascending.
    pub fn undrawn(&self) -> Vec<DrawnNumber> {
        DrawnNumber::all().filter(|n| !self.contains(*n)).collect()
    }

    /// Uniform pick over the explicit candidate set; bounded regardless of how
    /// few numbers remain.
    pub fn pick_random<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<DrawnNumber, DomainError> {
        self.undrawn()
            .choose(rng)
            .copied()
            .ok_or_else(|| all_drawn(self.game_id))
    }

    pub fn sorted_by_number(&self) -> Vec<Draw> {
        let mut sorted = self.entries.clone();
        sorted.sort_by_key(|d| d.number);
        sorted
    }

    /// Most recent `limit` entries, newest first.
    pub fn latest(&self, limit: usize) -> Vec<Draw> {
        self.entries.iter().rev().take(limit).cloned().collect()
    }

    pub fn numbers(&self) -> Vec<i32> {
        self.entries.iter().map(|d| i32::from(d.number)).collect()
    }

    /// Record an entry the store has already accepted.
    pub fn push(&mut self, draw: Draw) -> Result<(), DomainError> {
        self.check_can_append(draw.number)?;
        self.present[draw.number.get() as usize] = true;
        self.entries.push(draw);
        Ok(())
    }
}

fn all_drawn(game_id: i64) -> DomainError {
    DomainError::conflict(
        ConflictKind::AllNumbersDrawn,
        format!("All {TOTAL_NUMBERS} numbers have been drawn in game {game_id}"),
    )
}
