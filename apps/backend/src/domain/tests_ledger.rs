use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use time::macros::datetime;
use time::Duration;

use crate::domain::ledger::{Draw, DrawLedger};
use crate::domain::numbers::DrawnNumber;
use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind};

const GAME: i64 = 7;

fn draw(seq: u8, number: i64) -> Draw {
    Draw {
        id: seq as i64,
        game_id: GAME,
        seq,
        number: DrawnNumber::new(number).unwrap(),
        drawn_at: datetime!(2025-01-01 12:00 UTC) + Duration::seconds(seq as i64),
    }
}

fn ledger_of(numbers: &[i64]) -> DrawLedger {
    let entries = numbers
        .iter()
        .enumerate()
        .map(|(i, n)| draw(i as u8 + 1, *n))
        .collect();
    DrawLedger::from_entries(GAME, entries).unwrap()
}

fn full_ledger() -> DrawLedger {
    let all: Vec<i64> = (1..=90).collect();
    ledger_of(&all)
}

#[test]
fn empty_ledger_has_all_candidates() {
    let ledger = DrawLedger::empty(GAME);
    assert!(ledger.is_empty());
    assert_eq!(ledger.undrawn().len(), 90);
    assert_eq!(ledger.next_seq(), 1);
    assert!(ledger.last().is_none());
}

#[test]
fn duplicate_append_is_conflict() {
    let ledger = ledger_of(&[42]);
    let err = ledger
        .check_can_append(DrawnNumber::new(42).unwrap())
        .unwrap_err();
    assert!(err.is_conflict(&ConflictKind::NumberAlreadyDrawn));
}

#[test]
fn duplicate_in_storage_is_corruption() {
    let err = DrawLedger::from_entries(GAME, vec![draw(1, 5), draw(2, 5)]).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Infra(InfraErrorKind::DataCorruption, _)
    ));
}

#[test]
fn full_ledger_rejects_everything() {
    let ledger = full_ledger();
    assert!(ledger.is_exhausted());
    assert!(ledger.undrawn().is_empty());

    let explicit = ledger
        .check_can_append(DrawnNumber::new(1).unwrap())
        .unwrap_err();
    assert!(explicit.is_conflict(&ConflictKind::AllNumbersDrawn));

    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let random = ledger.pick_random(&mut rng).unwrap_err();
    assert!(random.is_conflict(&ConflictKind::AllNumbersDrawn));
}

#[test]
fn pick_random_with_one_left_returns_it() {
    let all_but_17: Vec<i64> = (1..=90).filter(|n| *n != 17).collect();
    let ledger = ledger_of(&all_but_17);
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    for _ in 0..10 {
        assert_eq!(ledger.pick_random(&mut rng).unwrap().get(), 17);
    }
}

#[test]
fn sorted_view_is_numeric_and_latest_is_reverse_draw_order() {
    let ledger = ledger_of(&[50, 3, 77, 12]);

    let sorted: Vec<u8> = ledger
        .sorted_by_number()
        .iter()
        .map(|d| d.number.get())
        .collect();
    assert_eq!(sorted, vec![3, 12, 50, 77]);

    let latest: Vec<u8> = ledger.latest(2).iter().map(|d| d.number.get()).collect();
    assert_eq!(latest, vec![12, 77]);

    // native order is untouched
    let native: Vec<u8> = ledger.entries().iter().map(|d| d.number.get()).collect();
    assert_eq!(native, vec![50, 3, 77, 12]);
}

#[test]
fn latest_with_large_limit_returns_everything() {
    let ledger = ledger_of(&[1, 2, 3]);
    assert_eq!(ledger.latest(50).len(), 3);
}

#[test]
fn push_tracks_presence_and_seq() {
    let mut ledger = DrawLedger::empty(GAME);
    ledger.push(draw(1, 9)).unwrap();
    assert!(ledger.contains(DrawnNumber::new(9).unwrap()));
    assert_eq!(ledger.next_seq(), 2);
    assert!(ledger.push(draw(2, 9)).is_err());
    assert_eq!(ledger.len(), 1);
}

#[test]
fn draw_serializes_number_and_rfc3339_timestamp() {
    let json = serde_json::to_value(draw(1, 42)).unwrap();
    assert_eq!(json["number"], 42);
    assert_eq!(json["seq"], 1);
    assert_eq!(json["drawn_at"], "2025-01-01T12:00:01Z");
}
