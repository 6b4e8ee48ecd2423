use time::OffsetDateTime;
use tombola::adapters::games_sea::{self, GameCreate};
use tombola::adapters::users_sea;
use tombola::domain::numbers::DrawnNumber;
use tombola::errors::domain::{ConflictKind, DomainError, NotFoundKind, ValidationKind};
use tombola::repos::draws::{load_ledger, DrawLedgerStore, NewDraw, SeaDrawLedgerStore};
use sea_orm::DatabaseConnection;

use crate::support::factory::sqlite_db;

async fn seeded_game(db: &DatabaseConnection) -> i64 {
    let owner = users_sea::create_user(db, "o", "o@example.com").await.unwrap();
    games_sea::create_game(
        db,
        GameCreate {
            name: "g".into(),
            owner_id: owner.id,
            created_at: OffsetDateTime::now_utc(),
        },
    )
    .await
    .unwrap()
    .id
}

fn draw(game_id: i64, seq: u8, number: i64) -> NewDraw {
    NewDraw {
        game_id,
        seq,
        number: DrawnNumber::new(number).unwrap(),
        drawn_at: OffsetDateTime::now_utc(),
    }
}

#[tokio::test]
async fn append_and_read_back_in_draw_order() {
    let db = sqlite_db().await;
    let game_id = seeded_game(&db).await;
    let store = SeaDrawLedgerStore::new(db);

    for (seq, n) in [(1, 88), (2, 4), (3, 46)] {
        let stored = store.append_if_absent(draw(game_id, seq, n)).await.unwrap();
        assert_eq!(stored.seq, seq);
        assert_eq!(stored.number.get() as i64, n);
    }

    let ledger = load_ledger(&store, game_id).await.unwrap();
    assert_eq!(ledger.numbers(), vec![88, 4, 46]);
    assert_eq!(ledger.next_seq(), 4);

    let latest: Vec<u8> = store
        .latest(game_id, 2)
        .await
        .unwrap()
        .iter()
        .map(|d| d.number.get())
        .collect();
    assert_eq!(latest, vec![46, 4]);
}

#[tokio::test]
async fn unique_constraints_map_to_distinct_conflicts() {
    let db = sqlite_db().await;
    let game_id = seeded_game(&db).await;
    let store = SeaDrawLedgerStore::new(db);

    store.append_if_absent(draw(game_id, 1, 10)).await.unwrap();

    let err = store.append_if_absent(draw(game_id, 2, 10)).await.unwrap_err();
    assert!(err.is_conflict(&ConflictKind::NumberAlreadyDrawn), "{err:?}");

    let err = store.append_if_absent(draw(game_id, 1, 11)).await.unwrap_err();
    assert!(err.is_conflict(&ConflictKind::ConcurrentDraw), "{err:?}");

    assert_eq!(store.entries(game_id).await.unwrap().len(), 1);
}

#[tokio::test]
async fn same_number_in_different_games_is_fine() {
    let db = sqlite_db().await;
    let a = seeded_game(&db).await;
    let b = games_sea::create_game(
        &db,
        GameCreate {
            name: "other".into(),
            owner_id: 1,
            created_at: OffsetDateTime::now_utc(),
        },
    )
    .await
    .unwrap()
    .id;
    let store = SeaDrawLedgerStore::new(db);

    store.append_if_absent(draw(a, 1, 7)).await.unwrap();
    store.append_if_absent(draw(b, 1, 7)).await.unwrap();
}

#[tokio::test]
async fn draw_for_missing_game_is_rejected() {
    let db = sqlite_db().await;
    let store = SeaDrawLedgerStore::new(db);

    let err = store.append_if_absent(draw(12_345, 1, 7)).await.unwrap_err();
    assert!(
        matches!(
            err,
            DomainError::Validation(ValidationKind::Other(_), _)
                | DomainError::NotFound(NotFoundKind::Game, _)
        ),
        "{err:?}"
    );
}
