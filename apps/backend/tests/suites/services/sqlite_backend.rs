//! The same service flows over SeaORM on a migrated SQLite database.

use tombola::adapters::{cards_sea, users_sea};
use tombola::domain::lifecycle::LifecycleRules;
use tombola::domain::scoring::WinTier;
use tombola::errors::domain::ConflictKind;
use tombola::infra::state::{build_state, Stores};
use tombola::repos::users::CALLER_ROLE;
use tombola::state::app_state::AppState;

use crate::support::factory::{sample_cells, sqlite_db};

async fn sqlite_state() -> (AppState, i64) {
    let db = sqlite_db().await;
    let owner = users_sea::create_user(&db, "Zio Gino", "gino@example.com")
        .await
        .unwrap();
    users_sea::grant_role(&db, owner.id, CALLER_ROLE).await.unwrap();

    let state = build_state()
        .with_stores(Stores::sea(&db))
        .with_rules(LifecycleRules::default())
        .build()
        .await
        .unwrap();
    (state, owner.id)
}

#[tokio::test]
async fn full_game_over_sqlite() {
    let (state, owner) = sqlite_state().await;

    let game = state.games.create_game(owner, "Sagra").await.unwrap();
    state.games.start_game(owner, game.id).await.unwrap();

    state.games.draw_number(owner, game.id, 12).await.unwrap();
    let err = state.games.draw_number(owner, game.id, 12).await.unwrap_err();
    assert!(err.is_conflict(&ConflictKind::NumberAlreadyDrawn));

    let random = state.games.draw_random_number(owner, game.id).await.unwrap();
    assert_ne!(random.number.get(), 12);
    assert_eq!(random.seq, 2);

    let status = state.games.get_status(game.id).await.unwrap();
    assert_eq!(status.total_drawn, 2);
    assert_eq!(status.owner.unwrap().name, "Zio Gino");

    let ended = state.games.end_game(owner, game.id).await.unwrap();
    assert!(ended.ended_at.is_some());
    assert!(state.directory.list_active().await.unwrap().is_empty());
}

#[tokio::test]
async fn winning_check_over_sqlite() {
    let db = sqlite_db().await;
    let owner = users_sea::create_user(&db, "owner", "owner@example.com")
        .await
        .unwrap();
    let card = cards_sea::insert_card(&db, "Cartella", "2024", &sample_cells())
        .await
        .unwrap();
    let state = build_state().with_stores(Stores::sea(&db)).build().await.unwrap();

    let game = state.games.create_game(owner.id, "g").await.unwrap();
    state.games.start_game(owner.id, game.id).await.unwrap();
    for n in [21, 22, 23] {
        state.games.draw_number(owner.id, game.id, n).await.unwrap();
    }

    let check = state.winning.check_winning(game.id, card.id).await.unwrap();
    assert_eq!(check.tier, WinTier::Terno);
}
