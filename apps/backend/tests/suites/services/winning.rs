use tombola::domain::scoring::WinTier;
use tombola::errors::domain::NotFoundKind;
use tombola::DomainError;

use crate::support::factory::{
    create_game, create_started_game, memory_state, sample_cells, seed_caller,
};

#[tokio::test]
async fn tiers_climb_as_numbers_are_called() {
    let (store, state) = memory_state().await;
    let owner = seed_caller(&store, "owner");
    let card = store.add_card("Cartella 1", "v1", sample_cells());
    let game = create_started_game(&state, &owner).await;

    let check = state.winning.check_winning(game.id, card.id).await.unwrap();
    assert_eq!(check.tier, WinTier::None);
    assert_eq!(check.description, "Nessuna vincita");

    let steps = [
        (1, WinTier::None),
        (2, WinTier::Ambo),
        (11, WinTier::Ambo),
        (3, WinTier::Terno),
        (4, WinTier::Quaterna),
        (5, WinTier::Cinquina),
    ];
    for (n, expected) in steps {
        state.games.draw_number(owner.id, game.id, n).await.unwrap();
        let check = state.winning.check_winning(game.id, card.id).await.unwrap();
        assert_eq!(check.tier, expected, "after drawing {n}");
        assert_eq!(check.tier_value, expected.tag());
    }

    for n in (12..=15).chain(21..=25) {
        state.games.draw_number(owner.id, game.id, n).await.unwrap();
    }
    let check = state.winning.check_winning(game.id, card.id).await.unwrap();
    assert_eq!(check.tier, WinTier::Tombola);
    assert_eq!(check.tier_value, 15);
    assert_eq!(check.description, "Tombola");
    assert_eq!((check.game_id, check.card_id), (game.id, card.id));
}

#[tokio::test]
async fn unknown_game_or_card_is_not_found() {
    let (store, state) = memory_state().await;
    let owner = seed_caller(&store, "owner");
    let card = store.add_card("c", "v1", sample_cells());
    let game = create_game(&state, &owner).await;

    let err = state.winning.check_winning(game.id, 9_999).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound(NotFoundKind::Card, _)));

    let err = state.winning.check_winning(9_999, card.id).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound(NotFoundKind::Game, _)));
}

#[tokio::test]
async fn malformed_card_still_scores() {
    let (store, state) = memory_state().await;
    let owner = seed_caller(&store, "owner");
    let short = store.add_card("short", "v0", vec![1, 2, 3, 4, 5, 6, 7]);
    let game = create_started_game(&state, &owner).await;

    for n in [6, 7] {
        state.games.draw_number(owner.id, game.id, n).await.unwrap();
    }
    let check = state.winning.check_winning(game.id, short.id).await.unwrap();
    assert_eq!(check.tier, WinTier::Ambo);
}
