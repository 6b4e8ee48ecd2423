//! Card scoring against a game's called numbers.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, warn};

use crate::domain::cards::CARD_CELLS;
use crate::domain::scoring::{evaluate_layout, WinTier};
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::repos::cards::CardCatalog;
use crate::repos::draws::{load_ledger, DrawLedgerStore};
use crate::repos::games::{require_game, GameStore};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WinCheck {
    pub game_id: i64,
    pub card_id: i64,
    pub tier: WinTier,
    pub tier_value: u8,
    pub description: &'static str,
}

pub struct WinningService {
    games: Arc<dyn GameStore>,
    draws: Arc<dyn DrawLedgerStore>,
    cards: Arc<dyn CardCatalog>,
}

impl WinningService {
    pub fn new(
        games: Arc<dyn GameStore>,
        draws: Arc<dyn DrawLedgerStore>,
        cards: Arc<dyn CardCatalog>,
    ) -> Self {
        Self {
            games,
            draws,
            cards,
        }
    }

    /// Score `card_id` against every number called so far in `game_id`.
    ///
    /// Works in any phase; an unstarted game simply has nothing drawn.
    pub async fn check_winning(&self, game_id: i64, card_id: i64) -> Result<WinCheck, DomainError> {
        require_game(self.games.as_ref(), game_id).await?;
        let card = self.cards.find_card(card_id).await?.ok_or_else(|| {
            DomainError::not_found(NotFoundKind::Card, format!("Card {card_id} not found"))
        })?;
        if !card.is_well_formed() {
            warn!(
                card_id,
                cells = card.cells.len(),
                expected = CARD_CELLS,
                "Scoring card with unexpected cell count"
            );
        }

        let ledger = load_ledger(self.draws.as_ref(), game_id).await?;
        let tier = evaluate_layout(&card, ledger.numbers());
        debug!(game_id, card_id, tier = tier.label(), "Card evaluated");

        Ok(WinCheck {
            game_id,
            card_id,
            tier,
            tier_value: tier.tag(),
            description: tier.label(),
        })
    }
}
