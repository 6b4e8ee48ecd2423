//! Read-only game listings.

use std::sync::Arc;

use tracing::debug;

use crate::errors::domain::DomainError;
use crate::repos::games::{Game, GameFilter, GameStore};

/// Listings served straight from the lifecycle store, newest first.
pub struct GameDirectory {
    games: Arc<dyn GameStore>,
}

impl GameDirectory {
    pub fn new(games: Arc<dyn GameStore>) -> Self {
        Self { games }
    }

    pub async fn list_all(&self) -> Result<Vec<Game>, DomainError> {
        self.list(GameFilter::All).await
    }

    /// Started and not ended.
    pub async fn list_active(&self) -> Result<Vec<Game>, DomainError> {
        self.list(GameFilter::Active).await
    }

    pub async fn list_by_owner(&self, owner_id: i64) -> Result<Vec<Game>, DomainError> {
        self.list(GameFilter::OwnedBy(owner_id)).await
    }

    async fn list(&self, filter: GameFilter) -> Result<Vec<Game>, DomainError> {
        let games = self.games.list(filter).await?;
        debug!(?filter, count = games.len(), "Listed games");
        Ok(games)
    }
}
