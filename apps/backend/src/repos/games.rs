//! Game records and the `GameStore` seam.

use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use time::OffsetDateTime;

use crate::adapters::games_sea as games_adapter;
use crate::domain::lifecycle::{EndTransition, GamePhase};
use crate::entities::games;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::infra::db_errors::map_db_err;

/// Game domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    pub id: i64,
    pub name: String,
    pub owner_id: i64,
    pub created_at: OffsetDateTime,
    pub started_at: Option<OffsetDateTime>,
    pub ended_at: Option<OffsetDateTime>,
}

impl Game {
    pub fn phase(&self) -> GamePhase {
        GamePhase::from_timestamps(self.started_at, self.ended_at)
    }

    pub fn is_active(&self) -> bool {
        self.phase().is_active()
    }
}

impl From<games::Model> for Game {
    fn from(model: games::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            owner_id: model.owner_id,
            created_at: model.created_at,
            started_at: model.started_at,
            ended_at: model.ended_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewGame {
    pub name: String,
    pub owner_id: i64,
    pub created_at: OffsetDateTime,
}

/// Listing predicate; every variant returns most-recently-created first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameFilter {
    All,
    Active,
    OwnedBy(i64),
}

impl GameFilter {
    pub fn matches(&self, game: &Game) -> bool {
        match self {
            GameFilter::All => true,
            GameFilter::Active => game.is_active(),
            GameFilter::OwnedBy(owner) => game.owner_id == *owner,
        }
    }
}

#[async_trait]
pub trait GameStore: Send + Sync {
    async fn insert(&self, new: NewGame) -> Result<Game, DomainError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Game>, DomainError>;

    /// Set `started_at` only if the game is still in CREATED.
    async fn mark_started(&self, id: i64, at: OffsetDateTime) -> Result<Game, DomainError>;

    /// Set `ended_at` (and `started_at` for `FromCreated`) only if the game is
    /// still in the phase the transition expects.
    async fn mark_ended(
        &self,
        id: i64,
        at: OffsetDateTime,
        transition: EndTransition,
    ) -> Result<Game, DomainError>;

    async fn list(&self, filter: GameFilter) -> Result<Vec<Game>, DomainError>;
}

/// Find a game or fail with `NotFound(Game)`.
pub async fn require_game(store: &dyn GameStore, id: i64) -> Result<Game, DomainError> {
    store
        .find_by_id(id)
        .await?
        .ok_or_else(|| game_not_found(id))
}

pub fn game_not_found(id: i64) -> DomainError {
    DomainError::not_found(NotFoundKind::Game, format!("Game {id} not found"))
}

/// `GameStore` over a SeaORM connection.
#[derive(Clone)]
pub struct SeaGameStore {
    db: DatabaseConnection,
}

impl SeaGameStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl GameStore for SeaGameStore {
    async fn insert(&self, new: NewGame) -> Result<Game, DomainError> {
        let dto = games_adapter::GameCreate {
            name: new.name,
            owner_id: new.owner_id,
            created_at: new.created_at,
        };
        let model = games_adapter::create_game(&self.db, dto)
            .await
            .map_err(map_db_err)?;
        Ok(Game::from(model))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Game>, DomainError> {
        let model = games_adapter::find_by_id(&self.db, id)
            .await
            .map_err(map_db_err)?;
        Ok(model.map(Game::from))
    }

    async fn mark_started(&self, id: i64, at: OffsetDateTime) -> Result<Game, DomainError> {
        let model = games_adapter::mark_started(&self.db, id, at)
            .await
            .map_err(map_db_err)?;
        Ok(Game::from(model))
    }

    async fn mark_ended(
        &self,
        id: i64,
        at: OffsetDateTime,
        transition: EndTransition,
    ) -> Result<Game, DomainError> {
        let model = games_adapter::mark_ended(&self.db, id, at, transition)
            .await
            .map_err(map_db_err)?;
        Ok(Game::from(model))
    }

    async fn list(&self, filter: GameFilter) -> Result<Vec<Game>, DomainError> {
        let models = games_adapter::list(&self.db, filter)
            .await
            .map_err(map_db_err)?;
        Ok(models.into_iter().map(Game::from).collect())
    }
}
