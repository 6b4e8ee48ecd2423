//! Game lifecycle and draw orchestration.

use std::sync::Arc;

use serde::Serialize;
use time::OffsetDateTime;
use tracing::{debug, info, warn};

use super::game_locks::GameLocks;
use crate::domain::ledger::Draw;
use crate::domain::lifecycle::{
    ensure_drawable, ensure_endable, ensure_owner, ensure_startable, validate_game_name,
    GamePhase, LifecycleRules,
};
use crate::domain::numbers::DrawnNumber;
use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};
use crate::repos::draws::{load_ledger, DrawLedgerStore, NewDraw};
use crate::repos::games::{require_game, Game, GameStore, NewGame};
use crate::repos::users::{UserDirectory, UserSummary};

pub const DEFAULT_LATEST_LIMIT: u32 = 10;
pub const MAX_LATEST_LIMIT: u32 = 50;

/// Read model returned by `get_status`.
#[derive(Debug, Clone, Serialize)]
pub struct GameStatus {
    pub game_id: i64,
    pub name: String,
    pub owner_id: i64,
    pub owner: Option<UserSummary>,
    pub phase: GamePhase,
    pub is_active: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339::option")]
    pub started_at: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub ended_at: Option<OffsetDateTime>,
    pub total_drawn: usize,
    pub drawn: Vec<Draw>,
    pub last_drawn: Option<Draw>,
}

/// Owner-restricted lifecycle transitions, draws, and public read views.
///
/// Start, end and draw take the per-game lock for their whole
/// load-check-write sequence. Reads never lock.
pub struct GameService {
    games: Arc<dyn GameStore>,
    draws: Arc<dyn DrawLedgerStore>,
    users: Arc<dyn UserDirectory>,
    locks: GameLocks,
    rules: LifecycleRules,
}

impl GameService {
    pub fn new(
        games: Arc<dyn GameStore>,
        draws: Arc<dyn DrawLedgerStore>,
        users: Arc<dyn UserDirectory>,
        rules: LifecycleRules,
    ) -> Self {
        Self {
            games,
            draws,
            users,
            locks: GameLocks::new(),
            rules,
        }
    }

    pub fn rules(&self) -> LifecycleRules {
        self.rules
    }

    /// Create a game in CREATED owned by `owner_id`.
    pub async fn create_game(&self, owner_id: i64, name: &str) -> Result<Game, DomainError> {
        let name = validate_game_name(name)?;
        if self.users.find_user(owner_id).await?.is_none() {
            return Err(DomainError::not_found(
                NotFoundKind::User,
                format!("User {owner_id} not found"),
            ));
        }

        let game = self
            .games
            .insert(NewGame {
                name,
                owner_id,
                created_at: OffsetDateTime::now_utc(),
            })
            .await?;
        info!(game_id = game.id, owner_id, "Game created");
        Ok(game)
    }

    pub async fn start_game(&self, caller_id: i64, game_id: i64) -> Result<Game, DomainError> {
        let _guard = self.locks.acquire(game_id).await;

        let game = require_game(self.games.as_ref(), game_id).await?;
        self.check_owner(&game, caller_id)?;
        ensure_startable(game.phase(), game_id)?;

        let started = self
            .games
            .mark_started(game_id, OffsetDateTime::now_utc())
            .await?;
        info!(game_id, user_id = caller_id, "Game started");
        Ok(started)
    }

    pub async fn end_game(&self, caller_id: i64, game_id: i64) -> Result<Game, DomainError> {
        let _guard = self.locks.acquire(game_id).await;

        let game = require_game(self.games.as_ref(), game_id).await?;
        self.check_owner(&game, caller_id)?;
        let transition = ensure_endable(game.phase(), self.rules, game_id)?;

        let ended = self
            .games
            .mark_ended(game_id, OffsetDateTime::now_utc(), transition)
            .await?;
        info!(game_id, user_id = caller_id, ?transition, "Game ended");
        Ok(ended)
    }

    /// Draw an explicit number. `number` is validated after the game checks so
    /// an unknown game reports NotFound regardless of the value sent.
    pub async fn draw_number(
        &self,
        caller_id: i64,
        game_id: i64,
        number: i64,
    ) -> Result<Draw, DomainError> {
        let _guard = self.locks.acquire(game_id).await;

        self.load_drawable(caller_id, game_id).await?;
        let number = DrawnNumber::new(number)?;

        let ledger = load_ledger(self.draws.as_ref(), game_id).await?;
        ledger.check_can_append(number)?;

        self.append(game_id, ledger.next_seq(), number).await
    }

    /// Draw uniformly among the numbers not yet called.
    pub async fn draw_random_number(
        &self,
        caller_id: i64,
        game_id: i64,
    ) -> Result<Draw, DomainError> {
        let _guard = self.locks.acquire(game_id).await;

        self.load_drawable(caller_id, game_id).await?;
        let ledger = load_ledger(self.draws.as_ref(), game_id).await?;

        let number = {
            let mut rng = rand::rng();
            ledger.pick_random(&mut rng)?
        };
        debug!(game_id, remaining = ledger.undrawn().len(), "Random number selected");

        self.append(game_id, ledger.next_seq(), number).await
    }

    pub async fn get_status(&self, game_id: i64) -> Result<GameStatus, DomainError> {
        let game = require_game(self.games.as_ref(), game_id).await?;
        let owner = self.users.find_user(game.owner_id).await?;
        let ledger = load_ledger(self.draws.as_ref(), game_id).await?;
        debug!(game_id, total_drawn = ledger.len(), "Loaded game status");

        let last_drawn = ledger.last().cloned();
        let phase = game.phase();
        Ok(GameStatus {
            game_id: game.id,
            name: game.name,
            owner_id: game.owner_id,
            owner,
            phase,
            is_active: phase.is_active(),
            created_at: game.created_at,
            started_at: game.started_at,
            ended_at: game.ended_at,
            total_drawn: ledger.len(),
            drawn: ledger.into_entries(),
            last_drawn,
        })
    }

    /// All called numbers sorted by value.
    pub async fn get_called_numbers(&self, game_id: i64) -> Result<Vec<Draw>, DomainError> {
        require_game(self.games.as_ref(), game_id).await?;
        let ledger = load_ledger(self.draws.as_ref(), game_id).await?;
        Ok(ledger.sorted_by_number())
    }

    /// The most recent draws, newest first. `None` means the default limit.
    pub async fn get_latest_numbers(
        &self,
        game_id: i64,
        limit: Option<u32>,
    ) -> Result<Vec<Draw>, DomainError> {
        let limit = validate_latest_limit(limit)?;
        require_game(self.games.as_ref(), game_id).await?;
        self.draws.latest(game_id, u64::from(limit)).await
    }

    fn check_owner(&self, game: &Game, caller_id: i64) -> Result<(), DomainError> {
        ensure_owner(game.owner_id, caller_id, game.id).inspect_err(|_| {
            warn!(
                game_id = game.id,
                user_id = caller_id,
                owner_id = game.owner_id,
                "Rejected owner action from non-owner"
            );
        })
    }

    async fn load_drawable(&self, caller_id: i64, game_id: i64) -> Result<Game, DomainError> {
        let game = require_game(self.games.as_ref(), game_id).await?;
        self.check_owner(&game, caller_id)?;
        ensure_drawable(game.phase(), game_id)?;
        Ok(game)
    }

    async fn append(
        &self,
        game_id: i64,
        seq: u8,
        number: DrawnNumber,
    ) -> Result<Draw, DomainError> {
        let draw = self
            .draws
            .append_if_absent(NewDraw {
                game_id,
                seq,
                number,
                drawn_at: OffsetDateTime::now_utc(),
            })
            .await?;
        info!(game_id, number = draw.number.get(), seq = draw.seq, "Number drawn");
        Ok(draw)
    }
}

pub fn validate_latest_limit(limit: Option<u32>) -> Result<u32, DomainError> {
    match limit {
        None => Ok(DEFAULT_LATEST_LIMIT),
        Some(n) if (1..=MAX_LATEST_LIMIT).contains(&n) => Ok(n),
        Some(n) => Err(DomainError::validation(
            ValidationKind::InvalidLimit,
            format!("limit must be between 1 and {MAX_LATEST_LIMIT}, got {n}"),
        )),
    }
}
