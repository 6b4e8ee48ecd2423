//! Game lifecycle state machine: CREATED -> STARTED -> ENDED.
//!
//! Phase is derived from the two persisted timestamps; these helpers only
//! decide whether a transition is legal. Persisting it is the caller's job.

use serde::Serialize;
use time::OffsetDateTime;

use crate::errors::domain::{ConflictKind, DomainError, UnauthorizedKind, ValidationKind};

pub const MAX_GAME_NAME_LEN: usize = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GamePhase {
    Created,
    Started,
    Ended,
}

impl GamePhase {
    /// `ended_at` alone (legacy rows) still counts as ended.
    pub fn from_timestamps(
        started_at: Option<OffsetDateTime>,
        ended_at: Option<OffsetDateTime>,
    ) -> Self {
        match (started_at, ended_at) {
            (_, Some(_)) => GamePhase::Ended,
            (Some(_), None) => GamePhase::Started,
            (None, None) => GamePhase::Created,
        }
    }

    pub fn is_active(self) -> bool {
        self == GamePhase::Started
    }
}

/// Tunable lifecycle policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifecycleRules {
    /// Whether `end` may be applied to a game that was never started.
    pub allow_end_unstarted: bool,
}

impl Default for LifecycleRules {
    fn default() -> Self {
        Self {
            allow_end_unstarted: true,
        }
    }
}

/// Which edge an end transition takes; determines which timestamps get written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndTransition {
    FromStarted,
    /// Ending a never-started game also stamps `started_at`.
    FromCreated,
}

pub fn validate_game_name(name: &str) -> Result<String, DomainError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(DomainError::validation(
            ValidationKind::InvalidGameName,
            "Game name is required",
        ));
    }
    if trimmed.chars().count() > MAX_GAME_NAME_LEN {
        return Err(DomainError::validation(
            ValidationKind::InvalidGameName,
            format!("Game name must be at most {MAX_GAME_NAME_LEN} characters"),
        ));
    }
    Ok(trimmed.to_string())
}

pub fn ensure_owner(owner_id: i64, caller_id: i64, game_id: i64) -> Result<(), DomainError> {
    if owner_id == caller_id {
        Ok(())
    } else {
        Err(DomainError::unauthorized(
            UnauthorizedKind::NotOwner,
            format!("User {caller_id} is not the owner of game {game_id}"),
        ))
    }
}

pub fn ensure_startable(phase: GamePhase, game_id: i64) -> Result<(), DomainError> {
    match phase {
        GamePhase::Created => Ok(()),
        GamePhase::Started | GamePhase::Ended => Err(DomainError::conflict(
            ConflictKind::GameAlreadyStarted,
            format!("Game {game_id} has already been started"),
        )),
    }
}

pub fn ensure_endable(
    phase: GamePhase,
    rules: LifecycleRules,
    game_id: i64,
) -> Result<EndTransition, DomainError> {
    match phase {
        GamePhase::Started => Ok(EndTransition::FromStarted),
        GamePhase::Created if rules.allow_end_unstarted => Ok(EndTransition::FromCreated),
        GamePhase::Created => Err(DomainError::conflict(
            ConflictKind::GameNotStarted,
            format!("Game {game_id} has not been started"),
        )),
        GamePhase::Ended => Err(DomainError::conflict(
            ConflictKind::GameAlreadyEnded,
            format!("Game {game_id} has already ended"),
        )),
    }
}

pub fn ensure_drawable(phase: GamePhase, game_id: i64) -> Result<(), DomainError> {
    match phase {
        GamePhase::Started => Ok(()),
        GamePhase::Created => Err(DomainError::conflict(
            ConflictKind::GameNotStarted,
            format!("Game {game_id} has not been started"),
        )),
        GamePhase::Ended => Err(DomainError::conflict(
            ConflictKind::GameAlreadyEnded,
            format!("Game {game_id} has already ended"),
        )),
    }
}
