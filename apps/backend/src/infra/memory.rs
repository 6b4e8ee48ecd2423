//! In-memory implementations of every storage seam.
//!
//! Used by the service and route tests and by `TOMBOLA_STORAGE=memory`.
//! All state sits behind one `parking_lot::RwLock`; no guard is held across
//! an await point.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;
use time::OffsetDateTime;

use crate::domain::cards::CardLayout;
use crate::domain::ledger::Draw;
use crate::domain::lifecycle::{EndTransition, GamePhase};
use crate::errors::domain::{ConflictKind, DomainError};
use crate::repos::cards::CardCatalog;
use crate::repos::draws::{DrawLedgerStore, NewDraw};
use crate::repos::games::{game_not_found, Game, GameFilter, GameStore, NewGame};
use crate::repos::users::{UserDirectory, UserSummary};

#[derive(Default)]
struct MemoryState {
    next_id: i64,
    games: BTreeMap<i64, Game>,
    draws: HashMap<i64, Vec<Draw>>,
    users: HashMap<i64, UserSummary>,
    roles: HashMap<i64, HashSet<String>>,
    cards: HashMap<i64, CardLayout>,
}

impl MemoryState {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

#[derive(Clone, Default)]
pub struct MemoryStore {
    state: Arc<RwLock<MemoryState>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_user(&self, name: &str) -> UserSummary {
        let mut state = self.state.write();
        let id = state.next_id();
        let user = UserSummary {
            id,
            name: name.to_string(),
        };
        state.users.insert(id, user.clone());
        user
    }

    pub fn grant_role(&self, user_id: i64, role: &str) {
        self.state
            .write()
            .roles
            .entry(user_id)
            .or_default()
            .insert(role.to_string());
    }

    pub fn add_card(&self, name: &str, version: &str, cells: Vec<i32>) -> CardLayout {
        let mut state = self.state.write();
        let id = state.next_id();
        let card = CardLayout {
            id,
            name: name.to_string(),
            version: version.to_string(),
            cells,
        };
        state.cards.insert(id, card.clone());
        card
    }
}

fn transition_conflict(game: &Game) -> DomainError {
    match game.phase() {
        GamePhase::Started => DomainError::conflict(
            ConflictKind::GameAlreadyStarted,
            format!("Game {} has already been started", game.id),
        ),
        GamePhase::Ended => DomainError::conflict(
            ConflictKind::GameAlreadyEnded,
            format!("Game {} has already ended", game.id),
        ),
        GamePhase::Created => DomainError::conflict(
            ConflictKind::Other("StaleTransition".into()),
            format!("Game {} changed concurrently; retry", game.id),
        ),
    }
}

#[async_trait]
impl GameStore for MemoryStore {
    async fn insert(&self, new: NewGame) -> Result<Game, DomainError> {
        let mut state = self.state.write();
        let id = state.next_id();
        let game = Game {
            id,
            name: new.name,
            owner_id: new.owner_id,
            created_at: new.created_at,
            started_at: None,
            ended_at: None,
        };
        state.games.insert(id, game.clone());
        Ok(game)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Game>, DomainError> {
        Ok(self.state.read().games.get(&id).cloned())
    }

    async fn mark_started(&self, id: i64, at: OffsetDateTime) -> Result<Game, DomainError> {
        let mut state = self.state.write();
        let game = state.games.get_mut(&id).ok_or_else(|| game_not_found(id))?;
        if game.phase() != GamePhase::Created {
            return Err(transition_conflict(game));
        }
        game.started_at = Some(at);
        Ok(game.clone())
    }

    async fn mark_ended(
        &self,
        id: i64,
        at: OffsetDateTime,
        transition: EndTransition,
    ) -> Result<Game, DomainError> {
        let mut state = self.state.write();
        let game = state.games.get_mut(&id).ok_or_else(|| game_not_found(id))?;
        let expected = match transition {
            EndTransition::FromStarted => GamePhase::Started,
            EndTransition::FromCreated => GamePhase::Created,
        };
        if game.phase() != expected {
            return Err(transition_conflict(game));
        }
        if transition == EndTransition::FromCreated {
            game.started_at = Some(at);
        }
        game.ended_at = Some(at);
        Ok(game.clone())
    }

    async fn list(&self, filter: GameFilter) -> Result<Vec<Game>, DomainError> {
        let state = self.state.read();
        let mut games: Vec<Game> = state
            .games
            .values()
            .filter(|g| filter.matches(g))
            .cloned()
            .collect();
        games.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(games)
    }
}

#[async_trait]
impl DrawLedgerStore for MemoryStore {
    async fn entries(&self, game_id: i64) -> Result<Vec<Draw>, DomainError> {
        Ok(self
            .state
            .read()
            .draws
            .get(&game_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn append_if_absent(&self, draw: NewDraw) -> Result<Draw, DomainError> {
        let mut state = self.state.write();
        if !state.games.contains_key(&draw.game_id) {
            return Err(game_not_found(draw.game_id));
        }
        let id = state.next_id();
        let entries = state.draws.entry(draw.game_id).or_default();
        if entries.iter().any(|d| d.number == draw.number) {
            return Err(DomainError::conflict(
                ConflictKind::NumberAlreadyDrawn,
                format!(
                    "Number {} has already been drawn in game {}",
                    draw.number, draw.game_id
                ),
            ));
        }
        if entries.iter().any(|d| d.seq == draw.seq) {
            return Err(DomainError::conflict(
                ConflictKind::ConcurrentDraw,
                "Another draw was recorded concurrently; retry",
            ));
        }
        let stored = Draw {
            id,
            game_id: draw.game_id,
            seq: draw.seq,
            number: draw.number,
            drawn_at: draw.drawn_at,
        };
        entries.push(stored.clone());
        Ok(stored)
    }

    async fn latest(&self, game_id: i64, limit: u64) -> Result<Vec<Draw>, DomainError> {
        let state = self.state.read();
        Ok(state
            .draws
            .get(&game_id)
            .map(|entries| {
                entries
                    .iter()
                    .rev()
                    .take(limit as usize)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }
}

#[async_trait]
impl UserDirectory for MemoryStore {
    async fn find_user(&self, id: i64) -> Result<Option<UserSummary>, DomainError> {
        Ok(self.state.read().users.get(&id).cloned())
    }

    async fn has_role(&self, user_id: i64, role: &str) -> Result<bool, DomainError> {
        Ok(self
            .state
            .read()
            .roles
            .get(&user_id)
            .is_some_and(|roles| roles.contains(role)))
    }
}

#[async_trait]
impl CardCatalog for MemoryStore {
    async fn find_card(&self, id: i64) -> Result<Option<CardLayout>, DomainError> {
        Ok(self.state.read().cards.get(&id).cloned())
    }
}
