use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::security_config::SecurityConfig;
use crate::domain::lifecycle::LifecycleRules;
use crate::infra::state::Stores;
use crate::services::{GameDirectory, GameService, UserService, WinningService};

/// Shared per-process state handed to every handler through `web::Data`.
#[derive(Clone)]
pub struct AppState {
    /// Present for SQL storage; `None` for the in-memory backend.
    db: Option<DatabaseConnection>,
    pub security: SecurityConfig,
    pub games: Arc<GameService>,
    pub directory: Arc<GameDirectory>,
    pub winning: Arc<WinningService>,
    pub users: Arc<UserService>,
}

impl AppState {
    /// Wire every service over one set of stores.
    pub fn new(
        stores: Stores,
        db: Option<DatabaseConnection>,
        security: SecurityConfig,
        rules: LifecycleRules,
    ) -> Self {
        let games = GameService::new(
            Arc::clone(&stores.games),
            Arc::clone(&stores.draws),
            Arc::clone(&stores.users),
            rules,
        );
        Self {
            db,
            security,
            games: Arc::new(games),
            directory: Arc::new(GameDirectory::new(Arc::clone(&stores.games))),
            winning: Arc::new(WinningService::new(
                Arc::clone(&stores.games),
                Arc::clone(&stores.draws),
                Arc::clone(&stores.cards),
            )),
            users: Arc::new(UserService::new(stores.users)),
        }
    }

    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }
}
