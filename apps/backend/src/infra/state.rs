use std::sync::Arc;

use sea_orm::DatabaseConnection;
use tracing::info;

use crate::config::app::{AppConfig, StorageConfig};
use crate::config::db::DbProfile;
use crate::domain::lifecycle::LifecycleRules;
use crate::error::AppError;
use crate::infra::db::bootstrap_db;
use crate::infra::memory::MemoryStore;
use crate::repos::cards::{CardCatalog, SeaCardCatalog};
use crate::repos::draws::{DrawLedgerStore, SeaDrawLedgerStore};
use crate::repos::games::{GameStore, SeaGameStore};
use crate::repos::users::{SeaUserDirectory, UserDirectory};
use crate::state::app_state::AppState;
use crate::state::security_config::SecurityConfig;

/// One implementation of every storage seam.
#[derive(Clone)]
pub struct Stores {
    pub games: Arc<dyn GameStore>,
    pub draws: Arc<dyn DrawLedgerStore>,
    pub users: Arc<dyn UserDirectory>,
    pub cards: Arc<dyn CardCatalog>,
}

impl Stores {
    pub fn sea(db: &DatabaseConnection) -> Self {
        Self {
            games: Arc::new(SeaGameStore::new(db.clone())),
            draws: Arc::new(SeaDrawLedgerStore::new(db.clone())),
            users: Arc::new(SeaUserDirectory::new(db.clone())),
            cards: Arc::new(SeaCardCatalog::new(db.clone())),
        }
    }

    pub fn memory(store: &MemoryStore) -> Self {
        Self {
            games: Arc::new(store.clone()),
            draws: Arc::new(store.clone()),
            users: Arc::new(store.clone()),
            cards: Arc::new(store.clone()),
        }
    }
}

enum Backend {
    Db(DbProfile),
    Stores(Stores),
}

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    security_config: SecurityConfig,
    rules: LifecycleRules,
    backend: Option<Backend>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            security_config: SecurityConfig::for_tests(),
            rules: LifecycleRules::default(),
            backend: None,
        }
    }

    /// Connect to `profile` and migrate on build.
    pub fn with_db(mut self, profile: DbProfile) -> Self {
        self.backend = Some(Backend::Db(profile));
        self
    }

    pub fn with_memory(self, store: &MemoryStore) -> Self {
        self.with_stores(Stores::memory(store))
    }

    pub fn with_stores(mut self, stores: Stores) -> Self {
        self.backend = Some(Backend::Stores(stores));
        self
    }

    pub fn with_security(mut self, security_config: SecurityConfig) -> Self {
        self.security_config = security_config;
        self
    }

    pub fn with_rules(mut self, rules: LifecycleRules) -> Self {
        self.rules = rules;
        self
    }

    /// Apply storage, secret and rules from process configuration.
    pub fn with_config(self, config: &AppConfig) -> Self {
        let builder = self
            .with_security(SecurityConfig::new(config.jwt_secret.as_bytes()))
            .with_rules(config.rules);
        match &config.storage {
            StorageConfig::Sql(profile) => builder.with_db(profile.clone()),
            StorageConfig::Memory => builder.with_memory(&MemoryStore::new()),
        }
    }

    /// Without an explicit backend the state runs on a fresh in-memory store.
    pub async fn build(self) -> Result<AppState, AppError> {
        let (stores, db) = match self.backend {
            Some(Backend::Db(profile)) => {
                // single entrypoint: connect + migrate
                let conn = bootstrap_db(&profile).await?;
                info!(?profile, "Database ready");
                (Stores::sea(&conn), Some(conn))
            }
            Some(Backend::Stores(stores)) => (stores, None),
            None => (Stores::memory(&MemoryStore::new()), None),
        };
        Ok(AppState::new(stores, db, self.security_config, self.rules))
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
