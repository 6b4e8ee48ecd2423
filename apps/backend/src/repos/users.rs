//! Identity collaborator: user lookup and role checks.

use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use serde::Serialize;

use crate::adapters::users_sea as users_adapter;
use crate::entities::users;
use crate::errors::domain::DomainError;
use crate::infra::db_errors::map_db_err;

/// Role required to create games.
pub const CALLER_ROLE: &str = "caller";

/// Public view of a user, as embedded in game status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserSummary {
    pub id: i64,
    pub name: String,
}

impl From<users::Model> for UserSummary {
    fn from(model: users::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
        }
    }
}

#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn find_user(&self, id: i64) -> Result<Option<UserSummary>, DomainError>;

    async fn has_role(&self, user_id: i64, role: &str) -> Result<bool, DomainError>;
}

#[derive(Clone)]
pub struct SeaUserDirectory {
    db: DatabaseConnection,
}

impl SeaUserDirectory {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserDirectory for SeaUserDirectory {
    async fn find_user(&self, id: i64) -> Result<Option<UserSummary>, DomainError> {
        let model = users_adapter::find_by_id(&self.db, id)
            .await
            .map_err(map_db_err)?;
        Ok(model.map(UserSummary::from))
    }

    async fn has_role(&self, user_id: i64, role: &str) -> Result<bool, DomainError> {
        users_adapter::has_role(&self.db, user_id, role)
            .await
            .map_err(map_db_err)
    }
}
