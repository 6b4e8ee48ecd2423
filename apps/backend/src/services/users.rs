use std::sync::Arc;

use tracing::warn;

use crate::errors::domain::{DomainError, UnauthorizedKind};
use crate::repos::users::{UserDirectory, UserSummary};

/// Identity checks the HTTP layer needs before calling into game services.
pub struct UserService {
    users: Arc<dyn UserDirectory>,
}

impl UserService {
    pub fn new(users: Arc<dyn UserDirectory>) -> Self {
        Self { users }
    }

    pub async fn find_user(&self, user_id: i64) -> Result<Option<UserSummary>, DomainError> {
        self.users.find_user(user_id).await
    }

    pub async fn require_role(&self, user_id: i64, role: &str) -> Result<(), DomainError> {
        if self.users.has_role(user_id, role).await? {
            return Ok(());
        }
        warn!(user_id, role, "Missing required role");
        Err(DomainError::unauthorized(
            UnauthorizedKind::MissingRole,
            format!("Role '{role}' is required"),
        ))
    }
}
