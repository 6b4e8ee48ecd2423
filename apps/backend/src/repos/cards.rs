//! Card catalog collaborator: id -> layout.

use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::adapters::cards_sea as cards_adapter;
use crate::domain::cards::CardLayout;
use crate::entities::cards;
use crate::errors::domain::{DomainError, InfraErrorKind};
use crate::infra::db_errors::map_db_err;

impl TryFrom<cards::Model> for CardLayout {
    type Error = DomainError;

    fn try_from(model: cards::Model) -> Result<Self, Self::Error> {
        let cells: Vec<i32> = serde_json::from_value(model.cells).map_err(|e| {
            DomainError::infra(
                InfraErrorKind::DataCorruption,
                format!("card {} cells are not an integer array: {e}", model.id),
            )
        })?;
        Ok(CardLayout {
            id: model.id,
            name: model.name,
            version: model.version,
            cells,
        })
    }
}

#[async_trait]
pub trait CardCatalog: Send + Sync {
    async fn find_card(&self, id: i64) -> Result<Option<CardLayout>, DomainError>;
}

#[derive(Clone)]
pub struct SeaCardCatalog {
    db: DatabaseConnection,
}

impl SeaCardCatalog {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CardCatalog for SeaCardCatalog {
    async fn find_card(&self, id: i64) -> Result<Option<CardLayout>, DomainError> {
        cards_adapter::find_by_id(&self.db, id)
            .await
            .map_err(map_db_err)?
            .map(CardLayout::try_from)
            .transpose()
    }
}
