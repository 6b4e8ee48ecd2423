//! Draw ledger persistence and the `DrawLedgerStore` seam.

use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use time::OffsetDateTime;

use crate::adapters::draws_sea as draws_adapter;
use crate::domain::ledger::{Draw, DrawLedger};
use crate::domain::numbers::DrawnNumber;
use crate::entities::drawn_numbers;
use crate::errors::domain::{DomainError, InfraErrorKind};
use crate::infra::db_errors::map_db_err;

#[derive(Debug, Clone, Copy)]
pub struct NewDraw {
    pub game_id: i64,
    pub seq: u8,
    pub number: DrawnNumber,
    pub drawn_at: OffsetDateTime,
}

#[async_trait]
pub trait DrawLedgerStore: Send + Sync {
    /// All entries of a game in draw order.
    async fn entries(&self, game_id: i64) -> Result<Vec<Draw>, DomainError>;

    /// Append unless the number (or the sequence slot) is already taken.
    ///
    /// A taken number is `Conflict(NumberAlreadyDrawn)`; a taken slot is
    /// `Conflict(ConcurrentDraw)`.
    async fn append_if_absent(&self, draw: NewDraw) -> Result<Draw, DomainError>;

    /// The `limit` most recent entries, newest first.
    async fn latest(&self, game_id: i64, limit: u64) -> Result<Vec<Draw>, DomainError>;
}

pub async fn load_ledger(
    store: &dyn DrawLedgerStore,
    game_id: i64,
) -> Result<DrawLedger, DomainError> {
    let entries = store.entries(game_id).await?;
    DrawLedger::from_entries(game_id, entries)
}

impl TryFrom<drawn_numbers::Model> for Draw {
    type Error = DomainError;

    fn try_from(model: drawn_numbers::Model) -> Result<Self, Self::Error> {
        let corrupt = |what: &str| {
            DomainError::infra(
                InfraErrorKind::DataCorruption,
                format!("drawn_numbers row {} has invalid {what}", model.id),
            )
        };
        let number = DrawnNumber::new(model.number as i64).map_err(|_| corrupt("number"))?;
        let seq = u8::try_from(model.seq).map_err(|_| corrupt("seq"))?;
        Ok(Draw {
            id: model.id,
            game_id: model.game_id,
            seq,
            number,
            drawn_at: model.drawn_at,
        })
    }
}

fn convert_all(models: Vec<drawn_numbers::Model>) -> Result<Vec<Draw>, DomainError> {
    models.into_iter().map(Draw::try_from).collect()
}

#[derive(Clone)]
pub struct SeaDrawLedgerStore {
    db: DatabaseConnection,
}

impl SeaDrawLedgerStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DrawLedgerStore for SeaDrawLedgerStore {
    async fn entries(&self, game_id: i64) -> Result<Vec<Draw>, DomainError> {
        let models = draws_adapter::list_in_draw_order(&self.db, game_id)
            .await
            .map_err(map_db_err)?;
        convert_all(models)
    }

    async fn append_if_absent(&self, draw: NewDraw) -> Result<Draw, DomainError> {
        let dto = draws_adapter::DrawCreate {
            game_id: draw.game_id,
            seq: draw.seq as i16,
            number: draw.number.get() as i16,
            drawn_at: draw.drawn_at,
        };
        let model = draws_adapter::insert_draw(&self.db, dto)
            .await
            .map_err(map_db_err)?;
        Draw::try_from(model)
    }

    async fn latest(&self, game_id: i64, limit: u64) -> Result<Vec<Draw>, DomainError> {
        let models = draws_adapter::list_latest(&self.db, game_id, limit)
            .await
            .map_err(map_db_err)?;
        convert_all(models)
    }
}
