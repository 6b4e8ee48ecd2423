//! SeaORM adapter for the draw ledger - generic over ConnectionTrait.
//!
//! Uniqueness of `(game_id, number)` and `(game_id, seq)` is enforced by the
//! schema, so a racing writer in another process fails at insert time.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use time::OffsetDateTime;

use crate::entities::drawn_numbers;

#[derive(Debug, Clone, Copy)]
pub struct DrawCreate {
    pub game_id: i64,
    pub seq: i16,
    pub number: i16,
    pub drawn_at: OffsetDateTime,
}

pub async fn insert_draw<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: DrawCreate,
) -> Result<drawn_numbers::Model, sea_orm::DbErr> {
    drawn_numbers::ActiveModel {
        id: NotSet,
        game_id: Set(dto.game_id),
        seq: Set(dto.seq),
        number: Set(dto.number),
        drawn_at: Set(dto.drawn_at),
    }
    .insert(conn)
    .await
}

pub async fn list_in_draw_order<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Vec<drawn_numbers::Model>, sea_orm::DbErr> {
    drawn_numbers::Entity::find()
        .filter(drawn_numbers::Column::GameId.eq(game_id))
        .order_by_asc(drawn_numbers::Column::Seq)
        .all(conn)
        .await
}

pub async fn list_latest<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    limit: u64,
) -> Result<Vec<drawn_numbers::Model>, sea_orm::DbErr> {
    drawn_numbers::Entity::find()
        .filter(drawn_numbers::Column::GameId.eq(game_id))
        .order_by_desc(drawn_numbers::Column::Seq)
        .limit(limit)
        .all(conn)
        .await
}
