//! SeaORM adapter for the card catalog - generic over ConnectionTrait.

use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, NotSet, Set};

use crate::entities::cards;

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    card_id: i64,
) -> Result<Option<cards::Model>, sea_orm::DbErr> {
    cards::Entity::find_by_id(card_id).one(conn).await
}

/// Store a card as-is; cells are not validated (ingestion owns that).
pub async fn insert_card<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
    version: &str,
    cells: &[i32],
) -> Result<cards::Model, sea_orm::DbErr> {
    cards::ActiveModel {
        id: NotSet,
        name: Set(name.to_string()),
        version: Set(version.to_string()),
        cells: Set(serde_json::json!(cells)),
    }
    .insert(conn)
    .await
}
