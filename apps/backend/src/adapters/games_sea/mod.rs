//! SeaORM adapter for games - generic over ConnectionTrait.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set,
};
use time::OffsetDateTime;

use crate::domain::lifecycle::{EndTransition, GamePhase};
use crate::entities::games;
use crate::repos::games::GameFilter;

pub mod dto;

pub use dto::GameCreate;

/// Prefix of the `DbErr::Custom` payload for a missing game.
pub const GAME_NOT_FOUND: &str = "GAME_NOT_FOUND:";
/// Prefix of the `DbErr::Custom` payload for a rejected conditional transition.
pub const GAME_TRANSITION: &str = "GAME_TRANSITION:";

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Option<games::Model>, sea_orm::DbErr> {
    games::Entity::find_by_id(game_id).one(conn).await
}

pub async fn create_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: GameCreate,
) -> Result<games::Model, sea_orm::DbErr> {
    let game = games::ActiveModel {
        id: NotSet,
        name: Set(dto.name),
        owner_id: Set(dto.owner_id),
        created_at: Set(dto.created_at),
        updated_at: Set(dto.created_at),
        started_at: Set(None),
        ended_at: Set(None),
    };
    game.insert(conn).await
}

pub async fn mark_started<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    at: OffsetDateTime,
) -> Result<games::Model, sea_orm::DbErr> {
    let result = games::Entity::update_many()
        .col_expr(games::Column::StartedAt, Expr::val(at).into())
        .col_expr(games::Column::UpdatedAt, Expr::val(at).into())
        .filter(games::Column::Id.eq(game_id))
        .filter(games::Column::StartedAt.is_null())
        .filter(games::Column::EndedAt.is_null())
        .exec(conn)
        .await?;

    if result.rows_affected == 0 {
        return Err(rejected_transition(conn, game_id).await?);
    }
    require_game(conn, game_id).await
}

pub async fn mark_ended<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
    at: OffsetDateTime,
    transition: EndTransition,
) -> Result<games::Model, sea_orm::DbErr> {
    let update = games::Entity::update_many()
        .col_expr(games::Column::EndedAt, Expr::val(at).into())
        .col_expr(games::Column::UpdatedAt, Expr::val(at).into())
        .filter(games::Column::Id.eq(game_id))
        .filter(games::Column::EndedAt.is_null());

    let update = match transition {
        EndTransition::FromStarted => update.filter(games::Column::StartedAt.is_not_null()),
        EndTransition::FromCreated => update
            .col_expr(games::Column::StartedAt, Expr::val(at).into())
            .filter(games::Column::StartedAt.is_null()),
    };

    let result = update.exec(conn).await?;
    if result.rows_affected == 0 {
        return Err(rejected_transition(conn, game_id).await?);
    }
    require_game(conn, game_id).await
}

pub async fn list<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    filter: GameFilter,
) -> Result<Vec<games::Model>, sea_orm::DbErr> {
    let query = games::Entity::find();
    let query = match filter {
        GameFilter::All => query,
        GameFilter::Active => query
            .filter(games::Column::StartedAt.is_not_null())
            .filter(games::Column::EndedAt.is_null()),
        GameFilter::OwnedBy(owner_id) => query.filter(games::Column::OwnerId.eq(owner_id)),
    };
    query
        .order_by_desc(games::Column::CreatedAt)
        .order_by_desc(games::Column::Id)
        .all(conn)
        .await
}

async fn require_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<games::Model, sea_orm::DbErr> {
    find_by_id(conn, game_id)
        .await?
        .ok_or_else(|| sea_orm::DbErr::Custom(format!("{GAME_NOT_FOUND}{game_id}")))
}

/// Zero rows updated: tell a missing game apart from one in the wrong phase.
async fn rejected_transition<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<sea_orm::DbErr, sea_orm::DbErr> {
    let Some(game) = find_by_id(conn, game_id).await? else {
        return Ok(sea_orm::DbErr::Custom(format!("{GAME_NOT_FOUND}{game_id}")));
    };
    let phase = match GamePhase::from_timestamps(game.started_at, game.ended_at) {
        GamePhase::Created => "CREATED",
        GamePhase::Started => "STARTED",
        GamePhase::Ended => "ENDED",
    };
    Ok(sea_orm::DbErr::Custom(format!(
        "{GAME_TRANSITION}{phase}:{game_id}"
    )))
}
