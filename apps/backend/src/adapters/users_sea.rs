//! SeaORM adapter for users and roles - generic over ConnectionTrait.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, JoinType, NotSet,
    PaginatorTrait, QueryFilter, QuerySelect, RelationTrait, Set,
};
use time::OffsetDateTime;

use crate::entities::{roles, user_roles, users};

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<Option<users::Model>, sea_orm::DbErr> {
    users::Entity::find_by_id(user_id).one(conn).await
}

pub async fn has_role<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    role: &str,
) -> Result<bool, sea_orm::DbErr> {
    let count = user_roles::Entity::find()
        .join(JoinType::InnerJoin, user_roles::Relation::Role.def())
        .filter(user_roles::Column::UserId.eq(user_id))
        .filter(roles::Column::Name.eq(role))
        .count(conn)
        .await?;
    Ok(count > 0)
}

/// Seeding helper for tooling and tests; registration itself lives elsewhere.
pub async fn create_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
    email: &str,
) -> Result<users::Model, sea_orm::DbErr> {
    users::ActiveModel {
        id: NotSet,
        name: Set(name.to_string()),
        email: Set(email.to_string()),
        created_at: Set(OffsetDateTime::now_utc()),
    }
    .insert(conn)
    .await
}

/// Find a role by name, creating it when missing.
pub async fn ensure_role<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
) -> Result<roles::Model, sea_orm::DbErr> {
    if let Some(role) = roles::Entity::find()
        .filter(roles::Column::Name.eq(name))
        .one(conn)
        .await?
    {
        return Ok(role);
    }
    roles::ActiveModel {
        id: NotSet,
        name: Set(name.to_string()),
    }
    .insert(conn)
    .await
}

pub async fn grant_role<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    role: &str,
) -> Result<(), sea_orm::DbErr> {
    let role = ensure_role(conn, role).await?;
    user_roles::Entity::insert(user_roles::ActiveModel {
        user_id: Set(user_id),
        role_id: Set(role.id),
    })
    .exec_without_returning(conn)
    .await?;
    Ok(())
}
