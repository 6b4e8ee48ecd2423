use std::time::Duration;

use migration::{migrate, MigrationCommand};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::config::db::{db_url, DbProfile};
use crate::error::AppError;

/// Open a connection pool for `profile`. Does NOT run migrations.
pub async fn connect_db(profile: &DbProfile) -> Result<DatabaseConnection, AppError> {
    let url = db_url(profile)?;
    let mut options = ConnectOptions::new(url);
    options
        .connect_timeout(Duration::from_secs(5))
        .sqlx_logging(false);
    if matches!(profile, DbProfile::SqliteMemory) {
        // every pooled connection would otherwise see its own empty database
        options.max_connections(1).min_connections(1);
    }
    Database::connect(options)
        .await
        .map_err(|e| AppError::db_unavailable(format!("failed to connect: {e}")))
}

/// Connect and bring the schema up to date.
pub async fn bootstrap_db(profile: &DbProfile) -> Result<DatabaseConnection, AppError> {
    let conn = connect_db(profile).await?;
    migrate(&conn, MigrationCommand::Up)
        .await
        .map_err(|e| AppError::db(format!("migration failed: {e}")))?;
    info!(?profile, "database ready");
    Ok(conn)
}
