use actix_web::{web, HttpResponse};
use migration::get_latest_migration_version;
use sea_orm::{ConnectionTrait, Statement};
use serde::Serialize;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use tracing::warn;

use crate::error::AppError;
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    app_version: &'static str,
    storage: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    storage_error: Option<String>,
    migrations: String,
    time: String,
}

/// GET /health
///
/// Always 200 while the process serves requests; `status` turns `degraded`
/// when the database does not answer.
async fn health(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let time = OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| "unknown".to_string());

    let (status, storage, storage_error, migrations) = match app_state.db() {
        None => ("ok", "memory", None, "n/a".to_string()),
        Some(db) => {
            let probe = db
                .query_one(Statement::from_string(
                    db.get_database_backend(),
                    "SELECT 1 as health_check".to_string(),
                ))
                .await;
            match probe {
                Ok(_) => {
                    let version = match get_latest_migration_version(db).await {
                        Ok(Some(version)) => version,
                        Ok(None) => "no_migrations".to_string(),
                        Err(_) => "unknown".to_string(),
                    };
                    ("ok", "sql", None, version)
                }
                Err(e) => {
                    warn!(error = %e, "Health probe query failed");
                    (
                        "degraded",
                        "sql",
                        Some("database did not answer".to_string()),
                        "unknown".to_string(),
                    )
                }
            }
        }
    };

    Ok(HttpResponse::Ok().json(HealthResponse {
        status,
        app_version: env!("CARGO_PKG_VERSION"),
        storage,
        storage_error,
        migrations,
        time,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health));
}
