//! SeaORM -> DomainError translation helpers.
//!
//! Adapters return `sea_orm::DbErr`; the repos layer converts it here, and
//! higher layers map `DomainError` to `AppError` via `From`.

use tracing::{error, warn};

use crate::adapters::games_sea::{GAME_NOT_FOUND, GAME_TRANSITION};
use crate::errors::domain::{
    ConflictKind, DomainError, InfraErrorKind, NotFoundKind, ValidationKind,
};
use crate::trace_ctx;

fn mentions_sqlstate(msg: &str, code: &str) -> bool {
    msg.contains(code) || msg.contains(&format!("SQLSTATE({code})"))
}

/// Extract the column list from SQLite "UNIQUE constraint failed: t.a, t.b".
fn extract_sqlite_columns(error_msg: &str) -> Option<&str> {
    const MARKER: &str = "UNIQUE constraint failed: ";
    let start = error_msg.find(MARKER)? + MARKER.len();
    let rest = &error_msg[start..];
    let end = rest.find(['\n', '"', ')']).unwrap_or(rest.len());
    Some(rest[..end].trim())
}

fn map_sqlite_columns_to_conflict(columns: &str) -> Option<(ConflictKind, &'static str)> {
    match columns {
        "drawn_numbers.game_id, drawn_numbers.number" => {
            Some((ConflictKind::NumberAlreadyDrawn, "Number has already been drawn"))
        }
        "drawn_numbers.game_id, drawn_numbers.seq" => Some((
            ConflictKind::ConcurrentDraw,
            "Another draw was recorded concurrently; retry",
        )),
        "users.email" => Some((ConflictKind::UniqueEmail, "Email already registered")),
        _ => None,
    }
}

fn map_postgres_constraint_to_conflict(error_msg: &str) -> Option<(ConflictKind, &'static str)> {
    if error_msg.contains("ux_drawn_numbers_game_number") {
        return Some((ConflictKind::NumberAlreadyDrawn, "Number has already been drawn"));
    }
    if error_msg.contains("ux_drawn_numbers_game_seq") {
        return Some((
            ConflictKind::ConcurrentDraw,
            "Another draw was recorded concurrently; retry",
        ));
    }
    if error_msg.contains("ux_users_email") {
        return Some((ConflictKind::UniqueEmail, "Email already registered"));
    }
    None
}

fn map_custom(msg: &str) -> Option<DomainError> {
    if let Some(id) = msg.strip_prefix(GAME_NOT_FOUND) {
        return Some(DomainError::not_found(
            NotFoundKind::Game,
            format!("Game {id} not found"),
        ));
    }
    let rest = msg.strip_prefix(GAME_TRANSITION)?;
    let (phase, id) = rest.split_once(':')?;
    let err = match phase {
        "STARTED" => DomainError::conflict(
            ConflictKind::GameAlreadyStarted,
            format!("Game {id} has already been started"),
        ),
        "ENDED" => DomainError::conflict(
            ConflictKind::GameAlreadyEnded,
            format!("Game {id} has already ended"),
        ),
        _ => DomainError::conflict(
            ConflictKind::Other("StaleTransition".into()),
            format!("Game {id} changed concurrently; retry"),
        ),
    };
    Some(err)
}

/// Translate a `DbErr` into a `DomainError` with sanitized detail.
pub fn map_db_err(e: sea_orm::DbErr) -> DomainError {
    let error_msg = e.to_string();
    let trace_id = trace_ctx::trace_id();

    match &e {
        sea_orm::DbErr::RecordNotFound(_) => {
            return DomainError::not_found(
                NotFoundKind::Other("Record".into()),
                "Record not found",
            );
        }
        sea_orm::DbErr::Custom(msg) => {
            if let Some(mapped) = map_custom(msg) {
                warn!(trace_id = %trace_id, error = %mapped, "Rejected game transition");
                return mapped;
            }
        }
        sea_orm::DbErr::ConnectionAcquire(_) | sea_orm::DbErr::Conn(_) => {
            warn!(trace_id = %trace_id, raw_error = %error_msg, "Database unavailable");
            return DomainError::infra(InfraErrorKind::DbUnavailable, "Database unavailable");
        }
        _ => {}
    }

    if mentions_sqlstate(&error_msg, "23505")
        || error_msg.contains("duplicate key value violates unique constraint")
        || error_msg.contains("UNIQUE constraint failed")
    {
        if let Some(columns) = extract_sqlite_columns(&error_msg) {
            if let Some((kind, detail)) = map_sqlite_columns_to_conflict(columns) {
                warn!(trace_id = %trace_id, ?kind, "Unique constraint violation");
                return DomainError::conflict(kind, detail);
            }
        }
        if let Some((kind, detail)) = map_postgres_constraint_to_conflict(&error_msg) {
            warn!(trace_id = %trace_id, ?kind, "Unique constraint violation");
            return DomainError::conflict(kind, detail);
        }
        warn!(trace_id = %trace_id, raw_error = %error_msg, "Unmapped unique constraint violation");
        return DomainError::conflict(
            ConflictKind::Other("Unique".into()),
            "Unique constraint violation",
        );
    }

    if mentions_sqlstate(&error_msg, "23503") || error_msg.contains("FOREIGN KEY constraint failed")
    {
        warn!(trace_id = %trace_id, raw_error = %error_msg, "Foreign key constraint violation");
        return DomainError::validation(
            ValidationKind::Other("ForeignKey".into()),
            "Referenced record does not exist",
        );
    }

    if error_msg.contains("timeout") || error_msg.contains("timed out") {
        warn!(trace_id = %trace_id, raw_error = %error_msg, "Database timeout");
        return DomainError::infra(InfraErrorKind::Timeout, "Database timeout");
    }

    error!(trace_id = %trace_id, raw_error = %error_msg, "Unhandled database error");
    DomainError::infra(
        InfraErrorKind::Other("DbErr".into()),
        "Database operation failed",
    )
}
