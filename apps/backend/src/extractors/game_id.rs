use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::errors::ErrorCode;

/// Game id from the `{game_id}` path segment.
///
/// Only the shape is checked here; existence is the service's call so that
/// NotFound comes out of the same place for every operation.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct GameId(pub i64);

impl FromRequest for GameId {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(parse_path_id(req, "game_id", ErrorCode::InvalidGameId).map(GameId))
    }
}

/// Parse a positive integer path parameter.
pub(crate) fn parse_path_id(req: &HttpRequest, name: &str, code: ErrorCode) -> Result<i64, AppError> {
    let raw = req
        .match_info()
        .get(name)
        .ok_or_else(|| AppError::bad_request(code, format!("Missing {name} parameter")))?;

    let id = raw
        .parse::<i64>()
        .map_err(|_| AppError::bad_request(code, format!("Invalid {name}: {raw}")))?;

    if id <= 0 {
        return Err(AppError::bad_request(
            code,
            format!("{name} must be positive, got: {id}"),
        ));
    }
    Ok(id)
}
