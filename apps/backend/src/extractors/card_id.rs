use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};

use super::game_id::parse_path_id;
use crate::error::AppError;
use crate::errors::ErrorCode;

/// Card id from the `{card_id}` path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardId(pub i64);

impl FromRequest for CardId {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(parse_path_id(req, "card_id", ErrorCode::InvalidCardId).map(CardId))
    }
}
