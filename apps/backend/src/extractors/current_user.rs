use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use serde::Serialize;
use tracing::debug;

use super::app_state;
use super::auth_token::AuthToken;
use crate::auth::jwt::verify_access_token;
use crate::error::AppError;

/// Authenticated caller: a verified access token whose subject is a known user.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub id: i64,
    pub name: String,
}

impl FromRequest for CurrentUser {
    type Error = AppError;
    type Future = std::pin::Pin<Box<dyn std::future::Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            let token = AuthToken::from_headers(req.headers())?;
            let state = app_state(&req)?;

            let claims = verify_access_token(&token.token, &state.security)?;
            let user_id = claims
                .user_id()
                .ok_or_else(AppError::unauthorized_invalid_jwt)?;

            let user = state
                .users
                .find_user(user_id)
                .await?
                .ok_or_else(|| {
                    debug!(user_id, "Token subject has no user record");
                    AppError::forbidden_user_not_found()
                })?;

            Ok(CurrentUser {
                id: user.id,
                name: user.name,
            })
        })
    }
}
