use actix_web::web;
use serde::de::DeserializeOwned;

use crate::error::AppError;
use crate::errors::ErrorCode;

pub mod cards;
pub mod games;
pub mod health;

/// Register every route. `main.rs` and the route tests share this so both
/// see the same table; middleware is wrapped around it by the caller.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure_routes);
    cfg.service(
        web::scope("/api/games")
            .configure(games::configure_routes)
            .configure(cards::configure_routes),
    );
}

/// Deserialize the query string, reporting failures as problem responses.
pub(crate) fn parse_query<T: DeserializeOwned>(
    query: &str,
    code: ErrorCode,
) -> Result<T, AppError> {
    web::Query::<T>::from_query(query)
        .map(web::Query::into_inner)
        .map_err(|e| AppError::bad_request(code, format!("Invalid query string: {e}")))
}
