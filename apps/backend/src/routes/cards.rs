//! Card scoring routes.

use actix_web::{web, Result};

use crate::error::AppError;
use crate::extractors::{CardId, GameId};
use crate::services::winning::WinCheck;
use crate::state::app_state::AppState;

/// GET /api/games/{game_id}/cards/{card_id}
///
/// Public: scores the card against the numbers called so far.
async fn check_card(
    game_id: GameId,
    card_id: CardId,
    app_state: web::Data<AppState>,
) -> Result<web::Json<WinCheck>, AppError> {
    let check = app_state.winning.check_winning(game_id.0, card_id.0).await?;
    Ok(web::Json(check))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/{game_id}/cards/{card_id}").route(web::get().to(check_card)));
}
