pub mod auth_token;
pub mod card_id;
pub mod current_user;
pub mod game_id;
pub mod validated_json;

use actix_web::{web, HttpRequest};

pub use auth_token::AuthToken;
pub use card_id::CardId;
pub use current_user::CurrentUser;
pub use game_id::GameId;
pub use validated_json::ValidatedJson;

use crate::error::AppError;
use crate::state::app_state::AppState;

/// `AppState` registered on the app, or an internal error if it was never wired.
pub(crate) fn app_state(req: &HttpRequest) -> Result<web::Data<AppState>, AppError> {
    req.app_data::<web::Data<AppState>>()
        .cloned()
        .ok_or_else(|| AppError::internal("AppState not available"))
}
