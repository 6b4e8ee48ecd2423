//! Game lifecycle, draw and listing routes.
//!
//! Handlers only parse and shape; every rule lives in the services.

use actix_web::{web, HttpRequest, HttpResponse, Result};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::parse_query;
use crate::domain::ledger::Draw;
use crate::domain::lifecycle::GamePhase;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::extractors::{CurrentUser, GameId, ValidatedJson};
use crate::repos::games::Game;
use crate::repos::users::CALLER_ROLE;
use crate::services::games::GameStatus;
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
pub struct GameResponse {
    pub id: i64,
    pub name: String,
    pub owner_id: i64,
    pub phase: GamePhase,
    pub is_active: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339::option")]
    pub started_at: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub ended_at: Option<OffsetDateTime>,
}

impl From<Game> for GameResponse {
    fn from(game: Game) -> Self {
        let phase = game.phase();
        Self {
            id: game.id,
            name: game.name,
            owner_id: game.owner_id,
            phase,
            is_active: phase.is_active(),
            created_at: game.created_at,
            started_at: game.started_at,
            ended_at: game.ended_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GameListResponse {
    pub games: Vec<GameResponse>,
}

impl From<Vec<Game>> for GameListResponse {
    fn from(games: Vec<Game>) -> Self {
        Self {
            games: games.into_iter().map(GameResponse::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct NumbersResponse {
    pub game_id: i64,
    pub numbers: Vec<Draw>,
}

#[derive(Debug, Deserialize)]
pub struct CreateGameRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct DrawRequest {
    pub number: i64,
}

#[derive(Debug, Deserialize)]
struct ListQuery {
    status: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LatestQuery {
    limit: Option<u32>,
}

/// POST /api/games
///
/// Requires the `caller` role. Responds 201 with the new game.
async fn create_game(
    user: CurrentUser,
    body: ValidatedJson<CreateGameRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    app_state.users.require_role(user.id, CALLER_ROLE).await?;
    let game = app_state.games.create_game(user.id, &body.name).await?;
    Ok(HttpResponse::Created().json(GameResponse::from(game)))
}

/// GET /api/games?status=all|active
async fn list_games(
    req: HttpRequest,
    app_state: web::Data<AppState>,
) -> Result<web::Json<GameListResponse>, AppError> {
    let query: ListQuery = parse_query(req.query_string(), ErrorCode::InvalidStatusFilter)?;
    let games = match query.status.as_deref() {
        None | Some("all") => app_state.directory.list_all().await?,
        Some("active") => app_state.directory.list_active().await?,
        Some(other) => {
            return Err(AppError::bad_request(
                ErrorCode::InvalidStatusFilter,
                format!("status must be 'all' or 'active', got '{other}'"),
            ))
        }
    };
    Ok(web::Json(games.into()))
}

/// GET /api/games/active
async fn list_active_games(
    app_state: web::Data<AppState>,
) -> Result<web::Json<GameListResponse>, AppError> {
    Ok(web::Json(app_state.directory.list_active().await?.into()))
}

/// GET /api/games/mine
async fn list_my_games(
    user: CurrentUser,
    app_state: web::Data<AppState>,
) -> Result<web::Json<GameListResponse>, AppError> {
    Ok(web::Json(
        app_state.directory.list_by_owner(user.id).await?.into(),
    ))
}

/// POST /api/games/{game_id}/start
async fn start_game(
    user: CurrentUser,
    game_id: GameId,
    app_state: web::Data<AppState>,
) -> Result<web::Json<GameResponse>, AppError> {
    let game = app_state.games.start_game(user.id, game_id.0).await?;
    Ok(web::Json(game.into()))
}

/// POST /api/games/{game_id}/end
async fn end_game(
    user: CurrentUser,
    game_id: GameId,
    app_state: web::Data<AppState>,
) -> Result<web::Json<GameResponse>, AppError> {
    let game = app_state.games.end_game(user.id, game_id.0).await?;
    Ok(web::Json(game.into()))
}

/// POST /api/games/{game_id}/draw with `{ "number": n }`
async fn draw_number(
    user: CurrentUser,
    game_id: GameId,
    body: ValidatedJson<DrawRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let draw = app_state
        .games
        .draw_number(user.id, game_id.0, body.number)
        .await?;
    Ok(HttpResponse::Created().json(draw))
}

/// POST /api/games/{game_id}/draw/random
async fn draw_random_number(
    user: CurrentUser,
    game_id: GameId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let draw = app_state
        .games
        .draw_random_number(user.id, game_id.0)
        .await?;
    Ok(HttpResponse::Created().json(draw))
}

/// GET /api/games/{game_id}/numbers
///
/// Called numbers in ascending numeric order.
async fn get_called_numbers(
    game_id: GameId,
    app_state: web::Data<AppState>,
) -> Result<web::Json<NumbersResponse>, AppError> {
    let numbers = app_state.games.get_called_numbers(game_id.0).await?;
    Ok(web::Json(NumbersResponse {
        game_id: game_id.0,
        numbers,
    }))
}

/// GET /api/games/{game_id}/numbers/latest?limit=n
///
/// Newest first. `limit` defaults to 10 and must be within 1..=50.
async fn get_latest_numbers(
    req: HttpRequest,
    game_id: GameId,
    app_state: web::Data<AppState>,
) -> Result<web::Json<NumbersResponse>, AppError> {
    let query: LatestQuery = parse_query(req.query_string(), ErrorCode::InvalidLimit)?;
    let numbers = app_state
        .games
        .get_latest_numbers(game_id.0, query.limit)
        .await?;
    Ok(web::Json(NumbersResponse {
        game_id: game_id.0,
        numbers,
    }))
}

/// GET /api/games/{game_id}/status
async fn get_status(
    game_id: GameId,
    app_state: web::Data<AppState>,
) -> Result<web::Json<GameStatus>, AppError> {
    Ok(web::Json(app_state.games.get_status(game_id.0).await?))
}

/// Mounted under `/api/games`. Literal segments come before `{game_id}`.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::get().to(list_games))
            .route(web::post().to(create_game)),
    )
    .service(web::resource("/active").route(web::get().to(list_active_games)))
    .service(web::resource("/mine").route(web::get().to(list_my_games)))
    .service(web::resource("/{game_id}/start").route(web::post().to(start_game)))
    .service(web::resource("/{game_id}/end").route(web::post().to(end_game)))
    .service(web::resource("/{game_id}/draw").route(web::post().to(draw_number)))
    .service(web::resource("/{game_id}/draw/random").route(web::post().to(draw_random_number)))
    .service(web::resource("/{game_id}/numbers").route(web::get().to(get_called_numbers)))
    .service(
        web::resource("/{game_id}/numbers/latest").route(web::get().to(get_latest_numbers)),
    )
    .service(web::resource("/{game_id}/status").route(web::get().to(get_status)));
}
