//! Handlers for game CRUD endpoints.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use capdraft_core::error::CoreError;
use capdraft_core::types::{DbId, Timestamp};
use capdraft_db::models::game::{CreateGame, Game};
use capdraft_db::repositories::GameRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for creating a game.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateGamePayload {
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    pub race_date: NaiveDate,
    pub roster_lock_at: Timestamp,
    #[validate(range(min = 1))]
    pub salary_cap: i64,
}

/// A game plus its derived lock state.
#[derive(Debug, Serialize)]
pub struct GameView {
    #[serde(flatten)]
    pub game: Game,
    pub locked: bool,
}

fn view(game: Game) -> GameView {
    let locked = game.is_locked(chrono::Utc::now());
    GameView { game, locked }
}

/// POST /games
pub async fn create_game(
    State(state): State<AppState>,
    Json(payload): Json<CreateGamePayload>,
) -> AppResult<impl IntoResponse> {
    payload
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let game = GameRepo::create(
        &state.pool,
        &CreateGame {
            name: payload.name,
            race_date: payload.race_date,
            roster_lock_at: payload.roster_lock_at,
            salary_cap: payload.salary_cap,
        },
    )
    .await?;

    tracing::info!(game_id = game.id, "game created");
    Ok(Json(DataResponse { data: view(game) }))
}

/// GET /games
pub async fn list_games(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let games = GameRepo::list(&state.pool).await?;
    let views: Vec<GameView> = games.into_iter().map(view).collect();
    Ok(Json(DataResponse { data: views }))
}

/// GET /games/{id}
pub async fn get_game(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let game = GameRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound { entity: "Game", id })?;
    Ok(Json(DataResponse { data: view(game) }))
}
