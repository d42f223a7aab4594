//! Handlers for joining and leaving a game.
//!
//! Joining issues an opaque session token (returned in plaintext exactly
//! once) and writes only the modern `player_sessions` table; the deprecated
//! legacy participant list is never touched by new code.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use capdraft_core::error::CoreError;
use capdraft_core::types::{DbId, Timestamp};
use capdraft_db::models::session::CreatePlayerSession;
use capdraft_db::repositories::{GameRepo, SessionRepo};

use crate::auth::session::PlayerIdentity;
use crate::auth::token::generate_session_token;
use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for joining a game.
#[derive(Debug, Deserialize, Validate)]
pub struct JoinGamePayload {
    #[validate(length(min = 1, max = 50))]
    pub display_name: String,
}

/// Response for a successful join. `session_token` is shown exactly once.
#[derive(Debug, Serialize)]
pub struct JoinGameResponse {
    pub session_token: String,
    pub player_code: String,
    pub game_id: DbId,
    pub expires_at: Timestamp,
}

/// POST /games/{id}/sessions
pub async fn join_game(
    State(state): State<AppState>,
    Path(game_id): Path<DbId>,
    Json(payload): Json<JoinGamePayload>,
) -> AppResult<impl IntoResponse> {
    payload
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let game = GameRepo::find_by_id(&state.pool, game_id)
        .await?
        .ok_or(CoreError::NotFound { entity: "Game", id: game_id })?;
    if game.is_locked(Utc::now()) {
        return Err(CoreError::Locked("Game is locked; no new participants".into()).into());
    }

    // Opaque, collision-free join code; clients treat it as a black box.
    let player_code = Uuid::new_v4().simple().to_string();
    let (token, token_hash) = generate_session_token();
    let expires_at = Utc::now() + Duration::hours(state.config.session_expiry_hours);

    let session = SessionRepo::create(
        &state.pool,
        &CreatePlayerSession {
            game_id,
            player_code,
            display_name: payload.display_name,
            token_hash,
            expires_at,
        },
    )
    .await?;

    tracing::info!(game_id, player = %session.player_code, "player joined game");
    Ok(Json(DataResponse {
        data: JoinGameResponse {
            session_token: token,
            player_code: session.player_code,
            game_id,
            expires_at: session.expires_at,
        },
    }))
}

/// DELETE /games/{id}/sessions/current — leave the game (soft delete).
pub async fn leave_game(
    State(state): State<AppState>,
    Path(game_id): Path<DbId>,
    identity: PlayerIdentity,
) -> AppResult<impl IntoResponse> {
    if identity.game_id != game_id {
        return Err(CoreError::Unauthorized("Session does not belong to this game".into()).into());
    }
    SessionRepo::deactivate(&state.pool, identity.session_id).await?;
    tracing::info!(game_id, player = %identity.player_code, "player left game");
    Ok(Json(DataResponse { data: "left" }))
}
