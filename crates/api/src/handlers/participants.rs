//! Handlers for the dual participant-list read paths.
//!
//! The modern endpoint reads `player_sessions` and is authoritative. The
//! legacy endpoint serves the deprecated denormalized list for clients not
//! yet migrated; its entries may be stale and are annotated, never
//! reconciled. No handler writes to the legacy list.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

use capdraft_core::error::CoreError;
use capdraft_core::types::DbId;
use capdraft_db::repositories::{GameRepo, ParticipantRepo};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

async fn require_game(state: &AppState, game_id: DbId) -> AppResult<()> {
    GameRepo::find_by_id(&state.pool, game_id)
        .await?
        .ok_or(CoreError::NotFound { entity: "Game", id: game_id })?;
    Ok(())
}

/// GET /games/{id}/participants — modern view (source of truth).
pub async fn list_participants(
    State(state): State<AppState>,
    Path(game_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    require_game(&state, game_id).await?;
    let participants = ParticipantRepo::modern_list(&state.pool, game_id).await?;
    Ok(Json(DataResponse { data: participants }))
}

/// GET /games/{id}/participants/legacy — deprecated denormalized view.
pub async fn list_participants_legacy(
    State(state): State<AppState>,
    Path(game_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    require_game(&state, game_id).await?;
    let participants = ParticipantRepo::legacy_list(&state.pool, game_id).await?;
    Ok(Json(DataResponse { data: participants }))
}
