//! Handlers for the roster lifecycle: read, auto-save, explicit submit.
//!
//! Auto-save and submit share the same wire shape for slots but differ in
//! policy: auto-save is best-effort and silently refused for completed
//! rosters (`auto_save_enabled: false`, HTTP 200, no row changes), while
//! submit fully validates and surfaces every failure. Both paths replace
//! the full slot set transactionally; the client never manages individual
//! rows.
//!
//! Response field names are camelCase: the shape is fixed by the existing
//! front-end contract.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use capdraft_core::error::CoreError;
use capdraft_core::roster::{DraftSlot, RosterConfig, RosterDraft};
use capdraft_core::types::DbId;
use capdraft_db::models::game::Game;
use capdraft_db::repositories::{AthleteRepo, GameRepo, RosterRepo};

use crate::auth::session::PlayerIdentity;
use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for auto-save and submit: the full slot set.
#[derive(Debug, Deserialize)]
pub struct RosterPayload {
    pub roster: Vec<DraftSlot>,
}

/// Response for the auto-save endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoSaveResponse {
    pub message: String,
    pub athlete_count: i64,
    pub total_spent: i64,
    pub auto_save_enabled: bool,
}

/// Response for the submit endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponse {
    pub message: String,
    pub athlete_count: i64,
    pub total_spent: i64,
}

/// Stored roster as returned by GET.
#[derive(Debug, Serialize)]
pub struct RosterView {
    pub slots: Vec<DraftSlot>,
    pub is_complete: bool,
}

async fn load_game(state: &AppState, game_id: DbId) -> AppResult<Game> {
    Ok(GameRepo::find_by_id(&state.pool, game_id)
        .await?
        .ok_or(CoreError::NotFound { entity: "Game", id: game_id })?)
}

fn require_same_game(identity: &PlayerIdentity, game_id: DbId) -> Result<(), CoreError> {
    if identity.game_id != game_id {
        return Err(CoreError::Unauthorized(
            "Session does not belong to this game".into(),
        ));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// GET /games/{id}/roster
// ---------------------------------------------------------------------------

/// Fetch the authenticated player's stored roster (possibly partial).
pub async fn get_roster(
    State(state): State<AppState>,
    Path(game_id): Path<DbId>,
    identity: PlayerIdentity,
) -> AppResult<impl IntoResponse> {
    require_same_game(&identity, game_id)?;

    let entries = RosterRepo::find_for_player(&state.pool, game_id, &identity.player_code).await?;
    let is_complete = entries.iter().any(|e| e.is_complete);
    let slots: Vec<DraftSlot> = entries.iter().map(|e| e.to_draft_slot()).collect();

    Ok(Json(DataResponse {
        data: RosterView { slots, is_complete },
    }))
}

// ---------------------------------------------------------------------------
// POST /games/{id}/roster/autosave
// ---------------------------------------------------------------------------

/// Persist a partial roster.
///
/// Server-side duplicate of the client decision policy (defense in depth):
/// a completed roster disables auto-save with a flag, not an error, so the
/// best-effort client path never treats it as a hard failure.
pub async fn autosave_roster(
    State(state): State<AppState>,
    Path(game_id): Path<DbId>,
    identity: PlayerIdentity,
    Json(payload): Json<RosterPayload>,
) -> AppResult<impl IntoResponse> {
    require_same_game(&identity, game_id)?;

    let game = load_game(&state, game_id).await?;
    if game.is_locked(Utc::now()) {
        return Err(CoreError::Locked("Game has passed its roster lock".into()).into());
    }

    // Validates shape (known slot ids, each exactly once) before any I/O.
    let draft = RosterDraft::from_slots(RosterConfig::marathon(game.salary_cap), payload.roster)?;

    if RosterRepo::is_complete(&state.pool, game_id, &identity.player_code).await? {
        let entries =
            RosterRepo::find_for_player(&state.pool, game_id, &identity.player_code).await?;
        let athlete_count = entries.iter().filter(|e| e.athlete_id.is_some()).count() as i64;
        let total_spent: i64 = entries.iter().filter_map(|e| e.salary).sum();
        tracing::debug!(game_id, player = %identity.player_code, "auto-save refused: roster complete");
        return Ok(Json(AutoSaveResponse {
            message: "Auto-save is disabled for a submitted roster".to_string(),
            athlete_count,
            total_spent,
            auto_save_enabled: false,
        }));
    }

    let totals = RosterRepo::replace_all(
        &state.pool,
        game_id,
        &identity.player_code,
        draft.slots(),
        false,
    )
    .await?;

    Ok(Json(AutoSaveResponse {
        message: "Roster auto-saved".to_string(),
        athlete_count: totals.athlete_count,
        total_spent: totals.total_spent,
        auto_save_enabled: true,
    }))
}

// ---------------------------------------------------------------------------
// POST /games/{id}/roster/submit
// ---------------------------------------------------------------------------

/// Explicitly submit a complete roster.
///
/// Re-validates everything independent of client claims: slot count,
/// 3 men + 3 women composition, duplicate athletes, salary cap, and that
/// each claimed athlete exists with matching gender and salary. On success
/// the full set supersedes any prior partial rows atomically. Resubmitting
/// the same roster is an effective no-op.
pub async fn submit_roster(
    State(state): State<AppState>,
    Path(game_id): Path<DbId>,
    identity: PlayerIdentity,
    Json(payload): Json<RosterPayload>,
) -> AppResult<impl IntoResponse> {
    require_same_game(&identity, game_id)?;

    let game = load_game(&state, game_id).await?;
    if game.is_locked(Utc::now()) {
        return Err(CoreError::Locked("Game has passed its roster lock".into()).into());
    }

    let draft = RosterDraft::from_slots(RosterConfig::marathon(game.salary_cap), payload.roster)?;
    let summary = draft.validate_for_submit()?;

    // Cross-check every pick against the athlete pool.
    for slot in draft.slots() {
        let (athlete_id, claimed_salary) = match (slot.athlete_id, slot.salary) {
            (Some(a), Some(s)) => (a, s),
            // validate_for_submit guarantees filled slots.
            _ => continue,
        };
        let athlete = AthleteRepo::find_by_id(&state.pool, athlete_id)
            .await?
            .ok_or(CoreError::NotFound { entity: "Athlete", id: athlete_id })?;

        let category = draft
            .config()
            .slots
            .iter()
            .find(|d| d.id == slot.slot_id)
            .map(|d| d.category.as_str())
            .unwrap_or_default();
        if athlete.gender != category {
            return Err(CoreError::validation(format!(
                "Slot '{}' requires a {category} athlete, but {} is listed as {}",
                slot.slot_id, athlete.name, athlete.gender
            ))
            .into());
        }
        if athlete.salary != claimed_salary {
            return Err(CoreError::validation(format!(
                "Salary mismatch for {}: claimed {claimed_salary}, listed {}",
                athlete.name, athlete.salary
            ))
            .into());
        }
    }

    let totals = RosterRepo::replace_all(
        &state.pool,
        game_id,
        &identity.player_code,
        draft.slots(),
        true,
    )
    .await?;

    tracing::info!(
        game_id,
        player = %identity.player_code,
        total_spent = totals.total_spent,
        "roster submitted"
    );
    Ok(Json(SubmitResponse {
        message: "Roster submitted".to_string(),
        athlete_count: summary.athlete_count as i64,
        total_spent: totals.total_spent,
    }))
}
