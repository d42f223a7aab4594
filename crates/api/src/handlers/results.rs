//! Handlers for race results and the leaderboard.
//!
//! Finish times are validated on the way in and stored as original text.
//! Ranking parses the stored text and orders by normalized milliseconds,
//! so `2:05:30.06` beats `2:05:30.09` and `2:05:30.10` ties `2:05:30.1`.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use capdraft_core::error::CoreError;
use capdraft_core::time::RaceTime;
use capdraft_core::types::DbId;
use capdraft_db::models::race_result::CreateRaceResult;
use capdraft_db::repositories::{AthleteRepo, GameRepo, RaceResultRepo};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for recording a result.
#[derive(Debug, Deserialize)]
pub struct RecordResultPayload {
    pub athlete_id: DbId,
    pub finish_time: String,
}

/// One leaderboard row. Equal normalized times share a rank.
#[derive(Debug, Serialize)]
pub struct LeaderboardRow {
    pub rank: usize,
    pub athlete_id: DbId,
    pub athlete_name: String,
    pub country: String,
    pub gender: String,
    pub finish_time: String,
}

/// POST /games/{id}/results
pub async fn record_result(
    State(state): State<AppState>,
    Path(game_id): Path<DbId>,
    Json(payload): Json<RecordResultPayload>,
) -> AppResult<impl IntoResponse> {
    GameRepo::find_by_id(&state.pool, game_id)
        .await?
        .ok_or(CoreError::NotFound { entity: "Game", id: game_id })?;
    AthleteRepo::find_by_id(&state.pool, payload.athlete_id)
        .await?
        .ok_or(CoreError::NotFound { entity: "Athlete", id: payload.athlete_id })?;

    // Validate the grammar; store the text untouched.
    RaceTime::parse(&payload.finish_time)?;

    let result = RaceResultRepo::create(
        &state.pool,
        &CreateRaceResult {
            game_id,
            athlete_id: payload.athlete_id,
            finish_time: payload.finish_time,
        },
    )
    .await?;

    Ok(Json(DataResponse { data: result }))
}

/// GET /games/{id}/leaderboard
pub async fn leaderboard(
    State(state): State<AppState>,
    Path(game_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    GameRepo::find_by_id(&state.pool, game_id)
        .await?
        .ok_or(CoreError::NotFound { entity: "Game", id: game_id })?;

    let results = RaceResultRepo::list_with_athletes(&state.pool, game_id).await?;

    // Stored times were validated on write; a parse failure here means the
    // database was edited out of band.
    let mut parsed: Vec<(RaceTime, _)> = Vec::with_capacity(results.len());
    for row in results {
        let time = RaceTime::parse(&row.finish_time).map_err(|e| {
            CoreError::Internal(format!("Stored finish time failed to parse: {e}"))
        })?;
        parsed.push((time, row));
    }
    parsed.sort_by(|a, b| a.0.cmp(&b.0));

    // Standard competition ranking: ties share a rank, the next distinct
    // time takes position + 1.
    let mut rows: Vec<LeaderboardRow> = Vec::with_capacity(parsed.len());
    let mut rank = 0;
    let mut prev_millis: Option<u64> = None;
    for (position, (time, row)) in parsed.into_iter().enumerate() {
        if prev_millis != Some(time.total_millis()) {
            rank = position + 1;
            prev_millis = Some(time.total_millis());
        }
        rows.push(LeaderboardRow {
            rank,
            athlete_id: row.athlete_id,
            athlete_name: row.athlete_name,
            country: row.country,
            gender: row.gender,
            finish_time: row.finish_time,
        });
    }

    Ok(Json(DataResponse { data: rows }))
}
