//! Race result model and leaderboard projection.

use serde::Serialize;
use sqlx::FromRow;

use capdraft_core::types::{DbId, Timestamp};

/// A race result row from the `race_results` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RaceResult {
    pub id: DbId,
    pub game_id: DbId,
    pub athlete_id: DbId,
    /// Validated time text, stored exactly as entered.
    pub finish_time: String,
    pub created_at: Timestamp,
}

/// DTO for recording a result.
pub struct CreateRaceResult {
    pub game_id: DbId,
    pub athlete_id: DbId,
    pub finish_time: String,
}

/// A result joined with its athlete, as fetched for the leaderboard.
/// Ranking happens in the handler using the parsed time, not in SQL.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ResultWithAthlete {
    pub athlete_id: DbId,
    pub athlete_name: String,
    pub country: String,
    pub gender: String,
    pub finish_time: String,
}
