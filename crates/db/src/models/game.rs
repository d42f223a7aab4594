//! Game model and DTOs.

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;

use capdraft_core::types::{DbId, Timestamp};

/// A game row from the `games` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Game {
    pub id: DbId,
    pub name: String,
    pub race_date: NaiveDate,
    /// The roster-lock instant: no roster writes after this.
    pub roster_lock_at: Timestamp,
    pub salary_cap: i64,
    /// Deprecated denormalized participant list. Read-only; see
    /// `ParticipantRepo::legacy_list`.
    #[serde(skip)]
    pub legacy_participants: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Game {
    /// Whether the roster-lock instant has passed.
    pub fn is_locked(&self, now: Timestamp) -> bool {
        now >= self.roster_lock_at
    }
}

/// DTO for creating a game.
pub struct CreateGame {
    pub name: String,
    pub race_date: NaiveDate,
    pub roster_lock_at: Timestamp,
    pub salary_cap: i64,
}
