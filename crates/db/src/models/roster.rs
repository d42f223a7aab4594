//! Roster entry model.
//!
//! One row per slot. All rows of one `(game_id, player_code)` share the
//! same `is_complete` value at any instant; `RosterRepo::replace_all`
//! maintains that invariant by replacing the full set transactionally.

use serde::Serialize;
use sqlx::FromRow;

use capdraft_core::roster::DraftSlot;
use capdraft_core::types::{DbId, Timestamp};

/// A roster entry row from the `roster_entries` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RosterEntry {
    pub id: DbId,
    pub game_id: DbId,
    pub player_code: String,
    pub slot_id: String,
    pub athlete_id: Option<DbId>,
    pub salary: Option<i64>,
    pub is_complete: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl RosterEntry {
    /// Project the persisted row back into a draft slot.
    pub fn to_draft_slot(&self) -> DraftSlot {
        DraftSlot {
            slot_id: self.slot_id.clone(),
            athlete_id: self.athlete_id,
            salary: self.salary,
        }
    }
}

/// Totals from a roster write, echoed back to the client.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RosterTotals {
    pub athlete_count: i64,
    pub total_spent: i64,
}
