//! Repository for the `roster_entries` table.
//!
//! Every write replaces the full slot set for one `(game_id, player_code)`
//! inside a single transaction (delete-then-insert). That keeps the
//! roster-level `is_complete` flag consistent across rows and guarantees a
//! concurrent reader never observes a half-old/half-new roster.

use sqlx::PgPool;

use capdraft_core::roster::DraftSlot;
use capdraft_core::types::DbId;

use crate::models::roster::{RosterEntry, RosterTotals};

const COLUMNS: &str = "id, game_id, player_code, slot_id, athlete_id, salary, \
                       is_complete, created_at, updated_at";

/// Provides roster persistence with replace-all-slots semantics.
pub struct RosterRepo;

impl RosterRepo {
    /// Fetch the stored roster for one player, in slot-id order.
    pub async fn find_for_player(
        pool: &PgPool,
        game_id: DbId,
        player_code: &str,
    ) -> Result<Vec<RosterEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM roster_entries
             WHERE game_id = $1 AND player_code = $2
             ORDER BY slot_id"
        );
        sqlx::query_as::<_, RosterEntry>(&query)
            .bind(game_id)
            .bind(player_code)
            .fetch_all(pool)
            .await
    }

    /// Whether this player has a completed (submitted) roster stored.
    ///
    /// All rows of a roster share the flag, so probing any one row suffices.
    pub async fn is_complete(
        pool: &PgPool,
        game_id: DbId,
        player_code: &str,
    ) -> Result<bool, sqlx::Error> {
        let complete: Option<bool> = sqlx::query_scalar(
            "SELECT bool_or(is_complete) FROM roster_entries
             WHERE game_id = $1 AND player_code = $2",
        )
        .bind(game_id)
        .bind(player_code)
        .fetch_one(pool)
        .await?;
        Ok(complete.unwrap_or(false))
    }

    /// Atomically replace the full slot set for one player.
    ///
    /// Deletes any prior rows (partial or complete) and inserts the new
    /// set with the given completion flag, all in one transaction. Returns
    /// the filled-slot count and total salary spent.
    pub async fn replace_all(
        pool: &PgPool,
        game_id: DbId,
        player_code: &str,
        slots: &[DraftSlot],
        is_complete: bool,
    ) -> Result<RosterTotals, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM roster_entries WHERE game_id = $1 AND player_code = $2")
            .bind(game_id)
            .bind(player_code)
            .execute(&mut *tx)
            .await?;

        for slot in slots {
            sqlx::query(
                "INSERT INTO roster_entries (game_id, player_code, slot_id, athlete_id, salary, is_complete)
                 VALUES ($1, $2, $3, $4, $5, $6)",
            )
            .bind(game_id)
            .bind(player_code)
            .bind(&slot.slot_id)
            .bind(slot.athlete_id)
            .bind(slot.salary)
            .bind(is_complete)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(RosterTotals {
            athlete_count: slots.iter().filter(|s| s.athlete_id.is_some()).count() as i64,
            total_spent: slots.iter().filter_map(|s| s.salary).sum(),
        })
    }

    /// Delete a player's roster outright. Returns the deleted row count.
    pub async fn delete_for_player(
        pool: &PgPool,
        game_id: DbId,
        player_code: &str,
    ) -> Result<u64, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM roster_entries WHERE game_id = $1 AND player_code = $2")
                .bind(game_id)
                .bind(player_code)
                .execute(pool)
                .await?;
        Ok(result.rows_affected())
    }
}
