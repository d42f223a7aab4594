//! Repository for the `player_sessions` table.

use sqlx::PgPool;

use capdraft_core::types::DbId;

use crate::models::session::{CreatePlayerSession, PlayerSession};

const COLUMNS: &str = "id, game_id, player_code, display_name, token_hash, \
                       is_active, expires_at, created_at, updated_at";

/// Provides CRUD operations for player sessions.
pub struct SessionRepo;

impl SessionRepo {
    /// Insert a new session, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreatePlayerSession,
    ) -> Result<PlayerSession, sqlx::Error> {
        let query = format!(
            "INSERT INTO player_sessions (game_id, player_code, display_name, token_hash, expires_at)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PlayerSession>(&query)
            .bind(input.game_id)
            .bind(&input.player_code)
            .bind(&input.display_name)
            .bind(&input.token_hash)
            .bind(input.expires_at)
            .fetch_one(pool)
            .await
    }

    /// Find a live session by its token hash.
    ///
    /// Only returns sessions that are active and not expired; an expired
    /// or deactivated token behaves exactly like an unknown one.
    pub async fn find_active_by_token_hash(
        pool: &PgPool,
        hash: &str,
    ) -> Result<Option<PlayerSession>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM player_sessions
             WHERE token_hash = $1
               AND is_active = TRUE
               AND expires_at > NOW()"
        );
        sqlx::query_as::<_, PlayerSession>(&query)
            .bind(hash)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a session. Returns `true` if the row was updated.
    pub async fn deactivate(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE player_sessions SET is_active = FALSE, updated_at = NOW()
             WHERE id = $1 AND is_active = TRUE",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete expired or deactivated sessions. Returns the deleted count.
    pub async fn cleanup_expired(pool: &PgPool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM player_sessions WHERE expires_at < NOW() OR is_active = FALSE",
        )
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }
}
