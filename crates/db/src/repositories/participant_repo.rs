//! Participant-list read paths.
//!
//! Two projections over "who is participating" coexist during the
//! migration window. The modern path reads `player_sessions` (source of
//! truth for salary-cap mode). The legacy path reads the deprecated
//! `games.legacy_participants` array, which new-mode writes do NOT
//! maintain, so it is served as annotated, possibly-stale metadata.
//! Nothing in this module writes to the legacy list.

use sqlx::PgPool;

use capdraft_core::types::DbId;

use crate::models::participant::{LegacyParticipant, Participant};

/// Read-only participant projections.
pub struct ParticipantRepo;

impl ParticipantRepo {
    /// Modern view: all sessions for a game, active flag included,
    /// earliest joiner first.
    pub async fn modern_list(
        pool: &PgPool,
        game_id: DbId,
    ) -> Result<Vec<Participant>, sqlx::Error> {
        sqlx::query_as::<_, Participant>(
            "SELECT player_code, display_name, is_active, created_at AS joined_at
             FROM player_sessions
             WHERE game_id = $1
             ORDER BY created_at",
        )
        .bind(game_id)
        .fetch_all(pool)
        .await
    }

    /// Legacy view: the denormalized name list, each entry annotated with
    /// whether an active session still backs it.
    ///
    /// Stale entries (deleted players, or names never migrated) are
    /// returned with `has_active_session = false` rather than dropped or
    /// treated as an error; the legacy list is never authoritative.
    pub async fn legacy_list(
        pool: &PgPool,
        game_id: DbId,
    ) -> Result<Vec<LegacyParticipant>, sqlx::Error> {
        let names: Vec<String> =
            sqlx::query_scalar("SELECT legacy_participants FROM games WHERE id = $1")
                .bind(game_id)
                .fetch_one(pool)
                .await?;

        let active_names: Vec<String> = sqlx::query_scalar(
            "SELECT display_name FROM player_sessions
             WHERE game_id = $1 AND is_active = TRUE",
        )
        .bind(game_id)
        .fetch_all(pool)
        .await?;

        Ok(names
            .into_iter()
            .map(|name| {
                let has_active_session = active_names.contains(&name);
                LegacyParticipant {
                    name,
                    has_active_session,
                }
            })
            .collect())
    }
}
