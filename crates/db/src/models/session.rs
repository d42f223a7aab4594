//! Player session model and DTOs.
//!
//! A session binds an opaque token to exactly one `(game_id, player_code)`
//! pair and is required for any roster write. Only the SHA-256 hash of the
//! token is stored; a database leak does not compromise active sessions.

use serde::Serialize;
use sqlx::FromRow;

use capdraft_core::types::{DbId, Timestamp};

/// A player session row from the `player_sessions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PlayerSession {
    pub id: DbId,
    pub game_id: DbId,
    pub player_code: String,
    pub display_name: String,
    #[serde(skip_serializing)]
    pub token_hash: String,
    pub is_active: bool,
    pub expires_at: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a player session.
pub struct CreatePlayerSession {
    pub game_id: DbId,
    pub player_code: String,
    pub display_name: String,
    pub token_hash: String,
    pub expires_at: Timestamp,
}
