//! Participant-list projections.
//!
//! Two read paths coexist during the migration window: the modern,
//! normalized `player_sessions` table (source of truth) and the
//! deprecated `games.legacy_participants` array. Both are read-only
//! projections; all writes go through the session repository.

use serde::Serialize;
use sqlx::FromRow;

use capdraft_core::types::Timestamp;

/// Modern participant view: one active session row.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Participant {
    pub player_code: String,
    pub display_name: String,
    pub is_active: bool,
    pub joined_at: Timestamp,
}

/// Legacy participant view entry.
///
/// The legacy list is eventually-inaccurate metadata: a name may have no
/// live session (stale) or a session may be missing from the list. Readers
/// annotate rather than fail.
#[derive(Debug, Clone, Serialize)]
pub struct LegacyParticipant {
    pub name: String,
    /// False when no active session matches this name any more.
    pub has_active_session: bool,
}
