//! Athlete model and DTOs.

use serde::Serialize;
use sqlx::FromRow;

use capdraft_core::types::{DbId, Timestamp};

/// An athlete row from the `athletes` table.
///
/// `marathon_pb` holds the personal best exactly as it came from the
/// rankings feed; it is parsed only when compared, never rounded.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Athlete {
    pub id: DbId,
    pub name: String,
    pub country: String,
    /// `"men"` or `"women"`, enforced by a CHECK constraint.
    pub gender: String,
    pub salary: i64,
    pub marathon_pb: Option<String>,
    pub world_athletics_id: Option<i64>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating an athlete.
pub struct CreateAthlete {
    pub name: String,
    pub country: String,
    pub gender: String,
    pub salary: i64,
    pub marathon_pb: Option<String>,
    pub world_athletics_id: Option<i64>,
}
