//! Repository for the `games` table.

use sqlx::PgPool;

use capdraft_core::types::DbId;

use crate::models::game::{CreateGame, Game};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, race_date, roster_lock_at, salary_cap, \
                       legacy_participants, created_at, updated_at";

/// Provides CRUD operations for games.
pub struct GameRepo;

impl GameRepo {
    /// Insert a new game, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateGame) -> Result<Game, sqlx::Error> {
        let query = format!(
            "INSERT INTO games (name, race_date, roster_lock_at, salary_cap)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Game>(&query)
            .bind(&input.name)
            .bind(input.race_date)
            .bind(input.roster_lock_at)
            .bind(input.salary_cap)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Game>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM games WHERE id = $1");
        sqlx::query_as::<_, Game>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all games, most recent race first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Game>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM games ORDER BY race_date DESC, id DESC");
        sqlx::query_as::<_, Game>(&query).fetch_all(pool).await
    }
}
