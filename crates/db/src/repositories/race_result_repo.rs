//! Repository for the `race_results` table.

use sqlx::PgPool;

use capdraft_core::types::DbId;

use crate::models::race_result::{CreateRaceResult, RaceResult, ResultWithAthlete};

const COLUMNS: &str = "id, game_id, athlete_id, finish_time, created_at";

/// Provides CRUD operations for race results.
pub struct RaceResultRepo;

impl RaceResultRepo {
    /// Record a result. The `uq_race_results_game_athlete` constraint
    /// rejects a second result for the same athlete in the same game.
    pub async fn create(pool: &PgPool, input: &CreateRaceResult) -> Result<RaceResult, sqlx::Error> {
        let query = format!(
            "INSERT INTO race_results (game_id, athlete_id, finish_time)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, RaceResult>(&query)
            .bind(input.game_id)
            .bind(input.athlete_id)
            .bind(&input.finish_time)
            .fetch_one(pool)
            .await
    }

    /// Fetch all results for a game joined with athlete details.
    ///
    /// Deliberately unordered: text-form times cannot be ranked in SQL,
    /// so the caller sorts by the parsed millisecond value.
    pub async fn list_with_athletes(
        pool: &PgPool,
        game_id: DbId,
    ) -> Result<Vec<ResultWithAthlete>, sqlx::Error> {
        sqlx::query_as::<_, ResultWithAthlete>(
            "SELECT r.athlete_id, a.name AS athlete_name, a.country, a.gender, r.finish_time
             FROM race_results r
             JOIN athletes a ON a.id = r.athlete_id
             WHERE r.game_id = $1",
        )
        .bind(game_id)
        .fetch_all(pool)
        .await
    }
}
