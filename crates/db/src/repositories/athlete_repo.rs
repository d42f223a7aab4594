//! Repository for the `athletes` table.

use sqlx::PgPool;

use capdraft_core::types::DbId;

use crate::models::athlete::{Athlete, CreateAthlete};

const COLUMNS: &str = "id, name, country, gender, salary, marathon_pb, \
                       world_athletics_id, created_at, updated_at";

/// Provides CRUD operations for the athlete pool.
pub struct AthleteRepo;

impl AthleteRepo {
    /// Insert a new athlete, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateAthlete) -> Result<Athlete, sqlx::Error> {
        let query = format!(
            "INSERT INTO athletes (name, country, gender, salary, marathon_pb, world_athletics_id)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Athlete>(&query)
            .bind(&input.name)
            .bind(&input.country)
            .bind(&input.gender)
            .bind(input.salary)
            .bind(&input.marathon_pb)
            .bind(input.world_athletics_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Athlete>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM athletes WHERE id = $1");
        sqlx::query_as::<_, Athlete>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List athletes, optionally filtered by gender, cheapest first so the
    /// salary-cap picker can render in one pass.
    pub async fn list(pool: &PgPool, gender: Option<&str>) -> Result<Vec<Athlete>, sqlx::Error> {
        match gender {
            Some(g) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM athletes WHERE gender = $1 ORDER BY salary ASC, name ASC"
                );
                sqlx::query_as::<_, Athlete>(&query).bind(g).fetch_all(pool).await
            }
            None => {
                let query =
                    format!("SELECT {COLUMNS} FROM athletes ORDER BY salary ASC, name ASC");
                sqlx::query_as::<_, Athlete>(&query).fetch_all(pool).await
            }
        }
    }
}
