//! Handlers for the athlete pool.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use validator::Validate;

use capdraft_core::time::RaceTime;
use capdraft_db::models::athlete::CreateAthlete;
use capdraft_db::repositories::AthleteRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for athlete listing.
#[derive(Debug, Deserialize)]
pub struct AthleteQuery {
    pub gender: Option<String>,
}

/// Request body for creating an athlete.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateAthletePayload {
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    #[validate(length(min = 2, max = 3))]
    pub country: String,
    pub gender: String,
    #[validate(range(min = 1))]
    pub salary: i64,
    pub marathon_pb: Option<String>,
    pub world_athletics_id: Option<i64>,
}

/// GET /athletes
pub async fn list_athletes(
    State(state): State<AppState>,
    Query(params): Query<AthleteQuery>,
) -> AppResult<impl IntoResponse> {
    if let Some(g) = params.gender.as_deref() {
        if g != "men" && g != "women" {
            return Err(AppError::BadRequest(format!(
                "Unknown gender filter '{g}': expected 'men' or 'women'"
            )));
        }
    }
    let athletes = AthleteRepo::list(&state.pool, params.gender.as_deref()).await?;
    Ok(Json(DataResponse { data: athletes }))
}

/// POST /athletes
pub async fn create_athlete(
    State(state): State<AppState>,
    Json(payload): Json<CreateAthletePayload>,
) -> AppResult<impl IntoResponse> {
    payload
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;
    if payload.gender != "men" && payload.gender != "women" {
        return Err(AppError::BadRequest(format!(
            "Unknown gender '{}': expected 'men' or 'women'",
            payload.gender
        )));
    }
    // PBs are stored as original text but must still parse.
    if let Some(pb) = payload.marathon_pb.as_deref() {
        RaceTime::parse(pb)?;
    }

    let athlete = AthleteRepo::create(
        &state.pool,
        &CreateAthlete {
            name: payload.name,
            country: payload.country,
            gender: payload.gender,
            salary: payload.salary,
            marathon_pb: payload.marathon_pb,
            world_athletics_id: payload.world_athletics_id,
        },
    )
    .await?;

    Ok(Json(DataResponse { data: athlete }))
}
