pub mod health;

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /games                              list, create
/// /games/{id}                         get
/// /games/{id}/sessions                join (issues session token)
/// /games/{id}/sessions/current        leave (DELETE, requires auth)
/// /games/{id}/roster                  get stored roster (requires auth)
/// /games/{id}/roster/autosave         partial save (requires auth)
/// /games/{id}/roster/submit           explicit submit (requires auth)
/// /games/{id}/results                 record result
/// /games/{id}/leaderboard             results ranked by finish time
/// /games/{id}/participants            modern participant list
/// /games/{id}/participants/legacy     deprecated denormalized list
///
/// /athletes                           list (filter by gender), create
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/games",
            get(handlers::games::list_games).post(handlers::games::create_game),
        )
        .route("/games/{id}", get(handlers::games::get_game))
        .route("/games/{id}/sessions", post(handlers::sessions::join_game))
        .route(
            "/games/{id}/sessions/current",
            delete(handlers::sessions::leave_game),
        )
        .route("/games/{id}/roster", get(handlers::roster::get_roster))
        .route(
            "/games/{id}/roster/autosave",
            post(handlers::roster::autosave_roster),
        )
        .route(
            "/games/{id}/roster/submit",
            post(handlers::roster::submit_roster),
        )
        .route("/games/{id}/results", post(handlers::results::record_result))
        .route("/games/{id}/leaderboard", get(handlers::results::leaderboard))
        .route(
            "/games/{id}/participants",
            get(handlers::participants::list_participants),
        )
        .route(
            "/games/{id}/participants/legacy",
            get(handlers::participants::list_participants_legacy),
        )
        .route(
            "/athletes",
            get(handlers::athletes::list_athletes).post(handlers::athletes::create_athlete),
        )
}
