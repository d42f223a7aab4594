//! HTTP-level integration tests for the dual participant-list endpoints.

mod common;

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use serde_json::json;
use sqlx::PgPool;

use capdraft_db::models::game::CreateGame;
use capdraft_db::repositories::GameRepo;
use common::{body_json, build_test_app, get, post_json};

async fn seed_game(pool: &PgPool) -> i64 {
    GameRepo::create(
        pool,
        &CreateGame {
            name: "City Marathon".to_string(),
            race_date: Utc::now().date_naive(),
            roster_lock_at: Utc::now() + Duration::hours(12),
            salary_cap: 600,
        },
    )
    .await
    .unwrap()
    .id
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn modern_list_reflects_joins(pool: PgPool) {
    let game_id = seed_game(&pool).await;

    let app = build_test_app(pool);
    for name in ["Alice", "Bob"] {
        post_json(
            app.clone(),
            &format!("/api/v1/games/{game_id}/sessions"),
            json!({ "display_name": name }),
        )
        .await;
    }

    let response = get(app, &format!("/api/v1/games/{game_id}/participants")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let rows = json["data"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["display_name"], "Alice");
    assert_eq!(rows[1]["display_name"], "Bob");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn legacy_list_serves_stale_entries_without_failing(pool: PgPool) {
    let game_id = seed_game(&pool).await;
    // Pre-migration data: names with no backing session.
    sqlx::query("UPDATE games SET legacy_participants = $1 WHERE id = $2")
        .bind(vec!["Ghost".to_string(), "Alice".to_string()])
        .bind(game_id)
        .execute(&pool)
        .await
        .unwrap();

    let app = build_test_app(pool);
    // Alice joins through the modern path; the legacy array is untouched.
    post_json(
        app.clone(),
        &format!("/api/v1/games/{game_id}/sessions"),
        json!({ "display_name": "Alice" }),
    )
    .await;

    let response = get(
        app,
        &format!("/api/v1/games/{game_id}/participants/legacy"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let rows = json["data"].as_array().unwrap();
    assert_eq!(rows.len(), 2);

    let ghost = rows.iter().find(|r| r["name"] == "Ghost").unwrap();
    assert_eq!(ghost["has_active_session"], false);
    let alice = rows.iter().find(|r| r["name"] == "Alice").unwrap();
    assert_eq!(alice["has_active_session"], true);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn participants_for_unknown_game_is_not_found(pool: PgPool) {
    let app = build_test_app(pool);
    let response = get(app, "/api/v1/games/999/participants").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
