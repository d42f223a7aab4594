//! HTTP-level integration tests for game and athlete CRUD.

mod common;

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use serde_json::json;
use sqlx::PgPool;

use common::{body_json, build_test_app, get, post_json};

fn game_payload(lock_in_hours: i64) -> serde_json::Value {
    json!({
        "name": "City Marathon",
        "race_date": Utc::now().date_naive(),
        "roster_lock_at": Utc::now() + Duration::hours(lock_in_hours),
        "salary_cap": 600,
    })
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_and_fetch_game(pool: PgPool) {
    let app = build_test_app(pool);
    let response = post_json(app.clone(), "/api/v1/games", game_payload(12)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let created = body_json(response).await;
    let id = created["data"]["id"].as_i64().unwrap();
    assert_eq!(created["data"]["locked"], false);

    let response = get(app, &format!("/api/v1/games/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let fetched = body_json(response).await;
    assert_eq!(fetched["data"]["name"], "City Marathon");
    assert_eq!(fetched["data"]["salary_cap"], 600);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn game_past_lock_reports_locked(pool: PgPool) {
    let app = build_test_app(pool);
    let response = post_json(app.clone(), "/api/v1/games", game_payload(-1)).await;
    let id = body_json(response).await["data"]["id"].as_i64().unwrap();

    let response = get(app, &format!("/api/v1/games/{id}")).await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["locked"], true);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_game_rejects_blank_name(pool: PgPool) {
    let app = build_test_app(pool);
    let mut payload = game_payload(12);
    payload["name"] = json!("");
    let response = post_json(app, "/api/v1/games", payload).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Athletes
// ---------------------------------------------------------------------------

fn athlete_payload(name: &str, gender: &str) -> serde_json::Value {
    json!({
        "name": name,
        "country": "KEN",
        "gender": gender,
        "salary": 120,
        "marathon_pb": "2:04:58.9",
    })
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_and_filter_athletes(pool: PgPool) {
    let app = build_test_app(pool);
    for (name, gender) in [("Man A", "men"), ("Woman A", "women")] {
        let response = post_json(app.clone(), "/api/v1/athletes", athlete_payload(name, gender)).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = get(app.clone(), "/api/v1/athletes?gender=women").await;
    let json = body_json(response).await;
    let rows = json["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["name"], "Woman A");

    let response = get(app, "/api/v1/athletes").await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_athlete_rejects_malformed_pb(pool: PgPool) {
    let app = build_test_app(pool);
    let mut payload = athlete_payload("Man A", "men");
    payload["marathon_pb"] = json!("2:4:58");
    let response = post_json(app, "/api/v1/athletes", payload).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_athletes_rejects_unknown_gender_filter(pool: PgPool) {
    let app = build_test_app(pool);
    let response = get(app, "/api/v1/athletes?gender=other").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
