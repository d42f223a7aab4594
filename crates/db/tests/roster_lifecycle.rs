//! Integration tests for roster replace-all persistence.
//!
//! Exercises the repository layer against a real database to verify that:
//! - Partial saves create rows with `is_complete = false`
//! - Submission supersedes prior partial rows with no orphans
//! - Every write replaces the full slot set (last write wins)
//! - The completion probe reflects the stored flag

use chrono::{Duration, Utc};
use sqlx::PgPool;

use capdraft_core::roster::{DraftSlot, RosterConfig, RosterDraft};
use capdraft_db::models::athlete::CreateAthlete;
use capdraft_db::models::game::CreateGame;
use capdraft_db::repositories::{AthleteRepo, GameRepo, RosterRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_game(name: &str) -> CreateGame {
    CreateGame {
        name: name.to_string(),
        race_date: Utc::now().date_naive(),
        roster_lock_at: Utc::now() + Duration::hours(12),
        salary_cap: 600,
    }
}

fn new_athlete(name: &str, gender: &str, salary: i64) -> CreateAthlete {
    CreateAthlete {
        name: name.to_string(),
        country: "KEN".to_string(),
        gender: gender.to_string(),
        salary,
        marathon_pb: Some("2:04:58".to_string()),
        world_athletics_id: None,
    }
}

/// Seed a game plus six athletes (three men, three women), returning
/// `(game_id, athlete_ids)`.
async fn seed(pool: &PgPool) -> (i64, Vec<i64>) {
    let game = GameRepo::create(pool, &new_game("City Marathon")).await.unwrap();
    let mut ids = Vec::new();
    for i in 0..3 {
        let a = AthleteRepo::create(pool, &new_athlete(&format!("Man {i}"), "men", 100))
            .await
            .unwrap();
        ids.push(a.id);
    }
    for i in 0..3 {
        let a = AthleteRepo::create(pool, &new_athlete(&format!("Woman {i}"), "women", 100))
            .await
            .unwrap();
        ids.push(a.id);
    }
    (game.id, ids)
}

fn full_slots(athlete_ids: &[i64]) -> Vec<DraftSlot> {
    let mut draft = RosterDraft::new(RosterConfig::marathon(600));
    for (slot_id, athlete_id) in ["M1", "M2", "M3", "W1", "W2", "W3"].iter().zip(athlete_ids) {
        draft.set_slot(slot_id, *athlete_id, 100).unwrap();
    }
    draft.slots().to_vec()
}

/// Two filled slots, four empty: a typical early partial save.
fn partial_slots(athlete_ids: &[i64]) -> Vec<DraftSlot> {
    let mut draft = RosterDraft::new(RosterConfig::marathon(600));
    draft.set_slot("M1", athlete_ids[0], 100).unwrap();
    draft.set_slot("W1", athlete_ids[3], 100).unwrap();
    draft.slots().to_vec()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn partial_save_stores_incomplete_rows(pool: PgPool) {
    let (game_id, athletes) = seed(&pool).await;

    let totals = RosterRepo::replace_all(&pool, game_id, "p1", &partial_slots(&athletes), false)
        .await
        .unwrap();
    assert_eq!(totals.athlete_count, 2);
    assert_eq!(totals.total_spent, 200);

    let rows = RosterRepo::find_for_player(&pool, game_id, "p1").await.unwrap();
    assert_eq!(rows.len(), 6, "partial save still writes the full slot set");
    assert!(rows.iter().all(|r| !r.is_complete));
    assert_eq!(rows.iter().filter(|r| r.athlete_id.is_some()).count(), 2);

    assert!(!RosterRepo::is_complete(&pool, game_id, "p1").await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn submit_supersedes_partial_rows_without_orphans(pool: PgPool) {
    let (game_id, athletes) = seed(&pool).await;

    RosterRepo::replace_all(&pool, game_id, "p1", &partial_slots(&athletes), false)
        .await
        .unwrap();
    let totals = RosterRepo::replace_all(&pool, game_id, "p1", &full_slots(&athletes), true)
        .await
        .unwrap();
    assert_eq!(totals.athlete_count, 6);
    assert_eq!(totals.total_spent, 600);

    let rows = RosterRepo::find_for_player(&pool, game_id, "p1").await.unwrap();
    assert_eq!(rows.len(), 6, "no residual partial rows may remain");
    assert!(rows.iter().all(|r| r.is_complete));
    assert!(rows.iter().all(|r| r.athlete_id.is_some()));

    assert!(RosterRepo::is_complete(&pool, game_id, "p1").await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn last_write_wins_at_full_replace_granularity(pool: PgPool) {
    let (game_id, athletes) = seed(&pool).await;

    let mut first = full_slots(&athletes);
    RosterRepo::replace_all(&pool, game_id, "p1", &first, false).await.unwrap();

    // Second write moves an athlete to a different slot.
    first.swap(0, 1);
    RosterRepo::replace_all(&pool, game_id, "p1", &first, false).await.unwrap();

    let rows = RosterRepo::find_for_player(&pool, game_id, "p1").await.unwrap();
    assert_eq!(rows.len(), 6);
    let m1 = rows.iter().find(|r| r.slot_id == "M1").unwrap();
    assert_eq!(m1.athlete_id, Some(athletes[1]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn rosters_are_isolated_per_player(pool: PgPool) {
    let (game_id, athletes) = seed(&pool).await;

    RosterRepo::replace_all(&pool, game_id, "p1", &full_slots(&athletes), true)
        .await
        .unwrap();
    RosterRepo::replace_all(&pool, game_id, "p2", &partial_slots(&athletes), false)
        .await
        .unwrap();

    assert!(RosterRepo::is_complete(&pool, game_id, "p1").await.unwrap());
    assert!(!RosterRepo::is_complete(&pool, game_id, "p2").await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn completion_probe_is_false_for_absent_roster(pool: PgPool) {
    let (game_id, _) = seed(&pool).await;
    assert!(!RosterRepo::is_complete(&pool, game_id, "nobody").await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_for_player_removes_all_rows(pool: PgPool) {
    let (game_id, athletes) = seed(&pool).await;

    RosterRepo::replace_all(&pool, game_id, "p1", &full_slots(&athletes), true)
        .await
        .unwrap();
    let deleted = RosterRepo::delete_for_player(&pool, game_id, "p1").await.unwrap();
    assert_eq!(deleted, 6);

    let rows = RosterRepo::find_for_player(&pool, game_id, "p1").await.unwrap();
    assert!(rows.is_empty());
}
