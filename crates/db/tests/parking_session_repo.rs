//! Integration tests for the `parking_sessions` repository and schema.
//!
//! Exercises the repository layer against a real SQLite database to verify:
//! - Inserted rows round-trip their timestamps
//! - Active lookups ignore exited sessions
//! - The partial unique indexes reject a second active row per plate/slot
//! - Closing is a one-shot conditional update
//! - The report query selects today's entries plus all active sessions

use chrono::{Duration, TimeZone, Utc};
use parktrack_core::types::Timestamp;
use parktrack_db::repositories::ParkingSessionRepo;
use sqlx::SqlitePool;

fn t0() -> Timestamp {
    Utc.with_ymd_and_hms(2026, 4, 10, 2, 0, 0).unwrap()
}

// ---------------------------------------------------------------------------
// Create / find
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn create_returns_active_row(pool: SqlitePool) {
    let row = ParkingSessionRepo::create(&pool, "ABC1234", "P1", t0())
        .await
        .unwrap();

    assert!(row.id > 0);
    assert_eq!(row.plate, "ABC1234");
    assert_eq!(row.slot, "P1");
    assert_eq!(row.entry_time, t0());
    assert!(row.exit_time.is_none());

    let found = ParkingSessionRepo::find_by_id(&pool, row.id).await.unwrap();
    assert_eq!(found.map(|r| r.entry_time), Some(t0()));
}

#[sqlx::test(migrations = "./migrations")]
async fn active_lookups_skip_exited_rows(pool: SqlitePool) {
    let row = ParkingSessionRepo::create(&pool, "ABC1234", "P1", t0())
        .await
        .unwrap();
    ParkingSessionRepo::close(&pool, row.id, t0() + Duration::hours(1))
        .await
        .unwrap();

    assert!(ParkingSessionRepo::find_active_by_plate(&pool, "ABC1234")
        .await
        .unwrap()
        .is_none());
    assert!(ParkingSessionRepo::find_active_by_slot(&pool, "P1")
        .await
        .unwrap()
        .is_none());
}

// ---------------------------------------------------------------------------
// Schema constraints
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn second_active_row_for_plate_is_rejected(pool: SqlitePool) {
    ParkingSessionRepo::create(&pool, "ABC1234", "P1", t0())
        .await
        .unwrap();
    let err = ParkingSessionRepo::create(&pool, "ABC1234", "P2", t0())
        .await
        .unwrap_err();

    let db_err = err.as_database_error().expect("database error");
    assert!(db_err.is_unique_violation());
}

#[sqlx::test(migrations = "./migrations")]
async fn second_active_row_for_slot_is_rejected(pool: SqlitePool) {
    ParkingSessionRepo::create(&pool, "AAA1111", "P2", t0())
        .await
        .unwrap();
    let err = ParkingSessionRepo::create(&pool, "BBB2222", "P2", t0())
        .await
        .unwrap_err();

    let db_err = err.as_database_error().expect("database error");
    assert!(db_err.is_unique_violation());
}

#[sqlx::test(migrations = "./migrations")]
async fn exited_rows_do_not_block_new_entries(pool: SqlitePool) {
    let first = ParkingSessionRepo::create(&pool, "ABC1234", "P1", t0())
        .await
        .unwrap();
    ParkingSessionRepo::close(&pool, first.id, t0() + Duration::minutes(5))
        .await
        .unwrap();

    let second = ParkingSessionRepo::create(&pool, "ABC1234", "P1", t0() + Duration::minutes(6))
        .await
        .unwrap();
    assert_ne!(first.id, second.id);
}

#[sqlx::test(migrations = "./migrations")]
async fn unknown_slot_violates_check(pool: SqlitePool) {
    let result = ParkingSessionRepo::create(&pool, "ABC1234", "P11", t0()).await;
    assert!(result.is_err());
}

// ---------------------------------------------------------------------------
// Close
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn close_is_one_shot(pool: SqlitePool) {
    let row = ParkingSessionRepo::create(&pool, "ABC1234", "P1", t0())
        .await
        .unwrap();
    let exit = t0() + Duration::minutes(90);

    assert!(ParkingSessionRepo::close(&pool, row.id, exit).await.unwrap());
    assert!(!ParkingSessionRepo::close(&pool, row.id, exit + Duration::hours(1))
        .await
        .unwrap());

    let stored = ParkingSessionRepo::find_by_id(&pool, row.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.exit_time, Some(exit));
}

// ---------------------------------------------------------------------------
// Listing / purge
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn report_query_selects_window_or_active(pool: SqlitePool) {
    let window_start = t0() - Duration::hours(10);
    let window_end = window_start + Duration::days(1) - Duration::nanoseconds(1);
    let before = window_start - Duration::hours(3);

    // Yesterday, exited: excluded.
    let old = ParkingSessionRepo::create(&pool, "OLD0001", "P1", before)
        .await
        .unwrap();
    ParkingSessionRepo::close(&pool, old.id, before + Duration::hours(1))
        .await
        .unwrap();
    // Yesterday, still parked: included.
    ParkingSessionRepo::create(&pool, "OLD0002", "P2", before)
        .await
        .unwrap();
    // Today, exited: included.
    let today = ParkingSessionRepo::create(&pool, "NEW0003", "P3", t0())
        .await
        .unwrap();
    ParkingSessionRepo::close(&pool, today.id, t0() + Duration::minutes(30))
        .await
        .unwrap();

    let rows =
        ParkingSessionRepo::list_entered_between_or_active(&pool, window_start, window_end)
            .await
            .unwrap();
    let plates: Vec<_> = rows.iter().map(|r| r.plate.as_str()).collect();
    assert_eq!(plates, vec!["OLD0002", "NEW0003"]);
}

#[sqlx::test(migrations = "./migrations")]
async fn delete_exited_keeps_active_rows(pool: SqlitePool) {
    let a = ParkingSessionRepo::create(&pool, "AAA1111", "P1", t0())
        .await
        .unwrap();
    ParkingSessionRepo::create(&pool, "BBB2222", "P2", t0())
        .await
        .unwrap();
    ParkingSessionRepo::close(&pool, a.id, t0() + Duration::hours(2))
        .await
        .unwrap();

    let deleted = ParkingSessionRepo::delete_exited(&pool).await.unwrap();
    assert_eq!(deleted, 1);

    let active = ParkingSessionRepo::list_active(&pool).await.unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].plate, "BBB2222");
}
