//! Repository for the `parking_sessions` table.

use parktrack_core::types::{DbId, Timestamp};
use sqlx::SqlitePool;

use crate::models::parking_session::ParkingSessionRow;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, plate, slot, entry_time, exit_time";

/// Provides queries over parking sessions.
pub struct ParkingSessionRepo;

impl ParkingSessionRepo {
    /// Insert a new active session, returning the created row.
    pub async fn create(
        pool: &SqlitePool,
        plate: &str,
        slot: &str,
        entry_time: Timestamp,
    ) -> Result<ParkingSessionRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO parking_sessions (plate, slot, entry_time)
             VALUES (?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ParkingSessionRow>(&query)
            .bind(plate)
            .bind(slot)
            .bind(entry_time)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &SqlitePool,
        id: DbId,
    ) -> Result<Option<ParkingSessionRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM parking_sessions WHERE id = ?");
        sqlx::query_as::<_, ParkingSessionRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the active session for a plate, if any.
    pub async fn find_active_by_plate(
        pool: &SqlitePool,
        plate: &str,
    ) -> Result<Option<ParkingSessionRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM parking_sessions
             WHERE plate = ? AND exit_time IS NULL"
        );
        sqlx::query_as::<_, ParkingSessionRow>(&query)
            .bind(plate)
            .fetch_optional(pool)
            .await
    }

    /// Find the active session occupying a slot, if any.
    pub async fn find_active_by_slot(
        pool: &SqlitePool,
        slot: &str,
    ) -> Result<Option<ParkingSessionRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM parking_sessions
             WHERE slot = ? AND exit_time IS NULL"
        );
        sqlx::query_as::<_, ParkingSessionRow>(&query)
            .bind(slot)
            .fetch_optional(pool)
            .await
    }

    /// Set the exit time of an active session. Returns `true` if the row was updated.
    pub async fn close(
        pool: &SqlitePool,
        id: DbId,
        exit_time: Timestamp,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE parking_sessions SET exit_time = ? WHERE id = ? AND exit_time IS NULL",
        )
        .bind(exit_time)
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List all active sessions, oldest entry first.
    pub async fn list_active(pool: &SqlitePool) -> Result<Vec<ParkingSessionRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM parking_sessions
             WHERE exit_time IS NULL
             ORDER BY entry_time, id"
        );
        sqlx::query_as::<_, ParkingSessionRow>(&query)
            .fetch_all(pool)
            .await
    }

    /// List sessions that entered within the window, plus every active session.
    pub async fn list_entered_between_or_active(
        pool: &SqlitePool,
        start: Timestamp,
        end: Timestamp,
    ) -> Result<Vec<ParkingSessionRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM parking_sessions
             WHERE (entry_time >= ? AND entry_time <= ?) OR exit_time IS NULL
             ORDER BY entry_time, id"
        );
        sqlx::query_as::<_, ParkingSessionRow>(&query)
            .bind(start)
            .bind(end)
            .fetch_all(pool)
            .await
    }

    /// Delete every exited session. Returns the count of deleted rows.
    pub async fn delete_exited(pool: &SqlitePool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM parking_sessions WHERE exit_time IS NOT NULL")
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
