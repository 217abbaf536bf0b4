//! [`SessionStore`] over the SQLite pool.

use async_trait::async_trait;
use parktrack_core::error::CoreError;
use parktrack_core::session::{NewSession, ParkingSession};
use parktrack_core::store::SessionStore;
use parktrack_core::types::{DbId, Timestamp};
use parktrack_core::validation::{Plate, Slot};

use crate::repositories::ParkingSessionRepo;
use crate::DbPool;

/// Session store backed by the `parking_sessions` table.
#[derive(Clone)]
pub struct SqliteSessionStore {
    pool: DbPool,
}

impl SqliteSessionStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionStore for SqliteSessionStore {
    async fn insert(&self, new: &NewSession) -> Result<ParkingSession, CoreError> {
        ParkingSessionRepo::create(
            &self.pool,
            new.plate.as_str(),
            new.slot.as_str(),
            new.entry_time,
        )
        .await
        .map(Into::into)
        .map_err(|e| classify_insert_error(e, new))
    }

    async fn find_active_by_plate(
        &self,
        plate: &Plate,
    ) -> Result<Option<ParkingSession>, CoreError> {
        ParkingSessionRepo::find_active_by_plate(&self.pool, plate.as_str())
            .await
            .map(|row| row.map(Into::into))
            .map_err(storage_error)
    }

    async fn find_active_by_slot(&self, slot: &Slot) -> Result<Option<ParkingSession>, CoreError> {
        ParkingSessionRepo::find_active_by_slot(&self.pool, slot.as_str())
            .await
            .map(|row| row.map(Into::into))
            .map_err(storage_error)
    }

    async fn close(&self, id: DbId, exit_time: Timestamp) -> Result<bool, CoreError> {
        ParkingSessionRepo::close(&self.pool, id, exit_time)
            .await
            .map_err(storage_error)
    }

    async fn list_active(&self) -> Result<Vec<ParkingSession>, CoreError> {
        ParkingSessionRepo::list_active(&self.pool)
            .await
            .map(|rows| rows.into_iter().map(Into::into).collect())
            .map_err(storage_error)
    }

    async fn list_for_report(
        &self,
        day_start: Timestamp,
        day_end: Timestamp,
    ) -> Result<Vec<ParkingSession>, CoreError> {
        ParkingSessionRepo::list_entered_between_or_active(&self.pool, day_start, day_end)
            .await
            .map(|rows| rows.into_iter().map(Into::into).collect())
            .map_err(storage_error)
    }

    async fn delete_exited(&self) -> Result<u64, CoreError> {
        ParkingSessionRepo::delete_exited(&self.pool)
            .await
            .map_err(storage_error)
    }
}

fn storage_error(err: sqlx::Error) -> CoreError {
    tracing::error!(error = %err, "Session store query failed");
    CoreError::Storage(err.to_string())
}

/// Map a lost check-then-insert race onto the matching conflict.
///
/// SQLite reports partial unique index violations as
/// `UNIQUE constraint failed: parking_sessions.<column>`.
fn classify_insert_error(err: sqlx::Error, new: &NewSession) -> CoreError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            let message = db_err.message();
            if message.contains("parking_sessions.plate") {
                return CoreError::AlreadyParked {
                    plate: new.plate.to_string(),
                };
            }
            if message.contains("parking_sessions.slot") {
                return CoreError::SlotOccupied {
                    slot: new.slot.to_string(),
                };
            }
        }
    }
    storage_error(err)
}
