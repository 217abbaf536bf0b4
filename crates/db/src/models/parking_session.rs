//! Parking session row and its conversion to the domain record.

use parktrack_core::session::ParkingSession;
use parktrack_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `parking_sessions` table.
#[derive(Debug, Clone, FromRow)]
pub struct ParkingSessionRow {
    pub id: DbId,
    pub plate: String,
    pub slot: String,
    pub entry_time: Timestamp,
    pub exit_time: Option<Timestamp>,
}

impl From<ParkingSessionRow> for ParkingSession {
    fn from(row: ParkingSessionRow) -> Self {
        ParkingSession {
            id: row.id,
            plate: row.plate,
            slot: row.slot,
            entry_time: row.entry_time,
            exit_time: row.exit_time,
        }
    }
}
