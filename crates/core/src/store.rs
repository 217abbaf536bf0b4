//! Persistence boundary for parking sessions.

use async_trait::async_trait;

use crate::error::CoreError;
use crate::session::{NewSession, ParkingSession};
use crate::types::{DbId, Timestamp};
use crate::validation::{Plate, Slot};

/// Durable table of parking sessions.
///
/// Every mutation is a single atomic statement. Implementations report
/// backend failures as [`CoreError::Storage`]; an insert that would break
/// the one-active-session-per-plate/slot rule may instead report
/// [`CoreError::AlreadyParked`] or [`CoreError::SlotOccupied`].
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Persist a new active session and return it with its assigned id.
    async fn insert(&self, new: &NewSession) -> Result<ParkingSession, CoreError>;

    async fn find_active_by_plate(&self, plate: &Plate)
        -> Result<Option<ParkingSession>, CoreError>;

    async fn find_active_by_slot(&self, slot: &Slot) -> Result<Option<ParkingSession>, CoreError>;

    /// Set `exit_time` on an active session. Returns `false` if the session
    /// does not exist or was already closed.
    async fn close(&self, id: DbId, exit_time: Timestamp) -> Result<bool, CoreError>;

    /// All active sessions, oldest entry first.
    async fn list_active(&self) -> Result<Vec<ParkingSession>, CoreError>;

    /// Sessions that entered within `[day_start, day_end]` plus every session
    /// still active regardless of entry day, oldest entry first.
    async fn list_for_report(
        &self,
        day_start: Timestamp,
        day_end: Timestamp,
    ) -> Result<Vec<ParkingSession>, CoreError>;

    /// Delete every closed session. Returns the number of rows removed.
    async fn delete_exited(&self) -> Result<u64, CoreError>;
}
