//! The parking session record.

use serde::Serialize;

use crate::billing::StayDuration;
use crate::types::{DbId, Timestamp};
use crate::validation::{Plate, Slot};

/// One vehicle's stay in one slot.
///
/// Active while `exit_time` is `None`; closed exactly once by an exit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParkingSession {
    pub id: DbId,
    pub plate: String,
    pub slot: String,
    pub entry_time: Timestamp,
    pub exit_time: Option<Timestamp>,
}

impl ParkingSession {
    pub fn is_active(&self) -> bool {
        self.exit_time.is_none()
    }

    /// Time parked so far, measured to the exit or, if still parked, to `now`.
    pub fn elapsed(&self, now: Timestamp) -> StayDuration {
        StayDuration::between(self.entry_time, self.exit_time.unwrap_or(now))
    }
}

/// DTO for inserting a new (active) session.
#[derive(Debug, Clone)]
pub struct NewSession {
    pub plate: Plate,
    pub slot: Slot,
    pub entry_time: Timestamp,
}
