//! Stay duration and fee arithmetic.

use std::fmt;

use serde::Serialize;

use crate::types::Timestamp;

/// How long a vehicle stayed, floored to whole hours and minutes for display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StayDuration {
    pub hours: i64,
    pub minutes: i64,
    /// Unrounded length of the stay, used for fees and averages.
    pub total_minutes: f64,
}

impl StayDuration {
    /// Duration between two instants. A `to` earlier than `from` yields zero.
    pub fn between(from: Timestamp, to: Timestamp) -> Self {
        let millis = (to - from).num_milliseconds().max(0);
        Self::from_minutes(millis as f64 / 60_000.0)
    }

    pub fn from_minutes(total_minutes: f64) -> Self {
        let whole = total_minutes.floor() as i64;
        Self {
            hours: whole / 60,
            minutes: whole % 60,
            total_minutes,
        }
    }
}

impl fmt::Display for StayDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} hours and {} minutes", self.hours, self.minutes)
    }
}

/// Fee for a stay: prorated by the minute at `hourly_rate`.
pub fn compute_fee(duration: &StayDuration, hourly_rate: f64) -> f64 {
    duration.total_minutes / 60.0 * hourly_rate
}
