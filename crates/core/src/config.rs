//! Parking-lot settings passed explicitly into lifecycle and reporting.

use chrono::{Duration, FixedOffset, NaiveDate, NaiveTime, TimeZone, Utc};

use crate::error::CoreError;
use crate::types::{LocalTime, Timestamp};

/// Hourly parking rate in pesos.
pub const DEFAULT_HOURLY_RATE: f64 = 50.0;

/// Philippine Time (UTC+8).
pub const DEFAULT_UTC_OFFSET_HOURS: i32 = 8;

/// Format used for entry/exit times in listings and reports.
pub const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Timezone and pricing for a parking lot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParkingConfig {
    /// Civil timezone used for day boundaries and displayed times.
    pub timezone: FixedOffset,
    /// Fee charged per hour parked, prorated by the minute.
    pub hourly_rate: f64,
}

impl ParkingConfig {
    /// Build a config, rejecting out-of-range offsets and negative rates.
    pub fn new(utc_offset_hours: i32, hourly_rate: f64) -> Result<Self, CoreError> {
        let timezone = FixedOffset::east_opt(utc_offset_hours * 3600).ok_or_else(|| {
            CoreError::Config(format!("UTC offset {utc_offset_hours}h is out of range"))
        })?;
        if !hourly_rate.is_finite() || hourly_rate < 0.0 {
            return Err(CoreError::Config(format!(
                "Hourly rate must be a non-negative number, got {hourly_rate}"
            )));
        }
        Ok(Self {
            timezone,
            hourly_rate,
        })
    }

    /// Convert a stored UTC timestamp to local time.
    pub fn local(&self, ts: Timestamp) -> LocalTime {
        ts.with_timezone(&self.timezone)
    }

    /// Render a timestamp as local `YYYY-MM-DD HH:MM:SS`.
    pub fn display(&self, ts: Timestamp) -> String {
        self.local(ts).format(DISPLAY_FORMAT).to_string()
    }

    /// The local calendar date `now` falls on.
    pub fn local_date(&self, now: Timestamp) -> NaiveDate {
        self.local(now).date_naive()
    }

    /// Inclusive UTC bounds of the local day containing `now`:
    /// local midnight through the last nanosecond before the next midnight.
    pub fn day_window(&self, now: Timestamp) -> (Timestamp, Timestamp) {
        let midnight = self.local_date(now).and_time(NaiveTime::MIN);
        let offset = Duration::seconds(i64::from(self.timezone.local_minus_utc()));
        let start = Utc.from_utc_datetime(&(midnight - offset));
        let end = start + Duration::days(1) - Duration::nanoseconds(1);
        (start, end)
    }
}

impl Default for ParkingConfig {
    fn default() -> Self {
        Self {
            timezone: FixedOffset::east_opt(DEFAULT_UTC_OFFSET_HOURS * 3600)
                .expect("UTC+8 is a valid offset"),
            hourly_rate: DEFAULT_HOURLY_RATE,
        }
    }
}
