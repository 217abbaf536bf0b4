//! Nightly removal of exited sessions.
//!
//! Active sessions are never purged. The schedule is date-based rather than
//! "exactly 00:00", so a purge check that runs late still fires once for
//! the new day, and repeated checks on the same day are no-ops.

use chrono::NaiveDate;

use crate::config::ParkingConfig;
use crate::error::CoreError;
use crate::store::SessionStore;
use crate::types::Timestamp;

/// Tracks the local date of the last completed purge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PurgeSchedule {
    last_purged: NaiveDate,
}

impl PurgeSchedule {
    /// A schedule that treats the local day containing `now` as already
    /// purged, so the first purge happens at the next local midnight.
    pub fn starting_at(now: Timestamp, config: &ParkingConfig) -> Self {
        Self {
            last_purged: config.local_date(now),
        }
    }

    pub fn last_purged(&self) -> NaiveDate {
        self.last_purged
    }

    /// True once the local date has moved past the last purge.
    pub fn is_due(&self, now: Timestamp, config: &ParkingConfig) -> bool {
        config.local_date(now) > self.last_purged
    }

    pub fn mark_done(&mut self, now: Timestamp, config: &ParkingConfig) {
        self.last_purged = config.local_date(now);
    }
}

/// Delete every exited session, returning how many were removed.
pub async fn purge_exited<S: SessionStore + ?Sized>(store: &S) -> Result<u64, CoreError> {
    store.delete_exited().await
}

/// Purge if the schedule says a new local day has started.
///
/// Returns `Ok(None)` when nothing was due. The schedule only advances after
/// a successful purge, so a failure is retried on the next check.
pub async fn purge_if_due<S: SessionStore + ?Sized>(
    store: &S,
    schedule: &mut PurgeSchedule,
    config: &ParkingConfig,
    now: Timestamp,
) -> Result<Option<u64>, CoreError> {
    if !schedule.is_due(now, config) {
        return Ok(None);
    }
    let deleted = purge_exited(store).await?;
    schedule.mark_done(now, config);
    Ok(Some(deleted))
}
