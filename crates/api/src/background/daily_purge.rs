//! Nightly removal of exited parking sessions.
//!
//! Checks on a fixed interval whether the local day has rolled over since
//! the last purge and, if so, deletes every exited session. Active
//! sessions are never touched.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use parktrack_core::config::ParkingConfig;
use parktrack_core::purge::{self, PurgeSchedule};
use parktrack_core::store::SessionStore;
use tokio_util::sync::CancellationToken;

/// Run the daily purge loop until `cancel` is triggered.
pub async fn run(
    store: Arc<dyn SessionStore>,
    config: ParkingConfig,
    check_interval: Duration,
    cancel: CancellationToken,
) {
    let mut schedule = PurgeSchedule::starting_at(Utc::now(), &config);

    tracing::info!(
        interval_secs = check_interval.as_secs(),
        last_purged = %schedule.last_purged(),
        "Daily purge job started"
    );

    let mut interval = tokio::time::interval(check_interval);

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Daily purge job stopping");
                break;
            }
            _ = interval.tick() => {
                match purge::purge_if_due(store.as_ref(), &mut schedule, &config, Utc::now()).await {
                    Ok(Some(deleted)) => {
                        tracing::info!(deleted, date = %schedule.last_purged(), "Daily purge: removed exited sessions");
                    }
                    Ok(None) => {
                        tracing::trace!("Daily purge: not due");
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "Daily purge: cleanup failed");
                    }
                }
            }
        }
    }
}
