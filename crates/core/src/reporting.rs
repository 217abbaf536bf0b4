//! Daily report: today's sessions, their durations, and aggregates.
//!
//! "Today" is the local calendar day containing `now`. A session is listed
//! if it entered today *or* is still parked, so a car that arrived
//! yesterday and has not left shows up with its running duration.
//! `total_entries_today` only counts the former.

use chrono::NaiveDate;
use serde::Serialize;

use crate::config::ParkingConfig;
use crate::error::CoreError;
use crate::session::ParkingSession;
use crate::store::SessionStore;
use crate::types::Timestamp;

/// Shown in place of an exit time for vehicles that have not left.
pub const STILL_PARKED: &str = "Still Parked";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportLine {
    pub plate: String,
    pub slot: String,
    pub entry: String,
    pub exit: String,
    pub duration: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyReport {
    pub date: NaiveDate,
    pub vehicles: Vec<ReportLine>,
    /// Mean stay of exited sessions in minutes, two decimals; 0 if none.
    pub average_duration_minutes: f64,
    pub total_entries_today: usize,
}

/// Build the report for the local day containing `now` from the sessions
/// the store selected for it.
pub fn build_report(
    sessions: &[ParkingSession],
    config: &ParkingConfig,
    now: Timestamp,
) -> DailyReport {
    let (day_start, day_end) = config.day_window(now);

    let mut completed_minutes = Vec::new();
    let vehicles = sessions
        .iter()
        .map(|s| {
            let elapsed = s.elapsed(now);
            if s.exit_time.is_some() {
                completed_minutes.push(elapsed.total_minutes);
            }
            ReportLine {
                plate: s.plate.clone(),
                slot: s.slot.clone(),
                entry: config.display(s.entry_time),
                exit: s
                    .exit_time
                    .map(|t| config.display(t))
                    .unwrap_or_else(|| STILL_PARKED.to_string()),
                duration: elapsed.to_string(),
            }
        })
        .collect();

    let total_entries_today = sessions
        .iter()
        .filter(|s| s.entry_time >= day_start && s.entry_time <= day_end)
        .count();

    DailyReport {
        date: config.local_date(now),
        vehicles,
        average_duration_minutes: average_rounded(&completed_minutes),
        total_entries_today,
    }
}

/// Fetch today's sessions and build the report.
pub async fn daily_report<S: SessionStore + ?Sized>(
    store: &S,
    config: &ParkingConfig,
    now: Timestamp,
) -> Result<DailyReport, CoreError> {
    let (day_start, day_end) = config.day_window(now);
    let sessions = store.list_for_report(day_start, day_end).await?;
    Ok(build_report(&sessions, config, now))
}

fn average_rounded(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    (mean * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::{enter, exit};
    use crate::store::memory::MemoryStore;
    use chrono::{Duration, TimeZone, Utc};

    /// 2026-04-10 14:00 in Manila.
    fn afternoon() -> Timestamp {
        Utc.with_ymd_and_hms(2026, 4, 10, 6, 0, 0).unwrap()
    }

    fn session(id: i64, plate: &str, entry: Timestamp, exit: Option<Timestamp>) -> ParkingSession {
        ParkingSession {
            id,
            plate: plate.to_string(),
            slot: format!("P{id}"),
            entry_time: entry,
            exit_time: exit,
        }
    }

    #[tokio::test]
    async fn empty_report() {
        let store = MemoryStore::default();
        let report = daily_report(&store, &ParkingConfig::default(), afternoon())
            .await
            .unwrap();
        assert!(report.vehicles.is_empty());
        assert_eq!(report.average_duration_minutes, 0.0);
        assert_eq!(report.total_entries_today, 0);
        assert_eq!(report.date, NaiveDate::from_ymd_opt(2026, 4, 10).unwrap());
    }

    #[tokio::test]
    async fn average_is_zero_with_only_active_sessions() {
        let store = MemoryStore::default();
        let now = afternoon();
        enter(&store, "AAA1111", "P1", now - Duration::hours(2)).await.unwrap();
        enter(&store, "BBB2222", "P2", now - Duration::hours(1)).await.unwrap();

        let report = daily_report(&store, &ParkingConfig::default(), now)
            .await
            .unwrap();

        assert_eq!(report.average_duration_minutes, 0.0);
        assert_eq!(report.total_entries_today, 2);
        assert_eq!(report.vehicles.len(), 2);
        assert!(report.vehicles.iter().all(|v| v.exit == STILL_PARKED));
    }

    #[tokio::test]
    async fn average_covers_exited_sessions_only() {
        let store = MemoryStore::default();
        let config = ParkingConfig::default();
        let now = afternoon();
        let start = now - Duration::hours(4);

        enter(&store, "AAA1111", "P1", start).await.unwrap();
        enter(&store, "BBB2222", "P2", start).await.unwrap();
        enter(&store, "CCC3333", "P3", start).await.unwrap();
        exit(&store, &config, "AAA1111", start + Duration::minutes(30)).await.unwrap();
        exit(&store, &config, "BBB2222", start + Duration::minutes(61)).await.unwrap();

        let report = daily_report(&store, &config, now).await.unwrap();

        assert_eq!(report.average_duration_minutes, 45.5);
        assert_eq!(report.total_entries_today, 3);
        let still = report.vehicles.iter().find(|v| v.plate == "CCC3333").unwrap();
        assert_eq!(still.duration, "4 hours and 0 minutes");
    }

    #[test]
    fn average_rounds_to_two_decimals() {
        assert_eq!(average_rounded(&[10.0, 10.0, 10.5]), 10.17);
        assert_eq!(average_rounded(&[]), 0.0);
    }

    #[test]
    fn overnight_active_session_is_listed_but_not_counted() {
        let config = ParkingConfig::default();
        let now = afternoon();
        let yesterday = now - Duration::hours(20);
        let sessions = vec![
            session(1, "OLD0001", yesterday, None),
            session(2, "NEW0002", now - Duration::minutes(15), None),
        ];

        let report = build_report(&sessions, &config, now);

        assert_eq!(report.vehicles.len(), 2);
        assert_eq!(report.total_entries_today, 1);
        assert_eq!(report.vehicles[0].duration, "20 hours and 0 minutes");
        assert_eq!(report.vehicles[0].entry, "2026-04-09 18:00:00");
    }

    #[tokio::test]
    async fn yesterdays_completed_sessions_are_not_selected() {
        let store = MemoryStore::default();
        let config = ParkingConfig::default();
        let now = afternoon();
        let yesterday = now - Duration::days(1);

        store.push(session(1, "OLD0001", yesterday, Some(yesterday + Duration::hours(1))));
        store.push(session(2, "OLD0002", yesterday, None));

        let report = daily_report(&store, &config, now).await.unwrap();

        assert_eq!(report.vehicles.len(), 1);
        assert_eq!(report.vehicles[0].plate, "OLD0002");
        assert_eq!(report.total_entries_today, 0);
        assert_eq!(report.average_duration_minutes, 0.0);
    }

    #[test]
    fn lines_show_local_times() {
        let config = ParkingConfig::default();
        let now = afternoon();
        let entry = Utc.with_ymd_and_hms(2026, 4, 10, 1, 0, 0).unwrap();
        let sessions = vec![session(1, "ABC1234", entry, Some(entry + Duration::minutes(75)))];

        let report = build_report(&sessions, &config, now);

        assert_eq!(
            report.vehicles[0],
            ReportLine {
                plate: "ABC1234".into(),
                slot: "P1".into(),
                entry: "2026-04-10 09:00:00".into(),
                exit: "2026-04-10 10:15:00".into(),
                duration: "1 hours and 15 minutes".into(),
            }
        );
        assert_eq!(report.average_duration_minutes, 75.0);
    }
}
