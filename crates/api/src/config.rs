use parktrack_core::config::{ParkingConfig, DEFAULT_HOURLY_RATE, DEFAULT_UTC_OFFSET_HOURS};

use crate::auth::admin::AdminConfig;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// SQLite database URL (default: `sqlite://parktrack.db?mode=rwc`).
    pub database_url: String,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// How often the daily purge task checks whether a new day has started
    /// (default: `60`).
    pub purge_check_interval_secs: u64,
    /// Credentials for the reports login.
    pub admin: AdminConfig,
    /// Timezone and hourly rate.
    pub parking: ParkingConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                     | Default                          |
    /// |-----------------------------|----------------------------------|
    /// | `HOST`                      | `0.0.0.0`                        |
    /// | `PORT`                      | `3000`                           |
    /// | `DATABASE_URL`              | `sqlite://parktrack.db?mode=rwc` |
    /// | `CORS_ORIGINS`              | `http://localhost:5173`          |
    /// | `REQUEST_TIMEOUT_SECS`      | `30`                             |
    /// | `PURGE_CHECK_INTERVAL_SECS` | `60`                             |
    /// | `ADMIN_USERNAME`            | `admin`                          |
    /// | `ADMIN_PASSWORD`            | `password123`                    |
    /// | `HOURLY_RATE`               | `50`                             |
    /// | `UTC_OFFSET_HOURS`          | `8`                              |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://parktrack.db?mode=rwc".into());

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let purge_check_interval_secs: u64 = std::env::var("PURGE_CHECK_INTERVAL_SECS")
            .unwrap_or_else(|_| "60".into())
            .parse()
            .expect("PURGE_CHECK_INTERVAL_SECS must be a valid u64");
        assert!(
            purge_check_interval_secs > 0,
            "PURGE_CHECK_INTERVAL_SECS must be positive"
        );

        let hourly_rate: f64 = std::env::var("HOURLY_RATE")
            .unwrap_or_else(|_| DEFAULT_HOURLY_RATE.to_string())
            .parse()
            .expect("HOURLY_RATE must be a number");

        let utc_offset_hours: i32 = std::env::var("UTC_OFFSET_HOURS")
            .unwrap_or_else(|_| DEFAULT_UTC_OFFSET_HOURS.to_string())
            .parse()
            .expect("UTC_OFFSET_HOURS must be a valid i32");

        let parking = ParkingConfig::new(utc_offset_hours, hourly_rate)
            .unwrap_or_else(|e| panic!("{e}"));

        let admin = AdminConfig::from_env();

        Self {
            host,
            port,
            database_url,
            cors_origins,
            request_timeout_secs,
            purge_check_interval_secs,
            admin,
            parking,
        }
    }
}
