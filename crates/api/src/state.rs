use std::sync::Arc;

use parktrack_core::store::SessionStore;

use crate::auth::admin::AdminCredentials;
use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Parking session store used by every parking operation.
    pub store: Arc<dyn SessionStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Hashed admin credentials for the reports login.
    pub admin: Arc<AdminCredentials>,
}

impl AppState {
    /// Build state over a pool, using the SQLite session store.
    pub fn new(
        pool: parktrack_db::DbPool,
        config: ServerConfig,
        admin: AdminCredentials,
    ) -> Self {
        Self {
            store: Arc::new(parktrack_db::SqliteSessionStore::new(pool)),
            config: Arc::new(config),
            admin: Arc::new(admin),
        }
    }
}
