//! Liveness check that reads the lot through the session store.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use parktrack_core::validation::ALL_SLOTS;
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    /// `"ok"`, or `"degraded"` when the store cannot be read.
    pub status: &'static str,
    pub version: &'static str,
    pub store_healthy: bool,
    /// Parked vehicles; absent when the store is unreachable.
    pub active_sessions: Option<usize>,
    pub free_slots: Option<usize>,
}

/// GET /health
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let active = match state.store.list_active().await {
        Ok(sessions) => Some(sessions.len()),
        Err(e) => {
            tracing::warn!(error = %e, "Health check could not read the session store");
            None
        }
    };

    Json(HealthResponse {
        status: if active.is_some() { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        store_healthy: active.is_some(),
        active_sessions: active,
        free_slots: active.map(|n| ALL_SLOTS.len().saturating_sub(n)),
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
