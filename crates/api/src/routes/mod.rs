pub mod admin;
pub mod health;
pub mod parking;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree.
///
/// Route hierarchy:
///
/// ```text
/// /health                 service + database health
///
/// /                       landing page
/// /enter                  entry form (GET), park a vehicle (POST)
/// /exit                   exit form (GET), record an exit (POST)
/// /viewcurrent            parked vehicles and free slots
///
/// /adminlogin             login form (GET), credential check (POST)
/// /reports                daily report
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(parking::router())
        .merge(admin::router())
}
