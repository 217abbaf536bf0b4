//! Route definitions for the admin login and reports.

use axum::routing::get;
use axum::Router;

use crate::handlers::{admin, pages};
use crate::state::AppState;

/// ```text
/// GET  /adminlogin    -> login_form
/// POST /adminlogin    -> login
/// GET  /reports       -> reports
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/adminlogin", get(pages::login_form).post(admin::login))
        .route("/reports", get(admin::reports))
}
