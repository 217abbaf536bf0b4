//! Route definitions for the attendant pages.

use axum::routing::get;
use axum::Router;

use crate::handlers::{pages, parking};
use crate::state::AppState;

/// ```text
/// GET  /              -> landing
/// GET  /enter         -> enter_form
/// POST /enter         -> enter
/// GET  /exit          -> exit_form
/// POST /exit          -> exit
/// GET  /viewcurrent   -> view_current
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::landing))
        .route("/enter", get(pages::enter_form).post(parking::enter))
        .route("/exit", get(pages::exit_form).post(parking::exit))
        .route("/viewcurrent", get(parking::view_current))
}
