//! Handlers for the admin login and the daily report.

use axum::extract::State;
use axum::response::Redirect;
use axum::{Form, Json};
use chrono::Utc;
use parktrack_core::reporting::{self, DailyReport};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Form body for `POST /adminlogin`.
#[derive(Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// POST /adminlogin
///
/// Redirects to `/reports` when the credentials match, otherwise back to
/// the login form.
pub async fn login(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> AppResult<Redirect> {
    let ok = state
        .admin
        .verify(&form.username, &form.password)
        .map_err(|e| AppError::InternalError(format!("Password verification failed: {e}")))?;

    if ok {
        tracing::info!(username = %form.username, "Admin logged in");
        Ok(Redirect::to("/reports"))
    } else {
        tracing::warn!(username = %form.username, "Admin login failed");
        Ok(Redirect::to("/adminlogin"))
    }
}

/// GET /reports
///
/// Today's sessions with durations, the average completed stay, and the
/// number of entries today.
pub async fn reports(State(state): State<AppState>) -> AppResult<Json<DataResponse<DailyReport>>> {
    let report =
        reporting::daily_report(state.store.as_ref(), &state.config.parking, Utc::now()).await?;
    Ok(Json(DataResponse { data: report }))
}
