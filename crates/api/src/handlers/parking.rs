//! Handlers for vehicle entry, exit, and the current-occupancy view.

use axum::extract::State;
use axum::http::StatusCode;
use axum::{Form, Json};
use chrono::Utc;
use parktrack_core::availability::{self, Availability};
use parktrack_core::billing::StayDuration;
use parktrack_core::error::CoreError;
use parktrack_core::lifecycle::{self, ExitReceipt};
use parktrack_core::session::ParkingSession;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Form body for `POST /enter`.
#[derive(Debug, Deserialize)]
pub struct EnterForm {
    #[serde(rename = "licensePlate", default)]
    pub license_plate: String,
    #[serde(rename = "slotNumber", default)]
    pub slot_number: String,
}

/// Form body for `POST /exit`.
#[derive(Debug, Deserialize)]
pub struct ExitForm {
    #[serde(rename = "licensePlate", default)]
    pub license_plate: String,
}

#[derive(Debug, Serialize)]
pub struct EnterResponse {
    pub message: String,
    pub session: ParkingSession,
}

#[derive(Debug, Serialize)]
pub struct ExitResponse {
    pub message: String,
    pub receipt: ExitReceipt,
}

/// POST /enter
///
/// Park a vehicle in a slot. Returns 201 with the new session.
pub async fn enter(
    State(state): State<AppState>,
    Form(form): Form<EnterForm>,
) -> AppResult<(StatusCode, Json<DataResponse<EnterResponse>>)> {
    let session = lifecycle::enter(
        state.store.as_ref(),
        &form.license_plate,
        &form.slot_number,
        Utc::now(),
    )
    .await
    .inspect_err(|e| log_rejection("enter", e))?;

    tracing::info!(
        session_id = session.id,
        plate = %session.plate,
        slot = %session.slot,
        "Vehicle parked"
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: EnterResponse {
                message: "Vehicle parked successfully!".to_string(),
                session,
            },
        }),
    ))
}

/// POST /exit
///
/// Close a vehicle's session and report its duration and fee.
pub async fn exit(
    State(state): State<AppState>,
    Form(form): Form<ExitForm>,
) -> AppResult<Json<DataResponse<ExitResponse>>> {
    let receipt = lifecycle::exit(
        state.store.as_ref(),
        &state.config.parking,
        &form.license_plate,
        Utc::now(),
    )
    .await
    .inspect_err(|e| log_rejection("exit", e))?;

    tracing::info!(
        session_id = receipt.session_id,
        plate = %receipt.plate,
        minutes = receipt.duration.total_minutes,
        fee = receipt.fee,
        "Vehicle exited"
    );

    let message = exit_message(&receipt.plate, &receipt.duration, receipt.fee);

    Ok(Json(DataResponse {
        data: ExitResponse { message, receipt },
    }))
}

/// GET /viewcurrent
///
/// Parked vehicles and the slots still free.
pub async fn view_current(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Availability>>> {
    let view = availability::current(state.store.as_ref(), &state.config.parking).await?;
    Ok(Json(DataResponse { data: view }))
}

// ── Private helpers ──────────────────────────────────────────────────────

/// The fee is printed as the shortest exact decimal, so 75 pesos reads `75.0`.
fn exit_message(plate: &str, duration: &StayDuration, fee: f64) -> String {
    format!("Vehicle {plate} exited successfully. Duration: {duration}, Fee = {fee:?} pesos.")
}

fn log_rejection(operation: &'static str, err: &CoreError) {
    if err.is_user_error() {
        tracing::debug!(operation, error = %err, "Parking request rejected");
    }
}
