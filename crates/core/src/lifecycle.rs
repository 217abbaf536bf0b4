//! Enter and exit: the two state transitions of a parking session.

use serde::Serialize;

use crate::billing::{compute_fee, StayDuration};
use crate::config::ParkingConfig;
use crate::error::CoreError;
use crate::session::{NewSession, ParkingSession};
use crate::store::SessionStore;
use crate::types::{DbId, LocalTime, Timestamp};
use crate::validation::{validate_plate, validate_slot};

/// Outcome of a successful exit, returned for display.
#[derive(Debug, Clone, Serialize)]
pub struct ExitReceipt {
    pub session_id: DbId,
    pub plate: String,
    pub slot: String,
    pub entry_time: LocalTime,
    pub exit_time: LocalTime,
    pub duration: StayDuration,
    pub fee: f64,
}

/// Park a vehicle.
///
/// Checks run in order: slot membership, plate format, plate already
/// parked, slot already taken. Only when all pass is a session inserted.
pub async fn enter<S: SessionStore + ?Sized>(
    store: &S,
    raw_plate: &str,
    raw_slot: &str,
    now: Timestamp,
) -> Result<ParkingSession, CoreError> {
    let slot = validate_slot(raw_slot)?;
    let plate = validate_plate(raw_plate)?;

    if store.find_active_by_plate(&plate).await?.is_some() {
        return Err(CoreError::AlreadyParked {
            plate: plate.to_string(),
        });
    }
    if store.find_active_by_slot(&slot).await?.is_some() {
        return Err(CoreError::SlotOccupied {
            slot: slot.to_string(),
        });
    }

    store
        .insert(&NewSession {
            plate,
            slot,
            entry_time: now,
        })
        .await
}

/// Record a vehicle leaving and compute its fee.
///
/// The session is closed with a single conditional update. If that update
/// fails the session is left active, so the caller can retry.
pub async fn exit<S: SessionStore + ?Sized>(
    store: &S,
    config: &ParkingConfig,
    raw_plate: &str,
    now: Timestamp,
) -> Result<ExitReceipt, CoreError> {
    let plate = validate_plate(raw_plate)?;

    let not_parked = || CoreError::NotParked {
        plate: plate.to_string(),
    };

    let session = store
        .find_active_by_plate(&plate)
        .await?
        .ok_or_else(not_parked)?;

    let duration = StayDuration::between(session.entry_time, now);
    let fee = compute_fee(&duration, config.hourly_rate);

    // Another request may have closed it between the lookup and the update.
    if !store.close(session.id, now).await? {
        return Err(not_parked());
    }

    Ok(ExitReceipt {
        session_id: session.id,
        plate: session.plate,
        slot: session.slot,
        entry_time: config.local(session.entry_time),
        exit_time: config.local(now),
        duration,
        fee,
    })
}
