//! Currently parked vehicles and free slots.

use serde::Serialize;

use crate::config::ParkingConfig;
use crate::error::CoreError;
use crate::session::ParkingSession;
use crate::store::SessionStore;
use crate::validation::Slot;

/// A vehicle that is parked right now.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParkedVehicle {
    pub plate: String,
    pub slot: String,
    /// Local entry time, `YYYY-MM-DD HH:MM:SS`.
    pub entry_time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Availability {
    pub vehicles: Vec<ParkedVehicle>,
    /// Free slots, in lot order.
    pub available_slots: Vec<&'static str>,
}

/// Derive the availability view from a set of active sessions.
pub fn summarize(active: &[ParkingSession], config: &ParkingConfig) -> Availability {
    let vehicles = active
        .iter()
        .map(|s| ParkedVehicle {
            plate: s.plate.clone(),
            slot: s.slot.clone(),
            entry_time: config.display(s.entry_time),
        })
        .collect();

    let available_slots = Slot::all()
        .map(|slot| slot.as_str())
        .filter(|name| !active.iter().any(|s| s.slot == *name))
        .collect();

    Availability {
        vehicles,
        available_slots,
    }
}

/// Read the current availability from the store.
pub async fn current<S: SessionStore + ?Sized>(
    store: &S,
    config: &ParkingConfig,
) -> Result<Availability, CoreError> {
    let active = store.list_active().await?;
    Ok(summarize(&active, config))
}
