//! Plate-format and slot-membership checks.
//!
//! Both validators trim and uppercase their input before checking it, so
//! `" abc1234 "` is accepted as plate `ABC1234` and `"p3"` as slot `P3`.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::error::CoreError;

/// The fixed set of parking slots, in display order.
pub const ALL_SLOTS: [&str; 10] = ["P1", "P2", "P3", "P4", "P5", "P6", "P7", "P8", "P9", "P10"];

/// Three uppercase letters followed by four digits.
const PLATE_PATTERN: &str = r"^[A-Z]{3}[0-9]{4}$";

static PLATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PLATE_PATTERN).expect("valid regex"));

/// A normalized, well-formed license plate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Plate(String);

impl Plate {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Plate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One of the slots in [`ALL_SLOTS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Slot(&'static str);

impl Slot {
    pub fn as_str(&self) -> &'static str {
        self.0
    }

    /// Every slot in the lot, in display order.
    pub fn all() -> impl Iterator<Item = Slot> {
        ALL_SLOTS.into_iter().map(Slot)
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Normalize and validate a license plate.
pub fn validate_plate(input: &str) -> Result<Plate, CoreError> {
    let normalized = input.trim().to_uppercase();
    if PLATE_RE.is_match(&normalized) {
        Ok(Plate(normalized))
    } else {
        Err(CoreError::InvalidFormat {
            input: input.to_string(),
        })
    }
}

/// Normalize and validate a slot name.
pub fn validate_slot(input: &str) -> Result<Slot, CoreError> {
    let normalized = input.trim().to_uppercase();
    Slot::all()
        .find(|slot| slot.as_str() == normalized)
        .ok_or_else(|| CoreError::UnrecognizedSlot {
            input: input.to_string(),
        })
}
