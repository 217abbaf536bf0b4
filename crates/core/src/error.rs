/// Domain errors raised by the parking-session operations.
///
/// The first five variants are user-input errors and are never fatal. The
/// messages match what the lot attendant sees on the form.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Invalid license plate format. Use 3 letters + 4 digits (e.g. ABC1234).")]
    InvalidFormat { input: String },

    #[error("Slot unrecognized.")]
    UnrecognizedSlot { input: String },

    #[error("This vehicle is already parked.")]
    AlreadyParked { plate: String },

    #[error("Slot already in use.")]
    SlotOccupied { slot: String },

    #[error("This vehicle does not exist or has already exited")]
    NotParked { plate: String },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl CoreError {
    /// Whether this error was caused by operator input rather than the system.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            CoreError::InvalidFormat { .. }
                | CoreError::UnrecognizedSlot { .. }
                | CoreError::AlreadyParked { .. }
                | CoreError::SlotOccupied { .. }
                | CoreError::NotParked { .. }
        )
    }
}
