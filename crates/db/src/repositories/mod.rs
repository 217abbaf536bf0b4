//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept `&SqlitePool` as the first argument.

pub mod parking_session_repo;

pub use parking_session_repo::ParkingSessionRepo;
