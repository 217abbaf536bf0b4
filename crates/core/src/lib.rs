//! Parking-session domain logic.
//!
//! This crate has no internal deps and performs no I/O of its own; every
//! operation that touches persisted sessions goes through a [`store::SessionStore`]
//! supplied by the caller, and every operation that depends on the wall
//! clock takes `now` explicitly.

pub mod availability;
pub mod billing;
pub mod config;
pub mod error;
pub mod lifecycle;
pub mod purge;
pub mod reporting;
pub mod session;
pub mod store;
pub mod types;
pub mod validation;
