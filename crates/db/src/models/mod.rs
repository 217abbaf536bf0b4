//! Row structs for the database tables.

pub mod parking_session;
