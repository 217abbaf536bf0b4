//! Request handlers, grouped by resource.

pub mod admin;
pub mod pages;
pub mod parking;
