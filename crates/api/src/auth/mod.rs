//! Reports login: configured admin credentials checked against an Argon2id hash.

pub mod admin;
pub mod password;
