//! The single admin account that may open the reports page.

use super::password::{hash_password, verify_password};

/// Default username for the reports login.
pub const DEFAULT_ADMIN_USERNAME: &str = "admin";

/// Default password for the reports login.
pub const DEFAULT_ADMIN_PASSWORD: &str = "password123";

/// Plaintext admin credentials as loaded from the environment.
#[derive(Clone)]
pub struct AdminConfig {
    pub username: String,
    pub password: String,
}

impl AdminConfig {
    pub fn from_env() -> Self {
        let username =
            std::env::var("ADMIN_USERNAME").unwrap_or_else(|_| DEFAULT_ADMIN_USERNAME.into());
        let password =
            std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| DEFAULT_ADMIN_PASSWORD.into());
        assert!(!password.is_empty(), "ADMIN_PASSWORD must not be empty");
        Self { username, password }
    }
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            username: DEFAULT_ADMIN_USERNAME.to_string(),
            password: DEFAULT_ADMIN_PASSWORD.to_string(),
        }
    }
}

impl std::fmt::Debug for AdminConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminConfig")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Admin credentials with the password held only as an Argon2id hash.
#[derive(Debug, Clone)]
pub struct AdminCredentials {
    username: String,
    password_hash: String,
}

impl AdminCredentials {
    pub fn from_config(config: &AdminConfig) -> Result<Self, argon2::password_hash::Error> {
        Ok(Self {
            username: config.username.clone(),
            password_hash: hash_password(&config.password)?,
        })
    }

    /// Check a login attempt. Both the username and the password must match.
    pub fn verify(&self, username: &str, password: &str) -> Result<bool, argon2::password_hash::Error> {
        // The hash check runs even when the username is wrong.
        let password_ok = verify_password(password, &self.password_hash)?;
        Ok(password_ok && username == self.username)
    }
}
