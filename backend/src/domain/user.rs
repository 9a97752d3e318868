//! Desk operator account as stored in the user file.

use serde::{Deserialize, Serialize};

/// Registered operator.
///
/// ## Invariants
/// - No two stored users share `username` (exact, case-sensitive). The
///   credential store enforces this on registration.
///
/// ## Serialisation
/// `{"username": "...", "password": "..."}`, matching the user file layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    username: String,
    password: String,
}

impl User {
    /// Build a user from a username and its stored password form.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Login name.
    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    /// Stored password form (plaintext with the default policy).
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}
