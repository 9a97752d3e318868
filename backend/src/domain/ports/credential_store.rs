//! Driving port for login checks and operator registration.
//!
//! Inbound adapters call this port without knowing where users are stored or
//! how passwords are compared, so handler tests can substitute a fixture.

use async_trait::async_trait;

use crate::domain::credentials::{USER_ADDED, USER_EXISTS};
use crate::domain::{Error, LoginCredentials, Notice, Reported};

/// Domain use-case port for the credential store.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// `true` iff a stored user matches both username and password exactly.
    ///
    /// An unreadable user file is reported as an error notice and treated as
    /// an empty user set.
    async fn check_credentials(
        &self,
        credentials: &LoginCredentials,
    ) -> Result<Reported<bool>, Error>;

    /// Register a user. `false` (with a warning notice) when the username is
    /// already taken; nothing is written in that case.
    async fn add_user(&self, credentials: &LoginCredentials) -> Result<Reported<bool>, Error>;
}

/// In-memory credential store accepting only `admin` / `password`.
///
/// Used by handler tests that do not exercise persistence.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureCredentialStore;

#[async_trait]
impl CredentialStore for FixtureCredentialStore {
    async fn check_credentials(
        &self,
        credentials: &LoginCredentials,
    ) -> Result<Reported<bool>, Error> {
        Ok(Reported::quiet(
            credentials.username() == "admin" && credentials.password() == "password",
        ))
    }

    async fn add_user(&self, credentials: &LoginCredentials) -> Result<Reported<bool>, Error> {
        if credentials.username() == "admin" {
            Ok(Reported::with_notice(
                false,
                Notice::warning(USER_EXISTS),
            ))
        } else {
            Ok(Reported::with_notice(
                true,
                Notice::success(USER_ADDED),
            ))
        }
    }
}
