//! Driven port for the operator account file.
//!
//! The credential store only ever loads the whole user list and writes it back
//! in full, so the port mirrors that: no lookups, no partial updates.
use async_trait::async_trait;

use crate::domain::User;

use super::define_port_error;

define_port_error! {
    /// Errors raised by user repository adapters.
    pub enum UserRepositoryError {
        /// The stored document exists but cannot be decoded.
        Malformed { file: String, message: String } =>
            "user file {file} is not valid JSON: {message}",
        /// Reading or writing the backing store failed.
        Io { file: String, message: String } =>
            "user file {file} could not be accessed: {message}",
    }
}

/// Load-all/save-all storage for registered users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Return every stored user in file order. A missing store is empty.
    async fn load_all(&self) -> Result<Vec<User>, UserRepositoryError>;

    /// Replace the stored users with `users`.
    async fn save_all(&self, users: &[User]) -> Result<(), UserRepositoryError>;
}
