//! Driven port for guest record persistence.
//!
//! Storage is load-all/save-all: the catalog keeps the list in memory and
//! rewrites the whole store after each mutation. Adapters decide the medium.
use async_trait::async_trait;

use crate::domain::Guest;

use super::define_port_error;

define_port_error! {
    /// Errors raised by guest repository adapters.
    pub enum GuestRepositoryError {
        /// The stored document exists but cannot be decoded.
        Malformed { file: String, message: String } =>
            "guest file {file} is not valid JSON: {message}",
        /// Reading or writing the backing store failed.
        Io { file: String, message: String } =>
            "guest file {file} could not be accessed: {message}",
    }
}

/// Load-all/save-all storage for guest records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GuestRepository: Send + Sync {
    /// Return every stored guest in insertion order. A missing store is empty.
    async fn load_all(&self) -> Result<Vec<Guest>, GuestRepositoryError>;

    /// Replace the stored guests with `guests`, preserving order.
    async fn save_all(&self, guests: &[Guest]) -> Result<(), GuestRepositoryError>;
}
