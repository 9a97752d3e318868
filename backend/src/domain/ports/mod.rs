//! Domain ports for the hexagonal boundary.
//!
//! Driving ports ([`CredentialStore`], [`GuestCatalog`]) are called by inbound
//! adapters; driven ports ([`UserRepository`], [`GuestRepository`],
//! [`GuestExporter`]) are implemented by outbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod credential_store;
mod guest_catalog;
mod guest_exporter;
mod guest_repository;
mod user_repository;

pub use credential_store::{CredentialStore, FixtureCredentialStore};
pub use guest_catalog::{GuestCatalog, SearchOutcome};
#[cfg(test)]
pub use guest_exporter::MockGuestExporter;
pub use guest_exporter::{GuestExportError, GuestExporter};
#[cfg(test)]
pub use guest_repository::MockGuestRepository;
pub use guest_repository::{GuestRepository, GuestRepositoryError};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserRepository, UserRepositoryError};
