//! Outbound adapters implementing domain ports for the filesystem.
//!
//! - **json_file**: whole-document JSON reads and atomic writes via cap-std
//! - **json_repositories**: user and guest repositories over JSON files
//! - **xlsx_export**: spreadsheet encoding of the guest list
//!
//! Adapters are thin translators that convert between domain types and
//! storage representations. They contain no business logic.

pub mod json_file;
pub mod json_repositories;
pub mod xlsx_export;

pub use json_file::{JsonFile, JsonFileError};
pub use json_repositories::{JsonGuestRepository, JsonUserRepository};
pub use xlsx_export::XlsxGuestExporter;
