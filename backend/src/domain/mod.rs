//! Domain primitives, services and ports.
//!
//! Purpose: Define the booking desk's records, the operations over them and
//! the ports separating those operations from HTTP and the filesystem. Keep
//! types transport agnostic and document invariants and serialisation
//! contracts (serde) in each type's Rustdoc.
//!
//! Public surface:
//! - Error (alias to `error::Error`) — transport-agnostic failure payload.
//! - Guest / GuestDraft / GuestKey — guest records and their delete key.
//! - User / LoginCredentials — operator accounts and login input.
//! - CredentialStoreService / GuestCatalogService — driving port services.
//! - NavigationState — per-session login/main state.

pub mod auth;
pub mod catalog;
mod catalog_service;
pub mod credentials;
pub mod error;
pub mod export;
pub mod guest;
pub mod navigation;
pub mod notice;
pub mod ports;
pub mod user;

pub use self::auth::{LoginCredentials, PasswordPolicy, PlaintextPasswords};
pub use self::catalog_service::GuestCatalogService;
pub use self::credentials::CredentialStoreService;
pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::export::{EXPORT_FILE_NAME, EXPORT_SHEET_NAME, ExportArtifact, XLSX_CONTENT_TYPE};
pub use self::guest::{Guest, GuestDraft, GuestField, GuestKey, GuestLabelError};
pub use self::navigation::{LoginRequired, MenuAction, NavigationState, Page};
pub use self::notice::{Notice, NoticeLevel, Reported};
pub use self::user::User;

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use guest_desk::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::unauthorized("login required"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
