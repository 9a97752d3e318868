//! EPTV guest desk: operator login and a guest booking catalog served over
//! HTTP.
//!
//! The crate follows a hexagonal layout: [`domain`] holds the records,
//! services and ports; [`outbound`] implements storage and export; the
//! [`inbound`] HTTP adapter exposes the menu actions under `/api/v1`.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
