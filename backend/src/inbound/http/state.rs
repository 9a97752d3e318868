//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{CredentialStore, GuestCatalog};

use super::banner::BannerFile;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub credentials: Arc<dyn CredentialStore>,
    pub guests: Arc<dyn GuestCatalog>,
    pub banner: Option<BannerFile>,
}

impl HttpState {
    /// Construct state from the driving ports, without a banner image.
    ///
    /// # Examples
    /// ```no_run
    /// use std::sync::Arc;
    ///
    /// use guest_desk::domain::GuestCatalogService;
    /// use guest_desk::domain::ports::FixtureCredentialStore;
    /// use guest_desk::inbound::http::state::HttpState;
    /// use guest_desk::outbound::{JsonFile, JsonGuestRepository, XlsxGuestExporter};
    /// use cap_std::{ambient_authority, fs::Dir};
    ///
    /// let dir = Arc::new(Dir::open_ambient_dir(".", ambient_authority()).expect("open data dir"));
    /// let guests = GuestCatalogService::new(
    ///     Arc::new(JsonGuestRepository::new(JsonFile::new(dir, "invites.json"))),
    ///     Arc::new(XlsxGuestExporter),
    /// );
    /// let state = HttpState::new(Arc::new(FixtureCredentialStore), Arc::new(guests));
    /// assert!(state.banner.is_none());
    /// ```
    pub fn new(credentials: Arc<dyn CredentialStore>, guests: Arc<dyn GuestCatalog>) -> Self {
        Self {
            credentials,
            guests,
            banner: None,
        }
    }

    /// Serve `banner` at `/assets/banner`.
    pub fn with_banner(mut self, banner: BannerFile) -> Self {
        self.banner = Some(banner);
        self
    }
}
