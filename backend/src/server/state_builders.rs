//! Builds the HTTP state from the configured data directory.

use std::sync::Arc;

use actix_web::web;

use guest_desk::domain::{CredentialStoreService, GuestCatalogService};
use guest_desk::inbound::http::banner::BannerFile;
use guest_desk::inbound::http::state::HttpState;
use guest_desk::outbound::{JsonFile, JsonGuestRepository, JsonUserRepository, XlsxGuestExporter};

use super::config::StorageConfig;

/// Wire the JSON-file repositories, the spreadsheet exporter and the banner
/// into the handler state.
///
/// Nothing is read here: the user file is read on each login, the guest file
/// on the first catalog request.
pub(super) fn build_http_state(storage: &StorageConfig) -> web::Data<HttpState> {
    let file = |name: &str| JsonFile::new(Arc::clone(&storage.dir), name);

    let credentials =
        CredentialStoreService::new(Arc::new(JsonUserRepository::new(file(&storage.users_file))));
    let guests = GuestCatalogService::new(
        Arc::new(JsonGuestRepository::new(file(&storage.guests_file))),
        Arc::new(XlsxGuestExporter),
    );
    let banner = BannerFile::new(Arc::clone(&storage.dir), storage.banner_file.as_str());

    web::Data::new(HttpState::new(Arc::new(credentials), Arc::new(guests)).with_banner(banner))
}
