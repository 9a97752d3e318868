//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint of the inbound layer together with
//! the session cookie security scheme. The document backs Swagger UI in debug
//! builds and is printed by the `openapi-dump` binary for external tooling.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::domain::{Error, ErrorCode, Guest, MenuAction, Notice, NoticeLevel, Page};
use crate::inbound::http::guests::{
    DeleteGuestRequest, DeleteGuestResponse, FormField, GuestCreatedResponse, GuestFormResponse,
    GuestTableResponse, InputKind, LabelsResponse, NewGuestRequest, SearchResponse,
};
use crate::inbound::http::users::{CredentialsRequest, RegistrationResponse};
use crate::inbound::http::views::{MenuEntry, NoticesResponse, SessionView};

/// Enrich the generated document with the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Session cookie issued by POST /api/v1/login.",
            ))),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "EPTV guest desk API",
        description = "Operator login and the guest booking catalog: add, list, search, delete and spreadsheet export."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::users::current_session,
        crate::inbound::http::users::login,
        crate::inbound::http::users::logout,
        crate::inbound::http::users::add_user,
        crate::inbound::http::guests::guest_form,
        crate::inbound::http::guests::add_guest,
        crate::inbound::http::guests::list_guests,
        crate::inbound::http::guests::search_guests,
        crate::inbound::http::guests::guest_labels,
        crate::inbound::http::guests::delete_guest,
        crate::inbound::http::guests::export_guests,
        crate::inbound::http::banner::banner,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Error,
        ErrorCode,
        Notice,
        NoticeLevel,
        Guest,
        Page,
        MenuAction,
        MenuEntry,
        SessionView,
        NoticesResponse,
        CredentialsRequest,
        RegistrationResponse,
        InputKind,
        FormField,
        GuestFormResponse,
        NewGuestRequest,
        GuestCreatedResponse,
        GuestTableResponse,
        SearchResponse,
        LabelsResponse,
        DeleteGuestRequest,
        DeleteGuestResponse,
    )),
    tags(
        (name = "session", description = "Login, logout and the current view"),
        (name = "users", description = "Operator accounts"),
        (name = "guests", description = "Guest booking catalog"),
        (name = "assets", description = "Decorative assets"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
