//! Session and operator account handlers.
//!
//! ```text
//! GET  /api/v1/session
//! POST /api/v1/login  {"username":"admin","password":"pw1"}
//! POST /api/v1/logout
//! POST /api/v1/users  {"username":"nadia","password":"secret"}
//! ```

use actix_web::{get, post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

use crate::domain::{Error, LoginCredentials, MenuAction, Notice};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::views::SessionView;

/// Message returned when no stored user matches the submitted pair.
pub const LOGIN_FAILED: &str = "Identifiants incorrects.";

/// Username/password body for `POST /api/v1/login` and `POST /api/v1/users`.
///
/// Example JSON:
/// `{"username":"admin","password":"pw1"}`
#[derive(Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CredentialsRequest {
    pub username: String,
    pub password: String,
}

impl From<CredentialsRequest> for LoginCredentials {
    fn from(value: CredentialsRequest) -> Self {
        Self::new(value.username, value.password)
    }
}

/// Outcome of `POST /api/v1/users`.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationResponse {
    /// `false` when the username was already taken.
    pub created: bool,
    pub notices: Vec<Notice>,
}

/// Current view for this session.
#[utoipa::path(
    get,
    path = "/api/v1/session",
    responses(
        (status = 200, description = "Login or main view", body = SessionView),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["session"],
    operation_id = "currentSession",
    security([])
)]
#[get("/session")]
pub async fn current_session(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<SessionView>> {
    let navigation = session.navigation()?;
    Ok(web::Json(
        SessionView::render(&navigation, &state, Vec::new()).await,
    ))
}

/// Check credentials and move the session to the main page.
///
/// Uses the centralised `Error` type so clients get a consistent
/// error schema across all endpoints. Notices raised while reading the user
/// file travel in `details.notices` of the 401 payload.
#[utoipa::path(
    post,
    path = "/api/v1/login",
    request_body = CredentialsRequest,
    responses(
        (status = 200, description = "Main view", body = SessionView, headers(("Set-Cookie" = String, description = "Session cookie"))),
        (status = 401, description = "Invalid credentials", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["session"],
    operation_id = "login",
    security([])
)]
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<CredentialsRequest>,
) -> ApiResult<web::Json<SessionView>> {
    let credentials = LoginCredentials::from(payload.into_inner());
    let checked = state.credentials.check_credentials(&credentials).await?;
    if !checked.value {
        info!(username = credentials.username(), "login rejected");
        return Err(Error::unauthorized(LOGIN_FAILED)
            .with_details(json!({ "notices": checked.notices })));
    }
    let navigation = session.login(credentials.username())?;
    info!(username = credentials.username(), "operator logged in");
    Ok(web::Json(
        SessionView::render(&navigation, &state, checked.notices).await,
    ))
}

/// Leave the main page.
#[utoipa::path(
    post,
    path = "/api/v1/logout",
    responses(
        (status = 200, description = "Login view", body = SessionView),
        (status = 401, description = "Not logged in", body = Error)
    ),
    tags = ["session"],
    operation_id = "logout"
)]
#[post("/logout")]
pub async fn logout(session: SessionContext) -> ApiResult<web::Json<SessionView>> {
    let username = session.require_main(MenuAction::Logout)?;
    info!(%username, "operator logged out");
    Ok(web::Json(SessionView::login(Vec::new())))
}

/// Register a new operator.
#[utoipa::path(
    post,
    path = "/api/v1/users",
    request_body = CredentialsRequest,
    responses(
        (status = 200, description = "Registration outcome", body = RegistrationResponse),
        (status = 401, description = "Not logged in", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "addUser"
)]
#[post("/users")]
pub async fn add_user(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<CredentialsRequest>,
) -> ApiResult<web::Json<RegistrationResponse>> {
    session.require_main(MenuAction::AddUser)?;
    let credentials = LoginCredentials::from(payload.into_inner());
    let outcome = state.credentials.add_user(&credentials).await?;
    Ok(web::Json(RegistrationResponse {
        created: outcome.value,
        notices: outcome.notices,
    }))
}

#[cfg(test)]
mod tests;
