//! Session helpers to keep HTTP handlers free of framework-specific logic.
//!
//! Provides a thin wrapper around Actix sessions so handlers only deal with
//! domain-friendly operations: reading the navigation state, moving to the
//! main page on login and back on logout.

use actix_session::Session;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::LocalBoxFuture;

use crate::domain::{Error, MenuAction, NavigationState};

pub(crate) const NAVIGATION_KEY: &str = "navigation";

/// Newtype wrapper that exposes higher-level session operations.
#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    /// Construct a new wrapper from the underlying Actix session.
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// Current navigation state; a fresh session starts on the login page.
    ///
    /// A cookie that no longer decodes is treated as a fresh session.
    pub fn navigation(&self) -> Result<NavigationState, Error> {
        match self.0.get::<NavigationState>(NAVIGATION_KEY) {
            Ok(state) => Ok(state.unwrap_or_default()),
            Err(error) => {
                tracing::warn!("invalid navigation state in session cookie: {error}");
                Ok(NavigationState::new())
            }
        }
    }

    fn store(&self, state: &NavigationState) -> Result<(), Error> {
        self.0
            .insert(NAVIGATION_KEY, state)
            .map_err(|error| Error::internal(format!("failed to persist session: {error}")))
    }

    /// Move to the main page for `username`.
    pub fn login(&self, username: &str) -> Result<NavigationState, Error> {
        self.0.renew();
        let mut state = NavigationState::new();
        state.login(username);
        self.store(&state)?;
        Ok(state)
    }

    /// Run `action` from the menu, or return `401 Unauthorized` when the
    /// session is not on the main page. Returns the logged-in username.
    pub fn require_main(&self, action: MenuAction) -> Result<String, Error> {
        let mut state = self.navigation()?;
        let username = state
            .require_main()
            .map_err(|_| Error::unauthorized("login required"))?
            .to_owned();
        state
            .apply(action)
            .map_err(|_| Error::unauthorized("login required"))?;
        if action == MenuAction::Logout {
            self.0.purge();
        }
        Ok(username)
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(SessionContext::new) })
    }
}
