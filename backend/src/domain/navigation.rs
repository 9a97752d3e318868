//! Login/main navigation state and the main-page menu.
//!
//! Each client session carries a [`NavigationState`]. Only a successful login
//! reaches [`Page::Main`]; every menu action other than logging in requires it.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Page title shown on the main view.
pub const MAIN_TITLE: &str = "Portail de Gestion des Invités - EPTV";

/// Introductory line under the main title.
pub const WELCOME_LINE: &str = "Bienvenue sur l'application de gestion des invités de l'EPTV.";

/// Title of the login view.
pub const LOGIN_TITLE: &str = "Connexion à l'application EPTV";

/// Page currently shown to a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    #[default]
    Login,
    Main,
}

/// Entries of the main-page menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum MenuAction {
    AddGuest,
    ListGuests,
    SearchGuests,
    DeleteGuest,
    ExportGuests,
    AddUser,
    Logout,
}

impl MenuAction {
    /// Every action, in menu order.
    pub const ALL: [MenuAction; 7] = [
        Self::AddGuest,
        Self::ListGuests,
        Self::SearchGuests,
        Self::DeleteGuest,
        Self::ExportGuests,
        Self::AddUser,
        Self::Logout,
    ];

    /// Menu label shown to the operator.
    pub fn label(self) -> &'static str {
        match self {
            Self::AddGuest => "Ajouter un invité",
            Self::ListGuests => "Afficher les invités",
            Self::SearchGuests => "Rechercher un invité",
            Self::DeleteGuest => "Supprimer un invité",
            Self::ExportGuests => "Exporter en Excel",
            Self::AddUser => "Ajouter un utilisateur",
            Self::Logout => "Se déconnecter",
        }
    }

    /// HTTP method and path, relative to the API prefix, running this action.
    pub fn route(self) -> (&'static str, &'static str) {
        match self {
            Self::AddGuest => ("POST", "/guests"),
            Self::ListGuests => ("GET", "/guests"),
            Self::SearchGuests => ("GET", "/guests/search"),
            Self::DeleteGuest => ("DELETE", "/guests"),
            Self::ExportGuests => ("GET", "/guests/export"),
            Self::AddUser => ("POST", "/users"),
            Self::Logout => ("POST", "/logout"),
        }
    }
}

/// Rejection raised when an action needs the main page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("login required")]
pub struct LoginRequired;

/// Per-session navigation state.
///
/// ## Invariants
/// - `username` is empty exactly when `page` is [`Page::Login`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationState {
    page: Page,
    username: String,
}

impl NavigationState {
    /// Fresh session on the login page.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(&self) -> Page {
        self.page
    }

    /// Logged-in username, empty on the login page.
    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    /// Move to the main page after a successful credential check.
    pub fn login(&mut self, username: impl Into<String>) {
        self.page = Page::Main;
        self.username = username.into();
    }

    /// Return to the login page and forget the username.
    pub fn logout(&mut self) {
        *self = Self::default();
    }

    /// Succeeds only on the main page.
    pub fn require_main(&self) -> Result<&str, LoginRequired> {
        match self.page {
            Page::Main => Ok(self.username()),
            Page::Login => Err(LoginRequired),
        }
    }

    /// Gate `action` on the main page; logging out also resets the state.
    pub fn apply(&mut self, action: MenuAction) -> Result<(), LoginRequired> {
        self.require_main()?;
        if action == MenuAction::Logout {
            self.logout();
        }
        Ok(())
    }

    /// Sidebar greeting, present only on the main page.
    pub fn greeting(&self) -> Option<String> {
        match self.page {
            Page::Main => Some(format!("Bienvenue, {}", self.username)),
            Page::Login => None,
        }
    }
}
