//! View payloads shared by the session and menu handlers.
//!
//! Each response is the re-rendered view plus the notices raised while
//! producing it, so a client never needs a second request to show feedback.

use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::navigation::{LOGIN_TITLE, MAIN_TITLE, WELCOME_LINE};
use crate::domain::{MenuAction, NavigationState, Notice, Page};

use super::banner::banner_url;
use super::state::HttpState;

/// Prefix of every menu route.
pub const API_PREFIX: &str = "/api/v1";

/// One entry of the main-page menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MenuEntry {
    pub action: MenuAction,
    #[schema(example = "Ajouter un invité")]
    pub label: String,
    #[schema(example = "POST")]
    pub method: String,
    #[schema(example = "/api/v1/guests")]
    pub path: String,
}

impl From<MenuAction> for MenuEntry {
    fn from(action: MenuAction) -> Self {
        let (method, path) = action.route();
        Self {
            action,
            label: action.label().to_owned(),
            method: method.to_owned(),
            path: format!("{API_PREFIX}{path}"),
        }
    }
}

/// The login page or the main page, as seen by the current session.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub page: Page,
    #[schema(example = "Portail de Gestion des Invités - EPTV")]
    pub title: String,
    /// Logged-in username; empty on the login page.
    pub username: String,
    /// Sidebar greeting, main page only.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "Bienvenue, admin")]
    pub greeting: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub welcome: Option<String>,
    /// Menu entries in display order; empty on the login page.
    pub menu: Vec<MenuEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "/assets/banner")]
    pub banner_url: Option<String>,
    pub notices: Vec<Notice>,
}

impl SessionView {
    /// The login page.
    pub fn login(notices: Vec<Notice>) -> Self {
        Self {
            page: Page::Login,
            title: LOGIN_TITLE.to_owned(),
            username: String::new(),
            greeting: None,
            welcome: None,
            menu: Vec::new(),
            banner_url: None,
            notices,
        }
    }

    /// Render `navigation` for the client.
    pub async fn render(
        navigation: &NavigationState,
        state: &HttpState,
        notices: Vec<Notice>,
    ) -> Self {
        match navigation.page() {
            Page::Login => Self::login(notices),
            Page::Main => Self {
                page: Page::Main,
                title: MAIN_TITLE.to_owned(),
                username: navigation.username().to_owned(),
                greeting: navigation.greeting(),
                welcome: Some(WELCOME_LINE.to_owned()),
                menu: MenuAction::ALL.into_iter().map(MenuEntry::from).collect(),
                banner_url: banner_url(state).await,
                notices,
            },
        }
    }
}

/// Notices only, for actions with no other payload.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct NoticesResponse {
    pub notices: Vec<Notice>,
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn menu_paths_carry_the_api_prefix() {
        let entry = MenuEntry::from(MenuAction::DeleteGuest);
        assert_eq!(entry.method, "DELETE");
        assert_eq!(entry.path, "/api/v1/guests");
        assert_eq!(entry.label, "Supprimer un invité");
    }

    #[rstest]
    fn login_view_has_no_menu() {
        let view = SessionView::login(Vec::new());
        let value = serde_json::to_value(&view).expect("serialise view");
        assert_eq!(value["page"], "login");
        assert_eq!(value["title"], "Connexion à l'application EPTV");
        assert!(value["menu"].as_array().expect("menu array").is_empty());
        assert!(value.get("greeting").is_none());
    }
}
