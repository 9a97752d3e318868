//! Tests for session and operator account handlers.

use super::*;
use crate::domain::ports::{CredentialStore, FixtureCredentialStore};
use crate::domain::{CredentialStoreService, User};
use crate::inbound::http::test_utils::{session_cookie, test_session_middleware};
use crate::test_support::{MemoryUserRepository, memory_catalog};
use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use rstest::rstest;
use serde_json::Value;
use std::sync::Arc;

fn test_app() -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    app_with_store(Arc::new(FixtureCredentialStore))
}

fn app_with_store(
    credentials: Arc<dyn CredentialStore>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let state = HttpState::new(credentials, Arc::new(memory_catalog(Vec::new())));
    App::new()
        .app_data(web::Data::new(state))
        .wrap(test_session_middleware())
        .service(
            web::scope("/api/v1")
                .service(current_session)
                .service(login)
                .service(logout)
                .service(add_user),
        )
}

fn credentials(username: &str, password: &str) -> CredentialsRequest {
    CredentialsRequest {
        username: username.into(),
        password: password.into(),
    }
}

async fn login_and_get_cookie(
    app: &impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    >,
) -> actix_web::cookie::Cookie<'static> {
    let login_req = actix_test::TestRequest::post()
        .uri("/api/v1/login")
        .set_json(credentials("admin", "password"))
        .to_request();
    let login_res = actix_test::call_service(app, login_req).await;
    assert!(login_res.status().is_success());
    session_cookie(&login_res)
}

async fn json_body(res: actix_web::dev::ServiceResponse) -> Value {
    let body = actix_test::read_body(res).await;
    serde_json::from_slice(&body).expect("JSON body")
}

async fn register(
    app: &impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    >,
    cookie: actix_web::cookie::Cookie<'static>,
    username: &str,
    password: &str,
) -> RegistrationResponse {
    let res = actix_test::call_service(
        app,
        actix_test::TestRequest::post()
            .uri("/api/v1/users")
            .cookie(cookie)
            .set_json(credentials(username, password))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    actix_test::read_body_json(res).await
}

#[rstest]
#[case("", "")]
#[case("   ", "secret")]
#[case("nadia", "")]
#[actix_web::test]
async fn blank_values_register_once_then_report_duplicate(
    #[case] username: &str,
    #[case] password: &str,
) {
    let users = Arc::new(MemoryUserRepository::new(vec![User::new(
        "admin", "password",
    )]));
    let store = CredentialStoreService::new(Arc::clone(&users));
    let app = actix_test::init_service(app_with_store(Arc::new(store))).await;
    let cookie = login_and_get_cookie(&app).await;

    let first = register(&app, cookie.clone(), username, password).await;
    assert!(first.created);
    let second = register(&app, cookie, username, "other").await;
    assert!(!second.created);
    assert_eq!(second.notices[0].message(), "Cet utilisateur existe déjà.");

    assert_eq!(
        users.stored(),
        vec![
            User::new("admin", "password"),
            User::new(username, password)
        ]
    );
}

#[actix_web::test]
async fn blank_login_is_rejected_as_wrong_credentials() {
    let app = actix_test::init_service(test_app()).await;
    let request = actix_test::TestRequest::post()
        .uri("/api/v1/login")
        .set_json(credentials("", ""))
        .to_request();

    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let value = json_body(response).await;
    assert_eq!(value["message"], LOGIN_FAILED);
}

#[actix_web::test]
async fn wrong_password_is_unauthorised_with_french_message() {
    let app = actix_test::init_service(test_app()).await;
    let request = actix_test::TestRequest::post()
        .uri("/api/v1/login")
        .set_json(credentials("admin", "wrong-password"))
        .to_request();

    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let value = json_body(response).await;
    assert_eq!(value["message"], LOGIN_FAILED);
    assert_eq!(value["code"], "unauthorized");
    assert!(value["details"]["notices"].as_array().expect("notices").is_empty());
}

#[actix_web::test]
async fn login_returns_main_view_and_session_persists_it() {
    let app = actix_test::init_service(test_app()).await;
    let login_req = actix_test::TestRequest::post()
        .uri("/api/v1/login")
        .set_json(credentials("admin", "password"))
        .to_request();
    let login_res = actix_test::call_service(&app, login_req).await;
    assert_eq!(login_res.status(), StatusCode::OK);
    let cookie = session_cookie(&login_res);
    let view = json_body(login_res).await;
    assert_eq!(view["page"], "main");
    assert_eq!(view["greeting"], "Bienvenue, admin");
    assert_eq!(view["title"], "Portail de Gestion des Invités - EPTV");
    assert_eq!(view["menu"].as_array().expect("menu").len(), 7);
    assert_eq!(view["menu"][6]["label"], "Se déconnecter");

    let session_req = actix_test::TestRequest::get()
        .uri("/api/v1/session")
        .cookie(cookie)
        .to_request();
    let view = json_body(actix_test::call_service(&app, session_req).await).await;
    assert_eq!(view["page"], "main");
    assert_eq!(view["username"], "admin");
}

#[actix_web::test]
async fn fresh_session_shows_login_view() {
    let app = actix_test::init_service(test_app()).await;
    let req = actix_test::TestRequest::get()
        .uri("/api/v1/session")
        .to_request();
    let view = json_body(actix_test::call_service(&app, req).await).await;
    assert_eq!(view["page"], "login");
    assert_eq!(view["username"], "");
}

#[actix_web::test]
async fn logout_returns_to_login_view() {
    let app = actix_test::init_service(test_app()).await;
    let cookie = login_and_get_cookie(&app).await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/v1/logout")
            .cookie(cookie)
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let view = json_body(res).await;
    assert_eq!(view["page"], "login");
}

#[rstest]
#[case("/api/v1/logout")]
#[case("/api/v1/users")]
#[actix_web::test]
async fn menu_actions_require_login(#[case] uri: &str) {
    let app = actix_test::init_service(test_app()).await;
    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri(uri)
            .set_json(credentials("nadia", "pw"))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[rstest]
#[case("nadia", true, "success")]
#[case("admin", false, "warning")]
#[actix_web::test]
async fn add_user_reports_outcome(
    #[case] username: &str,
    #[case] created: bool,
    #[case] level: &str,
) {
    let app = actix_test::init_service(test_app()).await;
    let cookie = login_and_get_cookie(&app).await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/v1/users")
            .cookie(cookie)
            .set_json(credentials(username, "secret"))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: RegistrationResponse = actix_test::read_body_json(res).await;
    assert_eq!(body.created, created);
    assert_eq!(
        serde_json::to_value(&body.notices[0]).expect("notice")["level"],
        level
    );
}
