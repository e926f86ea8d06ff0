// tests/support/helpers.rs
use std::sync::Arc;

use axum::body;
use axum::http::StatusCode;
use axum::response::Response;
use scribe_core::application::services::{ApplicationServices, ServiceDependencies};
use scribe_core::domain::article::CategoryCatalog;
use scribe_core::infrastructure::security::{
    session_authenticator::SignedSessionAuthenticator, session_signer::SessionSigner,
    session_store::InMemorySessionStore,
};
use scribe_core::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;

use super::builders::{ALICE, BOB, user};
use super::mocks::{DummyClock, DummySlug, InMemoryArticleStore, SequentialIds};

pub const TEST_SECRET: &str = "test-secret-test-secret-test-secret!";
pub const COOKIE_NAME: &str = "sid";
pub const ALICE_SESSION: &str = "alice-session";
pub const BOB_SESSION: &str = "bob-session";

pub fn test_categories() -> CategoryCatalog {
    CategoryCatalog::new(["technology", "science", "travel"]).unwrap()
}

/// Services wired to `store`, with Alice and Bob holding live sessions.
pub fn build_services(store: Arc<InMemoryArticleStore>) -> ApplicationServices {
    let sessions = InMemorySessionStore::new();
    sessions.insert(ALICE_SESSION, user(ALICE));
    sessions.insert(BOB_SESSION, user(BOB));

    let signer = SessionSigner::new(TEST_SECRET).unwrap();
    let authenticator = SignedSessionAuthenticator::new(signer, Arc::new(sessions));

    ApplicationServices::new(ServiceDependencies {
        article_write_repo: store.clone(),
        article_read_repo: store,
        session_authenticator: Arc::new(authenticator),
        categories: test_categories(),
        clock: Arc::new(DummyClock),
        slugger: Arc::new(DummySlug),
        ids: Arc::new(SequentialIds::default()),
    })
}

pub fn make_test_router(store: Arc<InMemoryArticleStore>) -> axum::Router {
    make_test_router_with_origins(store, &["http://localhost:3000".to_string()])
}

pub fn make_test_router_with_origins(
    store: Arc<InMemoryArticleStore>,
    allowed_origins: &[String],
) -> axum::Router {
    let state = HttpState {
        services: Arc::new(build_services(store)),
        session_cookie_name: Arc::from(COOKIE_NAME),
    };
    build_router(state, allowed_origins)
}

/// A `Cookie` header value carrying a correctly signed session id.
pub fn session_cookie(session_id: &str) -> String {
    let signer = SessionSigner::new(TEST_SECRET).unwrap();
    format!("{COOKIE_NAME}={}", signer.sign(session_id))
}

pub async fn json_body(resp: Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("expected a json body")
}

/// Asserts the `{"ok": false, "error": ...}` envelope and returns the message.
pub async fn error_message(resp: Response, expected_status: StatusCode) -> String {
    assert_eq!(resp.status(), expected_status);
    let ct = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");

    let json = json_body(resp).await;
    assert_eq!(json["ok"], Value::Bool(false));
    let message = json["error"].as_str().unwrap_or_default().to_string();
    assert!(!message.is_empty(), "expected a non-empty error in {json}");
    message
}

pub async fn assert_error_response(resp: Response, expected_status: StatusCode, expected_error: &str) {
    let message = error_message(resp, expected_status).await;
    assert_eq!(message, expected_error);
}
