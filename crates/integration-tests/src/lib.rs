//! Integration tests for the mock login page.
//!
//! The tests drive the full web router in-process with
//! `tower::ServiceExt::oneshot`; no port is bound.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p mock-login-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `login_page` - HTML form flows
//! - `login_api` - JSON API flows

use std::path::PathBuf;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, Response, header::CONTENT_TYPE},
};
use mock_login_core::CredentialStore;
use mock_login_web::config::WebConfig;
use mock_login_web::state::AppState;
use tower::ServiceExt;

/// Build the application router around the built-in credentials.
#[must_use]
pub fn test_app() -> Router {
    test_app_with_store(CredentialStore::builtin())
}

/// Build the application router around a specific credential store.
#[must_use]
pub fn test_app_with_store(store: CredentialStore) -> Router {
    let config = WebConfig {
        static_dir: PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/../web/static")),
        ..WebConfig::default()
    };
    mock_login_web::app(AppState::with_store(config, store))
}

/// Send a request through a fresh copy of the router.
///
/// # Panics
///
/// Panics if the router fails to produce a response.
pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone()
        .oneshot(request)
        .await
        .expect("router is infallible")
}

/// Build a urlencoded form POST.
///
/// # Panics
///
/// Panics if the request cannot be built.
#[must_use]
pub fn form_post(uri: &str, body: &str) -> Request<Body> {
    Request::post(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_owned()))
        .expect("valid request")
}

/// Build a JSON POST.
///
/// # Panics
///
/// Panics if the request cannot be built.
#[must_use]
pub fn json_post(uri: &str, body: &str) -> Request<Body> {
    Request::post(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_owned()))
        .expect("valid request")
}

/// Read a response body as a UTF-8 string.
///
/// # Panics
///
/// Panics if the body cannot be read or is not UTF-8.
pub async fn body_string(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("readable body");
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}
