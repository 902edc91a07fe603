//! HTTP route handlers for the login page.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                      - Login page
//! GET  /health                - Health check
//!
//! # Login form (full page responses)
//! POST /login                 - Submit identifier and password
//! POST /login/google          - Mock Google sign-in
//! POST /login/facebook        - Mock Facebook sign-in
//!
//! # Login API (JSON message responses)
//! POST /api/login             - Submit identifier and password
//! POST /api/login/google      - Mock Google sign-in
//! POST /api/login/facebook    - Mock Facebook sign-in
//! ```

pub mod api;
pub mod login;

use axum::{
    Router,
    http::Uri,
    middleware::from_fn,
    routing::{get, post},
};
use tower_http::services::ServeDir;

use crate::error::AppError;
use crate::middleware::{request_id_middleware, security_headers_middleware};
use crate::state::AppState;

/// Create the login form routes router.
pub fn login_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(login::login))
        .route("/google", post(login::google))
        .route("/facebook", post(login::facebook))
}

/// Create the login API routes router.
pub fn login_api_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(api::login::submit))
        .route("/google", post(api::login::google))
        .route("/facebook", post(api::login::facebook))
}

/// Create all routes for the login page.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Login page
        .route("/", get(login::login_page))
        // Form actions
        .nest("/login", login_routes())
        // JSON API
        .nest("/api/login", login_api_routes())
}

/// Build the full application router with middleware and state applied.
///
/// Tracing and Sentry layers are added by the binary, so tests can drive
/// this router directly.
pub fn app(state: AppState) -> Router {
    let static_dir = state.config().static_dir.clone();

    Router::new()
        .route("/health", get(health))
        .merge(routes())
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(not_found)
        .layer(from_fn(security_headers_middleware))
        .layer(from_fn(request_id_middleware))
        .with_state(state)
}

/// Liveness health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Fallback for unknown paths.
async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_owned())
}
