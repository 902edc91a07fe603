//! Login API routes.
//!
//! JSON endpoints exposing the same form controller as the HTML page.
//! Every endpoint answers with a message object:
//!
//! ```json
//! {"kind": "error", "color": "red", "text": "Invalid Credentials. Try again!"}
//! ```

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};

use mock_login_core::{Message, SocialProvider, Submission};

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Submit an identifier and password.
///
/// POST /api/login
///
/// Missing fields count as empty, so `{}` yields the missing-fields message.
///
/// # Errors
///
/// Returns `AppError::BadRequest` if the body is not a JSON object, or
/// `AppError::Internal` if it could not be read at all.
pub async fn submit(
    State(state): State<AppState>,
    body: std::result::Result<Json<Submission>, JsonRejection>,
) -> Result<Json<Message>> {
    let Json(submission) = body.map_err(|rejection| {
        AppError::from_rejection(rejection.status(), rejection.body_text())
    })?;

    let outcome = state
        .controller()
        .check(&submission.identifier, &submission.password);
    tracing::debug!(?outcome, "Login API submission");

    Ok(Json(outcome.message()))
}

/// Mock Google sign-in.
///
/// POST /api/login/google
pub async fn google(State(state): State<AppState>) -> Json<Message> {
    Json(state.controller().social_sign_in(SocialProvider::Google))
}

/// Mock Facebook sign-in.
///
/// POST /api/login/facebook
pub async fn facebook(State(state): State<AppState>) -> Json<Message> {
    Json(state.controller().social_sign_in(SocialProvider::Facebook))
}
