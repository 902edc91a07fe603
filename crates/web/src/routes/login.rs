//! Login page route handlers.
//!
//! Every action re-renders the whole page with the message region filled.
//! The submitted identifier is echoed back into its input; the password
//! never is. A successful login stays on the page.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{State, rejection::FormRejection},
    response::IntoResponse,
};

use mock_login_core::{Message, SocialProvider, Submission, trim_field};

use crate::error::{AppError, Result};
use crate::filters;
use crate::state::AppState;

// =============================================================================
// Templates
// =============================================================================

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    /// Value to pre-fill the identifier input with
    pub identifier: String,
    /// Most recent message, if any action has happened
    pub message: Option<Message>,
}

impl LoginTemplate {
    fn empty() -> Self {
        Self {
            identifier: String::new(),
            message: None,
        }
    }
}

// =============================================================================
// Routes
// =============================================================================

/// Display the login page.
pub async fn login_page() -> impl IntoResponse {
    LoginTemplate::empty()
}

/// Handle login form submission.
///
/// Wrong or missing credentials are reported in the message region, not as
/// an HTTP error.
///
/// # Errors
///
/// Returns `AppError::BadRequest` if the body is not a urlencoded form, or
/// `AppError::Internal` if it could not be read at all.
pub async fn login(
    State(state): State<AppState>,
    form: std::result::Result<Form<Submission>, FormRejection>,
) -> Result<LoginTemplate> {
    let Form(submission) = form.map_err(|rejection| {
        AppError::from_rejection(rejection.status(), rejection.body_text())
    })?;

    let outcome = state
        .controller()
        .check(&submission.identifier, &submission.password);
    tracing::debug!(?outcome, "Login form submitted");

    Ok(LoginTemplate {
        identifier: trim_field(&submission.identifier).to_owned(),
        message: Some(outcome.message()),
    })
}

/// Handle a click on the mock Google button.
pub async fn google(
    State(state): State<AppState>,
    form: std::result::Result<Form<Submission>, FormRejection>,
) -> LoginTemplate {
    social_sign_in(&state, SocialProvider::Google, form.ok())
}

/// Handle a click on the mock Facebook button.
pub async fn facebook(
    State(state): State<AppState>,
    form: std::result::Result<Form<Submission>, FormRejection>,
) -> LoginTemplate {
    social_sign_in(&state, SocialProvider::Facebook, form.ok())
}

/// Mock sign-in succeeds whatever the form holds; the form is only read to
/// keep the identifier input filled.
fn social_sign_in(
    state: &AppState,
    provider: SocialProvider,
    form: Option<Form<Submission>>,
) -> LoginTemplate {
    tracing::debug!(%provider, "Mock social sign-in");

    LoginTemplate {
        identifier: form
            .map(|Form(submission)| trim_field(&submission.identifier).to_owned())
            .unwrap_or_default(),
        message: Some(state.controller().social_sign_in(provider)),
    }
}
