//! Login page actions, run without the server.
//!
//! # Usage
//!
//! ```bash
//! # Submit the login form
//! mock-login check -i testuser@example.com -p Test1234
//!
//! # Against a custom credentials file
//! mock-login check -i alice@example.com -p s3cret -c credentials.json
//!
//! # Click a mock social sign-in button
//! mock-login social google
//! ```

use std::path::Path;

use mock_login_core::{FormController, Message, SocialProvider};

use super::{CommandError, load_store};

/// Submit an identifier and password and return the message the page shows.
pub fn check(
    identifier: &str,
    password: &str,
    credentials: Option<&Path>,
) -> Result<Message, CommandError> {
    let controller = FormController::new(load_store(credentials)?);
    Ok(controller.submit(identifier, password))
}

/// Run a mock social sign-in.
#[must_use]
pub fn social(provider: SocialProvider) -> Message {
    FormController::builtin().social_sign_in(provider)
}
