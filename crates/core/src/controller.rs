//! Form controller: maps login page events to the message to display.
//!
//! # Event Flow
//!
//! ```text
//! Submit(identifier, password)
//!   -> trim both fields
//!   -> either empty?        Error   "Please fill out all fields."     (validator not called)
//!   -> validator matches?   Success "Login Successful! Welcome!"
//!   -> otherwise            Error   "Invalid Credentials. Try again!"
//!
//! SocialSignIn(Google)      Success "Google sign-in successful (mock)."
//! SocialSignIn(Facebook)    Success "Facebook sign-in successful (mock)."
//! ```
//!
//! A successful login does not navigate anywhere; the message is the whole
//! outcome.

use core::fmt;

use serde::Deserialize;

use crate::types::{Identifier, Message, trim_field};
use crate::validator::{CredentialStore, CredentialValidator};

/// Shown when the identifier or password is blank.
pub const MISSING_FIELDS_MESSAGE: &str = "Please fill out all fields.";
/// Shown when the submitted pair matches a known record.
pub const LOGIN_SUCCESS_MESSAGE: &str = "Login Successful! Welcome!";
/// Shown when the submitted pair matches no record.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid Credentials. Try again!";

/// Raw field values read from the login form at submit time.
///
/// Missing fields deserialize as empty strings.
#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct Submission {
    pub identifier: String,
    pub password: String,
}

impl Submission {
    #[must_use]
    pub fn new(identifier: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Submission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Submission")
            .field("identifier", &self.identifier)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Mock third-party sign-in providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SocialProvider {
    Google,
    Facebook,
}

impl SocialProvider {
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Google => "Google",
            Self::Facebook => "Facebook",
        }
    }

    /// Message shown after the (always successful) mock sign-in.
    #[must_use]
    pub const fn success_message(self) -> &'static str {
        match self {
            Self::Google => "Google sign-in successful (mock).",
            Self::Facebook => "Facebook sign-in successful (mock).",
        }
    }
}

impl fmt::Display for SocialProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Error returned when parsing an unknown provider name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sign-in provider: {0}")]
pub struct UnknownProvider(pub String);

impl std::str::FromStr for SocialProvider {
    type Err = UnknownProvider;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "google" => Ok(Self::Google),
            "facebook" => Ok(Self::Facebook),
            _ => Err(UnknownProvider(s.to_owned())),
        }
    }
}

/// A user action on the login page.
#[derive(Debug, Clone)]
pub enum FormEvent {
    Submit(Submission),
    SocialSignIn(SocialProvider),
}

/// Result of checking a submission, before it becomes a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Identifier or password was blank; the validator was not consulted.
    MissingFields,
    /// No record matched.
    InvalidCredentials,
    /// A record matched.
    Authenticated,
}

impl SubmitOutcome {
    /// The message the login page displays for this outcome.
    #[must_use]
    pub fn message(self) -> Message {
        match self {
            Self::MissingFields => Message::error(MISSING_FIELDS_MESSAGE),
            Self::InvalidCredentials => Message::error(INVALID_CREDENTIALS_MESSAGE),
            Self::Authenticated => Message::success(LOGIN_SUCCESS_MESSAGE),
        }
    }
}

/// Mediates between login page events and the credential validator.
///
/// The validator is injected at construction and only ever read.
#[derive(Debug, Clone)]
pub struct FormController<V = CredentialStore> {
    validator: V,
}

impl<V: CredentialValidator> FormController<V> {
    /// Create a controller around a validator.
    #[must_use]
    pub const fn new(validator: V) -> Self {
        Self { validator }
    }

    /// Get a reference to the underlying validator.
    #[must_use]
    pub const fn validator(&self) -> &V {
        &self.validator
    }

    /// Classify a submission.
    ///
    /// Both fields are trimmed with [`trim_field`]. Blank fields short-circuit to
    /// [`SubmitOutcome::MissingFields`] without calling the validator.
    #[must_use]
    pub fn check(&self, identifier: &str, password: &str) -> SubmitOutcome {
        let Ok(identifier) = Identifier::parse(identifier) else {
            return SubmitOutcome::MissingFields;
        };
        let password = trim_field(password);
        if password.is_empty() {
            return SubmitOutcome::MissingFields;
        }

        if self.validator.validate(identifier.as_str(), password) {
            SubmitOutcome::Authenticated
        } else {
            SubmitOutcome::InvalidCredentials
        }
    }

    /// Handle a login form submission.
    #[must_use]
    pub fn submit(&self, identifier: &str, password: &str) -> Message {
        self.check(identifier, password).message()
    }

    /// Handle a click on a mock social sign-in button.
    ///
    /// Always succeeds, whatever the form currently holds.
    #[must_use]
    pub fn social_sign_in(&self, provider: SocialProvider) -> Message {
        Message::success(provider.success_message())
    }

    /// Dispatch any login page event.
    #[must_use]
    pub fn handle(&self, event: &FormEvent) -> Message {
        match event {
            FormEvent::Submit(submission) => {
                self.submit(&submission.identifier, &submission.password)
            }
            FormEvent::SocialSignIn(provider) => self.social_sign_in(*provider),
        }
    }
}

impl FormController<CredentialStore> {
    /// Create a controller around the built-in mock credentials.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(CredentialStore::builtin())
    }
}

impl Default for FormController<CredentialStore> {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::types::MessageKind;

    /// Validator that records how often it was called.
    struct CountingValidator {
        calls: Cell<usize>,
        answer: bool,
    }

    impl CountingValidator {
        const fn new(answer: bool) -> Self {
            Self {
                calls: Cell::new(0),
                answer,
            }
        }
    }

    impl CredentialValidator for CountingValidator {
        fn validate(&self, _identifier: &str, _password: &str) -> bool {
            self.calls.set(self.calls.get() + 1);
            self.answer
        }
    }

    #[test]
    fn test_submit_known_email() {
        let controller = FormController::builtin();
        let message = controller.submit("testuser@example.com", "Test1234");
        assert_eq!(message.text(), "Login Successful! Welcome!");
        assert_eq!(message.kind(), MessageKind::Success);
        assert_eq!(message.color(), "green");
    }

    #[test]
    fn test_submit_known_phone() {
        let controller = FormController::builtin();
        let message = controller.submit("5551234567", "phonePass");
        assert_eq!(message.kind(), MessageKind::Success);
    }

    #[test]
    fn test_submit_wrong_password() {
        let controller = FormController::builtin();
        let message = controller.submit("5551234567", "wrongpass");
        assert_eq!(message.text(), "Invalid Credentials. Try again!");
        assert_eq!(message.kind(), MessageKind::Error);
        assert_eq!(message.color(), "red");
    }

    #[test]
    fn test_submit_both_empty() {
        let controller = FormController::builtin();
        let message = controller.submit("", "");
        assert_eq!(message.text(), "Please fill out all fields.");
        assert_eq!(message.color(), "red");
    }

    #[test]
    fn test_submit_trims_fields() {
        let controller = FormController::builtin();
        let message = controller.submit("  testuser@example.com\t", " Test1234 ");
        assert_eq!(message.kind(), MessageKind::Success);
    }

    #[test]
    fn test_blank_fields_never_reach_validator() {
        let controller = FormController::new(CountingValidator::new(true));
        for (identifier, password) in [("", ""), ("  ", "pw"), ("id", ""), ("id", " \n ")] {
            assert_eq!(
                controller.check(identifier, password),
                SubmitOutcome::MissingFields
            );
        }
        assert_eq!(controller.validator().calls.get(), 0);
    }

    #[test]
    fn test_byte_order_mark_counts_as_blank() {
        let controller = FormController::new(CountingValidator::new(true));
        assert_eq!(
            controller.check("\u{FEFF}", "x"),
            SubmitOutcome::MissingFields
        );
        assert_eq!(
            controller.check("id", "\u{FEFF} "),
            SubmitOutcome::MissingFields
        );
        assert_eq!(controller.validator().calls.get(), 0);
    }

    #[test]
    fn test_filled_fields_call_validator_once() {
        let controller = FormController::new(CountingValidator::new(false));
        assert_eq!(
            controller.check("someone", "something"),
            SubmitOutcome::InvalidCredentials
        );
        assert_eq!(controller.validator().calls.get(), 1);
    }

    #[test]
    fn test_injected_store_replaces_builtin() {
        let store = CredentialStore::from_json(
            r#"[{"identifier": "alice@example.com", "password": "s3cret"}]"#,
        )
        .unwrap();
        let controller = FormController::new(store);
        assert_eq!(
            controller.check("alice@example.com", "s3cret"),
            SubmitOutcome::Authenticated
        );
        assert_eq!(
            controller.check("testuser@example.com", "Test1234"),
            SubmitOutcome::InvalidCredentials
        );
    }

    #[test]
    fn test_social_sign_in_always_succeeds() {
        let controller = FormController::new(CountingValidator::new(false));

        let google = controller.social_sign_in(SocialProvider::Google);
        assert_eq!(google.text(), "Google sign-in successful (mock).");
        assert_eq!(google.kind(), MessageKind::Success);

        let facebook = controller.social_sign_in(SocialProvider::Facebook);
        assert_eq!(facebook.text(), "Facebook sign-in successful (mock).");
        assert_eq!(facebook.kind(), MessageKind::Success);

        assert_eq!(controller.validator().calls.get(), 0);
    }

    #[test]
    fn test_handle_dispatches_events() {
        let controller = FormController::builtin();
        let submit = FormEvent::Submit(Submission::new("wrong@example.com", "badpass"));
        assert_eq!(
            controller.handle(&submit).text(),
            "Invalid Credentials. Try again!"
        );
        assert_eq!(
            controller
                .handle(&FormEvent::SocialSignIn(SocialProvider::Facebook))
                .text(),
            "Facebook sign-in successful (mock)."
        );
    }

    #[test]
    fn test_repeated_submission_is_idempotent() {
        let controller = FormController::builtin();
        for (identifier, password) in [
            ("testuser@example.com", "Test1234"),
            ("5551234567", "wrongpass"),
            ("", ""),
        ] {
            let first = controller.submit(identifier, password);
            let second = controller.submit(identifier, password);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_provider_from_str() {
        assert_eq!("google".parse::<SocialProvider>(), Ok(SocialProvider::Google));
        assert_eq!(
            "Facebook".parse::<SocialProvider>(),
            Ok(SocialProvider::Facebook)
        );
        assert!("twitter".parse::<SocialProvider>().is_err());
    }

    #[test]
    fn test_submission_debug_redacts_password() {
        let submission = Submission::new("a@b.c", "hunter2");
        let debug_output = format!("{submission:?}");
        assert!(!debug_output.contains("hunter2"));
    }

    #[test]
    fn test_submission_missing_fields_default_to_empty() {
        let submission: Submission = serde_json::from_str(r#"{"identifier": "x"}"#).unwrap();
        assert_eq!(submission.identifier, "x");
        assert_eq!(submission.password, "");
    }
}
