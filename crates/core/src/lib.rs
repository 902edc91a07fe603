//! Mock Login Core - Credential validation and form controller logic.
//!
//! This crate provides the logic behind the mock login page, used by:
//! - `web` - The login page server
//! - `cli` - Command-line tools for checking credentials offline
//!
//! # Architecture
//!
//! The core crate contains only types and pure logic - no HTTP, no logging,
//! no global state. The credential list is passed in at construction, so
//! callers decide where it comes from.
//!
//! # Modules
//!
//! - [`types`] - Identifiers, credential records, and display messages
//! - [`validator`] - The read-only credential store and its lookup
//! - [`controller`] - Maps form events to the message to display
//!
//! # Example
//!
//! ```
//! use mock_login_core::{FormController, MessageKind, SocialProvider};
//!
//! let controller = FormController::builtin();
//!
//! let message = controller.submit("testuser@example.com", "Test1234");
//! assert_eq!(message.text(), "Login Successful! Welcome!");
//!
//! let message = controller.submit("5551234567", "wrongpass");
//! assert_eq!(message.kind(), MessageKind::Error);
//!
//! let message = controller.social_sign_in(SocialProvider::Google);
//! assert_eq!(message.text(), "Google sign-in successful (mock).");
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod controller;
pub mod types;
pub mod validator;

pub use controller::{
    FormController, FormEvent, INVALID_CREDENTIALS_MESSAGE, LOGIN_SUCCESS_MESSAGE,
    MISSING_FIELDS_MESSAGE, SocialProvider, Submission, SubmitOutcome, UnknownProvider,
};
pub use types::*;
pub use validator::{CredentialStore, CredentialStoreError, CredentialValidator};
