//! Core types for the mock login page.
//!
//! This module provides type-safe wrappers for the login form's domain concepts.

pub mod credential;
pub mod identifier;
pub mod message;

pub use credential::CredentialRecord;
pub use identifier::{Identifier, IdentifierError, trim_field};
pub use message::{Message, MessageKind};
