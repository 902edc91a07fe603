//! Credential record types.

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

/// A fixed (identifier, password) pair considered valid.
///
/// The password is plaintext by nature of the mock, but it is held in a
/// [`SecretString`] so it never shows up in `Debug` output or logs.
#[derive(Clone, Deserialize)]
#[serde(from = "RawCredential")]
pub struct CredentialRecord {
    identifier: String,
    password: SecretString,
}

/// Wire shape of a credential record in a credentials file.
#[derive(Deserialize)]
struct RawCredential {
    identifier: String,
    password: String,
}

impl From<RawCredential> for CredentialRecord {
    fn from(raw: RawCredential) -> Self {
        Self::new(raw.identifier, raw.password)
    }
}

impl CredentialRecord {
    /// Create a new credential record.
    #[must_use]
    pub fn new(identifier: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            password: SecretString::from(password.into()),
        }
    }

    /// The identifier this record accepts.
    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// The password this record accepts.
    #[must_use]
    pub const fn password(&self) -> &SecretString {
        &self.password
    }

    /// Exact, case-sensitive comparison against a submitted pair.
    #[must_use]
    pub fn matches(&self, identifier: &str, password: &str) -> bool {
        self.identifier == identifier && self.password.expose_secret() == password
    }
}

impl std::fmt::Debug for CredentialRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialRecord")
            .field("identifier", &self.identifier)
            .field("password", &"[REDACTED]")
            .finish()
    }
}
