//! Login identifier type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing an [`Identifier`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentifierError {
    /// The input is empty once surrounding whitespace is removed.
    #[error("identifier cannot be empty")]
    Empty,
}

/// Strip the whitespace a browser form field trim would strip.
///
/// Unicode whitespace plus U+FEFF (byte order mark), which `str::trim`
/// keeps but form inputs treat as blank.
#[must_use]
pub fn trim_field(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

/// The email-or-phone string a user signs in with.
///
/// Identifiers are compared byte for byte, so `User@Example.com` and
/// `user@example.com` are different identifiers. No email or phone format
/// is enforced: a well-formed but unknown identifier is a credential
/// mismatch, not a parse failure.
///
/// ## Constraints
///
/// - Surrounding whitespace is trimmed on parse
/// - Must not be empty after trimming
///
/// ## Examples
///
/// ```
/// use mock_login_core::Identifier;
///
/// let id = Identifier::parse("  testuser@example.com ").unwrap();
/// assert_eq!(id.as_str(), "testuser@example.com");
///
/// assert!(Identifier::parse("5551234567").is_ok());
/// assert!(Identifier::parse("   ").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Identifier(String);

impl Identifier {
    /// Parse an `Identifier`, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`IdentifierError::Empty`] if nothing is left after trimming.
    pub fn parse(s: &str) -> Result<Self, IdentifierError> {
        let trimmed = trim_field(s);
        if trimmed.is_empty() {
            return Err(IdentifierError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Identifier {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
