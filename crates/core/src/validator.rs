//! Credential validation against a fixed, read-only credential store.

use std::collections::HashSet;
use std::path::Path;

use secrecy::ExposeSecret;
use thiserror::Error;

use crate::types::{CredentialRecord, trim_field};

/// Errors that can occur when building a [`CredentialStore`].
#[derive(Debug, Error)]
pub enum CredentialStoreError {
    /// The credentials file could not be read.
    #[error("failed to read credentials file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The credentials document is not a JSON array of records.
    #[error("invalid credentials document: {0}")]
    Parse(#[from] serde_json::Error),

    /// A record has an empty identifier or password.
    #[error("credential record {index} has an empty {field}")]
    EmptyField { index: usize, field: &'static str },

    /// A record has leading or trailing whitespace in a field.
    ///
    /// Submissions are trimmed before lookup, so such a record could never match.
    #[error("credential record {index} has surrounding whitespace in its {field}")]
    UntrimmedField { index: usize, field: &'static str },

    /// Two records share an identifier.
    #[error("duplicate identifier in credentials: {0}")]
    DuplicateIdentifier(String),
}

/// Anything that can answer "is this (identifier, password) pair known?".
///
/// Implementations must be pure lookups: no side effects and no errors.
pub trait CredentialValidator {
    /// Returns true iff the exact pair is known.
    fn validate(&self, identifier: &str, password: &str) -> bool;
}

/// Ordered, fixed set of known credential records.
///
/// Built once at startup and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    records: Vec<CredentialRecord>,
}

impl CredentialStore {
    /// Build a store from records.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialStoreError::EmptyField`] if a record has a blank
    /// identifier or password, [`CredentialStoreError::UntrimmedField`] if a
    /// field has surrounding whitespace, and
    /// [`CredentialStoreError::DuplicateIdentifier`] if two records share an
    /// identifier.
    pub fn new(records: Vec<CredentialRecord>) -> Result<Self, CredentialStoreError> {
        let mut seen = HashSet::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            check_field(index, "identifier", record.identifier())?;
            check_field(index, "password", record.password().expose_secret())?;
            if !seen.insert(record.identifier()) {
                return Err(CredentialStoreError::DuplicateIdentifier(
                    record.identifier().to_owned(),
                ));
            }
        }
        Ok(Self { records })
    }

    /// The built-in mock dataset.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            records: vec![
                CredentialRecord::new("testuser@example.com", "Test1234"),
                CredentialRecord::new("5551234567", "phonePass"),
            ],
        }
    }

    /// Parse a JSON array of `{"identifier", "password"}` objects.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialStoreError::Parse`] for malformed JSON, plus the
    /// record checks of [`CredentialStore::new`].
    pub fn from_json(json: &str) -> Result<Self, CredentialStoreError> {
        let records: Vec<CredentialRecord> = serde_json::from_str(json)?;
        Self::new(records)
    }

    /// Read and parse a JSON credentials file.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialStoreError::Io`] if the file can't be read, plus
    /// everything [`CredentialStore::from_json`] rejects.
    pub fn from_path(path: &Path) -> Result<Self, CredentialStoreError> {
        let json = std::fs::read_to_string(path).map_err(|source| CredentialStoreError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CredentialRecord> {
        self.records.iter()
    }
}

/// A stored field must be non-blank and already in trimmed form.
fn check_field(
    index: usize,
    field: &'static str,
    value: &str,
) -> Result<(), CredentialStoreError> {
    let trimmed = trim_field(value);
    if trimmed.is_empty() {
        return Err(CredentialStoreError::EmptyField { index, field });
    }
    if trimmed.len() != value.len() {
        return Err(CredentialStoreError::UntrimmedField { index, field });
    }
    Ok(())
}

impl Default for CredentialStore {
    fn default() -> Self {
        Self::builtin()
    }
}

impl CredentialValidator for CredentialStore {
    fn validate(&self, identifier: &str, password: &str) -> bool {
        self.records
            .iter()
            .any(|record| record.matches(identifier, password))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_accepts_known_pairs() {
        let store = CredentialStore::builtin();
        assert!(store.validate("testuser@example.com", "Test1234"));
        assert!(store.validate("5551234567", "phonePass"));
    }

    #[test]
    fn test_builtin_rejects_unknown_pairs() {
        let store = CredentialStore::builtin();
        assert!(!store.validate("5551234567", "wrongpass"));
        assert!(!store.validate("wrong@example.com", "badpass"));
        // Passwords don't cross over between records.
        assert!(!store.validate("testuser@example.com", "phonePass"));
        assert!(!store.validate("", ""));
    }

    #[test]
    fn test_validate_does_not_trim() {
        let store = CredentialStore::builtin();
        assert!(!store.validate(" testuser@example.com", "Test1234"));
        assert!(!store.validate("testuser@example.com", "Test1234 "));
    }

    #[test]
    fn test_default_is_builtin() {
        assert_eq!(CredentialStore::default().len(), 2);
    }

    #[test]
    fn test_from_json() {
        let store = CredentialStore::from_json(
            r#"[{"identifier": "alice@example.com", "password": "s3cret"}]"#,
        )
        .unwrap();
        assert_eq!(store.len(), 1);
        assert!(store.validate("alice@example.com", "s3cret"));
        assert!(!store.validate("testuser@example.com", "Test1234"));
    }

    #[test]
    fn test_from_json_empty_array() {
        let store = CredentialStore::from_json("[]").unwrap();
        assert!(store.is_empty());
        assert!(!store.validate("anyone", "anything"));
    }

    #[test]
    fn test_from_json_malformed() {
        let err = CredentialStore::from_json(r#"{"identifier": "x"}"#).unwrap_err();
        assert!(matches!(err, CredentialStoreError::Parse(_)));

        let err = CredentialStore::from_json(r#"[{"identifier": "x"}]"#).unwrap_err();
        assert!(matches!(err, CredentialStoreError::Parse(_)));
    }

    #[test]
    fn test_rejects_blank_fields() {
        let err = CredentialStore::new(vec![
            CredentialRecord::new("ok@example.com", "pw"),
            CredentialRecord::new("  ", "pw"),
        ])
        .unwrap_err();
        assert!(matches!(
            err,
            CredentialStoreError::EmptyField {
                index: 1,
                field: "identifier"
            }
        ));

        let err = CredentialStore::new(vec![CredentialRecord::new("ok@example.com", "")])
            .unwrap_err();
        assert!(matches!(
            err,
            CredentialStoreError::EmptyField {
                index: 0,
                field: "password"
            }
        ));
    }

    #[test]
    fn test_rejects_duplicate_identifiers() {
        let err = CredentialStore::new(vec![
            CredentialRecord::new("dup@example.com", "one"),
            CredentialRecord::new("dup@example.com", "two"),
        ])
        .unwrap_err();
        assert!(
            matches!(err, CredentialStoreError::DuplicateIdentifier(ref id) if id == "dup@example.com")
        );
    }

    #[test]
    fn test_rejects_untrimmed_fields() {
        let err = CredentialStore::from_json(
            r#"[{"identifier": "alice ", "password": "pw"}]"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            CredentialStoreError::UntrimmedField {
                index: 0,
                field: "identifier"
            }
        ));

        let err = CredentialStore::new(vec![
            CredentialRecord::new("alice", "pw"),
            CredentialRecord::new("bob", "\u{FEFF}pw"),
        ])
        .unwrap_err();
        assert!(matches!(
            err,
            CredentialStoreError::UntrimmedField {
                index: 1,
                field: "password"
            }
        ));
    }

    #[test]
    fn test_padded_identifier_cannot_shadow_another() {
        // "alice " and "alice" are the same identifier once a submission is trimmed.
        let err = CredentialStore::from_json(
            r#"[
                {"identifier": "alice", "password": "other"},
                {"identifier": "alice ", "password": "pw"}
            ]"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            CredentialStoreError::UntrimmedField {
                index: 1,
                field: "identifier"
            }
        ));
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = CredentialStore::from_path(Path::new("/nonexistent/credentials.json"))
            .unwrap_err();
        assert!(matches!(err, CredentialStoreError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/credentials.json"));
    }

    #[test]
    fn test_iter_preserves_order() {
        let store = CredentialStore::builtin();
        let ids: Vec<&str> = store.iter().map(CredentialRecord::identifier).collect();
        assert_eq!(ids, vec!["testuser@example.com", "5551234567"]);
    }
}
