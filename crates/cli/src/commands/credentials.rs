//! Credentials file commands.
//!
//! # Usage
//!
//! ```bash
//! mock-login credentials verify credentials.json
//! ```
//!
//! The file is checked with the same rules the server applies at startup:
//! a JSON array of `{"identifier", "password"}` objects with no blank or
//! whitespace-padded fields and no duplicate identifiers.

use std::path::Path;

use mock_login_core::CredentialStore;

use super::CommandError;

/// Load a credentials file and return its identifiers in file order.
pub fn verify(path: &Path) -> Result<Vec<String>, CommandError> {
    let store = CredentialStore::from_path(path)?;
    tracing::info!("{} is valid ({} records)", path.display(), store.len());

    Ok(store
        .iter()
        .map(|record| record.identifier().to_owned())
        .collect())
}
