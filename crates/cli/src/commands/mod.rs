//! CLI command implementations.

pub mod credentials;
pub mod login;

use std::path::{Path, PathBuf};

use mock_login_core::{CredentialStore, CredentialStoreError};
use thiserror::Error;

/// Environment variable naming a JSON credentials file.
pub const CREDENTIALS_ENV: &str = "MOCK_LOGIN_CREDENTIALS";

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Credentials could not be loaded.
    #[error(transparent)]
    Credentials(#[from] CredentialStoreError),
}

/// Load a credential store from an explicit path, `MOCK_LOGIN_CREDENTIALS`,
/// or the built-in dataset, in that order.
pub fn load_store(path: Option<&Path>) -> Result<CredentialStore, CommandError> {
    dotenvy::dotenv().ok();
    resolve_store(path, std::env::var(CREDENTIALS_ENV).ok())
}

/// Pick the credentials source given the explicit path and the env value.
///
/// A blank env value counts as unset.
fn resolve_store(
    path: Option<&Path>,
    env_value: Option<String>,
) -> Result<CredentialStore, CommandError> {
    let path = path.map(Path::to_path_buf).or_else(|| {
        env_value
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from)
    });

    match path {
        Some(path) => {
            tracing::debug!("Loading credentials from {}", path.display());
            Ok(CredentialStore::from_path(&path)?)
        }
        None => Ok(CredentialStore::builtin()),
    }
}

/// Write `contents` to a per-process temp file for tests.
#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub(crate) fn write_temp(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("mock-login-{}-{name}", std::process::id()));
    std::fs::write(&path, contents).unwrap();
    path
}
