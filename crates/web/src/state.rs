//! Application state shared across handlers.

use std::sync::Arc;

use mock_login_core::{CredentialStore, CredentialStoreError, FormController};

use crate::config::WebConfig;

/// Error building the application state.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("failed to load credentials: {0}")]
    Credentials(#[from] CredentialStoreError),
}

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. Everything inside is
/// read-only after startup.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: WebConfig,
    controller: FormController<CredentialStore>,
}

impl AppState {
    /// Create a new application state.
    ///
    /// Loads the credentials file named in the configuration, or falls back
    /// to the built-in dataset.
    ///
    /// # Errors
    ///
    /// Returns an error if the credentials file cannot be read or is invalid.
    pub fn new(config: WebConfig) -> Result<Self, StateError> {
        let store = match &config.credentials_path {
            Some(path) => {
                let store = CredentialStore::from_path(path)?;
                tracing::info!(
                    path = %path.display(),
                    records = store.len(),
                    "Loaded credentials file"
                );
                store
            }
            None => {
                tracing::info!("Using built-in mock credentials");
                CredentialStore::builtin()
            }
        };

        Ok(Self::with_store(config, store))
    }

    /// Create application state around an already-built credential store.
    #[must_use]
    pub fn with_store(config: WebConfig, store: CredentialStore) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                controller: FormController::new(store),
            }),
        }
    }

    /// Get a reference to the server configuration.
    #[must_use]
    pub fn config(&self) -> &WebConfig {
        &self.inner.config
    }

    /// Get a reference to the form controller.
    #[must_use]
    pub fn controller(&self) -> &FormController<CredentialStore> {
        &self.inner.controller
    }
}
