//! Login page server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `MOCK_LOGIN_HOST` - Bind address (default: 127.0.0.1)
//! - `MOCK_LOGIN_PORT` - Listen port (default: 3000)
//! - `MOCK_LOGIN_CREDENTIALS` - Path to a JSON credentials file
//!   (default: the built-in mock dataset)
//! - `MOCK_LOGIN_STATIC_DIR` - Directory served under `/static`
//!   (default: crates/web/static)
//! - `MOCK_LOGIN_LOG_JSON` - Emit JSON logs when set
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: &str = "3000";
const DEFAULT_STATIC_DIR: &str = "crates/web/static";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Login page server configuration.
#[derive(Debug, Clone)]
pub struct WebConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// JSON credentials file; `None` uses the built-in dataset
    pub credentials_path: Option<PathBuf>,
    /// Directory holding the stylesheet
    pub static_dir: PathBuf,
    /// Emit logs as JSON instead of text
    pub log_json: bool,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name (e.g., production, staging)
    pub sentry_environment: Option<String>,
}

impl WebConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the host or port cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_source(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    fn from_source(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = get_or_default(&get, "MOCK_LOGIN_HOST", DEFAULT_HOST)
            .parse::<IpAddr>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("MOCK_LOGIN_HOST".to_string(), e.to_string())
            })?;
        let port = get_or_default(&get, "MOCK_LOGIN_PORT", DEFAULT_PORT)
            .parse::<u16>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("MOCK_LOGIN_PORT".to_string(), e.to_string())
            })?;

        let credentials_path = get_non_empty(&get, "MOCK_LOGIN_CREDENTIALS").map(PathBuf::from);
        let static_dir = PathBuf::from(get_or_default(
            &get,
            "MOCK_LOGIN_STATIC_DIR",
            DEFAULT_STATIC_DIR,
        ));
        let log_json = get("MOCK_LOGIN_LOG_JSON").is_some();

        Ok(Self {
            host,
            port,
            credentials_path,
            static_dir,
            log_json,
            sentry_dsn: get_non_empty(&get, "SENTRY_DSN"),
            sentry_environment: get_non_empty(&get, "SENTRY_ENVIRONMENT"),
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 3000,
            credentials_path: None,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            log_json: false,
            sentry_dsn: None,
            sentry_environment: None,
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a variable with a default value.
fn get_or_default(get: &impl Fn(&str) -> Option<String>, key: &str, default: &str) -> String {
    get(key).unwrap_or_else(|| default.to_string())
}

/// Get an optional variable, treating blank values as unset.
fn get_non_empty(get: &impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    get(key).filter(|value| !value.trim().is_empty())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<WebConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        WebConfig::from_source(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.host.to_string(), "127.0.0.1");
        assert_eq!(config.port, 3000);
        assert!(config.credentials_path.is_none());
        assert_eq!(config.static_dir, PathBuf::from("crates/web/static"));
        assert!(!config.log_json);
        assert!(config.sentry_dsn.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("MOCK_LOGIN_HOST", "0.0.0.0"),
            ("MOCK_LOGIN_PORT", "8080"),
            ("MOCK_LOGIN_CREDENTIALS", "/etc/mock-login/credentials.json"),
            ("MOCK_LOGIN_LOG_JSON", "1"),
            ("SENTRY_ENVIRONMENT", "staging"),
        ])
        .unwrap();
        assert_eq!(config.host.to_string(), "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(
            config.credentials_path,
            Some(PathBuf::from("/etc/mock-login/credentials.json"))
        );
        assert!(config.log_json);
        assert_eq!(config.sentry_environment.as_deref(), Some("staging"));
    }

    #[test]
    fn test_blank_credentials_path_is_unset() {
        let config = load(&[("MOCK_LOGIN_CREDENTIALS", "  ")]).unwrap();
        assert!(config.credentials_path.is_none());
    }

    #[test]
    fn test_invalid_host() {
        let err = load(&[("MOCK_LOGIN_HOST", "not-an-ip")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(ref key, _) if key == "MOCK_LOGIN_HOST"));
    }

    #[test]
    fn test_invalid_port() {
        let err = load(&[("MOCK_LOGIN_PORT", "70000")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(ref key, _) if key == "MOCK_LOGIN_PORT"));
    }

    #[test]
    fn test_socket_addr() {
        let config = WebConfig {
            port: 4000,
            ..WebConfig::default()
        };

        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 4000);
    }
}
