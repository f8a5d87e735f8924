//! Client configuration.
//!
//! Loaded from environment variables with fallback to defaults.
//!
//! | Variable                         | Default | Meaning                     |
//! |----------------------------------|---------|-----------------------------|
//! | `MULTIPEDIDOS_PEDIDOS_URL`       | unset   | Base URL of orders service  |
//! | `MULTIPEDIDOS_HTTP_TIMEOUT_SECS` | `5`     | Connect and request timeout |

use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Environment variable holding the orders service base URL.
pub const BASE_URL_ENV: &str = "MULTIPEDIDOS_PEDIDOS_URL";

/// Environment variable holding the HTTP timeout in seconds.
pub const TIMEOUT_ENV: &str = "MULTIPEDIDOS_HTTP_TIMEOUT_SECS";

/// Timeout used when none is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Shortest timeout applied; ureq fails every call with a zero timeout.
pub const MIN_TIMEOUT_SECS: u64 = 1;

/// Orders client configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the orders service, e.g. `http://localhost:8080`.
    #[serde(default)]
    pub base_url: Option<String>,

    /// Connect and overall request timeout, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            base_url: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(BASE_URL_ENV).filter(|url| !url.trim().is_empty());

        let timeout_secs = match lookup(TIMEOUT_ENV) {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| ConfigError::InvalidValue(TIMEOUT_ENV.to_string()))?,
            None => default_timeout_secs(),
        };

        Ok(ClientConfig {
            base_url,
            timeout_secs,
        })
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Sets the timeout in seconds, raising 0 to [`MIN_TIMEOUT_SECS`].
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs.max(MIN_TIMEOUT_SECS);
        self
    }

    /// Timeout as a `Duration`, never shorter than [`MIN_TIMEOUT_SECS`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(MIN_TIMEOUT_SECS))
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ClientConfig::from_vars(lookup(&[])).unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.timeout(), Duration::from_secs(5));
        assert!(config.base_url.is_none());
    }

    #[test]
    fn test_reads_variables() {
        let config = ClientConfig::from_vars(lookup(&[
            (BASE_URL_ENV, "http://pedidos:8080"),
            (TIMEOUT_ENV, " 12 "),
        ]))
        .unwrap();
        assert_eq!(config.base_url.as_deref(), Some("http://pedidos:8080"));
        assert_eq!(config.timeout_secs, 12);
    }

    #[test]
    fn test_blank_base_url_is_unset() {
        let config = ClientConfig::from_vars(lookup(&[(BASE_URL_ENV, "  ")])).unwrap();
        assert!(config.base_url.is_none());
    }

    #[test]
    fn test_invalid_timeout() {
        for bad in ["abc", "0", "-3"] {
            let err = ClientConfig::from_vars(lookup(&[(TIMEOUT_ENV, bad)])).unwrap_err();
            assert_eq!(err.to_string(), format!("Invalid value for {}", TIMEOUT_ENV));
        }
    }

    #[test]
    fn test_zero_timeout_is_raised_to_minimum() {
        let config = ClientConfig::default().with_timeout_secs(0);
        assert_eq!(config.timeout_secs, MIN_TIMEOUT_SECS);
        assert_eq!(config.timeout(), Duration::from_secs(1));

        let config = ClientConfig::default().with_timeout_secs(30);
        assert_eq!(config.timeout(), Duration::from_secs(30));

        let config: ClientConfig = serde_json::from_str(r#"{"timeout_secs": 0}"#).unwrap();
        assert_eq!(config.timeout(), Duration::from_secs(1));
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: ClientConfig = serde_json::from_str(r#"{"base_url": "http://a"}"#).unwrap();
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }
}
