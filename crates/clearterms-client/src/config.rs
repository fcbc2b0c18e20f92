//! Client configuration.

use std::time::Duration;

use clearterms_core::{ClearTermsError, ClearTermsResult};
use tracing::debug;

/// Default analysis backend, including its `/api` prefix.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000/api";

/// Environment variable overriding the backend URL.
pub const API_URL_ENV: &str = "CLEARTERMS_API_URL";

/// Environment variable setting a request timeout in seconds.
pub const TIMEOUT_ENV: &str = "CLEARTERMS_TIMEOUT_SECS";

/// Settings for `AnalysisClient`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    /// `None` keeps the transport default.
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: None,
        }
    }
}

impl ClientConfig {
    /// Build from `CLEARTERMS_API_URL` and `CLEARTERMS_TIMEOUT_SECS`.
    pub fn from_env() -> ClearTermsResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ClearTermsResult<Self> {
        let mut config = Self::default();

        if let Some(url) = lookup(API_URL_ENV).filter(|u| !u.trim().is_empty()) {
            config = config.with_base_url(&url);
        }

        if let Some(raw) = lookup(TIMEOUT_ENV).filter(|t| !t.trim().is_empty()) {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                ClearTermsError::config(format!("{} must be a whole number of seconds, got '{}'", TIMEOUT_ENV, raw))
            })?;
            config = config.with_timeout(Duration::from_secs(secs));
        }

        debug!(base_url = %config.base_url, timeout = ?config.timeout, "Client config loaded");
        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
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
        let config = ClientConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.base_url, DEFAULT_API_URL);
        assert!(config.timeout.is_none());
    }

    #[test]
    fn test_env_overrides() {
        let config = ClientConfig::from_lookup(lookup(&[
            (API_URL_ENV, "https://clearterms.example/api/"),
            (TIMEOUT_ENV, "45"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "https://clearterms.example/api");
        assert_eq!(config.timeout, Some(Duration::from_secs(45)));
    }

    #[test]
    fn test_bad_timeout() {
        let err = ClientConfig::from_lookup(lookup(&[(TIMEOUT_ENV, "soon")])).unwrap_err();
        assert!(matches!(err, ClearTermsError::Config(_)));
    }
}
