use std::env;
use std::time::Duration;

use crate::error::ConfigError;

pub const BASE_URL_VAR: &str = "KANJI_API_BASE_URL";
pub const TIMEOUT_VAR: &str = "KANJI_API_TIMEOUT_SECS";

/// Where the study backend lives and how long the transport may wait on it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BackendConfig {
    pub base_url: String,
    /// Per-request timeout; `None` leaves the transport's default in place.
    pub timeout: Option<Duration>,
}

impl BackendConfig {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: None,
        }
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Read `KANJI_API_BASE_URL` and the optional `KANJI_API_TIMEOUT_SECS`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Missing` if the base URL is unset or blank, and
    /// `ConfigError::Invalid` if the timeout is not a positive integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`BackendConfig::from_env`], reading variables through `lookup`.
    ///
    /// # Errors
    ///
    /// See [`BackendConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let base_url = lookup(BASE_URL_VAR)
            .filter(|value| !value.trim().is_empty())
            .ok_or(ConfigError::Missing(BASE_URL_VAR))?;

        let mut config = Self::new(base_url.trim());
        if let Some(raw) = lookup(TIMEOUT_VAR) {
            let secs = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| ConfigError::Invalid {
                    key: TIMEOUT_VAR,
                    raw: raw.clone(),
                })?;
            config = config.with_timeout(Duration::from_secs(secs));
        }
        Ok(config)
    }

    /// Absolute URL for a backend route such as `"result/success/"`.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn reads_base_url_and_timeout() {
        let config = BackendConfig::from_lookup(lookup(&[
            (BASE_URL_VAR, "https://api.example.com/"),
            (TIMEOUT_VAR, "15"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "https://api.example.com/");
        assert_eq!(config.timeout, Some(Duration::from_secs(15)));
    }

    #[test]
    fn missing_or_blank_base_url_is_an_error() {
        assert_eq!(
            BackendConfig::from_lookup(lookup(&[])),
            Err(ConfigError::Missing(BASE_URL_VAR))
        );
        assert_eq!(
            BackendConfig::from_lookup(lookup(&[(BASE_URL_VAR, "  ")])),
            Err(ConfigError::Missing(BASE_URL_VAR))
        );
    }

    #[test]
    fn rejects_bad_timeout() {
        let err = BackendConfig::from_lookup(lookup(&[
            (BASE_URL_VAR, "http://localhost:8000"),
            (TIMEOUT_VAR, "0"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: TIMEOUT_VAR, .. }));
    }

    #[test]
    fn endpoint_joins_with_single_slash() {
        let config = BackendConfig::new("http://localhost:8000/api/");
        assert_eq!(
            config.endpoint("/result/success/"),
            "http://localhost:8000/api/result/success/"
        );
        assert_eq!(config.endpoint("lessons"), "http://localhost:8000/api/lessons");
    }
}
