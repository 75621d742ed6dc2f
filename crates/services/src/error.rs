//! Shared error types for the services crate.

use thiserror::Error;

/// Errors from talking to the study backend.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BackendError {
    #[error("backend request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("backend unavailable: {0}")]
    Unavailable(String),
}

/// Errors reading backend configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),
    #[error("invalid {key} value: {raw}")]
    Invalid { key: &'static str, raw: String },
}

/// Errors emitted while starting or refreshing a session.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no cards to run right now")]
    Empty,
    #[error(transparent)]
    Backend(#[from] BackendError),
}
