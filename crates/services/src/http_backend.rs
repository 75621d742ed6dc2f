use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use kanji_core::model::{EntryId, UserEntry};

use crate::backend::{EntrySource, GradingBackend, SessionKind};
use crate::config::BackendConfig;
use crate::error::BackendError;

const SUCCESS_PATH: &str = "result/success/";
const FAILURE_PATH: &str = "result/failure/";
const PLANNED_PATH: &str = "planned";

/// REST client for the study backend.
#[derive(Clone)]
pub struct HttpBackend {
    client: Client,
    config: BackendConfig,
}

impl HttpBackend {
    /// Build a client for `config`.
    ///
    /// # Errors
    ///
    /// Returns `BackendError::Http` if the underlying HTTP client cannot be built.
    pub fn new(config: BackendConfig) -> Result<Self, BackendError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            config,
        })
    }

    #[must_use]
    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    async fn post_result(&self, path: &str, entry_id: EntryId) -> Result<(), BackendError> {
        let url = self.config.endpoint(path);
        log::debug!("POST {url} entry_id={entry_id}");

        let response = self
            .client
            .post(url)
            .json(&GradePayload { entry_id })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(BackendError::HttpStatus(response.status()));
        }
        Ok(())
    }

    async fn get_entries(&self, path: &str) -> Result<Vec<UserEntry>, BackendError> {
        let url = self.config.endpoint(path);
        log::debug!("GET {url}");

        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(BackendError::HttpStatus(response.status()));
        }
        Ok(response.json().await?)
    }
}

#[async_trait]
impl GradingBackend for HttpBackend {
    async fn grade_success(&self, entry_id: EntryId) -> Result<(), BackendError> {
        self.post_result(SUCCESS_PATH, entry_id).await
    }

    async fn grade_failure(&self, entry_id: EntryId) -> Result<(), BackendError> {
        self.post_result(FAILURE_PATH, entry_id).await
    }
}

#[async_trait]
impl EntrySource for HttpBackend {
    async fn fetch_entries(&self, kind: SessionKind) -> Result<Vec<UserEntry>, BackendError> {
        self.get_entries(kind.path()).await
    }

    async fn fetch_planned(&self) -> Result<Vec<UserEntry>, BackendError> {
        self.get_entries(PLANNED_PATH).await
    }
}

#[derive(Debug, Serialize)]
struct GradePayload {
    entry_id: EntryId,
}
