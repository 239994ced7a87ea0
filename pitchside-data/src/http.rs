//! Fetches datasets over HTTP.
//!
//! The datasets are resolved relative to a base URL, so a directory served
//! by any static file server works as a data root.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use url::Url;

use crate::error::DatasetLoadError;
use crate::source::{DatasetFiles, DatasetKind, DatasetSource};

/// Default user agent for dataset requests.
pub const DEFAULT_USER_AGENT: &str = "pitchside-data/0.1";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Building the HTTP client failed.
#[derive(Debug, Error)]
#[error("failed to build HTTP client")]
pub struct ClientBuildError(#[source] reqwest::Error);

/// Configuration for [`HttpDatasetSource`].
#[derive(Debug, Clone)]
pub struct HttpDatasetSourceConfig {
    /// URL of the directory holding the datasets.
    pub base_url: String,
    /// Dataset file names relative to `base_url`.
    pub files: DatasetFiles,
    /// Connect and request timeout.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
}

impl HttpDatasetSourceConfig {
    /// Configuration with default file names, timeout and user agent.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            files: DatasetFiles::default(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }

    /// Override the dataset file names.
    #[must_use]
    pub fn with_files(mut self, files: DatasetFiles) -> Self {
        self.files = files;
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// Dataset source backed by a `reqwest` client.
#[derive(Debug)]
pub struct HttpDatasetSource {
    client: Client,
    config: HttpDatasetSourceConfig,
}

impl HttpDatasetSource {
    /// Source with default settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientBuildError> {
        Self::with_config(HttpDatasetSourceConfig::new(base_url))
    }

    /// Source with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn with_config(config: HttpDatasetSourceConfig) -> Result<Self, ClientBuildError> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .build()
            .map_err(ClientBuildError)?;
        Ok(Self { client, config })
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &HttpDatasetSourceConfig {
        &self.config
    }

    /// URL of one dataset.
    ///
    /// The base is treated as a directory whether or not it ends in `/`.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetLoadError::InvalidUrl`] when the base URL does not
    /// parse or cannot be joined with the file name.
    pub fn dataset_url(&self, kind: DatasetKind) -> Result<Url, DatasetLoadError> {
        let base = format!("{}/", self.config.base_url.trim_end_matches('/'));
        Url::parse(&base)
            .and_then(|root| root.join(self.config.files.file_name(kind)))
            .map_err(|source| DatasetLoadError::InvalidUrl { kind, base, source })
    }
}

#[async_trait(?Send)]
impl DatasetSource for HttpDatasetSource {
    fn locate(&self, kind: DatasetKind) -> String {
        self.dataset_url(kind).map_or_else(
            |_| format!("{}/{}", self.config.base_url, self.config.files.file_name(kind)),
            String::from,
        )
    }

    async fn fetch(&self, kind: DatasetKind) -> Result<String, DatasetLoadError> {
        let url = self.dataset_url(kind)?;
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|source| DatasetLoadError::Request {
                kind,
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(DatasetLoadError::Status {
                kind,
                url: url.into(),
                status: status.as_u16(),
            });
        }

        response
            .text()
            .await
            .map_err(|source| DatasetLoadError::Request {
                kind,
                url: url.into(),
                source,
            })
    }
}
