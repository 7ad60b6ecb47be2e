/*
[INPUT]:  HTTP configuration (base URL, timeouts)
[OUTPUT]: Configured reqwest client ready for API calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use crate::http::{Result, TaskStoreError};
use crate::types::ApiErrorBody;
use reqwest::{Client, Method, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// Default base URL for the task store
const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Environment variable overriding the task store base URL
pub const API_URL_ENV: &str = "TASKBOARD_API_URL";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// HTTP client for the task store API
#[derive(Debug, Clone)]
pub struct TaskStoreClient {
    http_client: Client,
    base_url: Url,
}

impl TaskStoreClient {
    /// Create a new client with default configuration against the default base URL
    pub fn new() -> Result<Self> {
        Self::with_config_and_base_url(ClientConfig::default(), DEFAULT_BASE_URL)
    }

    /// Create a new client taking the base URL from `TASKBOARD_API_URL`,
    /// falling back to the default when unset or empty
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var(API_URL_ENV)
            .ok()
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self::with_config_and_base_url(ClientConfig::default(), &base_url)
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Self::with_config_and_base_url(config, DEFAULT_BASE_URL)
    }

    /// Create a new client with custom configuration and an explicit base URL
    pub fn with_config_and_base_url(config: ClientConfig, base_url: &str) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            http_client,
            base_url: Url::parse(base_url)?,
        })
    }

    /// Get the configured base URL
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build request builder for a store endpoint
    pub(crate) fn request(&self, method: Method, endpoint: &str) -> Result<RequestBuilder> {
        let url = self.base_url.join(endpoint)?;
        Ok(self.http_client.request(method, url))
    }

    /// Send a request and deserialize a JSON success body.
    ///
    /// Non-success statuses become [`TaskStoreError::Api`], carrying the
    /// store's `error` message when one is attached.
    pub(crate) async fn send_json<T>(&self, builder: RequestBuilder) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(error_from_response(status, &body));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Send a request where any 2xx status (including 204 No Content) is
    /// success and the body is discarded.
    pub(crate) async fn send_no_content(&self, builder: RequestBuilder) -> Result<()> {
        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(error_from_response(status, &body));
        }

        debug!(status = status.as_u16(), "request accepted");
        Ok(())
    }
}

/// Map a non-success response to an API error, preferring the message the
/// store put in its `{"error": ...}` body.
fn error_from_response(status: StatusCode, body: &str) -> TaskStoreError {
    let message = serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .map(|parsed| parsed.error)
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string()
        });

    TaskStoreError::api_error(status, message)
}
