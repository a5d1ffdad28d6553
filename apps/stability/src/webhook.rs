//! # Webhook Client
//!
//! Posts survey payloads to the external submission endpoint.
//!
//! One request per call: no retry, no queuing. A non-2xx status counts as a
//! failure. Requests only time out when a timeout is configured.

use serde::Serialize;
use stability_core::{AnalysisRequest, SubmissionPayload};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors from the webhook client.
#[derive(Debug, Error)]
pub enum WebhookError {
    /// The request could not be sent or the connection failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("endpoint responded with status {status}")]
    Status { status: u16, body: String },
}

/// HTTP client for the submission endpoint.
#[derive(Debug, Clone)]
pub struct WebhookClient {
    url: String,
    client: reqwest::Client,
}

impl WebhookClient {
    /// Create a client posting to `url`.
    pub fn new(url: impl Into<String>) -> Result<Self, WebhookError> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self {
            url: url.into(),
            client,
        })
    }

    /// Create a client that abandons requests after `timeout`.
    pub fn with_timeout(url: impl Into<String>, timeout: Duration) -> Result<Self, WebhookError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            url: url.into(),
            client,
        })
    }

    /// The endpoint URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Post one survey response.
    pub async fn submit(&self, payload: &SubmissionPayload) -> Result<(), WebhookError> {
        self.post(payload).await
    }

    /// Post a request for a full analysis.
    pub async fn request_analysis(&self, request: &AnalysisRequest) -> Result<(), WebhookError> {
        self.post(request).await
    }

    async fn post<T: Serialize + ?Sized>(&self, body: &T) -> Result<(), WebhookError> {
        let response = self.client.post(&self.url).json(body).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "webhook rejected payload");
            return Err(WebhookError::Status {
                status: status.as_u16(),
                body,
            });
        }

        debug!(status = status.as_u16(), "webhook accepted payload");
        Ok(())
    }
}
