//! HTTP client for fetching archive pages as text.

use anyhow::{Context, Result};
use log::debug;
use reqwest::Client;
use std::time::Duration;

use crate::error::UpdateError;

/// User agent sent with every request.
pub const USER_AGENT: &str = "studio-versions-cli";

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Thin wrapper over a reqwest Client that reads response bodies as text.
///
/// Every failure (connect, timeout, non-success status, undecodable body) is
/// reported as [`UpdateError::Network`]. Nothing is retried.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Creates a new HTTP client wrapping the given reqwest Client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Builds a client with the crate's user agent and a bounded per-request timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self::new(client))
    }

    /// Performs a GET request and returns the full response body as text.
    #[tracing::instrument(skip(self))]
    pub async fn get_text(&self, url: &str) -> Result<String> {
        debug!("GET {}...", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| network_error(url, e))?;

        let response = response
            .error_for_status()
            .map_err(|e| network_error(url, e))?;

        let body = response.text().await.map_err(|e| network_error(url, e))?;

        debug!("Received {} bytes from {}", body.len(), url);
        Ok(body)
    }
}

fn network_error(url: &str, error: reqwest::Error) -> anyhow::Error {
    let msg = if error.is_timeout() {
        format!("request to {} timed out", url)
    } else if let Some(status) = error.status() {
        format!("HTTP {} for {}", status, url)
    } else {
        format!("request to {} failed: {}", url, error)
    };
    anyhow::Error::from(UpdateError::Network(msg))
}
