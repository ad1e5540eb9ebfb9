// SPDX-FileCopyrightText: 2026 Hwbot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the Practicum homework-statuses API.
//!
//! Performs one authenticated GET per polling cycle and returns the parsed
//! JSON body. No retries here: the polling loop's fixed sleep interval is
//! the retry policy.

use std::time::Duration;

use hwbot_config::model::PracticumConfig;
use hwbot_core::HwbotError;
use reqwest::header::{HeaderMap, HeaderValue};
use tracing::debug;

/// HTTP client for the homework-statuses endpoint.
///
/// Holds a connection-pooled reqwest client with the `Authorization: OAuth`
/// header and an explicit per-request timeout baked in at construction.
#[derive(Debug, Clone)]
pub struct PracticumClient {
    client: reqwest::Client,
    base_url: String,
}

impl PracticumClient {
    /// Creates a new Practicum API client.
    ///
    /// # Arguments
    /// * `token` - Practicum OAuth token, sent as `Authorization: OAuth <token>`
    /// * `config` - endpoint URL and request timeout
    pub fn new(token: &str, config: &PracticumConfig) -> Result<Self, HwbotError> {
        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("OAuth {token}"))
            .map_err(|e| HwbotError::Config(format!("invalid API token header value: {e}")))?;
        auth.set_sensitive(true);
        headers.insert("Authorization", auth);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| HwbotError::Request {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            base_url: config.endpoint.clone(),
        })
    }

    /// Overrides the base URL (for testing with wiremock).
    #[cfg(test)]
    pub fn with_base_url(mut self, url: String) -> Self {
        self.base_url = url;
        self
    }

    /// Fetches homework statuses changed since `from_date` (epoch seconds).
    ///
    /// Returns the parsed response body as generic JSON; shape checking is
    /// the job of [`crate::validate`]. Transport failure maps to
    /// [`HwbotError::Request`], a non-200 status to [`HwbotError::Response`],
    /// and an unparseable body to [`HwbotError::Schema`].
    pub async fn get_homework_statuses(
        &self,
        from_date: i64,
    ) -> Result<serde_json::Value, HwbotError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(|e| HwbotError::Request {
                message: format!("homework-statuses request failed: {e}"),
                source: Some(Box::new(e)),
            })?;

        let status = response.status();
        debug!(status = %status, from_date, "homework-statuses response received");

        if !status.is_success() {
            return Err(HwbotError::Response {
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|e| HwbotError::Request {
            message: format!("failed to read response body: {e}"),
            source: Some(Box::new(e)),
        })?;

        serde_json::from_str(&body)
            .map_err(|e| HwbotError::Schema(format!("response body is not valid JSON: {e}")))
    }
}
