// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! HTTP transport for API calls.

use reqwest::{Client, Url};

use crate::config::ApiConfig;
use crate::error::ThirtyBoxesError;

/// HTTP client for API operations.
///
/// One blocking request per call: no retry, backoff, or caching.
/// Callers wanting resilience wrap it themselves.
#[derive(Debug)]
pub(crate) struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Creates a new HTTP client.
    ///
    /// # Errors
    ///
    /// Returns an error if HTTP client creation fails.
    pub fn new(config: &ApiConfig) -> Result<Self, ThirtyBoxesError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .user_agent(&config.user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Issues a GET and returns the raw response body.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or returns a non-success
    /// status code.
    pub async fn get(&self, url: Url) -> Result<Vec<u8>, ThirtyBoxesError> {
        tracing::debug!(%url, "calling the 30boxes API");
        let resp = self.client.get(url).send().await?;

        match resp.status() {
            reqwest::StatusCode::OK => Ok(resp.bytes().await?.to_vec()),
            status => {
                let text = resp
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unable to read response".to_string());
                Err(ThirtyBoxesError::Http(format!("{status}: {text}")))
            }
        }
    }
}
