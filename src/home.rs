use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::{Client, header};
use serde::Deserialize;
use serde_json::Value;

use crate::constants::api;
use crate::errors::HomeError;

/// Error body returned by the home API on failed requests.
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    message: String,
}

pub struct HomeClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl HomeClient {
    /// Create a client for `host`, which is either a bare host name or a URL
    /// with a scheme.
    pub fn new(host: &str, api_key: String) -> Result<Self> {
        Self::with_base_url(&base_url_for(host), api_key)
    }

    /// Create a client for an explicit base URL such as `http://127.0.0.1:8080`.
    pub fn with_base_url(base_url: &str, api_key: String) -> Result<Self> {
        let base_url = base_url.trim_end_matches('/');
        reqwest::Url::parse(base_url)
            .map_err(|e| HomeError::UrlError(format!("{base_url}: {e}")))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(api::REQUEST_TIMEOUT_SECS))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.to_string(),
            api_key,
        })
    }

    /// Full request URL for a resource path under `api/v3`.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}/{}",
            self.base_url,
            api::API_PREFIX,
            path.trim_start_matches('/')
        )
    }

    /// GET a resource and decode the response body as JSON.
    pub async fn get(&self, path: &str) -> Result<Value> {
        let url = self.endpoint(path);
        self.send_get(&url)
            .await
            .with_context(|| format!("GET {url} failed"))
    }

    async fn send_get(&self, url: &str) -> Result<Value, HomeError> {
        tracing::debug!(method = "GET", url, "Sending request");

        let response = self
            .client
            .get(url)
            .header(
                header::AUTHORIZATION,
                format!("{} {}", api::AUTH_SCHEME, self.api_key),
            )
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::error!(method = "GET", url, status = status.as_u16(), "Request failed");
            let message = match serde_json::from_str::<ErrorResponse>(&body) {
                Ok(err) => err.message,
                Err(_) => status
                    .canonical_reason()
                    .unwrap_or("unknown status")
                    .to_string(),
            };
            return Err(HomeError::ApiError {
                status_code: status.as_u16(),
                message,
            });
        }

        tracing::debug!(method = "GET", url, status = status.as_u16(), "Response received");

        Ok(serde_json::from_str(&body)?)
    }
}

/// Base URL for a configured host: bare host names get the default scheme.
pub fn base_url_for(host: &str) -> String {
    let host = host.trim().trim_end_matches('/');
    if host.contains("://") {
        host.to_string()
    } else {
        format!("{}://{}", api::DEFAULT_SCHEME, host)
    }
}
