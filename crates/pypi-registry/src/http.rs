use crate::error::{PypiError, Result};
use bytes::Bytes;
use reqwest::header::HeaderMap;
use reqwest::{Client, RequestBuilder};
use serde_json::Value;
use std::time::Duration;

/// Thin GET helper over a shared `reqwest::Client`.
///
/// Classifies failures into the three registry error kinds:
/// - no response at all → [`PypiError::Transport`]
/// - non-2xx status → [`PypiError::Http`]
/// - body that is not JSON (for [`get_json`](Self::get_json)) → [`PypiError::Parse`]
///
/// Nothing is cached; every call issues exactly one request.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Creates a client with the given default user agent and optional
    /// per-request timeout.
    pub fn new(user_agent: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder().user_agent(user_agent);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(PypiError::ClientBuild)?;

        Ok(Self { client })
    }

    /// Fetches `url` and returns the raw body of a successful response.
    pub async fn get(&self, url: &str) -> Result<Bytes> {
        self.send(url, self.client.get(url)).await
    }

    /// Fetches `url` with query parameters and extra request headers.
    ///
    /// Headers given here take precedence over the client defaults, including
    /// the user agent.
    pub async fn get_with(
        &self,
        url: &str,
        query: &[(&str, &str)],
        headers: HeaderMap,
    ) -> Result<Bytes> {
        let request = self.client.get(url).query(query).headers(headers);
        self.send(url, request).await
    }

    /// Fetches `url` and parses the body as JSON.
    pub async fn get_json(&self, url: &str) -> Result<Value> {
        let body = self.get(url).await?;
        serde_json::from_slice(&body)
            .map_err(|e| PypiError::parse_error(format!("invalid JSON from {}: {}", url, e)))
    }

    async fn send(&self, url: &str, request: RequestBuilder) -> Result<Bytes> {
        tracing::debug!("GET {}", url);

        let response = request
            .send()
            .await
            .map_err(|e| PypiError::transport_error(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PypiError::Http {
                status,
                url: url.to_string(),
            });
        }

        response
            .bytes()
            .await
            .map_err(|e| PypiError::transport_error(url, e))
    }
}
