//! PyPI registry client.
//!
//! Provides access to:
//! - Package metadata API (<https://pypi.org/pypi/{package}[/{version}]/json>)
//! - Search page (<https://pypi.org/search/?q={query}>), scraped
//! - Download statistics (<https://pypistats.org/api/packages/{package}/recent>)
//!
//! Responses are not cached; each call issues exactly one GET.

use crate::config::RegistryConfig;
use crate::error::{PypiError, Result};
use crate::http::HttpClient;
use crate::search::{SEARCH_ACCEPT, SEARCH_USER_AGENT, parse_search_results};
use crate::types::{PackageInfo, PackageQuery, ReleaseMap, SearchResult, StatsReport};
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

/// Client for the PyPI registry and pypistats.org.
///
/// Cheap to clone; clones share one HTTP client.
///
/// # Examples
///
/// ```no_run
/// # use pypi_registry::{PypiRegistry, RegistryConfig};
/// # #[tokio::main]
/// # async fn main() {
/// let registry = PypiRegistry::new(RegistryConfig::default()).unwrap();
///
/// let info = registry.get_package_info("requests", None).await.unwrap();
/// assert_eq!(info["name"], "requests");
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct PypiRegistry {
    http: Arc<HttpClient>,
    config: RegistryConfig,
}

impl PypiRegistry {
    /// Creates a registry client for the configured endpoints.
    pub fn new(config: RegistryConfig) -> Result<Self> {
        let http = HttpClient::new(
            &config.user_agent,
            config.timeout_secs.map(Duration::from_secs),
        )?;

        Ok(Self::with_client(Arc::new(http), config))
    }

    /// Creates a registry client that reuses an existing HTTP client.
    pub fn with_client(http: Arc<HttpClient>, config: RegistryConfig) -> Self {
        Self { http, config }
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Metadata endpoint URL for a query: `{registry_base}/{name}[/{version}]/json`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use pypi_registry::{PackageQuery, PypiRegistry, RegistryConfig};
    /// let registry = PypiRegistry::new(RegistryConfig::default()).unwrap();
    /// let query = PackageQuery::new("requests", Some("2.0.0")).unwrap();
    ///
    /// assert_eq!(
    ///     registry.metadata_url(&query),
    ///     "https://pypi.org/pypi/requests/2.0.0/json"
    /// );
    /// ```
    pub fn metadata_url(&self, query: &PackageQuery) -> String {
        let mut url = format!(
            "{}/{}",
            self.config.registry_base.trim_end_matches('/'),
            urlencoding::encode(query.name())
        );
        if let Some(version) = query.version() {
            url.push('/');
            url.push_str(&urlencoding::encode(version));
        }
        url.push_str("/json");
        url
    }

    /// Recent-downloads URL: `{stats_base}/{name}/recent`.
    pub fn stats_url(&self, name: &str) -> String {
        format!(
            "{}/{}/recent",
            self.config.stats_base.trim_end_matches('/'),
            urlencoding::encode(name)
        )
    }

    /// Fetches the `info` object for a package, optionally at a specific version.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the name is empty
    /// - the request fails or returns a non-success status
    /// - the body is not JSON or has no `info` object
    pub async fn get_package_info(&self, name: &str, version: Option<&str>) -> Result<PackageInfo> {
        let query = PackageQuery::new(name, version)?;
        let url = self.metadata_url(&query);
        let envelope = self.http.get_json(&url).await?;

        extract_info(envelope)
    }

    /// Searches PyPI and returns matching packages in relevance order.
    ///
    /// An empty result page yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, returns a non-success status,
    /// or any result on the page lacks its name, version or description.
    pub async fn search_packages(&self, query: &str) -> Result<Vec<SearchResult>> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(SEARCH_USER_AGENT));
        headers.insert(ACCEPT, HeaderValue::from_static(SEARCH_ACCEPT));

        let body = self
            .http
            .get_with(&self.config.search_url, &[("q", query)], headers)
            .await?;

        parse_search_results(&String::from_utf8_lossy(&body))
    }

    /// Fetches every release of a package, keyed by version string.
    ///
    /// A package without a `releases` field yields an empty map.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty, the request fails, returns a
    /// non-success status, or the body is not JSON.
    pub async fn get_package_releases(&self, name: &str) -> Result<ReleaseMap> {
        let query = PackageQuery::new(name, None)?;
        let url = self.metadata_url(&query);
        let envelope = self.http.get_json(&url).await?;

        extract_releases(envelope)
    }

    /// Fetches recent download counts from pypistats.org, unmodified.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty, the request fails, returns a
    /// non-success status, or the body is not a JSON object.
    pub async fn get_package_stats(&self, name: &str) -> Result<StatsReport> {
        let query = PackageQuery::new(name, None)?;
        let url = self.stats_url(query.name());

        match self.http.get_json(&url).await? {
            Value::Object(report) => Ok(report),
            other => Err(PypiError::parse_error(format!(
                "expected a JSON object from {}, got {}",
                url,
                json_kind(&other)
            ))),
        }
    }
}

fn extract_info(envelope: Value) -> Result<PackageInfo> {
    let mut envelope = match envelope {
        Value::Object(map) => map,
        other => {
            return Err(PypiError::parse_error(format!(
                "expected a JSON object, got {}",
                json_kind(&other)
            )));
        }
    };

    match envelope.remove("info") {
        Some(Value::Object(info)) => Ok(info),
        Some(other) => Err(PypiError::parse_error(format!(
            "'info' field is {}, expected an object",
            json_kind(&other)
        ))),
        None => Err(PypiError::parse_error("missing 'info' field")),
    }
}

fn extract_releases(envelope: Value) -> Result<ReleaseMap> {
    let mut envelope = match envelope {
        Value::Object(map) => map,
        other => {
            return Err(PypiError::parse_error(format!(
                "expected a JSON object, got {}",
                json_kind(&other)
            )));
        }
    };

    match envelope.remove("releases") {
        Some(Value::Object(releases)) => Ok(releases),
        None | Some(Value::Null) => Ok(ReleaseMap::new()),
        Some(other) => Err(PypiError::parse_error(format!(
            "'releases' field is {}, expected an object",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
