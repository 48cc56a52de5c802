use serde::Deserialize;

/// Default base URL of the PyPI JSON API.
pub const DEFAULT_REGISTRY_BASE: &str = "https://pypi.org/pypi";

/// Default URL of the PyPI HTML search page.
pub const DEFAULT_SEARCH_URL: &str = "https://pypi.org/search/";

/// Default base URL of the pypistats.org package API.
pub const DEFAULT_STATS_BASE: &str = "https://pypistats.org/api/packages";

/// Endpoint and HTTP settings for [`PypiRegistry`](crate::PypiRegistry).
///
/// All fields use the public service defaults if not specified, so an empty
/// JSON object deserializes to the production configuration.
///
/// # Defaults
///
/// - `registry_base`: `"https://pypi.org/pypi"`
/// - `search_url`: `"https://pypi.org/search/"`
/// - `stats_base`: `"https://pypistats.org/api/packages"`
/// - `user_agent`: `"pypi-mcp/<crate version>"`
/// - `timeout_secs`: `Some(30)`
///
/// # Examples
///
/// ```
/// use pypi_registry::RegistryConfig;
///
/// let json = r#"{ "registry_base": "http://localhost:8080/pypi", "timeout_secs": null }"#;
/// let config: RegistryConfig = serde_json::from_str(json).unwrap();
///
/// assert_eq!(config.registry_base, "http://localhost:8080/pypi");
/// assert_eq!(config.search_url, "https://pypi.org/search/");
/// assert_eq!(config.timeout_secs, None);
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct RegistryConfig {
    #[serde(default = "default_registry_base")]
    pub registry_base: String,
    #[serde(default = "default_search_url")]
    pub search_url: String,
    #[serde(default = "default_stats_base")]
    pub stats_base: String,
    /// User agent for JSON API requests. Search requests always carry a
    /// browser identity instead.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Per-request timeout; `None` leaves requests unbounded.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: Option<u64>,
}

impl RegistryConfig {
    /// Configuration pointing every endpoint at a single local server.
    ///
    /// Paths mirror the public services: `/pypi`, `/search/` and
    /// `/api/packages`.
    pub fn with_base_url(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            registry_base: format!("{}/pypi", base),
            search_url: format!("{}/search/", base),
            stats_base: format!("{}/api/packages", base),
            ..Self::default()
        }
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            registry_base: default_registry_base(),
            search_url: default_search_url(),
            stats_base: default_stats_base(),
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_registry_base() -> String {
    DEFAULT_REGISTRY_BASE.to_string()
}

fn default_search_url() -> String {
    DEFAULT_SEARCH_URL.to_string()
}

fn default_stats_base() -> String {
    DEFAULT_STATS_BASE.to_string()
}

fn default_user_agent() -> String {
    format!("pypi-mcp/{}", env!("CARGO_PKG_VERSION"))
}

fn default_timeout_secs() -> Option<u64> {
    Some(30)
}
