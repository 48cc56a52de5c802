//! Errors produced by the PyPI registry client.
//!
//! Every lookup fails with one of three kinds: the upstream answered with a
//! non-success status, the body could not be interpreted, or the request never
//! got a response at all.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors returned by [`PypiRegistry`](crate::PypiRegistry) operations.
///
/// # Examples
///
/// ```
/// use pypi_registry::PypiError;
/// use reqwest::StatusCode;
///
/// let error = PypiError::Http {
///     status: StatusCode::NOT_FOUND,
///     url: "https://pypi.org/pypi/missing/json".into(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "HTTP 404 Not Found for https://pypi.org/pypi/missing/json"
/// );
/// ```
#[derive(Error, Debug)]
pub enum PypiError {
    /// Upstream returned a non-success status code
    #[error("HTTP {status} for {url}")]
    Http { status: StatusCode, url: String },

    /// Body was not valid JSON, lacked an expected field, or the HTML
    /// lacked an expected element
    #[error("failed to parse response: {reason}")]
    Parse { reason: String },

    /// Connection, DNS, timeout or body-read failure
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Package name was empty
    #[error("invalid package name '{name}': must not be empty")]
    InvalidPackageName { name: String },

    /// HTTP client could not be constructed
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
}

/// Result type alias for registry operations.
pub type Result<T> = std::result::Result<T, PypiError>;

impl PypiError {
    /// Create a parse error from any displayable reason.
    pub fn parse_error(reason: impl Into<String>) -> Self {
        Self::Parse {
            reason: reason.into(),
        }
    }

    /// Create a transport error for the given URL.
    pub fn transport_error(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Transport {
            url: url.into(),
            source,
        }
    }
}
