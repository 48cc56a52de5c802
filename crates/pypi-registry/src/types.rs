use crate::error::{PypiError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The `info` object of a PyPI JSON API response, passed through verbatim.
pub type PackageInfo = Map<String, Value>;

/// The `releases` object of a PyPI JSON API response: version string to the
/// list of uploaded files for that version.
pub type ReleaseMap = Map<String, Value>;

/// Download statistics as returned by pypistats.org.
pub type StatsReport = Map<String, Value>;

/// Target of a metadata lookup.
///
/// The name is taken as given; the registry is the source of truth for
/// case and existence.
///
/// # Examples
///
/// ```
/// use pypi_registry::PackageQuery;
///
/// let query = PackageQuery::new("requests", Some("2.31.0")).unwrap();
/// assert_eq!(query.name(), "requests");
/// assert_eq!(query.version(), Some("2.31.0"));
///
/// assert!(PackageQuery::new("", None).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageQuery {
    name: String,
    version: Option<String>,
}

impl PackageQuery {
    /// Creates a query, rejecting empty names. An empty version string means
    /// the latest release.
    pub fn new(name: impl Into<String>, version: Option<&str>) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(PypiError::InvalidPackageName { name });
        }

        Ok(Self {
            name,
            version: version.filter(|v| !v.is_empty()).map(String::from),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }
}

/// One package from the PyPI search results page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub name: String,
    pub version: String,
    pub description: String,
}
