//! Client for the public PyPI registry.
//!
//! This crate performs the lookups behind the pypi-mcp tools:
//!
//! - **Package info**: the `info` object from the PyPI JSON API, for the
//!   latest release or a specific version
//! - **Releases**: the `releases` map from the same endpoint
//! - **Search**: results scraped from the PyPI HTML search page
//! - **Stats**: recent download counts from pypistats.org
//!
//! Metadata is passed through as `serde_json` maps without imposing a schema.
//! Every failure is a typed [`PypiError`].
//!
//! # Examples
//!
//! ```no_run
//! use pypi_registry::{PypiRegistry, RegistryConfig};
//!
//! # #[tokio::main]
//! # async fn main() -> pypi_registry::Result<()> {
//! let registry = PypiRegistry::new(RegistryConfig::default())?;
//!
//! let info = registry.get_package_info("flask", Some("3.0.0")).await?;
//! println!("{}", info["summary"]);
//!
//! for result in registry.search_packages("web framework").await? {
//!     println!("{} {}: {}", result.name, result.version, result.description);
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod http;
pub mod registry;
pub mod search;
pub mod types;

pub use config::RegistryConfig;
pub use error::{PypiError, Result};
pub use http::HttpClient;
pub use registry::PypiRegistry;
pub use types::{PackageInfo, PackageQuery, ReleaseMap, SearchResult, StatsReport};
