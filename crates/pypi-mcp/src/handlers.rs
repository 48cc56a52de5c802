//! Business logic behind each tool.
//!
//! Every handler forwards to [`PypiRegistry`] and folds any failure into a
//! [`ToolError`], logging the tool name alongside the error.

use crate::response::{ToolError, ToolOutcome};
use pypi_registry::{PackageInfo, PypiRegistry, ReleaseMap, SearchResult, StatsReport};
use std::fmt::Display;
use std::sync::Arc;

pub const GET_PACKAGE_INFO: &str = "get_package_info";
pub const SEARCH_PACKAGES: &str = "search_packages";
pub const GET_PACKAGE_RELEASES: &str = "get_package_releases";
pub const GET_PACKAGE_STATS: &str = "get_package_stats";

/// Tool handlers sharing one registry client.
#[derive(Debug, Clone)]
pub struct ToolHandlers {
    registry: Arc<PypiRegistry>,
}

impl ToolHandlers {
    pub fn new(registry: Arc<PypiRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &PypiRegistry {
        &self.registry
    }

    pub async fn get_package_info(
        &self,
        package_name: &str,
        version: Option<&str>,
    ) -> ToolOutcome<PackageInfo> {
        tracing::info!(
            "Getting package info for: {}, version: {}",
            package_name,
            version.unwrap_or("latest")
        );

        match self.registry.get_package_info(package_name, version).await {
            Ok(info) => ToolOutcome::Success(info),
            Err(e) => ToolOutcome::Failure(tool_error(GET_PACKAGE_INFO, &e)),
        }
    }

    /// Failures are wrapped in a one-element list so callers always get a list.
    pub async fn search_packages(
        &self,
        query: &str,
    ) -> ToolOutcome<Vec<SearchResult>, Vec<ToolError>> {
        tracing::info!("Searching packages with query: {}", query);

        match self.registry.search_packages(query).await {
            Ok(results) => ToolOutcome::Success(results),
            Err(e) => ToolOutcome::Failure(vec![tool_error(SEARCH_PACKAGES, &e)]),
        }
    }

    pub async fn get_package_releases(&self, package_name: &str) -> ToolOutcome<ReleaseMap> {
        tracing::info!("Getting package releases for: {}", package_name);

        match self.registry.get_package_releases(package_name).await {
            Ok(releases) => ToolOutcome::Success(releases),
            Err(e) => ToolOutcome::Failure(tool_error(GET_PACKAGE_RELEASES, &e)),
        }
    }

    pub async fn get_package_stats(&self, package_name: &str) -> ToolOutcome<StatsReport> {
        tracing::info!("Getting package stats for: {}", package_name);

        match self.registry.get_package_stats(package_name).await {
            Ok(stats) => ToolOutcome::Success(stats),
            Err(e) => ToolOutcome::Failure(tool_error(GET_PACKAGE_STATS, &e)),
        }
    }
}

/// Human-readable description of what a tool was doing, used as the error
/// message prefix.
pub fn activity(tool: &str) -> &'static str {
    match tool {
        GET_PACKAGE_INFO => "getting package info",
        SEARCH_PACKAGES => "searching packages",
        GET_PACKAGE_RELEASES => "getting package releases",
        GET_PACKAGE_STATS => "getting package stats",
        _ => "calling tool",
    }
}

/// Logs and builds the [`ToolError`] for a failed call of `tool`.
pub fn tool_error(tool: &str, detail: impl Display) -> ToolError {
    let message = format!("An error occurred while {}: {}", activity(tool), detail);
    tracing::error!(tool = tool, "{}", message);
    ToolError::new(message)
}
