//! Tool registry for MCP operations
//!
//! Each PyPI lookup is an [`McpTool`] registered by name. The server looks
//! tools up here for both `tools/list` and `tools/call`.

use crate::handlers::{
    GET_PACKAGE_INFO, GET_PACKAGE_RELEASES, GET_PACKAGE_STATS, SEARCH_PACKAGES, ToolHandlers,
    tool_error,
};
use crate::response::ToolOutcome;
use rmcp::Error as McpError;
use rmcp::model::{CallToolResult, Tool};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Context shared by all tools during execution
#[derive(Debug, Clone)]
pub struct ToolContext {
    pub tool_handlers: Arc<ToolHandlers>,
}

impl ToolContext {
    pub fn new(tool_handlers: Arc<ToolHandlers>) -> Self {
        Self { tool_handlers }
    }
}

/// Interface implemented by every tool
#[async_trait::async_trait]
pub trait McpTool: Send + Sync {
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// JSON schema of the tool's arguments
    fn schema(&self) -> Value;

    /// Runs the tool. Lookup failures are reported inside the returned
    /// result, never as `Err`.
    async fn execute(
        &self,
        arguments: Map<String, Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError>;
}

/// Registry of tools keyed by name
#[derive(Default)]
pub struct ToolRegistry {
    tools: BTreeMap<String, Box<dyn McpTool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<T: McpTool + 'static>(&mut self, tool: T) {
        self.tools.insert(tool.name().to_string(), Box::new(tool));
    }

    pub fn get_tool(&self, name: &str) -> Option<&dyn McpTool> {
        self.tools.get(name).map(|tool| tool.as_ref())
    }

    pub fn list_tool_names(&self) -> Vec<String> {
        self.tools.keys().cloned().collect()
    }

    /// All registered tools as MCP `Tool` descriptors, sorted by name
    pub fn list_tools(&self) -> Vec<Tool> {
        self.tools
            .values()
            .map(|tool| {
                let schema_map = match tool.schema() {
                    Value::Object(map) => map,
                    _ => Map::new(),
                };

                Tool {
                    name: tool.name().into(),
                    description: Some(tool.description().into()),
                    input_schema: Arc::new(schema_map),
                    annotations: None,
                }
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

/// Registers the four PyPI tools
pub fn register_pypi_tools(registry: &mut ToolRegistry) {
    registry.register(GetPackageInfoTool);
    registry.register(SearchPackagesTool);
    registry.register(GetPackageReleasesTool);
    registry.register(GetPackageStatsTool);
}

fn parse_arguments<T: DeserializeOwned>(
    tool: &str,
    arguments: Map<String, Value>,
) -> std::result::Result<T, String> {
    serde_json::from_value(Value::Object(arguments)).map_err(|e| {
        let message = format!("invalid arguments: {}", e);
        tracing::warn!("Rejected call to {}: {}", tool, message);
        message
    })
}

fn package_name_schema() -> Value {
    serde_json::json!({
        "type": "string",
        "description": "The name of the package"
    })
}

#[derive(Debug, Deserialize)]
struct PackageInfoArgs {
    package_name: String,
    #[serde(default)]
    version: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchArgs {
    query: String,
}

#[derive(Debug, Deserialize)]
struct PackageNameArgs {
    package_name: String,
}

/// Detailed metadata for a package
pub struct GetPackageInfoTool;

#[async_trait::async_trait]
impl McpTool for GetPackageInfoTool {
    fn name(&self) -> &'static str {
        GET_PACKAGE_INFO
    }

    fn description(&self) -> &'static str {
        "Get detailed information about a package, optionally for a specific version"
    }

    fn schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "package_name": package_name_schema(),
                "version": {
                    "type": "string",
                    "description": "Optional, specify the version number"
                }
            },
            "required": ["package_name"]
        })
    }

    async fn execute(
        &self,
        arguments: Map<String, Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let outcome = match parse_arguments::<PackageInfoArgs>(self.name(), arguments) {
            Ok(args) => {
                context
                    .tool_handlers
                    .get_package_info(&args.package_name, args.version.as_deref())
                    .await
            }
            Err(e) => ToolOutcome::Failure(tool_error(self.name(), e)),
        };
        Ok(outcome.into_call_result())
    }
}

/// Keyword search over PyPI
pub struct SearchPackagesTool;

#[async_trait::async_trait]
impl McpTool for SearchPackagesTool {
    fn name(&self) -> &'static str {
        SEARCH_PACKAGES
    }

    fn description(&self) -> &'static str {
        "Search for packages by keyword"
    }

    fn schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "Search keyword"
                }
            },
            "required": ["query"]
        })
    }

    async fn execute(
        &self,
        arguments: Map<String, Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let outcome = match parse_arguments::<SearchArgs>(self.name(), arguments) {
            Ok(args) => context.tool_handlers.search_packages(&args.query).await,
            Err(e) => ToolOutcome::Failure(vec![tool_error(self.name(), e)]),
        };
        Ok(outcome.into_call_result())
    }
}

/// Every published release of a package
pub struct GetPackageReleasesTool;

#[async_trait::async_trait]
impl McpTool for GetPackageReleasesTool {
    fn name(&self) -> &'static str {
        GET_PACKAGE_RELEASES
    }

    fn description(&self) -> &'static str {
        "Get all release versions of a package"
    }

    fn schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "package_name": package_name_schema()
            },
            "required": ["package_name"]
        })
    }

    async fn execute(
        &self,
        arguments: Map<String, Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let outcome = match parse_arguments::<PackageNameArgs>(self.name(), arguments) {
            Ok(args) => {
                context
                    .tool_handlers
                    .get_package_releases(&args.package_name)
                    .await
            }
            Err(e) => ToolOutcome::Failure(tool_error(self.name(), e)),
        };
        Ok(outcome.into_call_result())
    }
}

/// Recent download statistics from pypistats.org
pub struct GetPackageStatsTool;

#[async_trait::async_trait]
impl McpTool for GetPackageStatsTool {
    fn name(&self) -> &'static str {
        GET_PACKAGE_STATS
    }

    fn description(&self) -> &'static str {
        "Get download statistics for a package"
    }

    fn schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "package_name": package_name_schema()
            },
            "required": ["package_name"]
        })
    }

    async fn execute(
        &self,
        arguments: Map<String, Value>,
        context: &ToolContext,
    ) -> std::result::Result<CallToolResult, McpError> {
        let outcome = match parse_arguments::<PackageNameArgs>(self.name(), arguments) {
            Ok(args) => {
                context
                    .tool_handlers
                    .get_package_stats(&args.package_name)
                    .await
            }
            Err(e) => ToolOutcome::Failure(tool_error(self.name(), e)),
        };
        Ok(outcome.into_call_result())
    }
}
