//! MCP server exposing the PyPI tools

use crate::config::ServerConfig;
use crate::handlers::ToolHandlers;
use crate::tools::{ToolContext, ToolRegistry, register_pypi_tools};
use pypi_registry::PypiRegistry;
use rmcp::model::*;
use rmcp::service::RequestContext;
use rmcp::{Error as McpError, RoleServer, ServerHandler};
use serde_json::Value;
use std::sync::Arc;

/// MCP server holding the tool registry and the shared registry client.
///
/// Calls are independent: the only shared state is the immutable client, so
/// concurrent `tools/call` requests never wait on each other.
#[derive(Clone)]
pub struct PypiMcpServer {
    name: String,
    instructions: String,
    tool_registry: Arc<ToolRegistry>,
    tool_context: Arc<ToolContext>,
}

impl PypiMcpServer {
    /// Creates a server with a registry client built from `config.registry`.
    pub fn new(config: ServerConfig) -> pypi_registry::Result<Self> {
        let registry = PypiRegistry::new(config.registry.clone())?;
        Ok(Self::with_registry(config, Arc::new(registry)))
    }

    /// Creates a server around an existing registry client.
    pub fn with_registry(config: ServerConfig, registry: Arc<PypiRegistry>) -> Self {
        let mut tool_registry = ToolRegistry::new();
        register_pypi_tools(&mut tool_registry);

        let tool_handlers = Arc::new(ToolHandlers::new(registry));

        Self {
            name: config.name,
            instructions: config.instructions,
            tool_registry: Arc::new(tool_registry),
            tool_context: Arc::new(ToolContext::new(tool_handlers)),
        }
    }

    pub fn tool_registry(&self) -> &ToolRegistry {
        &self.tool_registry
    }

    /// Runs the named tool with the given arguments.
    ///
    /// Only an unknown tool name is an `Err`; every registered tool reports
    /// its failures inside the returned result.
    pub async fn dispatch(
        &self,
        name: &str,
        arguments: serde_json::Map<String, Value>,
    ) -> std::result::Result<CallToolResult, McpError> {
        match self.tool_registry.get_tool(name) {
            Some(tool) => tool.execute(arguments, &self.tool_context).await,
            None => {
                tracing::warn!("Unknown tool requested: {}", name);
                Err(McpError::invalid_request(
                    format!("Unknown tool: {}", name),
                    None,
                ))
            }
        }
    }
}

impl ServerHandler for PypiMcpServer {
    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, McpError> {
        Ok(ListToolsResult {
            tools: self.tool_registry.list_tools(),
            next_cursor: None,
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, McpError> {
        self.dispatch(&request.name, request.arguments.unwrap_or_default())
            .await
    }

    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: self.name.clone(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            instructions: Some(self.instructions.clone()),
        }
    }
}
