use pypi_mcp::{PypiMcpServer, ServerConfig};
use rmcp::ServiceExt;
use rmcp::transport::io::stdio;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // stdout carries the protocol, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let server = PypiMcpServer::new(ServerConfig::default())?;

    tracing::info!("Starting PyPI MCP server");

    let service = server
        .serve(stdio())
        .await
        .map_err(|e| format!("failed to start MCP server: {}", e))?;

    let quit_reason = service.waiting().await?;
    tracing::info!("MCP server shut down: {:?}", quit_reason);

    Ok(())
}
