//! Model Context Protocol server for the PyPI registry.
//!
//! Exposes four tools over MCP stdio:
//!
//! - `get_package_info`: metadata for a package, optionally at a version
//! - `search_packages`: keyword search
//! - `get_package_releases`: all releases keyed by version
//! - `get_package_stats`: recent download counts
//!
//! Each call returns either its payload or `{"error": "..."}` (a one-element
//! list of it for `search_packages`); lookup failures never surface as
//! protocol errors.

pub mod config;
pub mod handlers;
pub mod response;
pub mod server;
pub mod tools;

pub use config::ServerConfig;
pub use response::{ToolError, ToolOutcome};
pub use server::PypiMcpServer;
