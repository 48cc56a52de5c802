use pypi_registry::RegistryConfig;
use serde::Deserialize;

/// Root configuration for the pypi-mcp server.
///
/// All fields use sensible defaults if not specified.
///
/// # Examples
///
/// ```
/// use pypi_mcp::config::ServerConfig;
///
/// let json = r#"{
///     "name": "pypi-mirror",
///     "registry": { "registry_base": "https://mirror.example.com/pypi" }
/// }"#;
///
/// let config: ServerConfig = serde_json::from_str(json).unwrap();
/// assert_eq!(config.name, "pypi-mirror");
/// assert_eq!(config.registry.registry_base, "https://mirror.example.com/pypi");
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Server name reported to MCP clients
    #[serde(default = "default_name")]
    pub name: String,
    /// Usage hint reported to MCP clients
    #[serde(default = "default_instructions")]
    pub instructions: String,
    #[serde(default)]
    pub registry: RegistryConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            instructions: default_instructions(),
            registry: RegistryConfig::default(),
        }
    }
}

fn default_name() -> String {
    "pypi".to_string()
}

fn default_instructions() -> String {
    "Look up Python packages on PyPI. Use get_package_info for metadata, \
     search_packages to find packages by keyword, get_package_releases for all \
     published versions, and get_package_stats for recent download counts."
        .to_string()
}
