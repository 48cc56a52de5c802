//! Shared helpers for dispatcher integration tests.

use pypi_mcp::{PypiMcpServer, ServerConfig};
use pypi_registry::{PypiRegistry, RegistryConfig};
use rmcp::model::{CallToolResult, RawContent};
use serde_json::{Map, Value};
use std::io::Write;
use std::sync::{Arc, Mutex};

/// Server whose every endpoint points at `base_url`.
pub(crate) fn server_for(base_url: &str) -> PypiMcpServer {
    let registry = PypiRegistry::new(RegistryConfig::with_base_url(base_url))
        .expect("Failed to build registry client");
    PypiMcpServer::with_registry(ServerConfig::default(), Arc::new(registry))
}

/// Builds a tool arguments object from a JSON literal.
pub(crate) fn args(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("Expected JSON object for arguments, got {}", other),
    }
}

/// Parses the JSON payload carried in a tool result's text content.
pub(crate) fn payload(result: &CallToolResult) -> Value {
    assert_eq!(result.content.len(), 1, "Expected exactly one content item");
    if let RawContent::Text(text) = &result.content[0].raw {
        serde_json::from_str(&text.text).expect("Tool payload is not JSON")
    } else {
        panic!("Expected text content, got: {:?}", result.content[0].raw);
    }
}

/// Asserts `value` is exactly `{"error": "<message>"}` and returns the message.
#[allow(dead_code)] // Not every test binary checks error objects
pub(crate) fn error_message(value: &Value) -> String {
    let object = value.as_object().expect("Expected error object");
    assert_eq!(object.len(), 1, "ToolError must have exactly one key");
    object["error"]
        .as_str()
        .expect("error must be a string")
        .to_string()
}

/// Captures formatted log output for the current thread.
#[derive(Clone, Default)]
#[allow(dead_code)] // Used by the logging tests only
pub(crate) struct LogCapture {
    buffer: Arc<Mutex<Vec<u8>>>,
}

#[allow(dead_code)]
impl LogCapture {
    /// Installs a fmt subscriber writing into this capture until the guard drops.
    pub(crate) fn install(&self) -> tracing::subscriber::DefaultGuard {
        let buffer = Arc::clone(&self.buffer);
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || CaptureWriter(Arc::clone(&buffer)))
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    pub(crate) fn contents(&self) -> String {
        let buffer = self.buffer.lock().expect("Failed to acquire log buffer");
        String::from_utf8_lossy(&buffer).into_owned()
    }
}

struct CaptureWriter(Arc<Mutex<Vec<u8>>>);

impl Write for CaptureWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0
            .lock()
            .expect("Failed to acquire log buffer")
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
