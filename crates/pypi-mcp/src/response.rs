//! Uniform success / error payloads returned by every tool.

use rmcp::model::{CallToolResult, Content};
use serde::{Deserialize, Serialize};

/// Error value returned in place of a tool's normal payload.
///
/// Serializes as `{"error": "<message>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolError {
    pub error: String,
}

impl ToolError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// Result of one tool call: the success payload or the error payload, never
/// both.
///
/// Serialized untagged, so the wire shape is exactly `T` or exactly `E`.
///
/// # Examples
///
/// ```
/// use pypi_mcp::response::{ToolError, ToolOutcome};
///
/// let ok: ToolOutcome<Vec<u32>> = ToolOutcome::Success(vec![1, 2]);
/// assert_eq!(serde_json::to_string(&ok).unwrap(), "[1,2]");
///
/// let failed: ToolOutcome<Vec<u32>> = ToolOutcome::Failure(ToolError::new("boom"));
/// assert_eq!(serde_json::to_string(&failed).unwrap(), r#"{"error":"boom"}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ToolOutcome<T, E = ToolError> {
    Success(T),
    Failure(E),
}

impl<T, E> ToolOutcome<T, E>
where
    T: Serialize,
    E: Serialize,
{
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Converts into an MCP tool result carrying the JSON payload as text.
    ///
    /// Failure payloads set `is_error` so hosts can tell them apart without
    /// inspecting the body.
    pub fn into_call_result(self) -> CallToolResult {
        let is_failure = self.is_failure();
        match serde_json::to_string(&self) {
            Ok(text) if is_failure => CallToolResult::error(vec![Content::text(text)]),
            Ok(text) => CallToolResult::success(vec![Content::text(text)]),
            Err(e) => {
                let error = ToolError::new(format!(
                    "An error occurred while encoding the result: {}",
                    e
                ));
                let text = serde_json::to_string(&error).unwrap_or_default();
                CallToolResult::error(vec![Content::text(text)])
            }
        }
    }
}
