//! Response creation utilities for MCP tool calls

use rmcp::model::{Annotated, CallToolResult, RawContent, RawTextContent};
use serde::Serialize;

/// Create a success response for MCP tool calls
pub fn create_success_response(message: String) -> CallToolResult {
    CallToolResult {
        content: vec![Annotated::new(
            RawContent::Text(RawTextContent { text: message }),
            None,
        )],
        is_error: Some(false),
    }
}

/// Create an error response for MCP tool calls
pub fn create_error_response(message: String) -> CallToolResult {
    CallToolResult {
        content: vec![Annotated::new(
            RawContent::Text(RawTextContent { text: message }),
            None,
        )],
        is_error: Some(true),
    }
}

/// Serialize a payload as pretty JSON text content.
///
/// Serialization failure is a wrapper-level fault, distinct from the
/// resolvers' fail-open degradation, and is reported as an error envelope.
pub fn create_json_response<T: Serialize>(payload: &T) -> CallToolResult {
    match serde_json::to_string_pretty(payload) {
        Ok(text) => create_success_response(text),
        Err(e) => create_error_response(format!("Failed to serialize response: {e}")),
    }
}
