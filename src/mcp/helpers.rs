//! MCP Protocol Helpers
//!
//! This module contains helper functions for JSON-RPC communication,
//! tool result construction and OpenAI widget metadata.

use super::error::ToolError;
use serde_json::{json, Value};

/// Constructs the metadata required by the OpenAI widget system.
pub fn widget_meta() -> Value {
    json!({
        "openai/outputTemplate": super::models::WIDGET_TEMPLATE_URI,
        "openai/toolInvocation/invoking": "Preparing particles",
        "openai/toolInvocation/invoked": "Particles ready",
        "openai/widgetAccessible": true,
    })
}

/// Builds a JSON-RPC 2.0 success response.
///
/// # Arguments
///
/// * `id` – The request identifier that must be echoed back.
/// * `result` – The payload representing the successful outcome.
pub fn rpc_success(id: Value, result: Value) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "result": result,
    })
}

/// Builds a JSON-RPC 2.0 error response.
///
/// # Arguments
///
/// * `id` – The request identifier (or `null` if unavailable).
/// * `code` – The JSON-RPC error code (e.g., -32601 for method not found).
/// * `message` – Human-readable description of the error.
pub fn rpc_error(id: Value, code: i32, message: impl Into<String>) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "error": {
            "code": code,
            "message": message.into(),
        }
    })
}

/// A single `text` content block.
pub fn text_content(text: impl Into<String>) -> Value {
    json!({ "type": "text", "text": text.into() })
}

/// Tool result reporting an application-level failure.
pub fn tool_error_result(err: &ToolError) -> Value {
    json!({
        "content": [text_content(err.to_string())],
        "isError": true,
    })
}
