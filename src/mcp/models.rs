//! MCP Protocol Models and Constants
//!
//! This module contains all data structures and constants related to the
//! Model Context Protocol (MCP) specification.

use serde::Deserialize;
use serde_json::Value;

// =============================================================================
// MCP Constants
// =============================================================================

/// Tool that turns a free-form prompt into a scene
pub const CREATE_PARTICLES_TOOL: &str = "create_particles";
/// Tool that lists the preset catalog
pub const LIST_PRESETS_TOOL: &str = "list_presets";
/// Tool that shows one preset by key
pub const QUICK_PRESET_TOOL: &str = "quick_preset";
/// URI for the widget template
pub const WIDGET_TEMPLATE_URI: &str = "ui://widget/particles.html";
/// Display name of the widget resource
pub const WIDGET_RESOURCE_NAME: &str = "Particle Widget";
/// MIME type for the widget
pub const WIDGET_MIME_TYPE: &str = "text/html+skybridge";
/// Server identifier
pub const SERVER_NAME: &str = "particle-presentations";
/// Protocol version for MCP
pub const PROTOCOL_VERSION: &str = "2024-11-05";

/// Standard JSON-RPC error codes used by the transport.
pub mod error_codes {
    /// Invalid JSON was received.
    pub const PARSE_ERROR: i32 = -32700;
    /// The method does not exist.
    pub const METHOD_NOT_FOUND: i32 = -32601;
}

// =============================================================================
// MCP Protocol Models
// =============================================================================

/// Standard JSON-RPC 2.0 Request envelope
#[derive(Debug, Deserialize)]
pub struct JsonRpcRequest {
    /// Protocol version (should be "2.0")
    #[allow(dead_code)]
    pub jsonrpc: Option<String>,

    /// Method name to invoke
    pub method: String,

    /// Parameters for the method
    pub params: Option<Value>,

    /// Request identifier, echoed back unchanged
    pub id: Option<Value>,
}
