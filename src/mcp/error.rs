//! Tool-level errors.
//!
//! These never become JSON-RPC errors: a failing tool call is still a
//! successful RPC whose result carries `isError: true`.

use crate::particles::widget::WidgetError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Missing required argument: {0}")]
    MissingArgument(&'static str),

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("Failed to render widget: {0}")]
    Widget(#[from] WidgetError),

    #[error("Failed to encode scene: {0}")]
    Encode(#[from] serde_json::Error),
}
