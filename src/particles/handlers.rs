//! REST API handlers for the particle presentation app
//!
//! Plain HTTP endpoints that sit next to the MCP transport.

use super::state::SharedState;
use crate::mcp::models::SERVER_NAME;
use axum::{response::IntoResponse, routing::get, Json, Router};
use serde_json::json;

/// Creates routes for the non-MCP endpoints
pub fn routes() -> Router<SharedState> {
    Router::new().route("/health", get(health))
}

/// Endpoint: GET /health
async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "app": SERVER_NAME,
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
