//! MCP (Model Context Protocol) route handlers
//!
//! This module implements the Model Context Protocol handlers for the particle
//! presentation app. `dispatch` and `handle_tool_call` are public so tests can
//! drive them without going through HTTP.

use super::{error::ToolError, helpers::*, models::*, session::SESSION_HEADER};
use crate::particles::{
    helpers::{adjust_mood, format_preset_listing, match_prompt},
    models::{CreateParticlesInput, Mood, QuickPresetInput, SceneDescriptor},
    state::{AppState, SharedState},
    widget::render_widget_html,
};
use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{post, MethodRouter},
    Json, Router,
};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use uuid::Uuid;

/// Creates routes for MCP-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/", mcp_endpoint())
        .route("/mcp", mcp_endpoint()) // Standard endpoint
        .route("/mcp/", mcp_endpoint()) // Trailing slash safety
}

/// POST carries JSON-RPC, OPTIONS short-circuits, everything else is a 405
fn mcp_endpoint() -> MethodRouter<SharedState> {
    post(handle_mcp)
        .options(handle_preflight)
        .fallback(handle_method_not_allowed)
}

async fn handle_preflight() -> StatusCode {
    StatusCode::OK
}

async fn handle_method_not_allowed() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({ "error": "Method not allowed" })),
    )
}

/// Endpoint: POST /mcp
/// Handles the Model Context Protocol communication for POST requests.
async fn handle_mcp(
    State(state): State<SharedState>,
    headers: HeaderMap,
    body: Result<Json<JsonRpcRequest>, axum::extract::rejection::JsonRejection>,
) -> impl IntoResponse {
    let client_session = headers.get(SESSION_HEADER).and_then(|v| v.to_str().ok());
    let session_id = state.sessions.touch(client_session);

    // Parse JSON-RPC Request (POST)
    let req = match body {
        Ok(Json(r)) => r,
        Err(e) => {
            tracing::warn!("JSON Parse Error: {}", e.body_text());
            return (
                StatusCode::BAD_REQUEST,
                [(SESSION_HEADER, session_id)],
                Json(rpc_error(Value::Null, error_codes::PARSE_ERROR, "Parse error")),
            )
                .into_response();
        }
    };

    let response_body = dispatch(&state, req).await;

    ([(SESSION_HEADER, session_id)], Json(response_body)).into_response()
}

/// Routes one JSON-RPC request to its method handler and wraps the outcome
/// in a response envelope.
pub async fn dispatch(state: &AppState, req: JsonRpcRequest) -> Value {
    let id = req.id.unwrap_or(Value::Null);
    let method_name = req.method.as_str();
    let params = req.params.unwrap_or(Value::Null);

    tracing::info!(method = method_name, id = %id, "MCP call");

    match method_name {
        "initialize" => rpc_success(id, handle_initialize()),
        "notifications/initialized" => rpc_success(id, json!({})),
        "tools/list" => rpc_success(id, handle_tools_list(state)),
        "resources/list" => rpc_success(id, handle_resources_list()),
        "resources/read" => rpc_success(id, handle_resources_read(state).await),
        "tools/call" => {
            let tool_name = params.get("name").and_then(|n| n.as_str()).unwrap_or("");
            let args = params.get("arguments").cloned().unwrap_or(Value::Null);
            rpc_success(id, handle_tool_call(state, tool_name, args))
        }
        "ping" => rpc_success(id, json!({})),
        _ => {
            tracing::warn!("Unknown method: {}", method_name);
            rpc_error(id, error_codes::METHOD_NOT_FOUND, "Method not found")
        }
    }
}

// =============================================================================
// MCP Method Handlers
// =============================================================================

/// Handles `initialize` request (Handshake).
fn handle_initialize() -> Value {
    json!({
        "protocolVersion": PROTOCOL_VERSION,
        "capabilities": {
            "tools": {},
            "resources": {}
        },
        "serverInfo": {
            "name": SERVER_NAME,
            "version": env!("CARGO_PKG_VERSION")
        }
    })
}

/// Handles `tools/list` request.
fn handle_tools_list(state: &AppState) -> Value {
    let moods: Vec<&str> = Mood::ALL.iter().map(|m| m.as_str()).collect();

    json!({
        "tools": [
            {
                "name": CREATE_PARTICLES_TOOL,
                "title": "Create particles",
                "description": "Create a beautiful, soothing particle animation. Try: starry night, ocean waves, fireflies, cherry blossoms, snow, aurora, rain, bubbles, galaxy, spiral, ring, heart, wave, mandala, or zen garden.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "prompt": {
                            "type": "string",
                            "description": "Describe the particle scene (e.g., \"starry night sky\", \"gentle snowfall\")"
                        },
                        "mood": {
                            "type": "string",
                            "enum": moods,
                            "description": "The mood of the animation"
                        }
                    },
                    "required": ["prompt"]
                },
                "_meta": widget_meta()
            },
            {
                "name": LIST_PRESETS_TOOL,
                "title": "List presets",
                "description": "Show all available particle presentation presets",
                "inputSchema": {
                    "type": "object",
                    "properties": {}
                }
            },
            {
                "name": QUICK_PRESET_TOOL,
                "title": "Quick preset",
                "description": "Instantly show a preset particle animation",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "preset": {
                            "type": "string",
                            "enum": state.catalog.keys(),
                            "description": "Preset name"
                        }
                    },
                    "required": ["preset"]
                },
                "_meta": widget_meta()
            }
        ]
    })
}

/// Handles `resources/list` request.
fn handle_resources_list() -> Value {
    json!({
        "resources": [{
            "uri": WIDGET_TEMPLATE_URI,
            "name": WIDGET_RESOURCE_NAME,
            "mimeType": WIDGET_MIME_TYPE,
        }]
    })
}

/// Handles `resources/read` request. The requested uri is not consulted:
/// there is exactly one resource.
async fn handle_resources_read(state: &AppState) -> Value {
    let html = state.load_widget_html().await;
    json!({
        "contents": [{
            "uri": WIDGET_TEMPLATE_URI,
            "mimeType": WIDGET_MIME_TYPE,
            "text": html,
        }]
    })
}

/// Handles `tools/call` request (Business Logic).
///
/// Failures are folded into an `isError` tool result; this never produces a
/// JSON-RPC error.
pub fn handle_tool_call(state: &AppState, name: &str, args: Value) -> Value {
    let outcome = match name {
        CREATE_PARTICLES_TOOL => handle_create_particles_tool(state, args),
        LIST_PRESETS_TOOL => Ok(handle_list_presets_tool(state)),
        QUICK_PRESET_TOOL => handle_quick_preset_tool(state, args),
        _ => Err(ToolError::UnknownTool(name.to_string())),
    };

    outcome.unwrap_or_else(|err| {
        tracing::warn!(tool = name, "Tool call failed: {}", err);
        tool_error_result(&err)
    })
}

/// Decodes tool arguments; absent arguments decode like an empty object
fn parse_args<T: DeserializeOwned>(args: Value) -> Result<T, ToolError> {
    let args = if args.is_null() { json!({}) } else { args };
    serde_json::from_value(args).map_err(|e| ToolError::InvalidArguments(e.to_string()))
}

/// Handles the create_particles tool functionality
fn handle_create_particles_tool(state: &AppState, args: Value) -> Result<Value, ToolError> {
    let input: CreateParticlesInput = parse_args(args)?;
    let prompt = input.prompt.ok_or(ToolError::MissingArgument("prompt"))?;

    // Absent mood means calm; an unknown one is echoed but has no effect
    let mood_name = input.mood.unwrap_or_else(|| Mood::default().to_string());
    let mood = mood_name.parse::<Mood>().ok();
    if mood.is_none() {
        tracing::debug!("Ignoring unrecognized mood {:?}", mood_name);
    }

    let mut scene = adjust_mood(match_prompt(&state.catalog, &prompt), mood);
    scene.prompt = Some(prompt.clone());
    scene.mood = Some(mood_name);

    let message = format!(
        "✨ Created \"{}\" particle presentation for: \"{}\"",
        scene.name, prompt
    );
    widget_result(state, message, &scene)
}

/// Handles the list_presets tool functionality
fn handle_list_presets_tool(state: &AppState) -> Value {
    json!({
        "content": [text_content(format_preset_listing(&state.catalog))],
    })
}

/// Handles the quick_preset tool functionality
fn handle_quick_preset_tool(state: &AppState, args: Value) -> Result<Value, ToolError> {
    let input: QuickPresetInput = parse_args(args)?;
    let key = input.preset.ok_or(ToolError::MissingArgument("preset"))?;

    let mut scene = state.catalog.lookup_or_default(&key);
    scene.prompt = Some(scene.name.clone());

    let message = format!("✨ Showing {} preset", scene.name);
    widget_result(state, message, &scene)
}

/// Packages a scene as a widget-rendering tool result
fn widget_result(
    state: &AppState,
    message: String,
    scene: &SceneDescriptor,
) -> Result<Value, ToolError> {
    let mut content = vec![text_content(message)];

    if state.inline_widget {
        let html = render_widget_html(scene)?;
        content.push(json!({
            "type": "resource",
            "resource": {
                "uri": format!("ui://widget/particles-{}.html", Uuid::new_v4().simple()),
                "mimeType": WIDGET_MIME_TYPE,
                "text": html,
            }
        }));
    }

    let structured = serde_json::to_value(scene)?;
    Ok(json!({
        "content": content,
        "structuredContent": structured,
        "_meta": widget_meta()
    }))
}
