//! Integration tests for MCP (Model Context Protocol) server
//!
//! These tests verify the complete MCP protocol implementation including:
//! - Server initialization and handshake
//! - Tool discovery and listing
//! - Resource discovery and reading
//! - Tool execution (create_particles, list_presets, quick_preset)
//! - HTTP transport behaviour (CORS, OPTIONS, 405, sessions)
//! - Error handling

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::util::ServiceExt; // for `oneshot`

use particle_presentations_rust::config::ServerConfig;
use particle_presentations_rust::particles::AppState;
use particle_presentations_rust::router::create_app_router;

/// Helper function to create a test app instance
fn create_test_app() -> axum::Router {
    let state = Arc::new(AppState::new());
    create_app_router(state)
}

/// Helper to read a response body as JSON
async fn json_body(response: axum::response::Response) -> Value {
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body_bytes).unwrap_or(json!({}))
}

/// Helper function to send a JSON-RPC request and get the response
async fn send_jsonrpc_request(
    app: &axum::Router,
    method: &str,
    params: Option<Value>,
    id: i32,
) -> (StatusCode, Value) {
    let request_body = json!({
        "jsonrpc": "2.0",
        "method": method,
        "params": params,
        "id": id
    });

    let request = Request::builder()
        .method("POST")
        .uri("/mcp")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&request_body).unwrap()))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    (status, json_body(response).await)
}

/// Helper for `tools/call`
async fn call_tool(app: &axum::Router, name: &str, arguments: Value, id: i32) -> Value {
    let params = json!({ "name": name, "arguments": arguments });
    let (status, body) = send_jsonrpc_request(app, "tools/call", Some(params), id).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], id);
    assert!(body.get("error").is_none(), "tool calls never raise rpc errors");
    body["result"].clone()
}

#[tokio::test]
async fn test_mcp_initialize() {
    let app = create_test_app();

    let (status, body) = send_jsonrpc_request(&app, "initialize", None, 1).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["jsonrpc"], "2.0");
    assert_eq!(body["id"], 1);

    let result = &body["result"];
    assert_eq!(result["protocolVersion"], "2024-11-05");
    assert_eq!(result["serverInfo"]["name"], "particle-presentations");
    assert!(result["capabilities"]["tools"].is_object());
    assert!(result["capabilities"]["resources"].is_object());
}

#[tokio::test]
async fn test_mcp_tools_list() {
    let app = create_test_app();

    let (status, body) = send_jsonrpc_request(&app, "tools/list", None, 2).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 2);

    let tools = body["result"]["tools"].as_array().unwrap();
    let names: Vec<&str> = tools.iter().map(|t| t["name"].as_str().unwrap()).collect();
    assert_eq!(names, ["create_particles", "list_presets", "quick_preset"]);

    let create = &tools[0];
    assert_eq!(create["inputSchema"]["required"], json!(["prompt"]));
    assert_eq!(
        create["inputSchema"]["properties"]["mood"]["enum"],
        json!(["calm", "dreamy", "energetic", "peaceful", "mystical"])
    );

    let list = &tools[1];
    assert_eq!(list["inputSchema"]["properties"], json!({}));

    let quick = &tools[2];
    let presets = quick["inputSchema"]["properties"]["preset"]["enum"]
        .as_array()
        .unwrap();
    assert_eq!(presets.len(), 15);
    assert_eq!(presets[0], "starryNight");
    assert_eq!(quick["inputSchema"]["required"], json!(["preset"]));
}

#[tokio::test]
async fn test_mcp_resources_list() {
    let app = create_test_app();

    let (status, body) = send_jsonrpc_request(&app, "resources/list", None, 3).await;

    assert_eq!(status, StatusCode::OK);

    let resources = body["result"]["resources"].as_array().unwrap();
    assert_eq!(resources.len(), 1);

    let widget = &resources[0];
    assert_eq!(widget["name"], "Particle Widget");
    assert_eq!(widget["uri"], "ui://widget/particles.html");
    assert_eq!(widget["mimeType"], "text/html+skybridge");
}

#[tokio::test]
async fn test_mcp_resources_read() {
    let app = create_test_app();

    let params = json!({ "uri": "ui://widget/anything-else.html" });
    let (status, body) = send_jsonrpc_request(&app, "resources/read", Some(params), 4).await;

    assert_eq!(status, StatusCode::OK);

    let contents = body["result"]["contents"].as_array().unwrap();
    assert_eq!(contents.len(), 1);

    let content = &contents[0];
    assert_eq!(content["uri"], "ui://widget/particles.html");
    assert_eq!(content["mimeType"], "text/html+skybridge");
    let html = content["text"].as_str().unwrap();
    assert!(html.contains("<canvas"));
}

#[tokio::test]
async fn test_create_particles_structured_content() {
    let app = create_test_app();

    let result = call_tool(
        &app,
        "create_particles",
        json!({ "prompt": "I want gentle snowfall", "mood": "energetic" }),
        5,
    )
    .await;

    let text = result["content"][0]["text"].as_str().unwrap();
    assert!(text.contains("Gentle Snow"));
    assert!(text.contains("I want gentle snowfall"));

    let scene = &result["structuredContent"];
    assert_eq!(scene["name"], "Gentle Snow");
    assert_eq!(scene["prompt"], "I want gentle snowfall");
    assert_eq!(scene["mood"], "energetic");
    assert_eq!(scene["particles"]["speed"], 2.0);
    assert_eq!(scene["particles"]["count"], 225);
    assert_eq!(scene["particles"]["type"], "snow");
    assert_eq!(result["_meta"]["openai/outputTemplate"], "ui://widget/particles.html");
    assert_eq!(result["content"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_create_particles_fallback_scene() {
    let app = create_test_app();

    let result = call_tool(&app, "create_particles", json!({ "prompt": "zzz" }), 6).await;

    assert_eq!(result["structuredContent"]["name"], "Custom Scene");
    assert_eq!(result["structuredContent"]["mood"], "calm");
}

#[tokio::test]
async fn test_create_particles_mystical() {
    let app = create_test_app();

    let result = call_tool(
        &app,
        "create_particles",
        json!({ "prompt": "fireflies at dusk", "mood": "mystical" }),
        7,
    )
    .await;

    let particles = &result["structuredContent"]["particles"];
    assert_eq!(particles["color"], "rainbow");
    assert_eq!(particles["glow"], true);
}

#[tokio::test]
async fn test_create_particles_missing_prompt() {
    let app = create_test_app();

    let result = call_tool(&app, "create_particles", json!({}), 8).await;

    assert_eq!(result["isError"], true);
    assert_eq!(result["content"][0]["text"], "Missing required argument: prompt");
}

#[tokio::test]
async fn test_list_presets() {
    let app = create_test_app();

    let result = call_tool(&app, "list_presets", json!({}), 9).await;

    let text = result["content"][0]["text"].as_str().unwrap();
    assert!(text.contains("• Starry Night (star)"));
    assert!(text.contains("• Mandala Rose (glow)"));
    assert!(result.get("structuredContent").is_none());
}

#[tokio::test]
async fn test_quick_preset() {
    let app = create_test_app();

    let result = call_tool(&app, "quick_preset", json!({ "preset": "aurora" }), 10).await;

    let scene = &result["structuredContent"];
    assert_eq!(scene["name"], "Northern Lights");
    assert_eq!(scene["prompt"], "Northern Lights");
    assert_eq!(scene["particles"]["speed"], 0.4);
    assert!(scene.get("mood").is_none());
}

#[tokio::test]
async fn test_quick_preset_unknown_key_falls_back() {
    let app = create_test_app();

    let result = call_tool(&app, "quick_preset", json!({ "preset": "doesNotExist" }), 11).await;

    assert!(result.get("isError").is_none());
    assert_eq!(result["structuredContent"]["name"], "Starry Night");
}

#[tokio::test]
async fn test_quick_preset_shape_pattern() {
    let app = create_test_app();

    let result = call_tool(&app, "quick_preset", json!({ "preset": "mandala" }), 12).await;

    assert_eq!(result["structuredContent"]["pattern"], json!({ "type": "mandala", "petals": 8 }));
}

#[tokio::test]
async fn test_mcp_tool_call_unknown_tool() {
    let app = create_test_app();

    let result = call_tool(&app, "unknown_tool", json!({}), 13).await;

    assert_eq!(result["isError"], true);
    assert!(result["content"][0]["text"]
        .as_str()
        .unwrap()
        .contains("Unknown tool"));
}

#[tokio::test]
async fn test_inline_widget_mode() {
    let config = ServerConfig {
        inline_widget: true,
        ..ServerConfig::default()
    };
    let app = create_app_router(Arc::new(AppState::from_config(&config)));

    let result = call_tool(&app, "quick_preset", json!({ "preset": "rain" }), 14).await;

    let content = result["content"].as_array().unwrap();
    assert_eq!(content.len(), 2);
    assert_eq!(content[1]["type"], "resource");
    let html = content[1]["resource"]["text"].as_str().unwrap();
    assert!(html.contains("id=\"particle-config\""));
    assert!(html.contains("Peaceful Rain"));
}

#[tokio::test]
async fn test_mcp_unknown_method() {
    let app = create_test_app();

    let (status, body) = send_jsonrpc_request(&app, "unknown/method", None, 15).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["jsonrpc"], "2.0");
    assert_eq!(body["id"], 15);
    assert_eq!(
        body["error"],
        json!({ "code": -32601, "message": "Method not found" })
    );
}

#[tokio::test]
async fn test_string_id_is_echoed() {
    let app = create_test_app();

    let request = Request::builder()
        .method("POST")
        .uri("/mcp")
        .header("content-type", "application/json")
        .body(Body::from(
            json!({ "jsonrpc": "2.0", "id": "req-7", "method": "ping" }).to_string(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let body = json_body(response).await;
    assert_eq!(body["id"], "req-7");
    assert_eq!(body["result"], json!({}));
}

#[tokio::test]
async fn test_mcp_invalid_json() {
    let app = create_test_app();

    let request = Request::builder()
        .method("POST")
        .uri("/mcp")
        .header("content-type", "application/json")
        .body(Body::from("invalid json {{{"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response).await;
    assert_eq!(body["id"], Value::Null);
    assert_eq!(body["error"]["code"], -32700);
    assert_eq!(body["error"]["message"], "Parse error");
}

#[tokio::test]
async fn test_options_short_circuits() {
    let app = create_test_app();

    let request = Request::builder()
        .method("OPTIONS")
        .uri("/mcp")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_cors_preflight() {
    let app = create_test_app();

    let request = Request::builder()
        .method("OPTIONS")
        .uri("/mcp")
        .header("origin", "https://chat.example.com")
        .header("access-control-request-method", "POST")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["access-control-allow-origin"], "*");
}

#[tokio::test]
async fn test_other_methods_are_rejected() {
    let app = create_test_app();

    for method in ["GET", "PUT", "DELETE"] {
        let request = Request::builder()
            .method(method)
            .uri("/mcp")
            .body(Body::empty())
            .unwrap();

        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED, "{}", method);
        let body = json_body(response).await;
        assert_eq!(body["error"], "Method not allowed");
    }
}

#[tokio::test]
async fn test_session_id_is_echoed_or_minted() {
    let app = create_test_app();

    let build = |session: Option<&str>| {
        let mut builder = Request::builder()
            .method("POST")
            .uri("/mcp")
            .header("content-type", "application/json");
        if let Some(id) = session {
            builder = builder.header("mcp-session-id", id);
        }
        builder
            .body(Body::from(
                json!({ "jsonrpc": "2.0", "id": 1, "method": "ping" }).to_string(),
            ))
            .unwrap()
    };

    let response = app.clone().oneshot(build(Some("client-abc"))).await.unwrap();
    assert_eq!(response.headers()["mcp-session-id"], "client-abc");

    let response = app.clone().oneshot(build(None)).await.unwrap();
    let minted = response
        .headers()
        .get("mcp-session-id")
        .unwrap()
        .to_str()
        .unwrap();
    assert!(minted.starts_with("session_"));
}

#[tokio::test]
async fn test_health() {
    let app = create_test_app();

    let request = Request::builder()
        .method("GET")
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["app"], "particle-presentations");
}

#[tokio::test]
async fn test_mcp_invalid_method_type() {
    let app = create_test_app();

    // method should be a string, let's pass a number
    let request_body = json!({
        "jsonrpc": "2.0",
        "method": 123,
        "id": 1
    });

    let request = Request::builder()
        .method("POST")
        .uri("/mcp")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&request_body).unwrap()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
