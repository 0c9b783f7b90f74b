//! HTTP integration tests
//!
//! Drives the axum router in-process: JSON body → /convert → envelope.

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use json_structgen::cli::{router, ServerConfig};
use json_structgen::config::ServerSettings;
use json_structgen::SynthesisOptions;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::fs;
use std::path::Path;
use tower::ServiceExt;

fn app_with(settings: ServerSettings, synthesis: SynthesisOptions) -> Router {
    router(ServerConfig {
        settings,
        synthesis,
    })
}

fn app() -> Router {
    app_with(ServerSettings::default(), SynthesisOptions::default())
}

fn static_app(dir: &Path) -> Router {
    app_with(
        ServerSettings {
            static_dir: dir.to_path_buf(),
            ..ServerSettings::default()
        },
        SynthesisOptions::default(),
    )
}

async fn post_convert(app: Router, uri: &str, body: impl Into<Body>) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(body.into())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8_lossy(&bytes).to_string())
}

// ============================================================================
// /convert
// ============================================================================

#[tokio::test]
async fn test_convert_person() {
    let input = json!({
        "name": "Alice",
        "age": 30,
        "tags": ["x", "y"],
        "address": {"city": "NYC"}
    });

    let (status, body) = post_convert(app(), "/convert", input.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["structCode"],
        "type Address struct {\n\tCity string `json:\"city\"`\n}\n\n\
         type Data struct {\n\
         \tName string `json:\"name\"`\n\
         \tAge int `json:\"age\"`\n\
         \tTags []string `json:\"tags\"`\n\
         \tAddress Address `json:\"address\"`\n\
         }\n"
    );
    assert_eq!(body["data"], input);
}

#[tokio::test]
async fn test_convert_array_of_objects() {
    let (status, body) = post_convert(app(), "/convert", r#"{"items": [{"id": 1}]}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["structCode"],
        "type ItemsItem struct {\n\tId int `json:\"id\"`\n}\n\n\
         type Data struct {\n\tItems []ItemsItem `json:\"items\"`\n}\n"
    );
}

#[tokio::test]
async fn test_convert_empty_object() {
    let (status, body) = post_convert(app(), "/convert", "{}").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"structCode": "type Data struct {\n}\n", "data": {}}));
}

#[tokio::test]
async fn test_convert_query_overrides() {
    let (status, body) = post_convert(
        app(),
        "/convert?target=rust&root=Payload&field_order=sorted",
        r#"{"b": true, "a": 1}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["structCode"],
        "use serde::{Deserialize, Serialize};\n\n\
         #[derive(Debug, Clone, Serialize, Deserialize)]\n\
         pub struct Payload {\n    pub a: i64,\n    pub b: bool,\n}\n"
    );
}

#[tokio::test]
async fn test_convert_rust_avoids_reserved_names() {
    let (status, body) = post_convert(
        app(),
        "/convert?target=rust",
        r#"{"self": {"a": 1}, "string": {"b": 2}, "note": null, "label": "x"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let code = body["structCode"].as_str().unwrap();
    assert!(code.contains("pub struct Self2 {"));
    assert!(code.contains("pub struct String2 {"));
    assert!(!code.contains("pub struct String {"));
    assert!(code.contains("    pub note: Option<String>,\n"));
    assert!(code.contains("    pub label: String,\n"));
}

#[tokio::test]
async fn test_convert_reserved_root_name() {
    let (status, body) = post_convert(app(), "/convert?target=rust&root=Self", "{}").await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "Type name 'Self' is reserved in rust output");
}

#[tokio::test]
async fn test_convert_bad_query_returns_json_error() {
    let (status, body) = post_convert(app(), "/convert?target=cobol", "{}").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("Failed to deserialize query string"));
}

#[tokio::test]
async fn test_convert_uses_configured_defaults() {
    let app = app_with(
        ServerSettings::default(),
        SynthesisOptions::default().with_root_name("Sample"),
    );
    let (status, body) = post_convert(app, "/convert", r#"{"x": "y"}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["structCode"]
        .as_str()
        .unwrap()
        .starts_with("type Sample struct {"));
}

#[tokio::test]
async fn test_convert_invalid_json() {
    let (status, body) = post_convert(app(), "/convert", "{not json").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("Invalid JSON: "));
}

#[tokio::test]
async fn test_convert_empty_body() {
    let (status, body) = post_convert(app(), "/convert", "").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid input: request body is empty");
}

#[tokio::test]
async fn test_convert_non_object_root() {
    let (status, body) = post_convert(app(), "/convert", "[1, 2, 3]").await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body["error"],
        "Root value must be a JSON object, found array"
    );
}

#[tokio::test]
async fn test_convert_too_deep() {
    let app = app_with(
        ServerSettings::default(),
        SynthesisOptions::default().with_max_depth(1),
    );
    let (status, body) = post_convert(app, "/convert", r#"{"a": {"b": {"c": 1}}}"#).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body["error"],
        "Input too deeply nested: exceeds maximum depth of 1"
    );
}

#[tokio::test]
async fn test_convert_invalid_root_name() {
    let (status, _) = post_convert(app(), "/convert?root=9lives", "{}").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_convert_body_limit() {
    let app = app_with(
        ServerSettings {
            max_body_bytes: 16,
            ..ServerSettings::default()
        },
        SynthesisOptions::default(),
    );
    let (status, _) = post_convert(app, "/convert", json!({"long": "x".repeat(64)}).to_string()).await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
}

// ============================================================================
// Pages
// ============================================================================

#[tokio::test]
async fn test_health() {
    let (status, body) = get(app(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(serde_json::from_str::<Value>(&body).unwrap(), json!({"status": "ok"}));
}

#[tokio::test]
async fn test_index_and_static_files() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("index.html"), "<h1>converter</h1>").unwrap();
    fs::write(dir.path().join("app.js"), "console.log('hi');").unwrap();

    let (status, body) = get(static_app(dir.path()), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "<h1>converter</h1>");

    let (status, body) = get(static_app(dir.path()), "/static/app.js").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "console.log('hi');");

    let (status, _) = get(static_app(dir.path()), "/static/missing.js").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_index_missing_page() {
    let dir = tempfile::tempdir().unwrap();
    let (status, body) = get(static_app(dir.path()), "/").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.contains("Failed to load page"));
}
