//! HTTP server mode: web page plus the `/convert` endpoint

use axum::{
    body::Bytes,
    extract::{rejection::QueryRejection, DefaultBodyLimit, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerSettings;
use crate::error::{Error, Result};
use crate::generator::Generator;
use crate::schema::SynthesisOptions;
use crate::types::{FieldNaming, FieldOrder, NumberPolicy, Target};

/// Server configuration
#[derive(Debug, Clone, Default)]
pub struct ServerConfig {
    /// Network and static file settings
    pub settings: ServerSettings,
    /// Synthesis defaults, overridable per request
    pub synthesis: SynthesisOptions,
}

/// App state shared across handlers
#[derive(Clone)]
struct AppState {
    config: ServerConfig,
}

/// Per-request overrides for `/convert`
#[derive(Debug, Default, Deserialize)]
struct ConvertParams {
    #[serde(default)]
    target: Option<Target>,
    #[serde(default)]
    root: Option<String>,
    #[serde(default)]
    field_order: Option<FieldOrder>,
    #[serde(default)]
    number_policy: Option<NumberPolicy>,
    #[serde(default)]
    field_naming: Option<FieldNaming>,
}

impl ConvertParams {
    fn apply(self, mut options: SynthesisOptions) -> SynthesisOptions {
        if let Some(target) = self.target {
            options.target = target;
        }
        if let Some(root) = self.root {
            options.root_name = root;
        }
        if let Some(order) = self.field_order {
            options.field_order = order;
        }
        if let Some(policy) = self.number_policy {
            options.number_policy = policy;
        }
        if let Some(naming) = self.field_naming {
            options.field_naming = naming;
        }
        options
    }
}

/// Error body
#[derive(Debug, Serialize)]
struct ApiError {
    error: String,
}

impl ApiError {
    fn response(status: StatusCode, message: impl Into<String>) -> Response {
        (
            status,
            Json(ApiError {
                error: message.into(),
            }),
        )
            .into_response()
    }
}

/// Build the application router
pub fn router(config: ServerConfig) -> Router {
    // Build CORS layer - allow all origins for development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let static_files = ServeDir::new(&config.settings.static_dir);
    let body_limit = config.settings.max_body_bytes;
    let state = AppState { config };

    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/convert", post(convert))
        .nest_service("/static", static_files)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

/// Start the HTTP server
pub async fn serve(config: ServerConfig) -> Result<()> {
    let addr: SocketAddr = format!("{}:{}", config.settings.host, config.settings.port)
        .parse()
        .map_err(|e| {
            Error::config(format!(
                "Invalid listen address {}:{}: {e}",
                config.settings.host, config.settings.port
            ))
        })?;

    let app = router(config);
    tracing::info!("Starting HTTP server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| Error::config(format!("Failed to bind to {addr}: {e}")))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| Error::config(format!("Server error: {e}")))?;

    Ok(())
}

/// Main page
async fn index(State(state): State<Arc<AppState>>) -> Response {
    let path = state.config.settings.static_dir.join("index.html");
    match tokio::fs::read_to_string(&path).await {
        Ok(page) => Html(page).into_response(),
        Err(e) => {
            tracing::error!("Failed to read {}: {}", path.display(), e);
            ApiError::response(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to load page: {e}"),
            )
        }
    }
}

/// Health check endpoint
async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// Generate declarations for the JSON request body
async fn convert(
    State(state): State<Arc<AppState>>,
    query: std::result::Result<Query<ConvertParams>, QueryRejection>,
    body: Bytes,
) -> Response {
    let Query(params) = match query {
        Ok(query) => query,
        Err(rejection) => {
            tracing::warn!("Rejected query string: {}", rejection);
            return ApiError::response(StatusCode::BAD_REQUEST, rejection.body_text());
        }
    };

    let value = match parse_body(&body) {
        Ok(v) => v,
        Err(e) => {
            tracing::warn!("Rejected request body: {}", e);
            return ApiError::response(StatusCode::BAD_REQUEST, e.to_string());
        }
    };

    let options = params.apply(state.config.synthesis.clone());
    match Generator::new(options).generate(value) {
        Ok(output) => (StatusCode::OK, Json(output)).into_response(),
        Err(e) => {
            let status = if e.is_client_error() {
                StatusCode::UNPROCESSABLE_ENTITY
            } else {
                StatusCode::INTERNAL_SERVER_ERROR
            };
            tracing::warn!("Error generating declarations: {}", e);
            ApiError::response(status, e.to_string())
        }
    }
}

fn parse_body(body: &[u8]) -> Result<Value> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(Error::invalid_input("request body is empty"));
    }
    Ok(serde_json::from_slice(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_params_override() {
        let params = ConvertParams {
            target: Some(Target::Rust),
            root: Some("Payload".to_string()),
            ..Default::default()
        };
        let options = params.apply(SynthesisOptions::default().with_max_depth(3));

        assert_eq!(options.target, Target::Rust);
        assert_eq!(options.root_name, "Payload");
        assert_eq!(options.max_depth, 3);
        assert_eq!(options.field_order, FieldOrder::Source);
    }

    #[test]
    fn test_parse_body() {
        assert_eq!(parse_body(br#"{"a": 1}"#).unwrap(), json!({"a": 1}));
        assert!(matches!(
            parse_body(b"  \n"),
            Err(Error::InvalidInput { .. })
        ));
        assert!(matches!(parse_body(b"{"), Err(Error::JsonParse(_))));
    }
}
