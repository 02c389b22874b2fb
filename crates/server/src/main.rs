//! Fetch-proxy server.
//!
//! Exposes a single endpoint, `POST /api/fetch-url`, that validates a URL,
//! retrieves its body with a bounded timeout, and returns the text for the
//! client to convert locally. The proxy is stateless: no caching, no
//! retries, exactly one upstream attempt per request.

use std::time::Duration;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use mdconv_core::{FetchConfig, MdconvError, fetch_url};
use serde::Serialize;
use serde_json::Value;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Inbound request bound; slightly larger than the upstream fetch timeout so
/// the handler can still produce its own 408 body.
const REQUEST_TIMEOUT_SECS: u64 = 15;

#[derive(Serialize)]
struct FetchResponse {
    content: String,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ErrorResponse { error: message.into() })).into_response()
}

/// Maps a fetch failure onto the endpoint's status/message contract.
fn fetch_error_response(err: MdconvError) -> Response {
    match err {
        MdconvError::InvalidUrl(_) => error_response(StatusCode::BAD_REQUEST, "Invalid URL format"),
        MdconvError::UnsupportedScheme(_) => {
            error_response(StatusCode::BAD_REQUEST, "Only HTTP and HTTPS URLs are supported")
        }
        MdconvError::Timeout { .. } => error_response(
            StatusCode::REQUEST_TIMEOUT,
            "Request timeout - URL took too long to respond",
        ),
        MdconvError::Upstream { status, status_text } => {
            let code = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
            error_response(code, format!("Failed to fetch: {} {}", status, status_text))
        }
        other => {
            error!("fetch failed: {}", other);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch URL")
        }
    }
}

async fn handle_fetch_url(Json(payload): Json<Value>) -> Response {
    let Some(url) = payload.get("url").and_then(Value::as_str) else {
        return error_response(StatusCode::BAD_REQUEST, "URL is required");
    };

    info!(url, "fetching remote content");

    match fetch_url(url, &FetchConfig::default()).await {
        Ok(content) => (StatusCode::OK, Json(FetchResponse { content })).into_response(),
        Err(err) => fetch_error_response(err),
    }
}

fn app() -> Router {
    Router::new()
        .route("/api/fetch-url", post(handle_fetch_url))
        .layer(CorsLayer::permissive())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(REQUEST_TIMEOUT_SECS),
        ))
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("0.0.0.0:{}", port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", addr, e));

    info!(%addr, "mdconv-server listening");

    axum::serve(listener, app())
        .await
        .expect("server error");
}
