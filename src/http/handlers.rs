//! Endpoint handlers.
//!
//! Three relay endpoints share one underlying capability (issue a GET and
//! relay the result) and differ only in request shape and response shaping.
//! The rest are fixed-payload reads.
//!
//! Handlers validate presence of the URL parameter, nothing else; the
//! destination itself is forwarded to the relay untouched.

use std::net::SocketAddr;
use std::time::Duration;

use axum::extract::{ConnectInfo, Query, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use crate::http::request::X_REQUEST_ID;
use crate::http::response::{decode_import_data, truncate_chars};
use crate::http::server::AppState;
use crate::relay::{self, BodyMode, RelayError, RelayOptions};

/// Preview bodies are cut to this many characters; import bodies are not.
const PREVIEW_MAX_CHARS: usize = 1000;

#[derive(Debug, Deserialize)]
pub struct ImageQuery {
    pub url: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewBody {
    pub target_url: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportBody {
    pub catalog_url: Option<String>,
}

/// `GET /api/products`
pub async fn list_products(State(state): State<AppState>) -> Response {
    Json(state.catalog.products()).into_response()
}

/// `GET /api/product-image?url=<destination>`
///
/// Relays the destination's bytes with its content-type. Failures return
/// the transport error message in `details`.
pub async fn product_image(
    State(state): State<AppState>,
    ConnectInfo(client_addr): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    Query(query): Query<ImageQuery>,
) -> Response {
    let Some(image_url) = query.url else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "URL parameter is required" })),
        )
            .into_response();
    };

    log_relay_request("/api/product-image", &image_url, client_addr, &headers);

    let options = RelayOptions {
        mode: BodyMode::Binary,
        ..state.relay_options()
    };

    match relay::fetch(&image_url, options).await {
        Ok(upstream) => {
            let content_type = upstream
                .content_type
                .unwrap_or_else(|| "application/octet-stream".to_string());
            let status = StatusCode::from_u16(upstream.status).unwrap_or(StatusCode::OK);
            (
                status,
                [(header::CONTENT_TYPE, content_type)],
                upstream.body.into_bytes(),
            )
                .into_response()
        }
        Err(err) => {
            log_relay_failure("/api/product-image", &image_url, client_addr, &err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "Failed to fetch image",
                    "details": err.to_string(),
                })),
            )
                .into_response()
        }
    }
}

/// `POST /api/preview-url` with `{"targetUrl": "..."}`
///
/// Returns a snapshot envelope: upstream status, headers, the first 1000
/// characters of the body, and the redirect-resolved URL.
pub async fn preview_url(
    State(state): State<AppState>,
    ConnectInfo(client_addr): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    Json(body): Json<PreviewBody>,
) -> Response {
    let Some(target_url) = body.target_url else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "targetUrl is required" })),
        )
            .into_response();
    };

    log_relay_request("/api/preview-url", &target_url, client_addr, &headers);

    match relay::fetch(&target_url, state.relay_options()).await {
        Ok(upstream) => {
            let text = upstream.body.into_text();
            Json(json!({
                "status": upstream.status,
                "headers": upstream.headers,
                "data": truncate_chars(&text, PREVIEW_MAX_CHARS),
                "fullUrl": upstream.final_url,
            }))
            .into_response()
        }
        Err(err) => {
            log_relay_failure("/api/preview-url", &target_url, client_addr, &err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "Failed to preview URL",
                    "message": err.to_string(),
                    "attempted": target_url,
                })),
            )
                .into_response()
        }
    }
}

/// `POST /api/import-product` with `{"catalogUrl": "..."}`
///
/// Returns the entire upstream body untruncated, parsed as JSON when it is
/// JSON.
pub async fn import_product(
    State(state): State<AppState>,
    ConnectInfo(client_addr): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    Json(body): Json<ImportBody>,
) -> Response {
    let Some(catalog_url) = body.catalog_url else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "catalogUrl is required" })),
        )
            .into_response();
    };

    log_relay_request("/api/import-product", &catalog_url, client_addr, &headers);

    match relay::fetch(&catalog_url, state.relay_options()).await {
        Ok(upstream) => {
            let text = upstream.body.into_text();
            Json(json!({
                "message": "Product imported successfully",
                "source": catalog_url,
                "data": decode_import_data(&text),
            }))
            .into_response()
        }
        Err(err) => {
            log_relay_failure("/api/import-product", &catalog_url, client_addr, &err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "Failed to import from catalog",
                    "details": err.to_string(),
                })),
            )
                .into_response()
        }
    }
}

/// `GET /admin/users`: internal user list, no authentication.
pub async fn admin_users() -> Json<serde_json::Value> {
    Json(json!({
        "users": [
            { "id": 1, "username": "admin", "email": "admin@bluejays.com", "role": "administrator" },
            { "id": 2, "username": "user1", "email": "user1@example.com", "role": "customer" },
            { "id": 3, "username": "user2", "email": "user2@example.com", "role": "customer" }
        ],
        "internal": true,
        "warning": "This is internal data exposed via SSRF"
    }))
}

/// `GET /internal/config`: internal configuration block, no authentication.
pub async fn internal_config() -> Json<serde_json::Value> {
    Json(json!({
        "database": {
            "host": "internal-db.local",
            "port": 5432,
            "name": "bluejays_prod"
        },
        "apiKeys": {
            "stripe": "sk_test_vulnerable_key_123",
            "aws": "AKIA_VULNERABLE_KEY"
        },
        "warning": "Internal configuration exposed via SSRF vulnerability"
    }))
}

/// `GET /health`
pub async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "running",
        "vulnerabilities": ["SSRF"],
        "purpose": "Security demonstration only"
    }))
}

fn log_relay_request(endpoint: &str, destination: &str, client_addr: SocketAddr, headers: &HeaderMap) {
    let request_id = headers
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown");
    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    tracing::info!(
        request_id = %request_id,
        endpoint = %endpoint,
        destination = %destination,
        client_addr = %client_addr,
        user_agent = %user_agent,
        "Relaying outbound fetch"
    );
}

fn log_relay_failure(endpoint: &str, destination: &str, client_addr: SocketAddr, err: &RelayError) {
    tracing::error!(
        endpoint = %endpoint,
        destination = %destination,
        client_addr = %client_addr,
        error = %err,
        "Outbound fetch failed"
    );
}

impl AppState {
    /// Relay options derived from configuration; text decoding by default.
    pub fn relay_options(&self) -> RelayOptions {
        RelayOptions {
            timeout: Duration::from_millis(self.relay.timeout_ms),
            max_redirects: self.relay.max_redirects,
            mode: BodyMode::Text,
        }
    }
}
