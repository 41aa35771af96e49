//! Reverse proxy for `/api/{*path}`.
//!
//! Forwards method, query string, `Authorization` and `Content-Type` headers
//! and the request body to the configured MCM backend, and relays the
//! response back byte-for-byte. Keeping the browser same-origin with the
//! backend avoids CORS configuration on the backend side.

use std::sync::Arc;

use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, Request, StatusCode};
use axum::response::{IntoResponse, Response};
use http_body_util::BodyExt;

/// Shared proxy state: one pooled client plus the backend base URL.
pub struct ProxyState {
    pub client: reqwest::Client,
    pub api_base: String,
}

impl ProxyState {
    pub fn new(api_base: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_base: api_base.trim_end_matches('/').to_string(),
        }
    }
}

/// Proxy a single `/api/{*path}` request to the backend.
pub async fn proxy_handler(
    State(state): State<Arc<ProxyState>>,
    Path(path): Path<String>,
    req: Request<Body>,
) -> Response {
    let method = match reqwest::Method::from_bytes(req.method().as_str().as_bytes()) {
        Ok(m) => m,
        Err(_) => return StatusCode::METHOD_NOT_ALLOWED.into_response(),
    };

    let mut url = format!("{}/{}", state.api_base, path);
    if let Some(query) = req.uri().query() {
        url.push('?');
        url.push_str(query);
    }

    let forwarded_headers = copy_request_headers(req.headers());

    let body = match req.into_body().collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(e) => {
            tracing::warn!("Failed to read proxy request body: {e}");
            return StatusCode::BAD_REQUEST.into_response();
        }
    };

    let mut builder = state.client.request(method, &url).headers(forwarded_headers);
    if !body.is_empty() {
        builder = builder.body(body);
    }

    match builder.send().await {
        Ok(resp) => {
            let status =
                StatusCode::from_u16(resp.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
            let headers = copy_response_headers(resp.headers());
            match resp.bytes().await {
                Ok(bytes) => (status, headers, bytes).into_response(),
                Err(e) => {
                    tracing::warn!("Failed to read backend response body: {e}");
                    StatusCode::BAD_GATEWAY.into_response()
                }
            }
        }
        Err(e) => {
            tracing::warn!("Backend request to {url} failed: {e}");
            (StatusCode::BAD_GATEWAY, "backend unreachable").into_response()
        }
    }
}

/// Headers forwarded from the browser to the backend.
fn copy_request_headers(src: &HeaderMap) -> reqwest::header::HeaderMap {
    let mut out = reqwest::header::HeaderMap::new();
    for name in [header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT] {
        if let Some(value) = src.get(&name) {
            if let (Ok(n), Ok(v)) = (
                reqwest::header::HeaderName::from_bytes(name.as_str().as_bytes()),
                reqwest::header::HeaderValue::from_bytes(value.as_bytes()),
            ) {
                out.insert(n, v);
            }
        }
    }
    out
}

/// Headers relayed from the backend to the browser.
fn copy_response_headers(src: &reqwest::header::HeaderMap) -> HeaderMap {
    let mut out = HeaderMap::new();
    for name in [
        header::CONTENT_TYPE,
        header::CONTENT_DISPOSITION,
        header::CACHE_CONTROL,
    ] {
        if let Some(value) = src.get(name.as_str()) {
            if let (Ok(n), Ok(v)) = (
                header::HeaderName::from_bytes(name.as_str().as_bytes()),
                header::HeaderValue::from_bytes(value.as_bytes()),
            ) {
                out.insert(n, v);
            }
        }
    }
    out
}
