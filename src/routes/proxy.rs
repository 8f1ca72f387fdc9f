//! `/api/*` forwarder to the fleet back-office API.
//!
//! DESIGN
//! ======
//! The browser only ever talks to this origin. Requests are replayed upstream
//! with their method, query, body and a small allow-list of headers; the
//! upstream status, content type and body are relayed back unchanged.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

/// Request headers copied to the upstream call.
const FORWARDED_HEADERS: &[header::HeaderName] = &[header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT];

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("upstream API not configured")]
    NotConfigured,
    #[error("invalid upstream path: {0}")]
    InvalidPath(String),
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl ProxyError {
    fn status(&self) -> StatusCode {
        match self {
            Self::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
            Self::InvalidPath(_) => StatusCode::BAD_REQUEST,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::warn!(error = %self, %status, "api proxy error");
        (status, self.to_string()).into_response()
    }
}

/// Prefix the forwarder is mounted under.
const API_PREFIX: &str = "/api/";

/// A `.` or `..` segment, literal or percent-encoded (`%2e`).
fn is_dot_segment(segment: &str) -> bool {
    let decoded = segment.replace("%2e", ".").replace("%2E", ".");
    decoded == "." || decoded == ".."
}

/// Join base, raw (still percent-encoded) path and query. Dot segments are
/// refused so a request cannot climb out of the upstream base path.
pub(crate) fn upstream_url(base: &str, raw_path: &str, query: Option<&str>) -> Result<String, ProxyError> {
    if raw_path.split('/').any(is_dot_segment) {
        return Err(ProxyError::InvalidPath(raw_path.to_owned()));
    }
    let path = raw_path.trim_start_matches('/');
    let mut url = format!("{base}/{path}");
    if let Some(q) = query.filter(|q| !q.is_empty()) {
        url.push('?');
        url.push_str(q);
    }
    Ok(url)
}

/// `ANY /api/{*path}` — replay the request against `{FLEET_API_URL}/{path}`.
pub async fn forward(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let base = state.upstream.as_deref().ok_or(ProxyError::NotConfigured)?;
    // The raw path keeps `%3F`, `%23` and `%2F` encoded; the `Path` extractor
    // would decode them into query, fragment and segment delimiters.
    let raw_path = uri
        .path()
        .strip_prefix(API_PREFIX)
        .ok_or_else(|| ProxyError::InvalidPath(uri.path().to_owned()))?;
    let url = upstream_url(base, raw_path, uri.query())?;

    let mut request = state.http.request(method.clone(), &url);
    for name in FORWARDED_HEADERS {
        if let Some(value) = headers.get(name) {
            request = request.header(name, value.clone());
        }
    }
    if !body.is_empty() {
        request = request.body(body);
    }

    let upstream = request.send().await?;
    let status = upstream.status();
    let content_type = upstream.headers().get(header::CONTENT_TYPE).cloned();
    let bytes = upstream.bytes().await?;

    tracing::debug!(%method, %url, %status, "api proxied");

    let mut response = (status, bytes).into_response();
    if let Some(content_type) = content_type {
        response.headers_mut().insert(header::CONTENT_TYPE, content_type);
    }
    Ok(response)
}
