use super::*;
use axum::Router;
use axum::routing::{get, post};
use serde_json::{Value, json};
use tokio::net::TcpListener;

// =============================================================================
// upstream_url
// =============================================================================

#[test]
fn upstream_url_joins_path_and_query() {
    let url = upstream_url("http://core:8000", "devices", Some("limit=5")).unwrap();
    assert_eq!(url, "http://core:8000/devices?limit=5");
}

#[test]
fn upstream_url_skips_empty_query() {
    assert_eq!(upstream_url("http://core", "auth/login", Some("")).unwrap(), "http://core/auth/login");
    assert_eq!(upstream_url("http://core", "/tenants", None).unwrap(), "http://core/tenants");
}

#[test]
fn upstream_url_refuses_dot_segments() {
    assert!(matches!(upstream_url("http://core", "../secrets", None), Err(ProxyError::InvalidPath(_))));
    assert!(matches!(upstream_url("http://core", "a/./b", None), Err(ProxyError::InvalidPath(_))));
}

#[test]
fn upstream_url_refuses_encoded_dot_segments() {
    assert!(matches!(upstream_url("http://core", "%2e%2e/secrets", None), Err(ProxyError::InvalidPath(_))));
    assert!(matches!(upstream_url("http://core", "a/%2E/b", None), Err(ProxyError::InvalidPath(_))));
    assert!(matches!(upstream_url("http://core", ".%2e/x", None), Err(ProxyError::InvalidPath(_))));
}

#[test]
fn upstream_url_keeps_percent_encoding() {
    let url = upstream_url("http://core", "devices%3Fadmin=1", None).unwrap();
    assert_eq!(url, "http://core/devices%3Fadmin=1");
    let url = upstream_url("http://core", "files/a%2Fb%23c", Some("x=1")).unwrap();
    assert_eq!(url, "http://core/files/a%2Fb%23c?x=1");
}

#[test]
fn error_statuses() {
    assert_eq!(ProxyError::NotConfigured.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(ProxyError::InvalidPath("..".into()).status(), StatusCode::BAD_REQUEST);
}

// =============================================================================
// End-to-end through a mock upstream
// =============================================================================

async fn echo(method: Method, uri: Uri, headers: HeaderMap, body: String) -> axum::Json<Value> {
    let auth = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    axum::Json(json!({
        "method": method.as_str(),
        "path": uri.path(),
        "query": uri.query(),
        "authorization": auth,
        "content_type": content_type,
        "body": body,
    }))
}

async fn reject_login() -> (StatusCode, axum::Json<Value>) {
    (StatusCode::UNAUTHORIZED, axum::Json(json!({ "detail": "Bad credentials" })))
}

async fn serve(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind should succeed");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("test server failed");
    });
    format!("http://{addr}")
}

async fn spawn_upstream() -> String {
    serve(
        Router::new()
            .route("/auth/login", post(reject_login))
            .route("/devices", get(echo))
            .route("/tenants", post(echo))
            .fallback(echo),
    )
    .await
}

async fn spawn_app(upstream: Option<&str>) -> String {
    let state = AppState::with_client(reqwest::Client::new(), upstream);
    serve(crate::routes::api_routes(state)).await
}

#[tokio::test]
async fn healthz_is_ok() {
    let app = spawn_app(None).await;
    let resp = reqwest::get(format!("{app}/healthz")).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
}

#[tokio::test]
async fn forwards_get_with_query_and_bearer() {
    let upstream = spawn_upstream().await;
    let app = spawn_app(Some(&upstream)).await;

    let resp = reqwest::Client::new()
        .get(format!("{app}/api/devices?limit=5"))
        .bearer_auth("jwt-123")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["method"], "GET");
    assert_eq!(body["path"], "/devices");
    assert_eq!(body["query"], "limit=5");
    assert_eq!(body["authorization"], "Bearer jwt-123");
}

#[tokio::test]
async fn forwards_post_body_and_content_type() {
    let upstream = spawn_upstream().await;
    let app = spawn_app(Some(&upstream)).await;

    let resp = reqwest::Client::new()
        .post(format!("{app}/api/tenants"))
        .header("content-type", "application/json")
        .body(r#"{"name":"Norte","slug":"norte"}"#)
        .send()
        .await
        .unwrap();
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["method"], "POST");
    assert_eq!(body["content_type"], "application/json");
    assert_eq!(body["body"], r#"{"name":"Norte","slug":"norte"}"#);
}

#[tokio::test]
async fn relays_upstream_error_status_and_body() {
    let upstream = spawn_upstream().await;
    let app = spawn_app(Some(&upstream)).await;

    let resp = reqwest::Client::new()
        .post(format!("{app}/api/auth/login"))
        .form(&[("username", "a@b.com"), ("password", "nope")])
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::UNAUTHORIZED);
    assert_eq!(
        resp.headers().get("content-type").and_then(|v| v.to_str().ok()),
        Some("application/json")
    );
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["detail"], "Bad credentials");
}

#[tokio::test]
async fn missing_upstream_is_service_unavailable() {
    let app = spawn_app(None).await;
    let resp = reqwest::get(format!("{app}/api/devices")).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn unreachable_upstream_is_bad_gateway() {
    // Reserve a port, then free it so nothing is listening there.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let dead = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let app = spawn_app(Some(&dead)).await;
    let resp = reqwest::get(format!("{app}/api/devices")).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn encoded_question_mark_stays_in_the_path() {
    let upstream = spawn_upstream().await;
    let app = spawn_app(Some(&upstream)).await;

    let resp = reqwest::get(format!("{app}/api/devices%3Fadmin=1")).await.unwrap();
    let body: Value = resp.json().await.unwrap();
    assert_ne!(body["path"], "/devices");
    assert_eq!(body["path"], "/devices%3Fadmin=1");
    assert_eq!(body["query"], Value::Null);
}

#[tokio::test]
async fn encoded_slash_does_not_split_segments() {
    let upstream = spawn_upstream().await;
    let app = spawn_app(Some(&upstream)).await;

    let resp = reqwest::get(format!("{app}/api/files/a%2Fb")).await.unwrap();
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["path"], "/files/a%2Fb");
}

