//! REST API helpers for the back-office endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` against the
//! same-origin `/api` prefix, which the server forwards upstream.
//! Server-side (SSR): stubs returning errors since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` outputs instead of panics so failed fetches
//! degrade page content without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Company, Device, LoginResponse};

const LOGIN_ENDPOINT: &str = "/api/auth/login";
const COMPANIES_ENDPOINT: &str = "/api/tenants";
const DEVICES_ENDPOINT: &str = "/api/devices";

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(what: &str, status: u16) -> String {
    format!("{what} request failed: {status}")
}

/// Prefer the upstream `detail` message, fall back to the status line.
#[cfg(any(test, feature = "hydrate"))]
fn login_failed_message(status: u16, body: &str) -> String {
    match serde_json::from_str::<super::types::ApiErrorBody>(body) {
        Ok(err) if !err.detail.is_empty() => format!("login failed: {}", err.detail),
        _ => format!("login failed: {status}"),
    }
}

/// Form fields of the OAuth2 password grant the upstream login expects.
#[cfg(any(test, feature = "hydrate"))]
fn login_fields<'a>(email: &'a str, password: &'a str) -> [(&'static str, &'a str); 2] {
    [("username", email), ("password", password)]
}

/// Exchange credentials for a bearer token via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns an error string on transport failure, non-2xx status, or an
/// unparseable body.
pub async fn login(email: &str, password: &str) -> Result<LoginResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let params = web_sys::UrlSearchParams::new().map_err(|_| "could not build login form".to_owned())?;
        for (key, value) in login_fields(email, password) {
            params.append(key, value);
        }
        let resp = gloo_net::http::Request::post(LOGIN_ENDPOINT)
            .body(params)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            return Err(login_failed_message(resp.status(), &body));
        }
        resp.json::<LoginResponse>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password, LOGIN_ENDPOINT);
        Err("not available on server".to_owned())
    }
}

/// Fetch all companies from `GET /api/tenants`. The tenant list is public
/// upstream, so no bearer token is sent.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn fetch_companies() -> Result<Vec<Company>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(COMPANIES_ENDPOINT)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("companies", resp.status()));
        }
        resp.json::<Vec<Company>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = COMPANIES_ENDPOINT;
        Err("not available on server".to_owned())
    }
}

/// Fetch the caller's tenant devices from `GET /api/devices`.
///
/// # Errors
///
/// Returns an error string if the request fails or the token is rejected.
pub async fn fetch_devices(token: &str) -> Result<Vec<Device>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(DEVICES_ENDPOINT)
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("devices", resp.status()));
        }
        resp.json::<Vec<Device>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, DEVICES_ENDPOINT);
        Err("not available on server".to_owned())
    }
}
