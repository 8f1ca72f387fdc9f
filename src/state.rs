//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It is
//! immutable after startup: one pooled HTTP client and the upstream base URL.

use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    pub upstream: Option<Arc<str>>,
}

impl AppState {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built (TLS backend init).
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.api_timeout_secs))
            .build()?;
        Ok(Self::with_client(http, config.api_url.as_deref()))
    }

    pub fn with_client(http: reqwest::Client, upstream: Option<&str>) -> Self {
        Self { http, upstream: upstream.map(Arc::from) }
    }
}
