//! Server configuration parsed from environment variables.
//!
//! Variables:
//! - `PORT`: listen port, default 3000
//! - `FLEET_API_URL`: back-office API base URL; `/api/*` answers 503 when unset
//! - `FLEET_API_TIMEOUT_SECS`: upstream request timeout, default 15
//!
//! A `.env` file in the working directory is loaded first by `main`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 15;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("invalid FLEET_API_URL (expected http:// or https://): {0}")]
    InvalidApiUrl(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    /// Upstream base URL without a trailing slash.
    pub api_url: Option<String>,
    pub api_timeout_secs: u64,
}

impl Config {
    /// Build typed config from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error for an unparseable `PORT` or a non-HTTP `FLEET_API_URL`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        let api_url = parse_api_url(std::env::var("FLEET_API_URL").ok().as_deref())?;
        let api_timeout_secs = env_parse_u64("FLEET_API_TIMEOUT_SECS", DEFAULT_API_TIMEOUT_SECS);
        Ok(Self { port, api_url, api_timeout_secs })
    }
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|v| *v > 0)
        .unwrap_or(default)
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value.parse().map_err(|_| ConfigError::InvalidPort(value.to_owned())),
    }
}

fn parse_api_url(raw: Option<&str>) -> Result<Option<String>, ConfigError> {
    let Some(value) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };
    if !(value.starts_with("http://") || value.starts_with("https://")) {
        return Err(ConfigError::InvalidApiUrl(value.to_owned()));
    }
    Ok(Some(value.trim_end_matches('/').to_owned()))
}
