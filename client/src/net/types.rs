//! Wire DTOs returned by the fleet back-office API.
//!
//! DESIGN
//! ======
//! Field names mirror the upstream JSON so serde needs no renames.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A tenant company.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub id: i64,
    pub name: String,
    pub slug: String,
}

/// A tracked device (vehicle telematics unit).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    pub id: i64,
    pub name: String,
    /// Hardware identifier, typically the modem IMEI.
    pub external_id: String,
    pub tenant_id: i64,
    /// Ingest token the device authenticates telemetry with.
    #[serde(default)]
    pub token: String,
}

/// Successful `/auth/login` response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    pub role: Option<String>,
    pub tenant_id: Option<i64>,
}

fn default_token_type() -> String {
    "bearer".to_owned()
}

/// Upstream error body (`{"detail": "..."}`).
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ApiErrorBody {
    pub detail: String,
}
