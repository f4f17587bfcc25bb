//! Response shape of `GET /health`.

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `healthy` or `degraded`.
    pub status: String,
    pub version: String,
    pub checks: HealthChecks,
}

#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub store: CheckStatus,
}

/// Outcome of probing one backing component.
#[derive(Debug, Serialize)]
pub struct CheckStatus {
    /// `ok` or `error`.
    pub status: String,

    /// Store kind on success, error text on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Round-trip time of the probe.
    pub latency_ms: u64,
}
