use serde::{Deserialize, Serialize};

/// Body of a successful `GET /health` response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthStatus {
    /// Service-reported status, `"healthy"` when all is well.
    pub status: String,

    /// Server-side time of the probe, as sent.
    #[serde(default)]
    pub timestamp: String,
}

impl HealthStatus {
    /// Returns true if the service reports itself healthy.
    pub fn is_healthy(&self) -> bool {
        self.status.eq_ignore_ascii_case("healthy")
    }
}
