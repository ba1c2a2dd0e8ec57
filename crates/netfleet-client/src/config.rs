//! Client configuration

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Connection settings for the device-management API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the API, e.g. `https://appliance.example.net/ServicesAPI/API/V1`
    pub endpoint: String,
    /// Accept invalid TLS certificates.
    ///
    /// Management appliances commonly ship self-signed certificates; this flag
    /// must be set explicitly to talk to one. Verification stays on otherwise.
    #[serde(default)]
    pub insecure: bool,
    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    30
}

impl ClientConfig {
    /// Create a config for an endpoint with verification on and the default timeout
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            insecure: false,
            timeout_secs: default_timeout_secs(),
        }
    }

    /// Request timeout as a `Duration`
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
