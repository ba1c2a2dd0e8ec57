//! Refresh configuration loading and types

use std::path::Path;

use serde::{Deserialize, Serialize};

use netfleet_client::ClientConfig;

use crate::error::InventoryError;

/// Configuration for one inventory refresh
///
/// Loaded from a TOML file by the embedding layer, e.g.:
///
/// ```toml
/// username = "svc-inventory"
/// password = "secret"
///
/// [client]
/// endpoint = "https://appliance.example.net/ServicesAPI/API/V1"
/// insecure = true
/// timeout_secs = 10
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshConfig {
    /// Account used to open the API session
    pub username: String,
    /// Password for the account
    pub password: String,
    /// Connection settings for the remote API
    pub client: ClientConfig,
}

impl RefreshConfig {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, InventoryError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| InventoryError::ConfigRead {
            path: path.display().to_string(),
            source,
        })?;
        Ok(toml::from_str(&content)?)
    }
}
