//! Error types for netfleet-inventory

use thiserror::Error;

use netfleet_client::ClientError;

/// Errors that can occur during an inventory refresh
///
/// Every variant is fatal for the whole refresh: the sink is either fully
/// populated or left untouched, never in between.
#[derive(Error, Debug)]
pub enum InventoryError {
    /// Client could not be built from the configured endpoint
    #[error("invalid client configuration: {0}")]
    InvalidEndpoint(#[source] ClientError),

    /// Login to the remote service failed
    #[error("login to {endpoint} failed: {source}")]
    LoginFailed {
        /// Configured API endpoint
        endpoint: String,
        /// Underlying client error
        source: ClientError,
    },

    /// Device listing failed
    #[error("device listing failed: {0}")]
    ListDevices(#[source] ClientError),

    /// The service returned no devices
    #[error("no devices returned by the API")]
    NoDevices,

    /// Attribute fetch for one device failed
    #[error("attribute fetch for {hostname} failed: {source}")]
    Attributes {
        /// Device hostname
        hostname: String,
        /// Underlying client error
        source: ClientError,
    },

    /// A device is missing an attribute the projection requires
    #[error("device {hostname} is missing attribute {attribute}")]
    MissingAttribute {
        /// Device hostname
        hostname: String,
        /// Missing attribute key
        attribute: String,
    },

    /// Configuration file could not be read
    #[error("cannot read config {path}: {source}")]
    ConfigRead {
        /// Path that was attempted
        path: String,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Configuration file could not be parsed
    #[error("invalid config: {0}")]
    ConfigParse(#[from] toml::de::Error),
}
