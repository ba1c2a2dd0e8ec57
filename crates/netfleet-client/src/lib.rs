//! netfleet-client: HTTP client for the device-management API
//!
//! Provides a session-authenticated client for the CMDB-style REST API that
//! manages the device fleet: login/logout plus the two read operations the
//! inventory needs (device listing and per-device attributes).
//!
//! # Examples
//!
//! ```no_run
//! use netfleet_client::{ApiClient, ClientConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ClientConfig::new("https://appliance.example.net/ServicesAPI/API/V1");
//! let mut client = ApiClient::new(&config)?;
//!
//! client.login("svc-inventory", "secret").await?;
//!
//! for device in client.list_devices().await? {
//!     let attrs = client.get_device_attributes(&device.hostname, None).await?;
//!     println!("{}: {} attributes", device.hostname, attrs.attributes.len());
//! }
//!
//! client.logout().await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod http;

pub use config::ClientConfig;
pub use error::{ClientError, Result};
pub use http::ApiClient;
