//! Inventory refresh orchestration

use serde_json::Value;
use tracing::{debug, info, instrument, warn};

use netfleet_client::ApiClient;

use crate::config::RefreshConfig;
use crate::error::InventoryError;
use crate::sink::InventorySink;

/// Attribute keys copied verbatim from the device attribute map. Together
/// with `ansible_host` these are the only variables a host ever gets.
const PROJECTED_ATTRIBUTES: [&str; 5] = ["subTypeName", "vendor", "model", "site", "loc"];

/// One fully resolved host, held back until the whole fleet collected
struct StagedHost {
    hostname: String,
    variables: Vec<(String, Value)>,
}

/// Drives the API client through a full refresh cycle and populates a sink
///
/// The refresh is all-or-nothing: any failure between login and the last
/// attribute fetch aborts the run before a single sink write happens, so the
/// consuming layer sees either a complete inventory or a hard error.
pub struct InventoryProjector {
    config: RefreshConfig,
}

impl InventoryProjector {
    /// Create a projector from refresh configuration
    #[must_use]
    pub fn new(config: RefreshConfig) -> Self {
        Self { config }
    }

    /// Run one full inventory refresh into `sink`
    ///
    /// Opens a session, lists the fleet, fetches attributes per device in
    /// service order, releases the session, and only then writes every host
    /// with exactly six variables: `ansible_host` (management IP from the
    /// device summary) plus `subTypeName`, `vendor`, `model`, `site`, `loc`
    /// from the attribute map.
    ///
    /// # Errors
    /// Returns an error if login, listing, or any single attribute fetch
    /// fails, if the device list is empty, or if a device lacks a projected
    /// attribute. On error the sink is untouched. A failed logout is logged
    /// and does not fail an otherwise successful refresh.
    #[instrument(skip(self, sink), fields(endpoint = %self.config.client.endpoint))]
    pub async fn refresh(&self, sink: &mut dyn InventorySink) -> Result<(), InventoryError> {
        info!("refreshing inventory");

        let mut client =
            ApiClient::new(&self.config.client).map_err(InventoryError::InvalidEndpoint)?;

        client
            .login(&self.config.username, &self.config.password)
            .await
            .map_err(|source| InventoryError::LoginFailed {
                endpoint: self.config.client.endpoint.clone(),
                source,
            })?;

        let collected = self.collect(&client).await;

        // Release the session on the appliance whether or not collection
        // succeeded; a leaked session blocks the account until it expires.
        if let Err(e) = client.logout().await {
            warn!(error = %e, "failed to release session");
        }

        let staged = collected?;

        for host in &staged {
            sink.add_host(&host.hostname);
            for (key, value) in &host.variables {
                sink.set_variable(&host.hostname, key, value.clone());
            }
        }

        info!(hosts = staged.len(), "inventory refresh completed");
        Ok(())
    }

    /// Fetch and resolve every device without touching the sink
    async fn collect(&self, client: &ApiClient) -> Result<Vec<StagedHost>, InventoryError> {
        let devices = client
            .list_devices()
            .await
            .map_err(InventoryError::ListDevices)?;

        if devices.is_empty() {
            return Err(InventoryError::NoDevices);
        }

        let mut staged = Vec::with_capacity(devices.len());

        for device in devices {
            debug!(hostname = %device.hostname, "fetching device attributes");

            let response = client
                .get_device_attributes(&device.hostname, None)
                .await
                .map_err(|source| InventoryError::Attributes {
                    hostname: device.hostname.clone(),
                    source,
                })?;

            let mut variables = Vec::with_capacity(1 + PROJECTED_ATTRIBUTES.len());
            variables.push(("ansible_host".to_string(), Value::from(device.mgmt_ip)));

            for key in PROJECTED_ATTRIBUTES {
                let value = response.attributes.get(key).cloned().ok_or_else(|| {
                    InventoryError::MissingAttribute {
                        hostname: device.hostname.clone(),
                        attribute: key.to_string(),
                    }
                })?;
                variables.push((key.to_string(), value));
            }

            staged.push(StagedHost {
                hostname: device.hostname,
                variables,
            });
        }

        Ok(staged)
    }
}
