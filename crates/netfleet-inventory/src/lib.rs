//! netfleet-inventory: device fleet to inventory projection
//!
//! Turns the device fleet reported by the management API into a host/variable
//! inventory. [`InventoryProjector`] owns the refresh cycle (login, list,
//! per-device attributes, logout) and writes the result through the
//! [`InventorySink`] trait, which the consuming orchestration layer implements.
//!
//! # Example
//!
//! ```no_run
//! use netfleet_inventory::{InventoryProjector, MemoryInventory, RefreshConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = RefreshConfig::load("netfleet.toml")?;
//! let projector = InventoryProjector::new(config);
//!
//! let mut inventory = MemoryInventory::new();
//! projector.refresh(&mut inventory).await?;
//!
//! println!("{}", inventory.to_json());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod projector;
pub mod sink;

pub use config::RefreshConfig;
pub use error::InventoryError;
pub use projector::InventoryProjector;
pub use sink::{InventorySink, MemoryInventory};
