//! Inventory sink interface and the in-memory implementation

use std::collections::BTreeMap;

use serde_json::Value;

/// Host/variable store an inventory refresh writes into
///
/// This is the boundary to the consuming orchestration layer: it registers
/// hosts by name and attaches named variables to them. Implementations are
/// write-only from the projector's point of view; the projector never reads
/// back or removes entries.
pub trait InventorySink {
    /// Register a host by name. Registering the same name twice is allowed
    /// and must be idempotent.
    fn add_host(&mut self, hostname: &str);

    /// Set one variable on a previously registered host.
    fn set_variable(&mut self, hostname: &str, key: &str, value: Value);
}

/// In-memory inventory keyed by hostname
///
/// Useful for tests and for embedders that want a materialized inventory to
/// serialize themselves.
#[derive(Debug, Clone, Default)]
pub struct MemoryInventory {
    hosts: BTreeMap<String, BTreeMap<String, Value>>,
}

impl MemoryInventory {
    /// Create an empty inventory
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of hosts
    #[must_use]
    pub fn len(&self) -> usize {
        self.hosts.len()
    }

    /// Whether the inventory holds no hosts
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }

    /// Host names in sorted order
    pub fn hostnames(&self) -> impl Iterator<Item = &str> {
        self.hosts.keys().map(String::as_str)
    }

    /// Variables of one host, if registered
    #[must_use]
    pub fn variables(&self, hostname: &str) -> Option<&BTreeMap<String, Value>> {
        self.hosts.get(hostname)
    }

    /// Export the whole inventory as a JSON object keyed by hostname
    #[must_use]
    pub fn to_json(&self) -> Value {
        serde_json::to_value(&self.hosts).unwrap_or(Value::Null)
    }
}

impl InventorySink for MemoryInventory {
    fn add_host(&mut self, hostname: &str) {
        self.hosts.entry(hostname.to_string()).or_default();
    }

    fn set_variable(&mut self, hostname: &str, key: &str, value: Value) {
        self.hosts
            .entry(hostname.to_string())
            .or_default()
            .insert(key.to_string(), value);
    }
}
