//! Response types for the remote API

use std::collections::HashMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of a successful `POST /Session`
///
/// The service returns more fields than the token; everything else is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// One managed device as returned by `GET /CMDB/Devices`
///
/// The service reports discover times as naive local timestamps
/// (`0001-01-01T00:00:00` for never-discovered devices).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceSummary {
    pub id: String,
    #[serde(rename = "mgmtIP")]
    pub mgmt_ip: String,
    pub hostname: String,
    pub device_type_name: String,
    pub first_discover_time: NaiveDateTime,
    pub last_discover_time: NaiveDateTime,
}

/// Body of `GET /CMDB/Devices`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceListResponse {
    pub devices: Vec<DeviceSummary>,
}

/// Body of `GET /CMDB/Devices/Attributes`
///
/// Attribute values are heterogeneous (string, boolean, numeric), so they are
/// kept as raw JSON values and interpreted by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceAttributesResponse {
    pub hostname: String,
    pub attributes: HashMap<String, Value>,
    pub status_code: i64,
    pub status_description: String,
}
