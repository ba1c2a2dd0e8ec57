//! netfleet-api: Shared wire types for the device-management API
//!
//! Contains the request and response types exchanged with the remote
//! CMDB service, used across the client and inventory crates.

pub mod requests;
pub mod responses;
