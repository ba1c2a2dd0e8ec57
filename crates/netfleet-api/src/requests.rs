//! Request types for the remote API

use serde::{Deserialize, Serialize};

/// Body of `POST /Session`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}
