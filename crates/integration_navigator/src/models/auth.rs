//! Login and data hash

use serde::Deserialize;

/// Successful login; the accompanying `"login": true` flag is ignored
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Login {
    /// Session token for later token logins
    pub token: String,
}

/// Current version of the building data
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DataHash {
    /// Changes whenever the building list changes
    pub hash: String,
    /// Whether the service encrypts the payload
    pub encryption: bool,
}
