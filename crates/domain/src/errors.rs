//! Domain-level errors

use thiserror::Error;

/// Errors that can occur while constructing or parsing domain values
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DomainError {
    /// A path or URL does not match any known resource grammar
    #[error("The URL to this specific resource could not be read: {0}")]
    InvalidResourcePath(String),

    /// A floor level string is neither numeric nor the `--` sentinel
    #[error("Invalid floor level: {0}")]
    InvalidFloorLevel(String),

    /// A room identifier does not have the `BBBBLL.RRRR` shape
    #[error("Invalid room id: {0}")]
    InvalidRoomId(String),

    /// Coordinates outside the valid latitude/longitude range
    #[error("Invalid coordinates: {latitude}, {longitude}")]
    InvalidCoordinates {
        /// Offending latitude
        latitude: f64,
        /// Offending longitude
        longitude: f64,
    },
}

impl DomainError {
    /// Create an invalid resource path error
    pub fn invalid_path(path: impl Into<String>) -> Self {
        Self::InvalidResourcePath(path.into())
    }
}
