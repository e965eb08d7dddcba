//! Routing mode value object

use std::fmt;

use serde::{Deserialize, Serialize};

/// How a route should be travelled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteMode {
    /// On foot
    #[default]
    Foot,
    /// By bicycle
    Bike,
    /// Wheelchair accessible paths only
    Wheelchair,
    /// By car
    Car,
}

impl RouteMode {
    /// All supported modes
    pub const ALL: [Self; 4] = [Self::Foot, Self::Bike, Self::Wheelchair, Self::Car];

    /// Wire name of this mode
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Foot => "foot",
            Self::Bike => "bike",
            Self::Wheelchair => "wheelchair",
            Self::Car => "car",
        }
    }

    /// Look up a mode by its wire name
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.as_str() == token)
    }
}

impl fmt::Display for RouteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
