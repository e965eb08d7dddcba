//! Typed shapes of the navigator responses

mod auth;
mod building;
mod canteen;
mod floor;
mod room;
mod route;
mod search;
mod timetable;
mod transport;

pub use auth::{DataHash, Login};
pub use building::{BuildingAccessibility, BuildingComplex, BuildingStructure, Entrance};
pub use canteen::{CANTEENS, CanteenMenu, Meal, canteen_name};
pub use floor::{Floor, Room};
pub use room::{
    AccessibilityBadge, AccessibilityCategory, AccessibilityEntry, Doorplate, Person,
    RoomAccessibility, RoomInfo,
};
pub use route::{Indication, Instruction, Route};
pub use search::{Search, SearchResult};
pub use timetable::{Course, Day, TIMESLOTS, Timetable, Weekday};
pub use transport::{Departure, PublicTransport, TransportMode};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// `{x, y}` point as sent by the floor and building endpoints
#[derive(Debug, Clone, Copy, Deserialize)]
pub(crate) struct RawPoint {
    pub x: f64,
    pub y: f64,
}

/// Decode a field, turning any decode failure into `None`
pub(crate) fn lenient_option<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Decode a list field, turning `null` or a decode failure into an empty list
pub(crate) fn lenient_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Render a scalar JSON value as text; objects, arrays and `null` yield `None`
pub(crate) fn scalar_to_string(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
