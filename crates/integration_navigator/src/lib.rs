//! TU Dresden campus navigator integration
//!
//! Typed access to the [campus navigator](https://navigator.tu-dresden.de)
//! web service: buildings, floor plans, rooms, routing, search, timetables,
//! canteen menus, public transport departures and login.
//!
//! # Architecture
//!
//! Every call goes through the same pipeline. An [`Endpoint`] is turned into
//! an [`ApiRequest`] (URL, method, form body, expected [`TextEncoding`]),
//! sent with `reqwest`, repaired by [`normalize`] and decoded into a model by
//! [`decode_response`]. [`NavigatorClient`] defines the operations and is
//! implemented by [`HttpNavigatorClient`]. Canonical navigator paths are
//! handled by [`domain::Resource`].
//!
//! # Example
//!
//! ```rust,ignore
//! use domain::value_objects::RouteMode;
//! use integration_navigator::{HttpNavigatorClient, NavigatorClient, NavigatorConfig};
//!
//! let client = HttpNavigatorClient::new(&NavigatorConfig::default())?;
//!
//! let floors = client.fetch_floors("apb").await?;
//! let results = client.search("E023").await?;
//! for hit in &results.room_results {
//!     println!("{} -> {}", hit.title, hit.resource);
//! }
//! ```

mod client;
mod config;
mod encoding;
mod error;
mod models;
mod request;
mod tiles;

pub use client::{
    BuildingsUpdate, HttpNavigatorClient, NavigatorClient, fetch_buildings_if_changed,
};
pub use config::NavigatorConfig;
pub use encoding::{TextEncoding, decode_response, normalize};
pub use error::NavigatorError;
pub use models::{
    AccessibilityBadge, AccessibilityCategory, AccessibilityEntry, BuildingAccessibility,
    BuildingComplex, BuildingStructure, CANTEENS, CanteenMenu, Course, DataHash, Day, Departure,
    Doorplate, Entrance, Floor, Indication, Instruction, Login, Meal, Person, PublicTransport, Room,
    RoomAccessibility, RoomInfo, Route, Search, SearchResult, TIMESLOTS, Timetable, TransportMode,
    Weekday, canteen_name,
};
pub use request::{ApiRequest, Endpoint};
pub use tiles::{ZoomLevel, floorplan_tile_url, map_tile_url};
