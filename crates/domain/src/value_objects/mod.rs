//! Value Objects - Immutable, identity-less navigator primitives

mod floor_level;
mod geo_coordinate;
mod map_view;
mod room_id;
mod room_type;
mod route_mode;
mod ternary;

pub use floor_level::{NO_FLOOR, format_floor_level, parse_floor_level};
pub use geo_coordinate::GeoCoordinate;
pub use map_view::MapView;
pub use room_id::RoomId;
pub use room_type::RoomType;
pub use route_mode::RouteMode;
pub use ternary::Ternary;
