//! Floor plans

use domain::DomainError;
use domain::resource::Resource;
use domain::value_objects::{RoomId, RoomType, parse_floor_level};
use serde::Deserialize;

use super::RawPoint;

/// A floor of a building
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawFloor")]
pub struct Floor {
    /// Level as on the wire, e.g. `"-1"`, `"00"` or `"--"`
    pub raw_level: String,
    /// Width of the plan in plan units
    pub max_x: f64,
    /// Height of the plan in plan units
    pub max_y: f64,
    /// Every room on this floor
    pub rooms: Vec<Room>,
}

impl Floor {
    /// Floor level, `None` for `"--"` or unparsable levels
    #[must_use]
    pub fn level(&self) -> Option<i32> {
        parse_floor_level(&self.raw_level).ok().flatten()
    }

    /// Resource highlighting `room` on this floor of `building`
    #[must_use]
    pub fn room_resource(&self, building: &str, room: &Room) -> Resource {
        Resource::RoomOnFloor {
            building: building.to_string(),
            floor: self.raw_level.clone(),
            room: room.id.clone(),
        }
    }

    /// Rooms flagged as lecture halls
    pub fn lecture_halls(&self) -> impl Iterator<Item = &Room> {
        self.rooms.iter().filter(|room| room.is_lecture_hall)
    }
}

/// A room outline on a floor plan
#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    /// Room id as on the wire
    pub id: String,
    /// Display name
    pub name: Option<String>,
    /// Preferred position of the name label in plan units
    pub name_location: Option<(f64, f64)>,
    /// Outline in plan units
    pub points: Vec<(f64, f64)>,
    /// Listed as a lecture hall
    pub is_lecture_hall: bool,
    /// Type of the room
    pub room_type: RoomType,
}

impl Room {
    /// Parsed room id
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidRoomId` if the wire id is malformed.
    pub fn room_id(&self) -> Result<RoomId, DomainError> {
        RoomId::parse(&self.id)
    }

    /// Fill colour, as `0xRRGGBB`
    #[must_use]
    pub const fn color(&self) -> u32 {
        self.room_type.color()
    }
}

#[derive(Debug, Deserialize)]
struct RawFloor {
    etage: String,
    #[serde(rename = "maxX")]
    max_x: f64,
    #[serde(rename = "maxY")]
    max_y: f64,
    typen: Vec<RawRoomGroup>,
}

#[derive(Debug, Deserialize)]
struct RawRoomGroup {
    typ: i64,
    #[serde(rename = "räume")]
    rooms: Vec<RawRoom>,
}

#[derive(Debug, Deserialize)]
struct RawRoom {
    id: String,
    name: Option<String>,
    namex: Option<f64>,
    namey: Option<f64>,
    punkte: Vec<RawPoint>,
    list: Option<bool>,
}

impl From<RawRoom> for Room {
    /// First pass: the group header has not been applied yet
    fn from(raw: RawRoom) -> Self {
        Self {
            id: raw.id,
            name: raw.name,
            name_location: raw.namex.zip(raw.namey),
            points: raw.punkte.into_iter().map(|p| (p.x, p.y)).collect(),
            is_lecture_hall: raw.list.unwrap_or(false),
            room_type: RoomType::Other,
        }
    }
}

impl From<RawFloor> for Floor {
    fn from(raw: RawFloor) -> Self {
        let rooms = raw
            .typen
            .into_iter()
            .flat_map(|group| {
                let room_type = RoomType::from_code(group.typ);
                group.rooms.into_iter().map(move |raw_room| Room {
                    room_type,
                    ..Room::from(raw_room)
                })
            })
            .collect();

        Self {
            raw_level: raw.etage,
            max_x: raw.max_x,
            max_y: raw.max_y,
            rooms,
        }
    }
}
