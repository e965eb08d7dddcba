//! Room identifier value object
//!
//! Room identifiers look like `351601.0420`: a four character building
//! structure code (`3516`), a two character floor level (`01`) and, after
//! the dot, the room number (`0420`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;
use crate::value_objects::floor_level::parse_floor_level;

const STRUCTURE_LEN: usize = 4;
const PREFIX_LEN: usize = 6;

/// A parsed room identifier
///
/// # Examples
///
/// ```
/// use domain::value_objects::RoomId;
///
/// let id = RoomId::parse("118100.0220").expect("valid room id");
/// assert_eq!(id.building_structure(), "1181");
/// assert_eq!(id.raw_level(), "00");
/// assert_eq!(id.level(), Some(0));
/// assert_eq!(id.room_number(), "0220");
/// assert_eq!(id.full_id(), "118100.0220");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RoomId {
    full_id: String,
}

impl RoomId {
    /// Parse a dotted room identifier
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidRoomId` if there is no dot, the part
    /// before the dot is not exactly six ASCII characters, the room number
    /// is empty, or the embedded floor level is not a valid level.
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        let invalid = || DomainError::InvalidRoomId(value.to_string());

        let (prefix, room) = value.split_once('.').ok_or_else(invalid)?;
        if !prefix.is_ascii() || prefix.len() != PREFIX_LEN || room.is_empty() {
            return Err(invalid());
        }
        parse_floor_level(&prefix[STRUCTURE_LEN..]).map_err(|_| invalid())?;

        Ok(Self {
            full_id: value.to_string(),
        })
    }

    /// Identifier of the building structure this room is located in
    #[must_use]
    pub fn building_structure(&self) -> &str {
        &self.full_id[..STRUCTURE_LEN]
    }

    /// Floor level as sent on the wire, e.g. `"00"` or `"--"`
    #[must_use]
    pub fn raw_level(&self) -> &str {
        &self.full_id[STRUCTURE_LEN..PREFIX_LEN]
    }

    /// Floor level, `None` for structures without floors
    #[must_use]
    pub fn level(&self) -> Option<i32> {
        parse_floor_level(self.raw_level()).ok().flatten()
    }

    /// Room number after the dot
    #[must_use]
    pub fn room_number(&self) -> &str {
        &self.full_id[PREFIX_LEN + 1..]
    }

    /// The complete identifier, as used by the room endpoints
    #[must_use]
    pub fn full_id(&self) -> &str {
        &self.full_id
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_id)
    }
}

impl FromStr for RoomId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for RoomId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<RoomId> for String {
    fn from(id: RoomId) -> Self {
        id.full_id
    }
}
