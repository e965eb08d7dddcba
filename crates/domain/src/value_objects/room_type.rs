//! Room type value object
//!
//! The navigator groups rooms by a numeric type code. Unknown codes are
//! kept as [`RoomType::Other`] instead of failing the whole floor decode.

use serde::{Deserialize, Serialize};

/// Kind of room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RoomType {
    /// Stairwell (11)
    Stairwell,
    /// Elevator (12)
    Elevator,
    /// Restroom (13)
    Restroom,
    /// Wheelchair accessible restroom (14)
    AccessibleRestroom,
    /// Baby changing room (15)
    BabyChangingRoom,
    /// Library (21)
    Library,
    /// Lecture hall (22)
    LectureHall,
    /// Seminar room (23)
    SeminarRoom,
    /// Drawing room (24)
    DrawingRoom,
    /// Resting room (26)
    RestingRoom,
    /// Coat room (27)
    CoatRoom,
    /// Generic room (29)
    Room,
    /// Any code not listed above
    #[default]
    Other,
}

impl RoomType {
    /// Map a wire type code
    #[must_use]
    pub const fn from_code(code: i64) -> Self {
        match code {
            11 => Self::Stairwell,
            12 => Self::Elevator,
            13 => Self::Restroom,
            14 => Self::AccessibleRestroom,
            15 => Self::BabyChangingRoom,
            21 => Self::Library,
            22 => Self::LectureHall,
            23 => Self::SeminarRoom,
            24 => Self::DrawingRoom,
            26 => Self::RestingRoom,
            27 => Self::CoatRoom,
            29 => Self::Room,
            _ => Self::Other,
        }
    }

    /// Wire type code, `-1` for [`RoomType::Other`]
    #[must_use]
    pub const fn code(self) -> i64 {
        match self {
            Self::Stairwell => 11,
            Self::Elevator => 12,
            Self::Restroom => 13,
            Self::AccessibleRestroom => 14,
            Self::BabyChangingRoom => 15,
            Self::Library => 21,
            Self::LectureHall => 22,
            Self::SeminarRoom => 23,
            Self::DrawingRoom => 24,
            Self::RestingRoom => 26,
            Self::CoatRoom => 27,
            Self::Room => 29,
            Self::Other => -1,
        }
    }

    /// Fill colour used when drawing floor plans, as `0xRRGGBB`
    #[must_use]
    pub const fn color(self) -> u32 {
        match self {
            Self::Stairwell => 0x00d4_bfb4,
            Self::Elevator => 0x00bd_927b,
            Self::Restroom | Self::AccessibleRestroom | Self::BabyChangingRoom => 0x00a3_dbf0,
            Self::LectureHall => 0x00ff_a35c,
            Self::SeminarRoom => 0x00ec_f7aa,
            Self::CoatRoom => 0x00a0_9cbd,
            Self::Room => 0x00f0_f0f0,
            _ => 0x00ff_ffff,
        }
    }
}

impl Serialize for RoomType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_i64(self.code())
    }
}

impl<'de> Deserialize<'de> for RoomType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let code = i64::deserialize(deserializer)?;
        Ok(Self::from_code(code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes() {
        assert_eq!(RoomType::from_code(23), RoomType::SeminarRoom);
        assert_eq!(RoomType::from_code(22), RoomType::LectureHall);
        assert_eq!(RoomType::from_code(29), RoomType::Room);
    }

    #[test]
    fn unknown_codes_are_other() {
        assert_eq!(RoomType::from_code(25), RoomType::Other);
        assert_eq!(RoomType::from_code(0), RoomType::Other);
        assert_eq!(RoomType::from_code(-1), RoomType::Other);
    }

    #[test]
    fn codes_round_trip() {
        for code in [11, 12, 13, 14, 15, 21, 22, 23, 24, 26, 27, 29] {
            assert_eq!(RoomType::from_code(code).code(), code);
        }
    }

    #[test]
    fn colors() {
        assert_eq!(RoomType::Stairwell.color(), 0xd4bfb4);
        assert_eq!(RoomType::Restroom.color(), RoomType::BabyChangingRoom.color());
        assert_eq!(RoomType::LectureHall.color(), 0xffa35c);
        assert_eq!(RoomType::Library.color(), 0xffffff);
        assert_eq!(RoomType::Other.color(), 0xffffff);
    }

    #[test]
    fn deserializes_from_integer() {
        let t: RoomType = serde_json::from_str("23").unwrap();
        assert_eq!(t, RoomType::SeminarRoom);
        let t: RoomType = serde_json::from_str("99").unwrap();
        assert_eq!(t, RoomType::Other);
    }
}
