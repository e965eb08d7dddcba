//! Room timetables

use serde::Deserialize;

/// Labels of the eight daily timeslots, indexed by `timeslot - 1`
pub const TIMESLOTS: [&str; 8] = [
    "7:30 - 9:00",
    "9:20 - 10:50",
    "11:10 - 12:40",
    "13:00 - 14:30",
    "14:50 - 16:20",
    "16:40 - 18:10",
    "18:30 - 20:00",
    "20:20 - 21:50",
];

/// Occupancy of a room over the current and next week
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Timetable {
    /// e.g. `"11.09.2017 - 17.09.2017 37.KW"`
    #[serde(rename = "woche1name")]
    pub week1_name: String,
    #[serde(rename = "woche1")]
    pub week1: Vec<Day>,
    #[serde(rename = "woche2name")]
    pub week2_name: String,
    #[serde(rename = "woche2")]
    pub week2: Vec<Day>,
}

/// Occupancy of one weekday
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Day {
    #[serde(rename = "tag")]
    pub weekday: Weekday,
    #[serde(rename = "stunden")]
    pub courses: Vec<Course>,
}

/// Teaching days, sent as `0` (Monday) to `4` (Friday)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "u8")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl TryFrom<u8> for Weekday {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Ok(match value {
            0 => Self::Monday,
            1 => Self::Tuesday,
            2 => Self::Wednesday,
            3 => Self::Thursday,
            4 => Self::Friday,
            other => return Err(format!("unknown weekday index {other}")),
        })
    }
}

/// A course occupying one timeslot
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Course {
    /// One-based slot number, see [`TIMESLOTS`]
    #[serde(rename = "ds")]
    pub timeslot: u8,
    /// Course title, `belegt` when the room is just marked as taken
    #[serde(rename = "fach")]
    pub name: String,
    #[serde(rename = "doz", default)]
    pub lecturer: Option<String>,
    #[serde(rename = "bereich", default)]
    pub field: Option<String>,
    /// Language center field, present only for its courses
    #[serde(rename = "lskbereich", default)]
    pub lsk_field: Option<String>,
    #[serde(rename = "lskkurslang", default)]
    pub lsk_course_language: Option<String>,
    #[serde(rename = "lskkursurl", default)]
    pub lsk_course_url: Option<String>,
}

impl Course {
    /// Offered by the language center
    #[must_use]
    pub const fn is_lsk(&self) -> bool {
        self.lsk_field.is_some()
    }

    /// Wall-clock label of the timeslot, if it is one of the eight known slots
    #[must_use]
    pub fn slot_label(&self) -> Option<&'static str> {
        usize::from(self.timeslot)
            .checked_sub(1)
            .and_then(|index| TIMESLOTS.get(index))
            .copied()
    }
}
