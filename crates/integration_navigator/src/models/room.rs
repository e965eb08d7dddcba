//! Room details: info, doorplate and accessibility

use std::collections::BTreeMap;

use domain::value_objects::{RoomType, Ternary};
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use super::{lenient_option, scalar_to_string};

/// Name, type and optional extras of a room
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RoomInfo {
    /// Display name
    pub name: String,
    /// Type of the room
    #[serde(rename = "type")]
    pub room_type: RoomType,
    /// Whether routing to this room is possible
    #[serde(rename = "routing")]
    pub is_routable: bool,
    /// Accessibility badge, dropped if malformed
    #[serde(rename = "accessibility", default, deserialize_with = "lenient_option")]
    pub accessibility_badge: Option<AccessibilityBadge>,
    /// Digital doorplate, dropped if malformed
    #[serde(default, deserialize_with = "lenient_option")]
    pub doorplate: Option<Doorplate>,
}

/// Accessibility badge of a room
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AccessibilityBadge {
    #[serde(rename = "door", default)]
    pub door_is_accessible: Ternary,
    /// Door width in cm
    #[serde(rename = "doorwidth")]
    pub door_width: i64,
    #[serde(rename = "markedsteps", default)]
    pub steps_are_marked: Ternary,
    #[serde(rename = "hearingloop_microport", default)]
    pub hearing_loop_microport: Ternary,
    #[serde(rename = "hearingloop_inductive", default)]
    pub hearing_loop_inductive: Ternary,
    #[serde(rename = "wheelchairspace_present", default)]
    pub wheelchair_spaces_available: Ternary,
    #[serde(rename = "wheelchairspaces")]
    pub wheelchair_space_count: i64,
    /// Lecturer zone reachable by wheelchair
    #[serde(rename = "lecturer", default)]
    pub lecturer_zone_is_accessible: Ternary,
}

/// Digital doorplate of an office
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawDoorplate")]
pub struct Doorplate {
    /// Occupants with their function
    pub people: Vec<Person>,
    /// Chair
    pub chair: String,
    /// Free text, line breaks restored
    pub text: String,
    /// Department
    pub department: String,
    /// Faculty
    pub faculty: String,
}

/// An occupant listed on a doorplate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    /// Full name with title
    pub name: String,
    /// Role, e.g. `Sekretariat`
    pub function: String,
}

#[derive(Debug, Deserialize)]
struct RawDoorplate {
    names: Vec<String>,
    functions: Vec<String>,
    chair: String,
    textarea: String,
    department: String,
    faculty: String,
}

impl From<RawDoorplate> for Doorplate {
    fn from(raw: RawDoorplate) -> Self {
        if raw.names.len() != raw.functions.len() {
            warn!(
                names = raw.names.len(),
                functions = raw.functions.len(),
                "Doorplate names and functions do not line up"
            );
        }

        let people = raw
            .names
            .into_iter()
            .zip(raw.functions)
            .filter(|(name, function)| !name.is_empty() && !function.is_empty())
            .map(|(name, function)| Person { name, function })
            .collect();

        Self {
            people,
            chair: raw.chair,
            text: raw.textarea.replace("\\n", "\n"),
            department: raw.department,
            faculty: raw.faculty,
        }
    }
}

/// Detailed accessibility information of a room, grouped by category
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "BTreeMap<String, Value>")]
pub struct RoomAccessibility {
    /// Categories sorted by title
    pub categories: Vec<AccessibilityCategory>,
}

impl RoomAccessibility {
    /// Look up a category by its capitalized title
    #[must_use]
    pub fn category(&self, title: &str) -> Option<&AccessibilityCategory> {
        self.categories.iter().find(|c| c.title == title)
    }
}

/// A group of accessibility entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessibilityCategory {
    pub title: String,
    /// Entries sorted by topic
    pub entries: Vec<AccessibilityEntry>,
}

impl AccessibilityCategory {
    /// Value of the entry with the given topic
    #[must_use]
    pub fn value(&self, topic: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.topic == topic)
            .map(|e| e.value.as_str())
    }
}

/// A single accessibility fact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessibilityEntry {
    pub topic: String,
    pub value: String,
}

impl From<BTreeMap<String, Value>> for RoomAccessibility {
    /// Keys look like `zugang_türbreite`: category, then topic words
    fn from(raw: BTreeMap<String, Value>) -> Self {
        let mut grouped: BTreeMap<String, Vec<AccessibilityEntry>> = BTreeMap::new();

        for (key, value) in raw {
            let Some(value) = scalar_to_string(value) else {
                continue;
            };
            let mut words = key.split('_');
            let category = words.next().unwrap_or_default();
            let topic = words.collect::<Vec<_>>().join(" ");

            grouped
                .entry(capitalize_words(category))
                .or_default()
                .push(AccessibilityEntry {
                    topic: capitalize_words(&topic),
                    value: capitalize_words(&value),
                });
        }

        let categories = grouped
            .into_iter()
            .map(|(title, mut entries)| {
                entries.sort_by(|a, b| a.topic.cmp(&b.topic));
                AccessibilityCategory { title, entries }
            })
            .collect();

        Self { categories }
    }
}

/// Upper-case the first letter of every word and lower-case the rest
fn capitalize_words(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if c.is_whitespace() {
            at_word_start = true;
            out.push(c);
        } else if at_word_start {
            at_word_start = false;
            out.extend(c.to_uppercase());
        } else {
            out.extend(c.to_lowercase());
        }
    }
    out
}
