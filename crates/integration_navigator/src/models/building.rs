//! Building complexes and their accessibility summary

use std::collections::BTreeMap;
use std::fmt;

use domain::resource::Resource;
use domain::value_objects::{GeoCoordinate, RoomId, Ternary, parse_floor_level};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use url::Url;

use super::{RawPoint, lenient_vec, scalar_to_string};

/// A building complex, made up of one or more building structures
#[derive(Debug, Clone, Deserialize)]
pub struct BuildingComplex {
    /// Abbreviation, e.g. `APB`
    #[serde(rename = "krz")]
    pub abbreviation: String,
    /// Full name
    pub name: String,
    /// Default floor level as on the wire, usually `"00"`
    #[serde(rename = "stdetage", default)]
    pub raw_default_floor: Option<String>,
    /// Free-form accessibility notes keyed by topic
    #[serde(rename = "barfrei_info", default, deserialize_with = "text_map")]
    pub accessibility_overview: BTreeMap<String, String>,
    /// Entrances
    #[serde(rename = "eingänge", default)]
    pub entrances: Vec<Entrance>,
    /// Image paths relative to the service root
    #[serde(rename = "bilder", default)]
    pub images: Vec<String>,
    /// The structures this complex consists of
    #[serde(rename = "teilgeb", default)]
    pub structures: Vec<BuildingStructure>,
    /// Outlines of the structures
    #[serde(rename = "punkte", default, deserialize_with = "outlines")]
    pub outlines: Vec<Vec<GeoCoordinate>>,
}

impl BuildingComplex {
    /// Default floor level, `None` if unknown or the complex has no floors
    #[must_use]
    pub fn default_floor(&self) -> Option<i32> {
        self.raw_default_floor
            .as_deref()
            .and_then(|raw| parse_floor_level(raw).ok().flatten())
    }

    /// Whether the room lies in one of this complex's structures
    #[must_use]
    pub fn contains_room(&self, room: &RoomId) -> bool {
        self.structures
            .iter()
            .any(|s| s.id == room.building_structure())
    }

    /// Navigator page of this building
    #[must_use]
    pub fn resource(&self) -> Resource {
        Resource::Building {
            building: self.abbreviation.clone(),
        }
    }

    /// Absolute image URLs below `base`
    #[must_use]
    pub fn image_urls(&self, base: &Url) -> Vec<Url> {
        self.images
            .iter()
            .filter_map(|path| base.join(path.trim_start_matches('/')).ok())
            .collect()
    }

    /// South-west and north-east corner of all outlines
    #[must_use]
    pub fn bounds(&self) -> Option<(GeoCoordinate, GeoCoordinate)> {
        let mut points = self.outlines.iter().flatten();
        let first = points.next()?;
        let (mut min_lat, mut min_lon) = (first.latitude(), first.longitude());
        let (mut max_lat, mut max_lon) = (min_lat, min_lon);
        for p in points {
            min_lat = min_lat.min(p.latitude());
            min_lon = min_lon.min(p.longitude());
            max_lat = max_lat.max(p.latitude());
            max_lon = max_lon.max(p.longitude());
        }
        Some((
            GeoCoordinate::new_unchecked(min_lat, min_lon),
            GeoCoordinate::new_unchecked(max_lat, max_lon),
        ))
    }
}

impl fmt::Display for BuildingComplex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.abbreviation, self.name)
    }
}

/// One structure of a building complex
#[derive(Debug, Clone, Deserialize)]
pub struct BuildingStructure {
    /// Name
    pub name: String,
    /// Year of construction
    #[serde(rename = "bauj", default)]
    pub construction_year: String,
    /// Listed as a historical monument
    #[serde(rename = "denkm", default)]
    pub is_landmarked: bool,
    /// Structure id, the first four characters of its room ids
    #[serde(rename = "gebnr")]
    pub id: String,
    /// Street address
    #[serde(rename = "str", default)]
    pub address: String,
    /// Zip code
    #[serde(rename = "plz", default)]
    pub zipcode: String,
    /// City
    #[serde(rename = "ort", default)]
    pub city: String,
}

/// An entrance of a building complex
///
/// Flags are `None` when the service has no data.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Deserialize)]
pub struct Entrance {
    /// Entrance number
    #[serde(rename = "adrdoor")]
    pub id: i64,
    /// Image path relative to the service root
    #[serde(rename = "bildURL", default)]
    pub image: Option<String>,
    /// Short note
    #[serde(rename = "bemerkung", default)]
    pub note: Option<String>,
    /// Wheelchair accessible
    #[serde(rename = "barrierefrei", default)]
    pub is_accessible: Option<bool>,
    /// Has steps
    #[serde(rename = "treppe", default)]
    pub has_steps: Option<bool>,
    /// Has a door opener button
    #[serde(rename = "taster", default)]
    pub has_open_button: Option<bool>,
    /// At ground level
    #[serde(rename = "ebenerdig", default)]
    pub is_at_ground_level: Option<bool>,
    /// Has a small threshold
    #[serde(rename = "absatz_klein", default)]
    pub has_small_threshold: Option<bool>,
    /// Has a bell
    #[serde(rename = "allgem_klingel", default)]
    pub has_bell: Option<bool>,
    /// Has a dedicated accessibility bell
    #[serde(rename = "beh_klingel", default)]
    pub has_accessibility_bell: Option<bool>,
    /// Has big steps
    #[serde(rename = "stufen_gross", default)]
    pub has_big_steps: Option<bool>,
    /// Has a ramp
    #[serde(rename = "rampe", default)]
    pub has_ramp: Option<bool>,
    #[serde(default)]
    lat: Option<f64>,
    #[serde(default)]
    lon: Option<f64>,
}

impl Entrance {
    /// Position of the entrance, if known
    #[must_use]
    pub fn location(&self) -> Option<GeoCoordinate> {
        Some(GeoCoordinate::new_unchecked(self.lat?, self.lon?))
    }

    /// Absolute image URL below `base`
    #[must_use]
    pub fn image_url(&self, base: &Url) -> Option<Url> {
        let image = self.image.as_deref()?;
        base.join(image.trim_start_matches('/')).ok()
    }
}

impl fmt::Display for Entrance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Entrance #{}", self.id)
    }
}

/// Accessibility summary of a building
///
/// Every field falls back to `NoData` or an empty list on its own.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawBuildingAccessibility")]
pub struct BuildingAccessibility {
    /// Has at least one wheelchair accessible entrance
    pub has_accessible_entrance: Ternary,
    /// Has an elevator
    pub has_elevator: Ternary,
    /// Numbers of the wheelchair accessible entrances
    pub accessible_entrances: Vec<i64>,
    /// Has accessible restrooms
    pub has_accessible_restrooms: Ternary,
    /// Elevator door widths in cm
    pub elevator_door_widths: Vec<i64>,
}

#[derive(Debug, Deserialize)]
struct RawBuildingAccessibility {
    accessibility: RawAccessibilityFields,
}

#[derive(Debug, Deserialize)]
struct RawAccessibilityFields {
    #[serde(rename = "disabledentrancepresent", default)]
    has_accessible_entrance: Ternary,
    #[serde(default)]
    elevator: Ternary,
    #[serde(rename = "disabledentrances", default, deserialize_with = "lenient_vec")]
    accessible_entrances: Vec<i64>,
    #[serde(rename = "disabledwc", default)]
    has_accessible_restrooms: Ternary,
    #[serde(rename = "elevatordoorwidth", default, deserialize_with = "lenient_vec")]
    elevator_door_widths: Vec<i64>,
}

impl From<RawBuildingAccessibility> for BuildingAccessibility {
    fn from(raw: RawBuildingAccessibility) -> Self {
        let fields = raw.accessibility;
        Self {
            has_accessible_entrance: fields.has_accessible_entrance,
            has_elevator: fields.elevator,
            accessible_entrances: fields.accessible_entrances,
            has_accessible_restrooms: fields.has_accessible_restrooms,
            elevator_door_widths: fields.elevator_door_widths,
        }
    }
}

fn text_map<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let Value::Object(map) = Value::deserialize(deserializer)? else {
        return Ok(BTreeMap::new());
    };
    Ok(map
        .into_iter()
        .filter_map(|(k, v)| scalar_to_string(v).map(|v| (k, v)))
        .collect())
}

/// Outline points come as `{x: lon, y: lat}`
fn outlines<'de, D>(deserializer: D) -> Result<Vec<Vec<GeoCoordinate>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<Vec<RawPoint>>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .map(|outline| {
            outline
                .into_iter()
                .map(|p| GeoCoordinate::new_unchecked(p.y, p.x))
                .collect()
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const BUILDINGS_JSON: &str = r#"[
        {"krz":"P38","name":"Abstellgeb., Pienner Str.38a","stdetage":"--","barfrei_info":{},
         "eingänge":[],"bilder":["/gebaeude_galleries/p38/P38_Geb.jpg"],"teilgeb":[],
         "punkte":[[{"x":13.5803303,"y":50.9786708},{"x":13.5804926,"y":50.9785427}]]},
        {"krz":"APB","name":"Andreas-Pfitzmann-Bau","stdetage":"00",
         "barfrei_info":{"behindwc":"EG030 beidseitig anfahrbar","aufzug":2},
         "eingänge":[
            {"adrdoor":1,"bildURL":"eingaenge/APB_1.jpg","bemerkung":"Pförtnerloge  Besetzung 0 - 24 Uhr",
             "barrierefrei":true,"ebenerdig":true,"lat":51.02562,"lon":13.72328},
            {"adrdoor":2,"taster":true}
         ],
         "bilder":["/gebaeude_galleries/apb/APB_1.jpg","/gebaeude_galleries/apb/APB_2.jpg"],
         "teilgeb":[{"name":"APB Andreas-Pfitzmann-Bau, Nöthnitzer Str.46","bauj":"2006","denkm":false,
                     "gebnr":"5421","str":"Nöthnitzer Str. 46","plz":"01187","ort":"Dresden"}],
         "punkte":[[{"x":13.7226,"y":51.0251},{"x":13.7240,"y":51.0262},{"x":13.7231,"y":51.0249}]]}
    ]"#;

    fn decode() -> Vec<BuildingComplex> {
        serde_json::from_str(BUILDINGS_JSON).unwrap()
    }

    #[test]
    fn test_decode_building_complex() {
        let buildings = decode();
        assert_eq!(buildings.len(), 2);

        let apb = &buildings[1];
        assert_eq!(apb.abbreviation, "APB");
        assert_eq!(apb.name, "Andreas-Pfitzmann-Bau");
        assert_eq!(apb.raw_default_floor.as_deref(), Some("00"));
        assert_eq!(apb.default_floor(), Some(0));
        assert_eq!(
            apb.accessibility_overview.get("behindwc").map(String::as_str),
            Some("EG030 beidseitig anfahrbar")
        );
        assert_eq!(
            apb.accessibility_overview.get("aufzug").map(String::as_str),
            Some("2")
        );
        assert_eq!(apb.entrances.len(), 2);
        assert_eq!(apb.images.len(), 2);
        assert_eq!(apb.outlines[0].len(), 3);
        assert_eq!(apb.to_string(), "APB: Andreas-Pfitzmann-Bau");
    }

    #[test]
    fn test_structure_fields() {
        let buildings = decode();
        let structure = &buildings[1].structures[0];
        assert_eq!(structure.construction_year, "2006");
        assert!(!structure.is_landmarked);
        assert_eq!(structure.id, "5421");
        assert_eq!(structure.address, "Nöthnitzer Str. 46");
        assert_eq!(structure.zipcode, "01187");
        assert_eq!(structure.city, "Dresden");
    }

    #[test]
    fn test_entrance_fields() {
        let buildings = decode();
        let entrance = &buildings[1].entrances[0];
        assert_eq!(entrance.id, 1);
        assert_eq!(entrance.note.as_deref(), Some("Pförtnerloge  Besetzung 0 - 24 Uhr"));
        assert_eq!(entrance.is_accessible, Some(true));
        assert_eq!(entrance.is_at_ground_level, Some(true));
        assert_eq!(entrance.has_steps, None);
        assert_eq!(entrance.has_ramp, None);

        let location = entrance.location().unwrap();
        assert!((location.latitude() - 51.02562).abs() < 1e-9);
        assert!((location.longitude() - 13.72328).abs() < 1e-9);

        let base = Url::parse("https://navigator.tu-dresden.de/").unwrap();
        assert_eq!(
            entrance.image_url(&base).unwrap().as_str(),
            "https://navigator.tu-dresden.de/eingaenge/APB_1.jpg"
        );

        let second = &buildings[1].entrances[1];
        assert_eq!(second.has_open_button, Some(true));
        assert!(second.location().is_none());
        assert!(second.image_url(&base).is_none());
        assert_eq!(second.to_string(), "Entrance #2");
    }

    #[test]
    fn test_outline_axes_are_swapped() {
        let buildings = decode();
        let p = buildings[0].outlines[0][0];
        assert!((p.latitude() - 50.9786708).abs() < 1e-9);
        assert!((p.longitude() - 13.5803303).abs() < 1e-9);
    }

    #[test]
    fn test_no_floor_building() {
        let buildings = decode();
        assert_eq!(buildings[0].default_floor(), None);
        assert!(buildings[0].accessibility_overview.is_empty());
    }

    #[test]
    fn test_contains_room() {
        let buildings = decode();
        let apb = &buildings[1];
        assert!(apb.contains_room(&RoomId::parse("542100.2230").unwrap()));
        assert!(!apb.contains_room(&RoomId::parse("118100.0220").unwrap()));
    }

    #[test]
    fn test_resource_and_images() {
        let buildings = decode();
        let apb = &buildings[1];
        let base = Url::parse("https://navigator.tu-dresden.de/").unwrap();
        assert_eq!(
            apb.resource().url(&base).unwrap().as_str(),
            "https://navigator.tu-dresden.de/gebaeude/APB"
        );
        let urls = apb.image_urls(&base);
        assert_eq!(
            urls[0].as_str(),
            "https://navigator.tu-dresden.de/gebaeude_galleries/apb/APB_1.jpg"
        );
    }

    #[test]
    fn test_bounds() {
        let buildings = decode();
        let (sw, ne) = buildings[1].bounds().unwrap();
        assert!((sw.latitude() - 51.0249).abs() < 1e-9);
        assert!((sw.longitude() - 13.7226).abs() < 1e-9);
        assert!((ne.latitude() - 51.0262).abs() < 1e-9);
        assert!((ne.longitude() - 13.7240).abs() < 1e-9);
    }

    #[test]
    fn test_malformed_entrance_fails() {
        let json = r#"[{"krz":"APB","name":"Andreas-Pfitzmann-Bau","stdetage":"00",
            "eingänge":[{"taster":true}],"bilder":[],"teilgeb":[],"punkte":[]}]"#;
        let err = serde_json::from_str::<Vec<BuildingComplex>>(json).unwrap_err();
        assert!(err.to_string().contains("adrdoor"), "{err}");
    }

    #[test]
    fn test_malformed_images_fail() {
        let json = r#"[{"krz":"APB","name":"Andreas-Pfitzmann-Bau","stdetage":"00",
            "eingänge":[],"bilder":[1,2],"teilgeb":[],"punkte":[]}]"#;
        assert!(serde_json::from_str::<Vec<BuildingComplex>>(json).is_err());
    }

    #[test]
    fn test_accessibility_summary() {
        let json = r#"{
            "accessibility": {
                "disabledentrancepresent": "true",
                "elevator": "true",
                "disabledentrances": [2],
                "disabledwc": "true",
                "elevatordoorwidth": [120]
            },
            "street": "Nöthnitzer Str. 46",
            "name": "Andreas-Pfitzmann-Bau"
        }"#;
        let info: BuildingAccessibility = serde_json::from_str(json).unwrap();
        assert_eq!(info.has_accessible_entrance, Ternary::True);
        assert_eq!(info.has_elevator, Ternary::True);
        assert_eq!(info.accessible_entrances, vec![2]);
        assert_eq!(info.has_accessible_restrooms, Ternary::True);
        assert_eq!(info.elevator_door_widths, vec![120]);
    }

    #[test]
    fn test_accessibility_summary_fallbacks() {
        let json = r#"{"accessibility": {"elevator": false, "disabledwc": "NA", "elevatordoorwidth": "unknown"}}"#;
        let info: BuildingAccessibility = serde_json::from_str(json).unwrap();
        assert_eq!(info.has_accessible_entrance, Ternary::NoData);
        assert_eq!(info.has_elevator, Ternary::False);
        assert_eq!(info.has_accessible_restrooms, Ternary::NoData);
        assert!(info.accessible_entrances.is_empty());
        assert!(info.elevator_door_widths.is_empty());
    }
}
