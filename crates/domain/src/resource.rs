//! Resource paths of the navigator web front-end
//!
//! Every page of the navigator is addressed by a path such as
//! `/etplan/apb/00/raum/542100.2230` or `/karten/dresden/geb/apb`. A
//! [`Resource`] is the structured form of such a path. Parsing accepts bare
//! paths as well as absolute URLs on any host; rendering always produces a
//! path with a leading `/`.

use std::fmt;
use std::str::FromStr;

use percent_encoding::{AsciiSet, CONTROLS, percent_decode_str, utf8_percent_encode};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::errors::DomainError;
use crate::value_objects::{MapView, RouteMode};

/// Characters escaped inside a single path segment
pub const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'`')
    .add(b'{')
    .add(b'}');

const KARTEN: &str = "karten";
const ROUTING: &str = "routing";
const GEBAEUDE: &str = "gebaeude";
const BARRIEREFREI: &str = "barrierefrei";
const HOERSAELE: &str = "hoersaele";
const ETPLAN: &str = "etplan";
const RAUM: &str = "raum";
const GEB: &str = "geb";
const SHORTEST: &str = "shortest";

/// Which path grammar to apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Grammar {
    /// Keyword-prefixed paths as used by the web front-end
    #[default]
    Strict,
    /// Keyword-less fragments as returned by the search endpoint
    Lenient,
}

/// A navigator resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Resource {
    /// A bare map position
    Coordinate(MapView),
    /// A building inside a map region
    MapRegion {
        /// Region, e.g. `dresden`
        region: String,
        /// Building abbreviation
        building: String,
    },
    /// A route between two places
    Route {
        /// Start of the route
        origin: String,
        /// End of the route
        destination: String,
        /// Travel mode
        mode: RouteMode,
        /// Viewport segment as sent, usually `@lat,lon,zoom.z`, see [`Resource::route_view`]
        view: String,
    },
    /// Overview page of a building
    Building {
        /// Building abbreviation
        building: String,
    },
    /// Accessibility page of a building
    BuildingAccessibility {
        /// Building abbreviation
        building: String,
    },
    /// Lecture hall list of a building
    LectureHalls {
        /// Building abbreviation
        building: String,
    },
    /// Floor plan
    Floor {
        /// Building abbreviation
        building: String,
        /// Floor level as on the wire
        floor: String,
    },
    /// A room highlighted on its floor plan
    RoomOnFloor {
        /// Building abbreviation
        building: String,
        /// Floor level as on the wire
        floor: String,
        /// Room identifier
        room: String,
    },
    /// A room page
    Room {
        /// Building abbreviation
        building: String,
        /// Floor level as on the wire
        floor: String,
        /// Room identifier
        room: String,
    },
}

impl Resource {
    /// Parse a path or absolute URL
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidResourcePath` carrying `input` when the
    /// path does not match the requested grammar.
    ///
    /// # Examples
    ///
    /// ```
    /// use domain::resource::{Grammar, Resource};
    ///
    /// let r = Resource::parse("/etplan/biz/02/raum/062102.0020", Grammar::Strict).unwrap();
    /// assert_eq!(r.building_id(), Some("biz"));
    /// assert_eq!(r.render(), "/etplan/biz/02/raum/062102.0020");
    ///
    /// let r = Resource::parse("dresden/geb/apb", Grammar::Lenient).unwrap();
    /// assert_eq!(r.render(), "/karten/dresden/geb/apb");
    /// ```
    pub fn parse(input: &str, grammar: Grammar) -> Result<Self, DomainError> {
        let segments = path_segments(input)?;
        let parsed = match grammar {
            Grammar::Strict => Self::from_strict(&segments),
            Grammar::Lenient => Self::from_lenient(&segments),
        };
        parsed.ok_or_else(|| DomainError::invalid_path(input))
    }

    fn from_strict(segments: &[String]) -> Option<Self> {
        let (first, rest) = segments.split_first()?;

        if first.contains('@') {
            return MapView::parse_segment(first).map(Self::Coordinate);
        }

        let resource = match (first.as_str(), rest) {
            (KARTEN, [region, geb, building]) if geb == GEB => Self::MapRegion {
                region: region.clone(),
                building: building.clone(),
            },
            (ROUTING, [origin, destination, mode, view]) => {
                let token = mode.split(',').next().unwrap_or_default();
                Self::Route {
                    origin: origin.clone(),
                    destination: destination.clone(),
                    mode: RouteMode::from_token(token).unwrap_or_default(),
                    view: view.clone(),
                }
            },
            (GEBAEUDE, [building]) => Self::Building {
                building: building.clone(),
            },
            (BARRIEREFREI, [building]) => Self::BuildingAccessibility {
                building: building.clone(),
            },
            (HOERSAELE, [building]) => Self::LectureHalls {
                building: building.clone(),
            },
            (ETPLAN, [building, floor]) => Self::Floor {
                building: building.clone(),
                floor: floor.clone(),
            },
            (ETPLAN, [building, floor, raum, room]) if raum == RAUM => Self::RoomOnFloor {
                building: building.clone(),
                floor: floor.clone(),
                room: room.clone(),
            },
            (RAUM, [building, floor, room]) => Self::Room {
                building: building.clone(),
                floor: floor.clone(),
                room: room.clone(),
            },
            _ => return None,
        };
        Some(resource)
    }

    fn from_lenient(segments: &[String]) -> Option<Self> {
        match segments {
            [region, _, building] => Some(Self::MapRegion {
                region: region.clone(),
                building: building.clone(),
            }),
            [building, floor, _, room] => Some(Self::Room {
                building: building.clone(),
                floor: floor.clone(),
                room: room.clone(),
            }),
            _ => None,
        }
    }

    /// Canonical path of this resource, always starting with `/`
    #[must_use]
    pub fn render(&self) -> String {
        let segments: Vec<String> = match self {
            Self::Coordinate(view) => vec![view.to_string()],
            Self::MapRegion { region, building } => {
                vec![KARTEN.into(), enc(region), GEB.into(), enc(building)]
            },
            Self::Route {
                origin,
                destination,
                mode,
                view,
            } => vec![
                ROUTING.into(),
                enc(origin),
                enc(destination),
                format!("{mode},{SHORTEST}"),
                enc(view),
            ],
            Self::Building { building } => vec![GEBAEUDE.into(), enc(building)],
            Self::BuildingAccessibility { building } => vec![BARRIEREFREI.into(), enc(building)],
            Self::LectureHalls { building } => vec![HOERSAELE.into(), enc(building)],
            Self::Floor { building, floor } => vec![ETPLAN.into(), enc(building), enc(floor)],
            Self::RoomOnFloor {
                building,
                floor,
                room,
            } => vec![
                ETPLAN.into(),
                enc(building),
                enc(floor),
                RAUM.into(),
                enc(room),
            ],
            Self::Room {
                building,
                floor,
                room,
            } => vec![RAUM.into(), enc(building), enc(floor), enc(room)],
        };
        format!("/{}", segments.join("/"))
    }

    /// Building abbreviation this resource refers to, if any
    #[must_use]
    pub fn building_id(&self) -> Option<&str> {
        match self {
            Self::Coordinate(_) | Self::Route { .. } => None,
            Self::MapRegion { building, .. }
            | Self::Building { building }
            | Self::BuildingAccessibility { building }
            | Self::LectureHalls { building }
            | Self::Floor { building, .. }
            | Self::RoomOnFloor { building, .. }
            | Self::Room { building, .. } => Some(building),
        }
    }

    /// Parsed viewport of a route, `None` for other resources or when the
    /// segment is not an `@lat,lon,zoom.z` viewport
    #[must_use]
    pub fn route_view(&self) -> Option<MapView> {
        match self {
            Self::Route { view, .. } => MapView::parse_segment(view),
            _ => None,
        }
    }

    /// Absolute URL of this resource below `base`
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidResourcePath` if the rendered path cannot
    /// be joined onto `base` or contains a `.`/`..` segment.
    pub fn url(&self, base: &Url) -> Result<Url, DomainError> {
        let path = self.render();
        if path.split('/').any(|segment| matches!(segment, "." | "..")) {
            return Err(DomainError::invalid_path(path));
        }
        base.join(path.trim_start_matches('/'))
            .map_err(|_| DomainError::invalid_path(path))
    }
}

fn enc(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT).to_string()
}

/// Split `input` into non-empty, percent-decoded path segments
fn path_segments(input: &str) -> Result<Vec<String>, DomainError> {
    let absolute = Url::parse(input).ok().filter(Url::has_host);
    let path = match &absolute {
        Some(url) => url.path(),
        None => input
            .split(['?', '#'])
            .next()
            .unwrap_or_default(),
    };

    path.split('/')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            percent_decode_str(segment)
                .decode_utf8()
                .map(|decoded| decoded.into_owned())
                .map_err(|_| DomainError::invalid_path(input))
        })
        .collect()
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl FromStr for Resource {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, Grammar::Strict)
    }
}

impl TryFrom<String> for Resource {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value, Grammar::Strict)
    }
}

impl From<Resource> for String {
    fn from(resource: Resource) -> Self {
        resource.render()
    }
}
