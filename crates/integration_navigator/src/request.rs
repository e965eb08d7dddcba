//! Request construction for every navigator endpoint
//!
//! An [`Endpoint`] knows its path, HTTP method, form body and the text
//! encoding its answers come in. Building a request never touches the
//! network, so malformed input fails here with `InvalidQuery`.

use domain::resource::PATH_SEGMENT;
use domain::value_objects::{GeoCoordinate, RouteMode};
use percent_encoding::utf8_percent_encode;
use reqwest::Method;
use url::Url;
use url::form_urlencoded;

use crate::encoding::TextEncoding;
use crate::error::NavigatorError;

/// A single navigator API call
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Endpoint<'a> {
    /// Every building complex
    AllBuildings,
    /// Hash of the building data, changes whenever the data does
    DataHash,
    /// Floor plans of a building
    Floors {
        /// Building abbreviation
        building: &'a str,
    },
    /// Accessibility summary of a building
    BuildingAccessibility {
        /// Building abbreviation
        building: &'a str,
    },
    /// Name, type, accessibility badge and doorplate of a room
    RoomInfo {
        /// Full room id
        room: &'a str,
    },
    /// Detailed accessibility information of a room
    RoomAccessibility {
        /// Full room id
        room: &'a str,
    },
    /// Two week occupancy plan of a room
    Timetable {
        /// Full room id
        room: &'a str,
    },
    /// Route between two coordinates
    Route {
        /// Start
        origin: GeoCoordinate,
        /// End
        destination: GeoCoordinate,
        /// Travel mode
        mode: RouteMode,
    },
    /// Free text search
    Search {
        /// Search text
        query: &'a str,
    },
    /// Today's menu of a canteen
    CanteenMenu {
        /// Canteen id, e.g. `m13`
        canteen: &'a str,
    },
    /// Upcoming departures at a stop
    Departures {
        /// Stop name
        stop: &'a str,
    },
    /// Exchange ZIH credentials for a token
    LoginWithPassword {
        /// ZIH login
        login: &'a str,
        /// Password
        password: &'a str,
    },
    /// Refresh a login token
    LoginWithToken {
        /// Previously issued token
        token: &'a str,
    },
}

/// A fully built request, ready to be sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    /// HTTP method
    pub method: Method,
    /// Absolute URL
    pub url: Url,
    /// `application/x-www-form-urlencoded` body, if any
    pub body: Option<String>,
    /// Encoding the answer is expected in
    pub encoding: TextEncoding,
}

impl Endpoint<'_> {
    /// HTTP method this endpoint is called with
    #[must_use]
    pub const fn method(&self) -> Method {
        match self {
            Self::Search { .. }
            | Self::CanteenMenu { .. }
            | Self::Departures { .. }
            | Self::LoginWithPassword { .. }
            | Self::LoginWithToken { .. } => Method::POST,
            _ => Method::GET,
        }
    }

    /// Encoding the answers of this endpoint come in
    #[must_use]
    pub const fn encoding(&self) -> TextEncoding {
        match self {
            Self::AllBuildings
            | Self::Floors { .. }
            | Self::RoomAccessibility { .. }
            | Self::Timetable { .. }
            | Self::Departures { .. }
            | Self::LoginWithPassword { .. }
            | Self::LoginWithToken { .. } => TextEncoding::Latin1,
            Self::DataHash
            | Self::BuildingAccessibility { .. }
            | Self::RoomInfo { .. }
            | Self::Route { .. }
            | Self::Search { .. }
            | Self::CanteenMenu { .. } => TextEncoding::Utf8,
        }
    }

    /// Build the request below `base`
    ///
    /// # Errors
    ///
    /// Returns `NavigatorError::InvalidQuery` if a required identifier is
    /// empty or the URL cannot be formed.
    pub fn request(&self, base: &Url) -> Result<ApiRequest, NavigatorError> {
        let (path, query, body) = match *self {
            Self::AllBuildings => ("m/json_gebaeude/all".to_string(), None, None),
            Self::DataHash => ("m/json_gebaeude/hash".to_string(), None, None),
            Self::Floors { building } => (
                format!("m/json_etagen/{}", segment("building id", building)?),
                None,
                None,
            ),
            Self::BuildingAccessibility { building } => (
                format!("api/0.1/buildinginfo/{}", segment("building id", building)?),
                Some("accessibility=true"),
                None,
            ),
            Self::RoomInfo { room } => (
                format!("api/0.1/roominfo/{}", segment("room id", room)?),
                Some("accessibility=true&doorplate=true"),
                None,
            ),
            Self::RoomAccessibility { room } => (
                format!("m/json_barriereinfos/raum/{}", segment("room id", room)?),
                None,
                None,
            ),
            Self::Timetable { room } => (
                format!("m/json_belegplan/{}", segment("room id", room)?),
                None,
                None,
            ),
            Self::Route {
                origin,
                destination,
                mode,
            } => (
                format!("routingservice/{origin}/{destination}/{mode}/geocoordinates"),
                None,
                None,
            ),
            Self::Search { query } => (
                "search".to_string(),
                None,
                Some(form(&[("query", required("search query", query)?)])),
            ),
            Self::CanteenMenu { canteen } => (
                format!("diet/{}", segment("canteen id", canteen)?),
                None,
                None,
            ),
            Self::Departures { stop } => (
                format!("departures/{}", segment("stop name", stop)?),
                None,
                None,
            ),
            Self::LoginWithPassword { login, password } => (
                "m/json_login/user".to_string(),
                None,
                Some(form(&[
                    ("zihlogin", required("login", login)?),
                    ("passwort", required("password", password)?),
                ])),
            ),
            Self::LoginWithToken { token } => (
                "m/json_login/token".to_string(),
                None,
                Some(form(&[("token", required("token", token)?)])),
            ),
        };

        let mut url = base
            .join(&path)
            .map_err(|e| NavigatorError::invalid_query(format!("{path}: {e}")))?;
        url.set_query(query);

        Ok(ApiRequest {
            method: self.method(),
            url,
            body,
            encoding: self.encoding(),
        })
    }
}

/// Reject identifiers that are empty after trimming
fn required<'v>(what: &str, value: &'v str) -> Result<&'v str, NavigatorError> {
    if value.trim().is_empty() {
        return Err(NavigatorError::invalid_query(format!("{what} must not be empty")));
    }
    Ok(value)
}

/// Percent-encode a user supplied path segment
///
/// `.` and `..` are rejected, URL resolution would treat them as dot segments.
pub(crate) fn segment(what: &str, value: &str) -> Result<String, NavigatorError> {
    let value = required(what, value)?;
    if matches!(value, "." | "..") {
        return Err(NavigatorError::invalid_query(format!(
            "{what} must not be a dot segment: {value}"
        )));
    }
    Ok(utf8_percent_encode(value, PATH_SEGMENT).to_string())
}

fn form(pairs: &[(&str, &str)]) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish()
}
