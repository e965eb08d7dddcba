//! Map and floorplan tile URLs

use domain::value_objects::format_floor_level;
use url::Url;

use crate::error::NavigatorError;
use crate::request::segment;

/// Zoom levels served by the floorplan tile cache
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ZoomLevel {
    /// 4 x 4 tiles
    One,
    /// 8 x 8 tiles
    Two,
    /// 16 x 16 tiles
    Four,
    /// 32 x 32 tiles
    Eight,
}

impl ZoomLevel {
    /// Every zoom level, coarsest first
    pub const ALL: [Self; 4] = [Self::One, Self::Two, Self::Four, Self::Eight];

    /// Numeric zoom factor
    #[must_use]
    pub const fn value(self) -> u32 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Four => 4,
            Self::Eight => 8,
        }
    }

    /// Every `(x, y)` of the floorplan tile grid at this zoom, ordered by x then y
    pub fn grid(self) -> impl Iterator<Item = (u32, u32)> {
        let side = self.value() * 4;
        (0..side).flat_map(move |x| (0..side).map(move |y| (x, y)))
    }
}

/// URL of a base map tile
///
/// # Errors
///
/// Returns `NavigatorError::InvalidQuery` if the URL cannot be formed below `base`.
pub fn map_tile_url(base: &Url, x: u32, y: u32, z: u32) -> Result<Url, NavigatorError> {
    join(base, &format!("tileserver/{z}/{x}/{y}.png/nobase64"))
}

/// URL of a floorplan tile
///
/// ```
/// use integration_navigator::{ZoomLevel, floorplan_tile_url};
/// use url::Url;
///
/// let base = Url::parse("https://navigator.tu-dresden.de/").unwrap();
/// let url = floorplan_tile_url(&base, "apb", -1, 0, 0, ZoomLevel::Two).unwrap();
/// assert_eq!(
///     url.as_str(),
///     "https://navigator.tu-dresden.de/images/etplan_cache/APB-1_2/0_0.png/nobase64"
/// );
/// ```
///
/// # Errors
///
/// Returns `NavigatorError::InvalidQuery` if `building` is empty or the URL
/// cannot be formed.
pub fn floorplan_tile_url(
    base: &Url,
    building: &str,
    floor: i32,
    x: u32,
    y: u32,
    zoom: ZoomLevel,
) -> Result<Url, NavigatorError> {
    let building = segment("building id", &building.to_uppercase())?;
    join(
        base,
        &format!(
            "images/etplan_cache/{building}{}_{}/{x}_{y}.png/nobase64",
            format_floor_level(floor),
            zoom.value()
        ),
    )
}

fn join(base: &Url, path: &str) -> Result<Url, NavigatorError> {
    base.join(path)
        .map_err(|e| NavigatorError::invalid_query(format!("{path}: {e}")))
}
