//! Map viewport value object
//!
//! The web front-end encodes the visible map area as a path segment of the
//! form `@{lat},{lon},{zoom}.z`, e.g. `@51.0284,13.732,15.z`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::value_objects::GeoCoordinate;

/// A map center plus zoom level
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapView {
    /// Center of the visible area
    pub center: GeoCoordinate,
    /// Zoom level
    pub zoom: i32,
}

impl MapView {
    /// Create a new viewport
    #[must_use]
    pub const fn new(center: GeoCoordinate, zoom: i32) -> Self {
        Self { center, zoom }
    }

    /// Parse an `@lat,lon,zoom.z` segment
    ///
    /// Exactly three comma separated parts are required. The zoom may carry
    /// a trailing `.z` or `z`. Values are not range checked, only parts that
    /// are not finite numbers yield `None`.
    #[must_use]
    pub fn parse_segment(segment: &str) -> Option<Self> {
        let parts: Vec<&str> = segment.split(',').collect();
        let [raw_lat, raw_lon, raw_zoom] = parts.as_slice() else {
            return None;
        };

        let latitude: f64 = raw_lat.trim_start_matches('@').parse().ok()?;
        let longitude: f64 = raw_lon.parse().ok()?;
        let zoom_digits = raw_zoom
            .strip_suffix(".z")
            .or_else(|| raw_zoom.strip_suffix('z'))
            .unwrap_or(*raw_zoom);
        let zoom: i32 = zoom_digits.parse().ok()?;

        if !latitude.is_finite() || !longitude.is_finite() {
            return None;
        }
        let center = GeoCoordinate::new_unchecked(latitude, longitude);
        Some(Self { center, zoom })
    }
}

impl fmt::Display for MapView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "@{},{},{}.z",
            self.center.latitude(),
            self.center.longitude(),
            self.zoom
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_site_segment() {
        let view = MapView::parse_segment("@13.732,51.02839999999999,15.z").unwrap();
        assert!((view.center.latitude() - 13.732).abs() < f64::EPSILON);
        assert!((view.center.longitude() - 51.028_399_999_999_99).abs() < f64::EPSILON);
        assert_eq!(view.zoom, 15);
    }

    #[test]
    fn zoom_suffix_variants() {
        assert_eq!(MapView::parse_segment("@1,2,3.z").unwrap().zoom, 3);
        assert_eq!(MapView::parse_segment("@1,2,3z").unwrap().zoom, 3);
        assert_eq!(MapView::parse_segment("@1,2,3").unwrap().zoom, 3);
    }

    #[test]
    fn wrong_part_count_fails() {
        assert!(MapView::parse_segment("@13.732,51.02839999999999").is_none());
        assert!(MapView::parse_segment("@13.732").is_none());
        assert!(MapView::parse_segment("@1,2,3,4.z").is_none());
    }

    #[test]
    fn non_numeric_parts_fail() {
        assert!(MapView::parse_segment("@abc,2,3.z").is_none());
        assert!(MapView::parse_segment("@1,abc,3.z").is_none());
        assert!(MapView::parse_segment("@1,2,x.z").is_none());
        assert!(MapView::parse_segment("@NaN,2,3.z").is_none());
        assert!(MapView::parse_segment("@1,inf,3.z").is_none());
    }

    #[test]
    fn out_of_range_values_are_kept() {
        let view = MapView::parse_segment("@95.5,200,15.z").unwrap();
        assert!((view.center.latitude() - 95.5).abs() < f64::EPSILON);
        assert!((view.center.longitude() - 200.0).abs() < f64::EPSILON);
    }

    #[test]
    fn display_round_trips() {
        let view = MapView::new(GeoCoordinate::new_unchecked(51.02893981618553, 13.741269714355468), 15);
        let rendered = view.to_string();
        assert_eq!(rendered, "@51.02893981618553,13.741269714355468,15.z");
        assert_eq!(MapView::parse_segment(&rendered), Some(view));
    }
}
