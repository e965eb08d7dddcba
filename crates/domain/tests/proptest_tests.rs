//! Property-based tests for the resource codec and value objects
//!
//! These tests use proptest to verify invariants across many random inputs.

use domain::resource::{Grammar, Resource};
use domain::value_objects::{
    GeoCoordinate, MapView, RoomId, RouteMode, Ternary, format_floor_level, parse_floor_level,
};
use proptest::prelude::*;

fn segment() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9äöüß .%/?#@,_-]{1,16}"
}

fn map_view() -> impl Strategy<Value = MapView> {
    (-90.0f64..=90.0f64, -180.0f64..=180.0f64, 0i32..=22).prop_map(|(lat, lon, zoom)| {
        MapView::new(GeoCoordinate::new_unchecked(lat, lon), zoom)
    })
}

fn route_view() -> impl Strategy<Value = String> {
    prop_oneof![map_view().prop_map(|view| view.to_string()), segment()]
}

fn route_mode() -> impl Strategy<Value = RouteMode> {
    prop_oneof![
        Just(RouteMode::Foot),
        Just(RouteMode::Bike),
        Just(RouteMode::Wheelchair),
        Just(RouteMode::Car),
    ]
}

fn resource() -> impl Strategy<Value = Resource> {
    prop_oneof![
        map_view().prop_map(Resource::Coordinate),
        (segment(), segment())
            .prop_map(|(region, building)| Resource::MapRegion { region, building }),
        (segment(), segment(), route_mode(), route_view()).prop_map(
            |(origin, destination, mode, view)| Resource::Route {
                origin,
                destination,
                mode,
                view,
            }
        ),
        segment().prop_map(|building| Resource::Building { building }),
        segment().prop_map(|building| Resource::BuildingAccessibility { building }),
        segment().prop_map(|building| Resource::LectureHalls { building }),
        (segment(), segment()).prop_map(|(building, floor)| Resource::Floor { building, floor }),
        (segment(), segment(), segment()).prop_map(|(building, floor, room)| {
            Resource::RoomOnFloor {
                building,
                floor,
                room,
            }
        }),
        (segment(), segment(), segment())
            .prop_map(|(building, floor, room)| Resource::Room {
                building,
                floor,
                room,
            }),
    ]
}

// ============================================================================
// Resource Property Tests
// ============================================================================

mod resource_tests {
    use super::*;

    proptest! {
        #[test]
        fn render_then_parse_round_trips(r in resource()) {
            let rendered = r.render();
            prop_assert!(rendered.starts_with('/'));

            let parsed = Resource::parse(&rendered, Grammar::Strict);
            prop_assert_eq!(parsed, Ok(r));
        }

        #[test]
        fn rendered_paths_have_no_raw_separators_in_values(building in segment()) {
            let rendered = Resource::Building { building }.render();
            prop_assert_eq!(rendered.matches('/').count(), 2);
            prop_assert!(!rendered.contains('?'));
            prop_assert!(!rendered.contains('#'));
        }

        #[test]
        fn lenient_three_segments_is_map_region(
            a in "[a-z]{1,8}",
            b in "[a-z]{1,8}",
            c in "[a-z]{1,8}"
        ) {
            let path = format!("{a}/{b}/{c}");
            let parsed = Resource::parse(&path, Grammar::Lenient).unwrap();
            prop_assert_eq!(parsed, Resource::MapRegion { region: a, building: c });
        }

        #[test]
        fn lenient_rejects_other_lengths(parts in prop::collection::vec("[a-z]{1,8}", 0..8)) {
            prop_assume!(parts.len() != 3 && parts.len() != 4);
            let path = parts.join("/");
            prop_assert!(Resource::parse(&path, Grammar::Lenient).is_err());
        }

        #[test]
        fn errors_carry_the_original_input(input in "/[a-z]{1,8}/[a-z]{1,8}/[a-z]{1,8}/[a-z]{1,8}/[a-z]{1,8}/[a-z]{1,8}") {
            let err = Resource::parse(&input, Grammar::Strict).unwrap_err();
            prop_assert!(err.to_string().ends_with(&input));
        }
    }
}

// ============================================================================
// Value Object Property Tests
// ============================================================================

mod floor_level_tests {
    use super::*;

    proptest! {
        #[test]
        fn format_then_parse_round_trips(level in -20i32..=99) {
            prop_assert_eq!(parse_floor_level(&format_floor_level(level)), Ok(Some(level)));
        }

        #[test]
        fn alphabetic_levels_are_rejected(raw in "[a-zA-Z]{1,2}") {
            prop_assert!(parse_floor_level(&raw).is_err());
        }
    }
}

mod room_id_tests {
    use super::*;

    proptest! {
        #[test]
        fn full_id_is_preserved(
            structure in "[0-9]{4}",
            level in -9i32..=99,
            room in "[0-9]{4}"
        ) {
            let raw = format!("{structure}{}.{room}", format_floor_level(level));
            let id = RoomId::parse(&raw).unwrap();
            prop_assert_eq!(id.full_id(), raw.as_str());
            prop_assert_eq!(id.building_structure(), structure.as_str());
            prop_assert_eq!(id.level(), Some(level));
            prop_assert_eq!(id.room_number(), room.as_str());
        }

        #[test]
        fn ids_without_dot_are_rejected(raw in "[0-9]{4,12}") {
            prop_assert!(RoomId::parse(&raw).is_err());
        }
    }
}

mod ternary_tests {
    use super::*;

    proptest! {
        #[test]
        fn case_insensitive_true(raw in "[tT][rR][uU][eE]") {
            prop_assert_eq!(Ternary::from_str_lossy(&raw), Ternary::True);
        }

        #[test]
        fn other_words_are_no_data(raw in "[a-z]{0,8}") {
            prop_assume!(raw != "true" && raw != "false");
            prop_assert_eq!(Ternary::from_str_lossy(&raw), Ternary::NoData);
        }
    }
}
