//! Integration tests for city generation using the `TestCity` harness.
//!
//! These tests spin up a headless Bevy App with `CityGenerationPlugin` and
//! drive it through events, the same way the binary does.

use crate::buildings::{PlacementError, Violation};
use crate::city_config::{CityConfig, RoadPattern};
use crate::test_harness::TestCity;


/// Open layout: four edge roads, no parks, no batch buildings.
pub(crate) fn open_config() -> CityConfig {
    CityConfig {
        layout_size: 1,
        num_parks: 0,
        num_buildings: 0,
        ..Default::default()
    }
}

// ===========================================================================
// 1. Harness bootstrap tests
// ===========================================================================

#[test]
fn empty_city_is_not_generated() {
    let city = TestCity::new();
    assert!(!city.layout().is_generated());
    assert_eq!(city.building_count(), 0, "empty city should have 0 buildings");
    assert!(city.layout().roads.is_empty());
    assert_eq!(city.status().generations, 0);
}

#[test]
fn click_before_generation_reports_no_layout() {
    let mut city = TestCity::new();
    assert_eq!(city.click(200.0, 200.0), Err(PlacementError::NoLayout));
    assert_eq!(city.status().rejected_clicks, 1);
}

// ===========================================================================
// 2. Generation
// ===========================================================================

#[test]
fn default_generation_builds_grid_city() {
    let city = TestCity::new().generated();
    let layout = city.layout();
    assert!(layout.is_generated());
    assert_eq!(layout.roads.len(), 22, "grid of size 10 has 22 roads");
    assert_eq!(layout.parks.len(), 3);
    assert!(!layout.fountain.is_empty());
    assert_eq!(city.status().generations, 1);

    let report = city.status().last_report.expect("report after generation");
    assert_eq!(report.buildings.requested, 20);
    assert_eq!(report.buildings.placed, layout.buildings.len());
    assert!(report.buildings.attempts <= 200);
}

#[test]
fn generation_leaves_no_invariant_violations() {
    for pattern in [RoadPattern::Grid, RoadPattern::Radial, RoadPattern::Random] {
        let config = CityConfig {
            road_pattern: pattern,
            layout_size: 4,
            num_buildings: 30,
            ..Default::default()
        };
        let city = TestCity::new().with_config(config).generated();
        assert_eq!(
            city.violations().total(),
            0,
            "{pattern:?} layout broke placement rules: {:?}",
            city.violations()
        );
        assert!(city.violations().passes >= 1);
    }
}

#[test]
fn zero_buildings_requested_is_not_an_error() {
    let config = CityConfig {
        num_buildings: 0,
        ..Default::default()
    };
    let city = TestCity::new().with_config(config).generated();
    assert!(city.layout().is_generated());
    assert_eq!(city.building_count(), 0);
    assert!(city.status().last_error.is_none());
}

#[test]
fn unreachable_target_stops_at_attempt_budget() {
    // 8 px road spacing leaves no block large enough for any building
    let config = CityConfig {
        layout_size: 60,
        num_buildings: 25,
        ..Default::default()
    };
    let city = TestCity::new().with_config(config).generated();
    let report = city.status().last_report.expect("report after generation");
    assert_eq!(report.buildings.placed, 0);
    assert_eq!(report.buildings.attempts, 250);
    assert!(report.buildings.is_exhausted());
    assert_eq!(city.building_count(), 0);
}

#[test]
fn invalid_config_keeps_previous_city() {
    let mut city = TestCity::new().generated();
    let before = city.layout().clone();

    city.app_mut().insert_resource(CityConfig {
        layout_size: 0,
        ..Default::default()
    });
    city.generate();

    assert!(city.status().last_error.is_some(), "bad config should be reported");
    assert_eq!(city.layout(), &before);
    assert_eq!(city.status().generations, 1);
}

#[test]
fn regeneration_discards_clicked_buildings() {
    let mut city = TestCity::new().with_config(open_config()).generated();
    assert!(city.click(150.0, 150.0).is_ok());
    assert_eq!(city.building_count(), 1);

    city.generate();
    assert_eq!(city.building_count(), 0);
    assert_eq!(city.status().generations, 2);
}

// ===========================================================================
// 3. Interactive placement
// ===========================================================================

#[test]
fn click_inside_buffer_is_rejected_and_layout_unchanged() {
    let mut city = TestCity::new().with_config(open_config()).generated();
    let placed = city.click(150.0, 150.0).expect("open area accepts a building");
    assert_eq!((placed.x, placed.y), (150.0, 150.0));

    let before = city.layout().buildings.clone();
    assert_eq!(
        city.click(180.0, 160.0),
        Err(PlacementError::Rejected(Violation::Building))
    );
    assert_eq!(city.layout().buildings, before);
    assert_eq!(city.status().accepted_clicks, 1);
    assert_eq!(city.status().rejected_clicks, 1);
}
