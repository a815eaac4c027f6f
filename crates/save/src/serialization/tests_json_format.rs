//! The JSON field names, type strings and version handling of the document.

use generation::{generate_city, BuildingType, CityConfig, CityLayout, CityRng};

use super::*;
use crate::json_codec::{layout_from_json, layout_to_json};
use crate::save_error::SaveError;

fn small_layout() -> CityLayout {
    let config = CityConfig {
        layout_size: 2,
        num_parks: 1,
        ..Default::default()
    };
    generate_city(&config, &mut CityRng::from_seed_u64(3)).unwrap().0
}

#[test]
fn test_document_field_names() {
    let json = layout_to_json(&small_layout()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["version"], "1.0");
    assert!(value["timestamp"].is_string());
    assert!(value["roads"][0]["width"].is_number());
    assert!(value["roads"][0]["points"][0]["x"].is_number());
    assert!(value["parks"][0][0]["y"].is_number());
    assert!(value["fountain"][0]["x"].is_number());

    let building = &value["buildings"][0];
    for field in ["x", "y", "width", "depth", "height"] {
        assert!(building[field].is_number(), "missing {field}: {building}");
    }
    let t = building["type"].as_str().unwrap();
    assert!(["LOW_RISE", "MID_RISE", "HIGH_RISE"].contains(&t), "got {t}");
}

const HAND_WRITTEN: &str = r#"{
    "version": "1.0",
    "timestamp": "1700000000",
    "buildings": [
        {"x": 150, "y": 150, "width": 30, "depth": 30, "height": 0.15, "type": "MID_RISE"},
        {"x": 300, "y": 150, "width": 20, "depth": 40, "height": 12.5, "type": "PAGODA"}
    ],
    "roads": [{"width": 8, "points": [{"x": 50, "y": 50}, {"x": 51, "y": 50}]}],
    "parks": [],
    "fountain": [{"x": 400, "y": 325}, {"x": 400, "y": 275}]
}"#;

#[test]
fn test_hand_written_document_loads() {
    let layout = layout_from_json(HAND_WRITTEN).unwrap();
    assert_eq!(layout.buildings.len(), 2);
    assert_eq!(layout.buildings[0].building_type, BuildingType::MidRise);
    assert_eq!(layout.roads[0].points.len(), 2);
    assert_eq!(layout.fountain.center.x, 400.0);
    assert_eq!(layout.fountain.center.y, 300.0);
    assert_eq!(layout.fountain.radius, 25.0);
}

#[test]
fn test_unknown_building_type_loads_as_low_rise() {
    let layout = layout_from_json(HAND_WRITTEN).unwrap();
    assert_eq!(layout.buildings[1].building_type, BuildingType::LowRise);
    assert_eq!(building_type_from_str("SKYSCRAPER"), BuildingType::LowRise);
}

#[test]
fn test_missing_lists_default_to_empty() {
    let layout = layout_from_json(r#"{"version": "1.0", "timestamp": "0"}"#).unwrap();
    assert!(layout.roads.is_empty());
    assert!(layout.parks.is_empty());
    assert!(layout.fountain.is_empty());
    assert!(layout.is_generated());
}

#[test]
fn test_newer_major_version_rejected() {
    let result = layout_from_json(r#"{"version": "2.0", "timestamp": "0"}"#);
    assert!(matches!(
        result,
        Err(SaveError::VersionMismatch {
            expected_max: 1,
            found: 2
        })
    ));
}

#[test]
fn test_newer_minor_version_accepted() {
    assert!(layout_from_json(r#"{"version": "1.7", "timestamp": "0"}"#).is_ok());
}

#[test]
fn test_unreadable_version_rejected() {
    let result = layout_from_json(r#"{"version": "first", "timestamp": "0"}"#);
    assert!(matches!(result, Err(SaveError::Decode(_))));
}

#[test]
fn test_malformed_json_rejected() {
    assert!(matches!(
        layout_from_json("{\"version\": "),
        Err(SaveError::Decode(_))
    ));
    assert!(matches!(
        layout_from_json(r#"{"version": "1.0", "timestamp": "0", "roads": 7}"#),
        Err(SaveError::Decode(_))
    ));
}

#[test]
fn test_ungenerated_layout_is_not_saved() {
    assert!(matches!(
        layout_to_json(&CityLayout::default()),
        Err(SaveError::NoData)
    ));
}

#[test]
fn test_type_strings_roundtrip() {
    for t in BuildingType::ALL {
        assert_eq!(building_type_from_str(building_type_to_str(t)), t);
    }
}
