//! JSON save -> load roundtrips for generated and edited layouts.

use generation::{generate_city, CityConfig, CityLayout, CityRng, RoadPattern, SkylineType};

use crate::json_codec::{layout_from_json, layout_to_json};

fn generated(pattern: RoadPattern, seed: u64) -> CityLayout {
    let config = CityConfig {
        road_pattern: pattern,
        layout_size: 4,
        num_buildings: 25,
        skyline_type: SkylineType::Mixed,
        ..Default::default()
    };
    generate_city(&config, &mut CityRng::from_seed_u64(seed))
        .expect("default-based config is valid")
        .0
}

#[test]
fn test_roundtrip_every_pattern() {
    for (i, pattern) in [RoadPattern::Grid, RoadPattern::Radial, RoadPattern::Random]
        .into_iter()
        .enumerate()
    {
        let layout = generated(pattern, 100 + i as u64);
        assert!(!layout.buildings.is_empty(), "{pattern:?} placed no buildings");

        let json = layout_to_json(&layout).expect("generated layout saves");
        let restored = layout_from_json(&json).expect("saved layout loads");
        assert_eq!(restored.roads, layout.roads, "{pattern:?} roads");
        assert_eq!(restored.parks, layout.parks, "{pattern:?} parks");
        assert_eq!(restored.fountain, layout.fountain, "{pattern:?} fountain");
        assert_eq!(restored.buildings, layout.buildings, "{pattern:?} buildings");
        assert!(restored.is_generated());
    }
}

#[test]
fn test_roundtrip_keeps_clicked_buildings() {
    let config = CityConfig {
        layout_size: 1,
        num_parks: 0,
        num_buildings: 0,
        ..Default::default()
    };
    let (mut layout, _) = generate_city(&config, &mut CityRng::from_seed_u64(1)).unwrap();
    layout.place_building_at(&config, 150.0, 150.0).unwrap();
    layout.place_building_at(&config, 600.0, 450.0).unwrap();

    let restored = layout_from_json(&layout_to_json(&layout).unwrap()).unwrap();
    assert_eq!(restored, layout);
    assert_eq!(restored.buildings[0].height, 0.15);
}

#[test]
fn test_restored_circles_have_same_geometry() {
    let layout = generated(RoadPattern::Grid, 5);
    let restored = layout_from_json(&layout_to_json(&layout).unwrap()).unwrap();
    for (a, b) in layout.parks.iter().zip(&restored.parks) {
        assert_eq!(a.center, b.center);
        assert_eq!(a.radius, b.radius);
    }
    assert_eq!(layout.fountain.center, restored.fountain.center);
}

#[test]
fn test_restored_layout_passes_invariant_check() {
    let config = CityConfig::default();
    let layout = generated(RoadPattern::Random, 77);
    let restored = layout_from_json(&layout_to_json(&layout).unwrap()).unwrap();
    let violations = generation::invariants::validate_layout(&restored, &config);
    assert_eq!(violations.total(), 0, "{violations:?}");
}

#[test]
fn test_restored_layout_accepts_clicks() {
    let config = CityConfig {
        layout_size: 1,
        num_parks: 0,
        num_buildings: 0,
        ..Default::default()
    };
    let (layout, _) = generate_city(&config, &mut CityRng::from_seed_u64(2)).unwrap();
    let mut restored = layout_from_json(&layout_to_json(&layout).unwrap()).unwrap();
    assert!(restored.place_building_at(&config, 200.0, 200.0).is_ok());
}
