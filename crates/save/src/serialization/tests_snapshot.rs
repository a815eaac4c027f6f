//! Binary snapshot encode/decode and corruption handling.

use generation::{generate_city, CityConfig, CityLayout, CityRng, RoadPattern};

use super::*;
use crate::file_header::{HEADER_SIZE, MAGIC};
use crate::save_error::SaveError;
use crate::snapshot::{decode_snapshot, encode_snapshot};

fn layout() -> CityLayout {
    let config = CityConfig {
        road_pattern: RoadPattern::Radial,
        layout_size: 6,
        ..Default::default()
    };
    generate_city(&config, &mut CityRng::from_seed_u64(12)).unwrap().0
}

#[test]
fn test_snapshot_roundtrip() {
    let original = layout();
    let bytes = encode_snapshot(&original).unwrap();
    assert_eq!(bytes[..4], MAGIC);
    assert_eq!(decode_snapshot(&bytes).unwrap(), original);
}

#[test]
fn test_flipped_payload_byte_rejected() {
    let mut bytes = encode_snapshot(&layout()).unwrap();
    bytes[HEADER_SIZE + 5] ^= 0x5A;
    assert!(matches!(
        decode_snapshot(&bytes),
        Err(SaveError::Corrupted(_))
    ));
}

#[test]
fn test_valid_header_with_garbage_payload() {
    let bytes = crate::file_header::wrap_with_header(b"not a layout document");
    assert!(matches!(decode_snapshot(&bytes), Err(SaveError::Decode(_))));
}

#[test]
fn test_newer_document_in_snapshot_rejected() {
    let mut doc = LayoutDocument::from_layout(&layout());
    doc.version = "3.1".to_string();
    let bytes = crate::file_header::wrap_with_header(&bitcode::encode(&doc));
    assert!(matches!(
        decode_snapshot(&bytes),
        Err(SaveError::VersionMismatch { found: 3, .. })
    ));
}

#[test]
fn test_ungenerated_layout_has_no_snapshot() {
    assert!(matches!(
        encode_snapshot(&CityLayout::default()),
        Err(SaveError::NoData)
    ));
}

#[test]
fn test_json_text_is_not_a_snapshot() {
    let json = crate::json_codec::layout_to_json(&layout()).unwrap();
    assert!(matches!(
        decode_snapshot(json.as_bytes()),
        Err(SaveError::Corrupted(_))
    ));
}
