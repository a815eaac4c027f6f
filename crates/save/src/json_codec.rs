//! Structured text format for city layouts.

use bevy::log::info;

use generation::CityLayout;

use crate::save_error::SaveError;
use crate::save_types::{LayoutDocument, SUPPORTED_MAJOR_VERSION};

/// Serialize a generated layout to pretty-printed JSON.
///
/// Refuses (`NoData`) when no city has been generated or loaded.
pub fn layout_to_json(layout: &CityLayout) -> Result<String, SaveError> {
    if !layout.is_generated() {
        return Err(SaveError::NoData);
    }
    let doc = LayoutDocument::from_layout(layout);
    let json = serde_json::to_string_pretty(&doc).map_err(|e| SaveError::Encode(e.to_string()))?;
    info!(
        "Saved layout: {} roads, {} parks, {} buildings ({} bytes)",
        doc.roads.len(),
        doc.parks.len(),
        doc.buildings.len(),
        json.len()
    );
    Ok(json)
}

/// Parse a JSON document back into a layout.
pub fn layout_from_json(json: &str) -> Result<CityLayout, SaveError> {
    let doc: LayoutDocument = serde_json::from_str(json)?;
    check_version(&doc)?;
    let layout = doc.into_layout();
    info!(
        "Loaded layout: {} roads, {} parks, {} buildings",
        layout.roads.len(),
        layout.parks.len(),
        layout.buildings.len()
    );
    Ok(layout)
}

pub(crate) fn check_version(doc: &LayoutDocument) -> Result<(), SaveError> {
    let major = doc
        .major_version()
        .ok_or_else(|| SaveError::Decode(format!("unreadable document version {:?}", doc.version)))?;
    if major > SUPPORTED_MAJOR_VERSION {
        return Err(SaveError::VersionMismatch {
            expected_max: SUPPORTED_MAJOR_VERSION,
            found: major,
        });
    }
    Ok(())
}
