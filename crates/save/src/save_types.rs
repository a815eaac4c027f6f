// ---------------------------------------------------------------------------
// Persistent document types
// ---------------------------------------------------------------------------
//
// `LayoutDocument` is the on-disk shape of a `CityLayout`. The JSON field
// names are part of the format and must not change:
//
//   { "version": "1.0", "timestamp": "...",
//     "buildings": [{x, y, width, depth, height, type}],
//     "roads": [{width, points: [{x, y}]}],
//     "parks": [[{x, y}]],
//     "fountain": [{x, y}] }
//
// The same structs derive bitcode for the binary snapshot.

use bevy::log::warn;
use bitcode::{Decode, Encode};
use serde::{Deserialize, Serialize};

use generation::{Building, BuildingType, CircleRegion, CityLayout, Point, Road};

/// Document version written by this build.
pub const DOCUMENT_VERSION: &str = "1.0";

/// Highest document major version this build can read.
pub const SUPPORTED_MAJOR_VERSION: u32 = 1;

#[derive(Serialize, Deserialize, Encode, Decode, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SavePoint {
    pub x: i32,
    pub y: i32,
}

#[derive(Serialize, Deserialize, Encode, Decode, Debug, Clone, PartialEq)]
pub struct SaveBuilding {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub depth: f32,
    pub height: f32,
    #[serde(rename = "type")]
    pub building_type: String,
}

#[derive(Serialize, Deserialize, Encode, Decode, Debug, Clone, PartialEq)]
pub struct SaveRoad {
    pub width: i32,
    pub points: Vec<SavePoint>,
}

#[derive(Serialize, Deserialize, Encode, Decode, Debug, Clone, PartialEq)]
pub struct LayoutDocument {
    pub version: String,
    /// Seconds since the Unix epoch, as a string.
    pub timestamp: String,
    #[serde(default)]
    pub buildings: Vec<SaveBuilding>,
    #[serde(default)]
    pub roads: Vec<SaveRoad>,
    #[serde(default)]
    pub parks: Vec<Vec<SavePoint>>,
    #[serde(default)]
    pub fountain: Vec<SavePoint>,
}

// ---------------------------------------------------------------------------
// Building type strings
// ---------------------------------------------------------------------------

pub fn building_type_to_str(t: BuildingType) -> &'static str {
    match t {
        BuildingType::LowRise => "LOW_RISE",
        BuildingType::MidRise => "MID_RISE",
        BuildingType::HighRise => "HIGH_RISE",
    }
}

/// Unknown strings load as `LowRise` so one odd record does not sink a save.
pub fn building_type_from_str(s: &str) -> BuildingType {
    match s {
        "LOW_RISE" => BuildingType::LowRise,
        "MID_RISE" => BuildingType::MidRise,
        "HIGH_RISE" => BuildingType::HighRise,
        other => {
            warn!("Unknown building type {:?} in save, loading as LOW_RISE", other);
            BuildingType::LowRise
        }
    }
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

fn save_points(points: &[Point]) -> Vec<SavePoint> {
    points.iter().map(|p| SavePoint { x: p.x, y: p.y }).collect()
}

fn restore_points(points: &[SavePoint]) -> Vec<Point> {
    points.iter().map(|p| Point::new(p.x, p.y)).collect()
}

/// Seconds since the Unix epoch, 0 if the clock is before it.
pub fn current_timestamp() -> String {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
        .to_string()
}

impl LayoutDocument {
    pub fn from_layout(layout: &CityLayout) -> Self {
        Self {
            version: DOCUMENT_VERSION.to_string(),
            timestamp: current_timestamp(),
            buildings: layout
                .buildings
                .iter()
                .map(|b| SaveBuilding {
                    x: b.x,
                    y: b.y,
                    width: b.width,
                    depth: b.depth,
                    height: b.height,
                    building_type: building_type_to_str(b.building_type).to_string(),
                })
                .collect(),
            roads: layout
                .roads
                .iter()
                .map(|r| SaveRoad {
                    width: r.width,
                    points: save_points(&r.points),
                })
                .collect(),
            parks: layout.parks.iter().map(|p| save_points(&p.boundary)).collect(),
            fountain: save_points(&layout.fountain.boundary),
        }
    }

    /// Major component of `version` ("1.0" -> 1).
    pub fn major_version(&self) -> Option<u32> {
        self.version.split('.').next()?.trim().parse().ok()
    }

    /// Rebuild the layout. Circle geometry is re-derived from the boundary
    /// points, exactly as when the regions were first generated.
    pub fn into_layout(self) -> CityLayout {
        let roads = self
            .roads
            .iter()
            .map(|r| Road {
                points: restore_points(&r.points),
                width: r.width,
            })
            .collect();
        let green = generation::green_space::GreenSpaces {
            parks: self
                .parks
                .iter()
                .map(|p| CircleRegion::from_points(restore_points(p)))
                .collect(),
            fountain: CircleRegion::from_points(restore_points(&self.fountain)),
        };
        let buildings = self
            .buildings
            .iter()
            .map(|b| Building {
                x: b.x,
                y: b.y,
                width: b.width,
                depth: b.depth,
                height: b.height,
                building_type: building_type_from_str(&b.building_type),
            })
            .collect();
        CityLayout::from_parts(roads, green, buildings)
    }
}
