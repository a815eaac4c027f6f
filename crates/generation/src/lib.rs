//! Procedural 2D city layouts: road networks, parks, a fountain and building
//! footprints, generated from a `CityConfig` and edited one click at a time.

use bevy::prelude::*;

pub mod buildings;
pub mod city_config;
pub mod city_rng;
pub mod config;
pub mod generator;
pub mod geometry;
pub mod green_space;
pub mod invariants;
pub mod layout;
pub mod raster;
pub mod requests;
pub mod roads;
pub mod spatial_grid;

#[cfg(test)]
mod integration_tests;
#[cfg(test)]
pub mod test_harness;

pub use buildings::{BatchPlacementReport, Building, BuildingType, PlacementError, Violation};
pub use city_config::{CityConfig, ConfigError, RoadPattern, SkylineType};
pub use city_rng::CityRng;
pub use generator::{generate_city, GenerationReport};
pub use geometry::CircleRegion;
pub use layout::CityLayout;
pub use raster::Point;
pub use requests::{GenerateCityEvent, GenerationStatus, PlaceBuildingEvent, PlacementOutcomeEvent};
pub use roads::Road;

// ---------------------------------------------------------------------------
// System ordering
// ---------------------------------------------------------------------------

/// Ordered phases for layout systems in the `Update` schedule.
///
/// Configured as a chain: `Requests` → `Persistence` → `Validation`, so a
/// save in the same frame sees the freshly generated city and the invariant
/// pass sees whatever was loaded.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum CitySet {
    /// Generation and click requests.
    Requests,
    /// Save and load requests (registered by the `save` crate).
    Persistence,
    /// Layout invariant checks.
    Validation,
}

// ---------------------------------------------------------------------------
// Plugin
// ---------------------------------------------------------------------------

pub struct CityGenerationPlugin;

impl Plugin for CityGenerationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CityConfig>()
            .init_resource::<CityLayout>()
            .init_resource::<CityRng>()
            .init_resource::<GenerationStatus>()
            .add_event::<GenerateCityEvent>()
            .add_event::<PlaceBuildingEvent>()
            .add_event::<PlacementOutcomeEvent>()
            .configure_sets(
                Update,
                (CitySet::Requests, CitySet::Persistence, CitySet::Validation).chain(),
            )
            .add_systems(
                Update,
                (
                    requests::handle_generate_requests,
                    requests::handle_place_requests,
                )
                    .chain()
                    .in_set(CitySet::Requests),
            );

        app.add_plugins(invariants::LayoutInvariantsPlugin);
    }
}
