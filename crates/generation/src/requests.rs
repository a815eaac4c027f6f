//! Event-driven front end: generation and click requests arrive as events and
//! are applied to the `CityLayout` resource once per `Update`.

use bevy::prelude::*;

use crate::buildings::{Building, PlacementError};
use crate::city_config::{CityConfig, ConfigError};
use crate::city_rng::CityRng;
use crate::generator::{generate_city, GenerationReport};
use crate::layout::CityLayout;

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

/// Replace the current city with a freshly generated one. A `seed` restarts
/// the RNG first, otherwise the stream continues.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct GenerateCityEvent {
    pub seed: Option<u64>,
}

/// A click in layout space asking for one standard building.
#[derive(Event, Debug, Clone, Copy)]
pub struct PlaceBuildingEvent {
    pub x: f32,
    pub y: f32,
}

#[derive(Event, Debug, Clone)]
pub struct PlacementOutcomeEvent {
    pub x: f32,
    pub y: f32,
    pub result: Result<Building, PlacementError>,
}

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

#[derive(Resource, Debug, Default)]
pub struct GenerationStatus {
    pub last_report: Option<GenerationReport>,
    /// Set when the most recent generation request had an invalid config.
    pub last_error: Option<ConfigError>,
    pub generations: u32,
    pub accepted_clicks: u32,
    pub rejected_clicks: u32,
}

// ---------------------------------------------------------------------------
// Systems
// ---------------------------------------------------------------------------

/// Only the newest request in a frame is honored; older ones would be
/// overwritten anyway.
pub fn handle_generate_requests(
    mut events: EventReader<GenerateCityEvent>,
    config: Res<CityConfig>,
    mut rng: ResMut<CityRng>,
    mut layout: ResMut<CityLayout>,
    mut status: ResMut<GenerationStatus>,
) {
    let Some(request) = events.read().last().copied() else {
        return;
    };
    if let Some(seed) = request.seed {
        rng.reseed(seed);
    }

    config.log_summary();
    match generate_city(&config, &mut rng) {
        Ok((new_layout, report)) => {
            report.log_summary();
            *layout = new_layout;
            status.last_report = Some(report);
            status.last_error = None;
            status.generations += 1;
        }
        Err(e) => {
            warn!("City generation refused: {}", e);
            status.last_error = Some(e);
        }
    }
}

pub fn handle_place_requests(
    mut events: EventReader<PlaceBuildingEvent>,
    config: Res<CityConfig>,
    mut layout: ResMut<CityLayout>,
    mut status: ResMut<GenerationStatus>,
    mut outcomes: EventWriter<PlacementOutcomeEvent>,
) {
    for click in events.read() {
        let result = layout.place_building_at(&config, click.x, click.y);
        match &result {
            Ok(_) => {
                info!("Placed building at ({}, {})", click.x, click.y);
                status.accepted_clicks += 1;
            }
            Err(e) => {
                info!("Click at ({}, {}) rejected: {}", click.x, click.y, e);
                status.rejected_clicks += 1;
            }
        }
        outcomes.send(PlacementOutcomeEvent {
            x: click.x,
            y: click.y,
            result,
        });
    }
}
