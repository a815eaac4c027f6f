//! Batch generation: config in, complete `CityLayout` out.
//!
//! Order matters for reproducibility. With a fixed seed the RNG is consumed
//! by roads first, then parks, then buildings.

use bevy::prelude::*;

use crate::buildings::{place_buildings, BatchPlacementReport, BuildingType};
use crate::city_config::{CityConfig, ConfigError};
use crate::city_rng::CityRng;
use crate::green_space::place_green_spaces;
use crate::layout::CityLayout;
use crate::roads::build_road_network;

/// Summary of one batch generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GenerationReport {
    pub roads: usize,
    pub parks: usize,
    pub road_points: usize,
    pub buildings: BatchPlacementReport,
    pub low_rise: usize,
    pub mid_rise: usize,
    pub high_rise: usize,
}

impl GenerationReport {
    fn from_layout(layout: &CityLayout, buildings: BatchPlacementReport) -> Self {
        Self {
            roads: layout.roads.len(),
            parks: layout.parks.len(),
            road_points: layout.total_road_points(),
            buildings,
            low_rise: layout.count_of(BuildingType::LowRise),
            mid_rise: layout.count_of(BuildingType::MidRise),
            high_rise: layout.count_of(BuildingType::HighRise),
        }
    }

    /// Per-type counts, e.g. `Low-Rise 4, Mid-Rise 9, High-Rise 2`.
    pub fn type_breakdown(&self) -> String {
        BuildingType::ALL
            .iter()
            .zip([self.low_rise, self.mid_rise, self.high_rise])
            .map(|(t, n)| format!("{} {n}", t.label()))
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn log_summary(&self) {
        info!(
            "City generated: {} roads ({} points), {} parks, {}/{} buildings in {} attempts ({})",
            self.roads,
            self.road_points,
            self.parks,
            self.buildings.placed,
            self.buildings.requested,
            self.buildings.attempts,
            self.type_breakdown(),
        );
    }
}

/// Validate `config` and build a fresh city from it.
pub fn generate_city(
    config: &CityConfig,
    rng: &mut CityRng,
) -> Result<(CityLayout, GenerationReport), ConfigError> {
    config.validate()?;

    let roads = build_road_network(config, rng);
    debug!("Built {} {} roads", roads.len(), config.road_pattern.label());

    let green = place_green_spaces(config, rng);
    let (buildings, placement) = place_buildings(config, &roads, &green, rng);

    let layout = CityLayout::from_parts(roads, green, buildings);
    let report = GenerationReport::from_layout(&layout, placement);
    Ok((layout, report))
}
