use bevy::prelude::*;

use crate::buildings::{
    interactive_candidate, validate_footprint, Building, BuildingType, Obstacles, PlacementError,
    Violation,
};
use crate::city_config::CityConfig;
use crate::geometry::CircleRegion;
use crate::green_space::GreenSpaces;
use crate::roads::Road;

/// The generated city: the only thing renderers, savers and editors see.
///
/// Replaced wholesale by each batch generation; interactive placement only
/// appends to `buildings`.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct CityLayout {
    pub roads: Vec<Road>,
    pub parks: Vec<CircleRegion>,
    pub fountain: CircleRegion,
    pub buildings: Vec<Building>,
    generated: bool,
}

impl CityLayout {
    /// Assemble a generated (or restored) layout.
    pub fn from_parts(roads: Vec<Road>, green: GreenSpaces, buildings: Vec<Building>) -> Self {
        Self {
            roads,
            parks: green.parks,
            fountain: green.fountain,
            buildings,
            generated: true,
        }
    }

    /// True once a city has been generated or loaded.
    pub fn is_generated(&self) -> bool {
        self.generated
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn total_road_points(&self) -> usize {
        self.roads.iter().map(Road::len).sum()
    }

    pub fn count_of(&self, building_type: BuildingType) -> usize {
        self.buildings
            .iter()
            .filter(|b| b.building_type == building_type)
            .count()
    }

    /// Re-check one committed building against the rest of the layout.
    pub fn validate_building(&self, index: usize, config: &CityConfig) -> Result<(), Violation> {
        let Some(building) = self.buildings.get(index) else {
            return Ok(());
        };
        let others: Vec<Building> = self
            .buildings
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != index)
            .map(|(_, b)| *b)
            .collect();
        let obstacles = Obstacles {
            buildings: &others,
            parks: &self.parks,
            fountain: &self.fountain,
            roads: &self.roads[..],
        };
        validate_footprint(&building.footprint(), screen_of(config), &obstacles)
    }

    /// Try to add one standard-size building centered on `(x, y)`.
    ///
    /// `config` is re-validated first, since it may have been edited since
    /// generation. On rejection the layout is left untouched.
    pub fn place_building_at(
        &mut self,
        config: &CityConfig,
        x: f32,
        y: f32,
    ) -> Result<Building, PlacementError> {
        if !self.generated {
            return Err(PlacementError::NoLayout);
        }
        config.validate()?;
        let candidate = interactive_candidate(config, x, y);
        let obstacles = Obstacles {
            buildings: &self.buildings,
            parks: &self.parks,
            fountain: &self.fountain,
            roads: &self.roads[..],
        };
        validate_footprint(&candidate.footprint(), screen_of(config), &obstacles)?;

        self.buildings.push(candidate);
        Ok(candidate)
    }
}

fn screen_of(config: &CityConfig) -> (f32, f32) {
    (config.screen_width as f32, config.screen_height as f32)
}
