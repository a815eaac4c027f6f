//! Building footprints and constrained placement.
//!
//! A candidate footprint is accepted only when it passes five rules, checked
//! in a fixed order so the reported [`Violation`] is stable:
//!
//! 1. grown by the screen margin it stays on screen,
//! 2. grown by the building buffer it misses every other building grown the
//!    same way,
//! 3. grown by the park buffer it misses every park,
//! 4. grown by the fountain buffer it misses the fountain,
//! 5. grown by the road buffer it contains no road point.
//!
//! Batch generation samples candidates until the target count is reached or
//! the attempt budget runs out. Interactive placement tests one candidate.

use std::fmt;

use bevy::prelude::*;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::city_config::{CityConfig, ConfigError, SkylineType};
use crate::city_rng::CityRng;
use crate::config::{
    ATTEMPTS_PER_BUILDING, BUILDING_BUFFER, BUILDING_MARGIN, FOUNTAIN_BUFFER, HIGH_RISE_HEIGHT,
    INTERACTIVE_BUILDING_HEIGHT, LOW_RISE_HEIGHT, MID_RISE_HEIGHT, PARK_BUFFER, ROAD_BUFFER,
    SCREEN_MARGIN,
};
use crate::geometry::{CircleRegion, Footprint};
use crate::green_space::GreenSpaces;
use crate::roads::Road;
use crate::spatial_grid::RoadPointGrid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BuildingType {
    #[default]
    LowRise,
    MidRise,
    HighRise,
}

impl BuildingType {
    pub const ALL: [BuildingType; 3] = [
        BuildingType::LowRise,
        BuildingType::MidRise,
        BuildingType::HighRise,
    ];

    pub fn label(self) -> &'static str {
        match self {
            BuildingType::LowRise => "Low-Rise",
            BuildingType::MidRise => "Mid-Rise",
            BuildingType::HighRise => "High-Rise",
        }
    }

    /// Inclusive height range batch generation draws from.
    pub fn height_range(self) -> (f32, f32) {
        match self {
            BuildingType::LowRise => LOW_RISE_HEIGHT,
            BuildingType::MidRise => MID_RISE_HEIGHT,
            BuildingType::HighRise => HIGH_RISE_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Building {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub depth: f32,
    pub height: f32,
    pub building_type: BuildingType,
}

impl Building {
    pub fn footprint(&self) -> Footprint {
        Footprint::centered(self.x, self.y, self.width, self.depth)
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// The placement rule a candidate footprint broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Violation {
    Boundary,
    Building,
    Park,
    Fountain,
    Road,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::Boundary => write!(f, "too close to the screen edge"),
            Violation::Building => write!(f, "too close to another building"),
            Violation::Park => write!(f, "too close to a park"),
            Violation::Fountain => write!(f, "too close to the fountain"),
            Violation::Road => write!(f, "too close to a road"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PlacementError {
    /// No city has been generated or loaded yet.
    NoLayout,
    /// The current config cannot describe a standard building.
    InvalidConfig(ConfigError),
    Rejected(Violation),
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::NoLayout => write!(f, "no city has been generated yet"),
            PlacementError::InvalidConfig(e) => write!(f, "invalid config: {e}"),
            PlacementError::Rejected(v) => write!(f, "cannot place building: {v}"),
        }
    }
}

impl std::error::Error for PlacementError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlacementError::InvalidConfig(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for PlacementError {
    fn from(e: ConfigError) -> Self {
        PlacementError::InvalidConfig(e)
    }
}

impl From<Violation> for PlacementError {
    fn from(v: Violation) -> Self {
        PlacementError::Rejected(v)
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Road point lookup used by rule 5.
pub trait RoadLookup {
    /// Is any road point inside `rect` (inclusive)?
    fn any_point_in(&self, rect: &Footprint) -> bool;
}

impl RoadLookup for [Road] {
    fn any_point_in(&self, rect: &Footprint) -> bool {
        self.iter()
            .flat_map(|road| &road.points)
            .any(|p| rect.contains(p.x as f32, p.y as f32))
    }
}

impl RoadLookup for RoadPointGrid {
    fn any_point_in(&self, rect: &Footprint) -> bool {
        self.any_in_rect(rect.left, rect.top, rect.right, rect.bottom)
    }
}

/// Everything a candidate footprint is checked against.
pub struct Obstacles<'a, R: RoadLookup + ?Sized> {
    pub buildings: &'a [Building],
    pub parks: &'a [CircleRegion],
    pub fountain: &'a CircleRegion,
    pub roads: &'a R,
}

/// Check `footprint` against the five placement rules, in order.
pub fn validate_footprint<R: RoadLookup + ?Sized>(
    footprint: &Footprint,
    screen: (f32, f32),
    obstacles: &Obstacles<'_, R>,
) -> Result<(), Violation> {
    if !footprint.expanded(SCREEN_MARGIN).within(screen.0, screen.1) {
        return Err(Violation::Boundary);
    }

    let buffered = footprint.expanded(BUILDING_BUFFER);
    if obstacles
        .buildings
        .iter()
        .any(|other| buffered.overlaps(&other.footprint().expanded(BUILDING_BUFFER)))
    {
        return Err(Violation::Building);
    }

    if obstacles
        .parks
        .iter()
        .any(|park| park.collides_with(footprint, PARK_BUFFER))
    {
        return Err(Violation::Park);
    }

    if obstacles.fountain.collides_with(footprint, FOUNTAIN_BUFFER) {
        return Err(Violation::Fountain);
    }

    if obstacles.roads.any_point_in(&footprint.expanded(ROAD_BUFFER)) {
        return Err(Violation::Road);
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Skyline policy
// ---------------------------------------------------------------------------

/// Pick a building type and height for the given skyline class.
pub fn skyline_choice(skyline: SkylineType, rng: &mut CityRng) -> (BuildingType, f32) {
    let building_type = match skyline {
        SkylineType::LowRise => BuildingType::LowRise,
        SkylineType::MidRise => BuildingType::MidRise,
        SkylineType::Mixed => BuildingType::ALL[rng.rng.gen_range(0..3)],
        SkylineType::Skyscraper => {
            if rng.rng.gen_range(0..3) <= 1 {
                BuildingType::HighRise
            } else {
                BuildingType::MidRise
            }
        }
    };
    let (lo, hi) = building_type.height_range();
    (building_type, rng.rng.gen_range(lo..=hi))
}

// ---------------------------------------------------------------------------
// Batch placement
// ---------------------------------------------------------------------------

/// Outcome of one batch placement run. Falling short of `requested` is not
/// an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatchPlacementReport {
    pub requested: usize,
    pub placed: usize,
    pub attempts: usize,
}

impl BatchPlacementReport {
    /// The attempt budget ran out before the target was reached.
    pub fn is_exhausted(&self) -> bool {
        self.placed < self.requested
    }

    pub fn attempt_budget(&self) -> usize {
        self.requested * ATTEMPTS_PER_BUILDING
    }
}

fn candidate_size(config: &CityConfig, rng: &mut CityRng) -> (f32, f32) {
    if config.use_standard_size {
        (config.standard_building_width, config.standard_building_depth)
    } else {
        let (lo, hi) = (config.building_size_min, config.building_size_max);
        (rng.rng.gen_range(lo..=hi), rng.rng.gen_range(lo..=hi))
    }
}

/// Rejection-sample up to `num_buildings` buildings around the given roads
/// and green spaces.
pub fn place_buildings(
    config: &CityConfig,
    roads: &[Road],
    green: &GreenSpaces,
    rng: &mut CityRng,
) -> (Vec<Building>, BatchPlacementReport) {
    let requested = config.num_buildings.max(0) as usize;
    let mut report = BatchPlacementReport {
        requested,
        ..default()
    };
    let mut placed: Vec<Building> = Vec::with_capacity(requested);
    if requested == 0 {
        return (placed, report);
    }

    let road_grid = RoadPointGrid::from_roads(roads, config.screen_width, config.screen_height);
    let screen = (config.screen_width as f32, config.screen_height as f32);
    let (w, h) = (config.screen_width, config.screen_height);
    let budget = report.attempt_budget();

    while placed.len() < requested && report.attempts < budget {
        report.attempts += 1;

        let x = rng.rng.gen_range(BUILDING_MARGIN..=w - BUILDING_MARGIN) as f32;
        let y = rng.rng.gen_range(BUILDING_MARGIN..=h - BUILDING_MARGIN) as f32;
        let (width, depth) = candidate_size(config, rng);
        let footprint = Footprint::centered(x, y, width, depth);

        let obstacles = Obstacles {
            buildings: &placed,
            parks: &green.parks,
            fountain: &green.fountain,
            roads: &road_grid,
        };
        if validate_footprint(&footprint, screen, &obstacles).is_err() {
            continue;
        }

        let (building_type, height) = skyline_choice(config.skyline_type, rng);
        placed.push(Building {
            x,
            y,
            width,
            depth,
            height,
            building_type,
        });
    }

    report.placed = placed.len();
    if report.is_exhausted() {
        warn!(
            "Building placement exhausted after {} attempts: placed {} of {}",
            report.attempts, report.placed, report.requested
        );
    }
    (placed, report)
}

// ---------------------------------------------------------------------------
// Interactive placement
// ---------------------------------------------------------------------------

/// The building a click at `(x, y)` would add.
pub fn interactive_candidate(config: &CityConfig, x: f32, y: f32) -> Building {
    Building {
        x,
        y,
        width: config.standard_building_width,
        depth: config.standard_building_depth,
        height: INTERACTIVE_BUILDING_HEIGHT,
        building_type: BuildingType::MidRise,
    }
}
