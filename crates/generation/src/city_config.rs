//! User-facing generation parameters.
//!
//! `CityConfig` is the single input of a batch generation. It is validated
//! once, up front, so every generator below it can assume sane values.

use std::fmt;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::{
    DEFAULT_SCREEN_HEIGHT, DEFAULT_SCREEN_WIDTH, ROAD_MARGIN, STANDARD_SIZE_MAX, STANDARD_SIZE_MIN,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoadPattern {
    /// Manhattan grid of full-span horizontal and vertical roads.
    #[default]
    Grid,
    /// Spokes from the screen center plus concentric chord rings.
    Radial,
    /// Straight roads between randomly chosen nodes.
    Random,
}

impl RoadPattern {
    pub fn label(self) -> &'static str {
        match self {
            RoadPattern::Grid => "Grid",
            RoadPattern::Radial => "Radial",
            RoadPattern::Random => "Random",
        }
    }
}

/// Height distribution used by batch generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SkylineType {
    LowRise,
    MidRise,
    Skyscraper,
    #[default]
    Mixed,
}

impl SkylineType {
    pub fn label(self) -> &'static str {
        match self {
            SkylineType::LowRise => "Low-Rise",
            SkylineType::MidRise => "Mid-Rise",
            SkylineType::Skyscraper => "Skyscraper",
            SkylineType::Mixed => "Mixed",
        }
    }
}

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CityConfig {
    /// Buildings requested from batch generation.
    pub num_buildings: i32,
    /// Grid divisions, spoke count, or random node multiplier depending on the pattern.
    pub layout_size: i32,
    pub road_pattern: RoadPattern,
    /// Width stored on every generated road, in pixels.
    pub road_width: i32,
    pub skyline_type: SkylineType,
    pub park_radius: i32,
    pub num_parks: i32,
    pub fountain_radius: i32,
    pub screen_width: i32,
    pub screen_height: i32,
    /// Footprint of interactively placed buildings (and of batch buildings
    /// when `use_standard_size` is set).
    pub standard_building_width: f32,
    pub standard_building_depth: f32,
    /// Range batch widths and depths are drawn from.
    pub building_size_min: f32,
    pub building_size_max: f32,
    pub use_standard_size: bool,
}

impl Default for CityConfig {
    fn default() -> Self {
        Self {
            num_buildings: 20,
            layout_size: 10,
            road_pattern: RoadPattern::Grid,
            road_width: 8,
            skyline_type: SkylineType::Mixed,
            park_radius: 40,
            num_parks: 3,
            fountain_radius: 25,
            screen_width: DEFAULT_SCREEN_WIDTH,
            screen_height: DEFAULT_SCREEN_HEIGHT,
            standard_building_width: 30.0,
            standard_building_depth: 30.0,
            building_size_min: 20.0,
            building_size_max: 60.0,
            use_standard_size: false,
        }
    }
}

impl CityConfig {
    /// Reject configurations the generators cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.layout_size < 1 {
            return Err(ConfigError::LayoutSizeTooSmall(self.layout_size));
        }
        for (field, value) in [
            ("num_buildings", self.num_buildings),
            ("num_parks", self.num_parks),
            ("park_radius", self.park_radius),
            ("fountain_radius", self.fountain_radius),
        ] {
            if value < 0 {
                return Err(ConfigError::Negative { field, value });
            }
        }
        if self.road_width < 1 {
            return Err(ConfigError::NonPositive {
                field: "road_width",
                value: self.road_width as f32,
            });
        }
        let min_screen = 2 * ROAD_MARGIN.max(crate::config::PARK_MARGIN);
        if self.screen_width <= min_screen || self.screen_height <= min_screen {
            return Err(ConfigError::ScreenTooSmall {
                width: self.screen_width,
                height: self.screen_height,
                min: min_screen + 1,
            });
        }
        for (field, value) in [
            ("standard_building_width", self.standard_building_width),
            ("standard_building_depth", self.standard_building_depth),
            ("building_size_min", self.building_size_min),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }
        if !self.building_size_max.is_finite() || self.building_size_max < self.building_size_min
        {
            return Err(ConfigError::InvertedSizeRange {
                min: self.building_size_min,
                max: self.building_size_max,
            });
        }
        Ok(())
    }

    /// Screen center in integer pixel space.
    pub fn center(&self) -> (i32, i32) {
        (self.screen_width / 2, self.screen_height / 2)
    }

    /// Resize the standard footprint to half of the smaller grid block edge.
    pub fn update_standard_building_size(&mut self) {
        let divisions = self.layout_size.max(1);
        let block_w = (self.screen_width - 2 * ROAD_MARGIN) / divisions;
        let block_h = (self.screen_height - 2 * ROAD_MARGIN) / divisions;
        let size = (block_w.min(block_h) as f32 * 0.5).clamp(STANDARD_SIZE_MIN, STANDARD_SIZE_MAX);
        self.standard_building_width = size;
        self.standard_building_depth = size;
    }

    pub fn log_summary(&self) {
        info!(
            "City config: {} buildings, layout {}x{}, {} roads (width {}), {} skyline, \
             {} parks (r={}), fountain r={}, screen {}x{}",
            self.num_buildings,
            self.layout_size,
            self.layout_size,
            self.road_pattern.label(),
            self.road_width,
            self.skyline_type.label(),
            self.num_parks,
            self.park_radius,
            self.fountain_radius,
            self.screen_width,
            self.screen_height,
        );
    }
}

/// Invalid generation inputs. Not recoverable by retrying.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    LayoutSizeTooSmall(i32),
    Negative { field: &'static str, value: i32 },
    NonPositive { field: &'static str, value: f32 },
    ScreenTooSmall { width: i32, height: i32, min: i32 },
    InvertedSizeRange { min: f32, max: f32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::LayoutSizeTooSmall(size) => {
                write!(f, "layout size must be at least 1, got {size}")
            }
            ConfigError::Negative { field, value } => {
                write!(f, "{field} must not be negative, got {value}")
            }
            ConfigError::NonPositive { field, value } => {
                write!(f, "{field} must be positive, got {value}")
            }
            ConfigError::ScreenTooSmall { width, height, min } => write!(
                f,
                "screen {width}x{height} is too small, both sides must be at least {min}"
            ),
            ConfigError::InvertedSizeRange { min, max } => {
                write!(f, "building size range {min}..{max} is empty")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
