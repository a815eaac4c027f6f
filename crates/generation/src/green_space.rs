//! Parks and the central fountain.

use rand::Rng;

use crate::city_config::CityConfig;
use crate::city_rng::CityRng;
use crate::config::PARK_MARGIN;
use crate::geometry::CircleRegion;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct GreenSpaces {
    pub parks: Vec<CircleRegion>,
    pub fountain: CircleRegion,
}

/// Scatter `num_parks` parks over the inset screen and put the fountain at
/// the screen center. Parks are not checked against roads or each other.
pub fn place_green_spaces(config: &CityConfig, rng: &mut CityRng) -> GreenSpaces {
    let (w, h) = (config.screen_width, config.screen_height);
    let parks = (0..config.num_parks.max(0))
        .map(|_| {
            let x = rng.rng.gen_range(PARK_MARGIN..=w - PARK_MARGIN);
            let y = rng.rng.gen_range(PARK_MARGIN..=h - PARK_MARGIN);
            CircleRegion::rasterized(x, y, config.park_radius)
        })
        .collect();

    GreenSpaces {
        parks,
        fountain: fountain_for(config),
    }
}

pub fn fountain_for(config: &CityConfig) -> CircleRegion {
    let (cx, cy) = config.center();
    CircleRegion::rasterized(cx, cy, config.fountain_radius)
}
