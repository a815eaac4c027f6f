//! Road network construction.
//!
//! Each [`RoadPattern`] has its own builder. Builders are stateless: given the
//! same config and RNG state they produce the same roads. Every road is a
//! straight rasterized segment carrying the configured width.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::city_config::{CityConfig, RoadPattern};
use crate::city_rng::CityRng;
use crate::config::{RANDOM_ANCHOR_INSET, RING_CHORD_STEP, ROAD_MARGIN};
use crate::raster::{circle, line, sort_by_angle, Point};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Road {
    pub points: Vec<Point>,
    pub width: i32,
}

impl Road {
    pub fn straight(from: Point, to: Point, width: i32) -> Self {
        Self {
            points: line(from.x, from.y, to.x, to.y),
            width,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Build the road network for the configured pattern.
///
/// `config` must already be validated (`layout_size >= 1`).
pub fn build_road_network(config: &CityConfig, rng: &mut CityRng) -> Vec<Road> {
    match config.road_pattern {
        RoadPattern::Grid => grid_roads(config),
        RoadPattern::Radial => radial_roads(config),
        RoadPattern::Random => random_roads(config, rng),
    }
}

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// `N + 1` horizontal and `N + 1` vertical roads spanning the inset screen.
pub fn grid_roads(config: &CityConfig) -> Vec<Road> {
    let n = config.layout_size.max(1);
    let (w, h) = (config.screen_width, config.screen_height);
    let spacing_y = (h - 2 * ROAD_MARGIN) / n;
    let spacing_x = (w - 2 * ROAD_MARGIN) / n;

    let mut roads = Vec::with_capacity(2 * (n as usize + 1));
    for i in 0..=n {
        let y = ROAD_MARGIN + i * spacing_y;
        roads.push(Road::straight(
            Point::new(ROAD_MARGIN, y),
            Point::new(w - ROAD_MARGIN, y),
            config.road_width,
        ));
    }
    for i in 0..=n {
        let x = ROAD_MARGIN + i * spacing_x;
        roads.push(Road::straight(
            Point::new(x, ROAD_MARGIN),
            Point::new(x, h - ROAD_MARGIN),
            config.road_width,
        ));
    }
    roads
}

// ---------------------------------------------------------------------------
// Radial
// ---------------------------------------------------------------------------

/// Outer radius of the radial pattern.
pub fn radial_max_radius(config: &CityConfig) -> i32 {
    config.screen_width.min(config.screen_height) / 2 - ROAD_MARGIN
}

/// `N` spokes from the screen center plus `N / 2` rings of chords.
pub fn radial_roads(config: &CityConfig) -> Vec<Road> {
    let n = config.layout_size.max(1);
    let (cx, cy) = config.center();
    let center = Point::new(cx, cy);
    let max_radius = radial_max_radius(config);

    let mut roads = Vec::new();
    for i in 0..n {
        let angle = std::f64::consts::TAU * i as f64 / n as f64;
        let end = Point::new(
            cx + (max_radius as f64 * angle.cos()) as i32,
            cy + (max_radius as f64 * angle.sin()) as i32,
        );
        roads.push(Road::straight(center, end, config.road_width));
    }

    let num_rings = n / 2;
    for ring in 1..=num_rings {
        let radius = max_radius * ring / num_rings;
        let mut boundary = circle(cx, cy, radius);
        sort_by_angle(center, &mut boundary);
        roads.extend(ring_chords(&boundary, config.road_width));
    }
    roads
}

/// Connect every `RING_CHORD_STEP`th boundary point to the one that many
/// further on, wrapping at the end.
fn ring_chords(boundary: &[Point], width: i32) -> Vec<Road> {
    let len = boundary.len();
    (0..len)
        .step_by(RING_CHORD_STEP)
        .map(|i| Road::straight(boundary[i], boundary[(i + RING_CHORD_STEP) % len], width))
        .collect()
}

// ---------------------------------------------------------------------------
// Random
// ---------------------------------------------------------------------------

/// `2N` random nodes plus four corner anchors, joined by up to `3N` roads.
pub fn random_roads(config: &CityConfig, rng: &mut CityRng) -> Vec<Road> {
    let n = config.layout_size.max(1) as usize;
    let (w, h) = (config.screen_width, config.screen_height);

    let mut nodes: Vec<Point> = (0..2 * n)
        .map(|_| {
            Point::new(
                rng.rng.gen_range(ROAD_MARGIN..=w - ROAD_MARGIN),
                rng.rng.gen_range(ROAD_MARGIN..=h - ROAD_MARGIN),
            )
        })
        .collect();
    let inset = RANDOM_ANCHOR_INSET;
    nodes.extend([
        Point::new(inset, inset),
        Point::new(w - inset, inset),
        Point::new(inset, h - inset),
        Point::new(w - inset, h - inset),
    ]);

    let mut roads = Vec::new();
    for _ in 0..3 * n {
        let a = rng.rng.gen_range(0..nodes.len());
        let b = rng.rng.gen_range(0..nodes.len());
        if a == b {
            continue;
        }
        roads.push(Road::straight(nodes[a], nodes[b], config.road_width));
    }
    roads
}
