//! Collision primitives shared by the placers: axis-aligned footprints and
//! circular regions derived from rasterized boundaries.

use bevy::math::Vec2;
use serde::{Deserialize, Serialize};

use crate::raster::{circle, Point};

/// Axis-aligned rectangle given by its inclusive edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Footprint {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Footprint {
    pub fn centered(x: f32, y: f32, width: f32, depth: f32) -> Self {
        let hw = width / 2.0;
        let hd = depth / 2.0;
        Self {
            left: x - hw,
            right: x + hw,
            top: y - hd,
            bottom: y + hd,
        }
    }

    /// Grow the rectangle by `margin` on every side.
    pub fn expanded(&self, margin: f32) -> Self {
        Self {
            left: self.left - margin,
            right: self.right + margin,
            top: self.top - margin,
            bottom: self.bottom + margin,
        }
    }

    /// True when the rectangle lies within `[0, width] x [0, height]`.
    pub fn within(&self, width: f32, height: f32) -> bool {
        self.left >= 0.0 && self.top >= 0.0 && self.right <= width && self.bottom <= height
    }

    /// Inclusive point containment.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }

    /// Overlap test on closed intervals: touching edges count as overlap.
    pub fn overlaps(&self, other: &Footprint) -> bool {
        !(self.right < other.left
            || self.left > other.right
            || self.bottom < other.top
            || self.top > other.bottom)
    }

    /// Closest-point test against a circle. Touching does not count.
    pub fn intersects_circle(&self, center: Vec2, radius: f32) -> bool {
        let closest_x = center.x.clamp(self.left, self.right);
        let closest_y = center.y.clamp(self.top, self.bottom);
        let dx = center.x - closest_x;
        let dy = center.y - closest_y;
        dx * dx + dy * dy < radius * radius
    }
}

/// A park or the fountain: a rasterized circle plus its derived geometry.
///
/// `center` is the centroid of `boundary` and `radius` the largest distance
/// from it to any boundary point. Both are computed once in
/// [`CircleRegion::from_points`]. An empty boundary gives an inert region
/// that nothing collides with.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Point>", into = "Vec<Point>")]
pub struct CircleRegion {
    pub center: Vec2,
    pub radius: f32,
    pub boundary: Vec<Point>,
}

impl CircleRegion {
    pub fn rasterized(cx: i32, cy: i32, r: i32) -> Self {
        Self::from_points(circle(cx, cy, r))
    }

    pub fn from_points(boundary: Vec<Point>) -> Self {
        if boundary.is_empty() {
            return Self::default();
        }

        let n = boundary.len() as f32;
        let sum = boundary
            .iter()
            .fold(Vec2::ZERO, |acc, p| acc + Vec2::new(p.x as f32, p.y as f32));
        let center = sum / n;
        let radius = boundary
            .iter()
            .map(|p| center.distance(Vec2::new(p.x as f32, p.y as f32)))
            .fold(0.0_f32, f32::max);

        Self {
            center,
            radius,
            boundary,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.boundary.is_empty()
    }

    /// Does `footprint`, grown by `buffer`, touch this region?
    pub fn collides_with(&self, footprint: &Footprint, buffer: f32) -> bool {
        if self.is_empty() {
            return false;
        }
        footprint
            .expanded(buffer)
            .intersects_circle(self.center, self.radius + buffer)
    }
}

impl From<Vec<Point>> for CircleRegion {
    fn from(points: Vec<Point>) -> Self {
        Self::from_points(points)
    }
}

impl From<CircleRegion> for Vec<Point> {
    fn from(region: CircleRegion) -> Self {
        region.boundary
    }
}
