//! Integer rasterization of segments and circles.
//!
//! Both functions are pure and produce pixel-space `Point`s. Roads are
//! stored as the output of `line`, parks and fountains as the output of
//! `circle`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Bresenham line from `(x0, y0)` to `(x1, y1)`, both endpoints included.
///
/// The result is 8-connected and has `max(|dx|, |dy|) + 1` points.
pub fn line(x0: i32, y0: i32, x1: i32, y1: i32) -> Vec<Point> {
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    let (mut x, mut y) = (x0, y0);

    let mut points = Vec::with_capacity(dx.max(-dy) as usize + 1);
    loop {
        points.push(Point::new(x, y));
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
    points
}

/// Midpoint circle of radius `r` around `(cx, cy)`.
///
/// One octant is walked with an integer decision parameter and every step
/// emits its eight mirror images, so points on the axes and diagonals appear
/// more than once. The output is grouped by step, not ordered by angle; use
/// [`sort_by_angle`] when an ordered boundary is needed.
pub fn circle(cx: i32, cy: i32, r: i32) -> Vec<Point> {
    if r < 0 {
        return Vec::new();
    }
    if r == 0 {
        return vec![Point::new(cx, cy)];
    }

    let mut points = Vec::new();
    let mut x = 0;
    let mut y = r;
    let mut d = 1 - r;

    while x <= y {
        points.extend([
            Point::new(cx + x, cy + y),
            Point::new(cx - x, cy + y),
            Point::new(cx + x, cy - y),
            Point::new(cx - x, cy - y),
            Point::new(cx + y, cy + x),
            Point::new(cx - y, cy + x),
            Point::new(cx + y, cy - x),
            Point::new(cx - y, cy - x),
        ]);

        x += 1;
        if d < 0 {
            d += 2 * x + 1;
        } else {
            y -= 1;
            d += 2 * (x - y) + 1;
        }
    }
    points
}

/// Order `points` by their angle around `center`, starting at -π.
///
/// The sort is stable, so duplicate points stay adjacent.
pub fn sort_by_angle(center: Point, points: &mut [Point]) {
    let angle = |p: &Point| ((p.y - center.y) as f64).atan2((p.x - center.x) as f64);
    points.sort_by(|a, b| angle(a).total_cmp(&angle(b)));
}
