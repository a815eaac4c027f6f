use crate::raster::Point;
use crate::roads::Road;

const BUCKET_SIZE: i32 = 64; // pixels per spatial bucket

/// Bucketed index of every road point, for road-vs-footprint checks.
///
/// Points outside the screen are clamped into the edge buckets, so a query
/// sees exactly the points a full scan over every road would see.
#[derive(Debug, Clone)]
pub struct RoadPointGrid {
    buckets: Vec<Vec<Point>>,
    buckets_x: usize,
    buckets_y: usize,
}

impl RoadPointGrid {
    pub fn new(screen_width: i32, screen_height: i32) -> Self {
        let buckets_x = (screen_width.max(1) / BUCKET_SIZE) as usize + 1;
        let buckets_y = (screen_height.max(1) / BUCKET_SIZE) as usize + 1;
        Self {
            buckets: (0..buckets_x * buckets_y).map(|_| Vec::new()).collect(),
            buckets_x,
            buckets_y,
        }
    }

    pub fn from_roads(roads: &[Road], screen_width: i32, screen_height: i32) -> Self {
        let mut grid = Self::new(screen_width, screen_height);
        for road in roads {
            for &p in &road.points {
                grid.insert(p);
            }
        }
        grid
    }

    pub fn insert(&mut self, p: Point) {
        let idx = self.flat_index(self.bucket_x(p.x as f32), self.bucket_y(p.y as f32));
        self.buckets[idx].push(p);
    }

    /// Is any indexed point inside the inclusive rectangle?
    pub fn any_in_rect(&self, min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> bool {
        let (min_bx, max_bx) = (self.bucket_x(min_x), self.bucket_x(max_x));
        let (min_by, max_by) = (self.bucket_y(min_y), self.bucket_y(max_y));

        for by in min_by..=max_by {
            for bx in min_bx..=max_bx {
                let hit = self.buckets[self.flat_index(bx, by)].iter().any(|p| {
                    let (x, y) = (p.x as f32, p.y as f32);
                    x >= min_x && x <= max_x && y >= min_y && y <= max_y
                });
                if hit {
                    return true;
                }
            }
        }
        false
    }

    #[inline]
    fn bucket_x(&self, x: f32) -> usize {
        ((x / BUCKET_SIZE as f32).floor().max(0.0) as usize).min(self.buckets_x - 1)
    }

    #[inline]
    fn bucket_y(&self, y: f32) -> usize {
        ((y / BUCKET_SIZE as f32).floor().max(0.0) as usize).min(self.buckets_y - 1)
    }

    #[inline]
    fn flat_index(&self, bx: usize, by: usize) -> usize {
        by * self.buckets_x + bx
    }
}
