pub const DEFAULT_SCREEN_WIDTH: i32 = 800;
pub const DEFAULT_SCREEN_HEIGHT: i32 = 600;

/// Inset used by the road builders (grid lines, radial outer ring, random nodes).
pub const ROAD_MARGIN: i32 = 50;
/// Inset of the rectangle park centers are drawn from.
pub const PARK_MARGIN: i32 = 100;
/// Inset of the rectangle batch building centers are drawn from.
pub const BUILDING_MARGIN: i32 = 50;
/// Offset of the four fixed anchor nodes of the random road pattern.
pub const RANDOM_ANCHOR_INSET: i32 = 100;

/// A footprint grown by this margin must stay on screen.
pub const SCREEN_MARGIN: f32 = 60.0;
/// Both of two neighbouring footprints grow by this, so they stay 50 px apart.
pub const BUILDING_BUFFER: f32 = 25.0;
pub const PARK_BUFFER: f32 = 35.0;
pub const FOUNTAIN_BUFFER: f32 = 35.0;
pub const ROAD_BUFFER: f32 = 20.0;

/// Batch placement gives up after `requested * ATTEMPTS_PER_BUILDING` candidates.
pub const ATTEMPTS_PER_BUILDING: usize = 10;

pub const LOW_RISE_HEIGHT: (f32, f32) = (10.0, 30.0);
pub const MID_RISE_HEIGHT: (f32, f32) = (40.0, 100.0);
pub const HIGH_RISE_HEIGHT: (f32, f32) = (120.0, 250.0);

/// Normalized height given to every interactively placed building.
pub const INTERACTIVE_BUILDING_HEIGHT: f32 = 0.15;

/// Radial rings connect every Nth boundary point of the rasterized circle.
pub const RING_CHORD_STEP: usize = 8;

/// Standard footprint tracks the grid block size, clamped to this range.
pub const STANDARD_SIZE_MIN: f32 = 20.0;
pub const STANDARD_SIZE_MAX: f32 = 60.0;
