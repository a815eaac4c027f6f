//! # TestCity - headless integration test harness
//!
//! Wraps `bevy::app::App` + `CityGenerationPlugin` so tests can drive
//! generation and clicks through the same events the binary uses.

use bevy::app::App;
use bevy::prelude::*;

use crate::buildings::{Building, PlacementError};
use crate::city_config::CityConfig;
use crate::city_rng::CityRng;
use crate::invariants::LayoutInvariantViolations;
use crate::layout::CityLayout;
use crate::requests::{GenerateCityEvent, GenerationStatus, PlaceBuildingEvent, PlacementOutcomeEvent};
use crate::CityGenerationPlugin;

/// Seed used unless a test picks its own, so runs are reproducible.
pub const TEST_SEED: u64 = 42;

/// A headless Bevy App wrapping `CityGenerationPlugin` for integration testing.
pub struct TestCity {
    app: App,
}

impl Default for TestCity {
    fn default() -> Self {
        Self::new()
    }
}

impl TestCity {
    // -----------------------------------------------------------------------
    // Constructors
    // -----------------------------------------------------------------------

    /// Empty, ungenerated city with the default config and `TEST_SEED`.
    pub fn new() -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        // Insert BEFORE the plugin so init_resource keeps the fixed seed.
        app.insert_resource(CityRng::from_seed_u64(TEST_SEED));
        app.add_plugins(CityGenerationPlugin);
        app.update();
        Self { app }
    }

    // -----------------------------------------------------------------------
    // Setup (builder pattern, consumes and returns Self)
    // -----------------------------------------------------------------------

    pub fn with_config(mut self, config: CityConfig) -> Self {
        self.app.insert_resource(config);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.app.insert_resource(CityRng::from_seed_u64(seed));
        self
    }

    /// Replace the layout directly, bypassing generation.
    pub fn with_layout(mut self, layout: CityLayout) -> Self {
        self.app.insert_resource(layout);
        self.app.update();
        self
    }

    /// Generate immediately, builder style.
    pub fn generated(mut self) -> Self {
        self.generate();
        self
    }

    // -----------------------------------------------------------------------
    // Actions
    // -----------------------------------------------------------------------

    /// Request a generation with the current RNG stream and run one frame.
    pub fn generate(&mut self) {
        self.send(GenerateCityEvent { seed: None });
    }

    pub fn generate_with_seed(&mut self, seed: u64) {
        self.send(GenerateCityEvent { seed: Some(seed) });
    }

    /// Click at `(x, y)` and return the outcome of that click.
    pub fn click(&mut self, x: f32, y: f32) -> Result<Building, PlacementError> {
        self.send(PlaceBuildingEvent { x, y });
        match self.drain_outcomes().pop() {
            Some(outcome) => outcome.result,
            None => panic!("click at ({x}, {y}) produced no outcome event"),
        }
    }

    /// Send one event and run a frame so the systems see it.
    pub fn send<E: Event>(&mut self, event: E) {
        self.app.world_mut().send_event(event);
        self.app.update();
    }

    pub fn update(&mut self) {
        self.app.update();
    }

    pub fn drain_outcomes(&mut self) -> Vec<PlacementOutcomeEvent> {
        self.app
            .world_mut()
            .resource_mut::<Events<PlacementOutcomeEvent>>()
            .drain()
            .collect()
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }

    pub fn resource<T: Resource>(&self) -> &T {
        self.app.world().resource::<T>()
    }

    pub fn layout(&self) -> &CityLayout {
        self.resource::<CityLayout>()
    }

    pub fn config(&self) -> &CityConfig {
        self.resource::<CityConfig>()
    }

    pub fn status(&self) -> &GenerationStatus {
        self.resource::<GenerationStatus>()
    }

    pub fn violations(&self) -> &LayoutInvariantViolations {
        self.resource::<LayoutInvariantViolations>()
    }

    pub fn building_count(&self) -> usize {
        self.layout().buildings.len()
    }
}
