//! Runtime guards for the committed layout.
//!
//! Whenever `CityLayout` changes, every building is re-validated against the
//! rest of the layout. Placement should make violations impossible, so any
//! non-zero count is logged as a warning. Loaded saves are the usual source.

use bevy::prelude::*;

use crate::buildings::Violation;
use crate::city_config::CityConfig;
use crate::layout::CityLayout;
use crate::CitySet;

/// Violations found by the last validation pass. Used by integration tests.
#[derive(Resource, Default, Debug, Clone, PartialEq, Eq)]
pub struct LayoutInvariantViolations {
    pub boundary: u32,
    pub building: u32,
    pub park: u32,
    pub fountain: u32,
    pub road: u32,
    /// Buildings with NaN or infinite geometry.
    pub non_finite: u32,
    /// Validation passes run so far.
    pub passes: u32,
}

impl LayoutInvariantViolations {
    pub fn total(&self) -> u32 {
        self.boundary + self.building + self.park + self.fountain + self.road + self.non_finite
    }
}

/// Count every building that breaks a placement rule.
pub fn validate_layout(layout: &CityLayout, config: &CityConfig) -> LayoutInvariantViolations {
    let mut found = LayoutInvariantViolations::default();
    for (i, b) in layout.buildings.iter().enumerate() {
        let finite = [b.x, b.y, b.width, b.depth, b.height]
            .iter()
            .all(|v| v.is_finite());
        if !finite {
            found.non_finite += 1;
            continue;
        }
        match layout.validate_building(i, config) {
            Ok(()) => {}
            Err(Violation::Boundary) => found.boundary += 1,
            Err(Violation::Building) => found.building += 1,
            Err(Violation::Park) => found.park += 1,
            Err(Violation::Fountain) => found.fountain += 1,
            Err(Violation::Road) => found.road += 1,
        }
    }
    found
}

fn check_layout_invariants(
    layout: Res<CityLayout>,
    config: Res<CityConfig>,
    mut violations: ResMut<LayoutInvariantViolations>,
) {
    let passes = violations.passes + 1;
    *violations = validate_layout(&layout, &config);
    violations.passes = passes;

    if violations.total() > 0 {
        warn!(
            "Layout invariant violation: {} of {} buildings break placement rules {:?}",
            violations.total(),
            layout.buildings.len(),
            *violations
        );
    }
}

pub struct LayoutInvariantsPlugin;

impl Plugin for LayoutInvariantsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LayoutInvariantViolations>()
            .init_resource::<CityLayout>()
            .init_resource::<CityConfig>()
            .add_systems(
                Update,
                check_layout_invariants
                    .run_if(resource_changed::<CityLayout>)
                    .in_set(CitySet::Validation),
            );
    }
}
