use bevy::prelude::*;

use generation::{CityLayout, CitySet};

use crate::json_codec::{layout_from_json, layout_to_json};
use crate::save_error::SaveError;

// ---------------------------------------------------------------------------
// Buffer resources
// ---------------------------------------------------------------------------

/// JSON text of the most recent successful save. File I/O is left to the
/// caller; this is what it writes out.
#[derive(Resource, Default, Debug)]
pub struct LayoutSaveBuffer {
    pub json: Option<String>,
}

/// Error from the most recent save or load, cleared on success.
#[derive(Resource, Default, Debug)]
pub struct LastSaveError(pub Option<SaveError>);

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

#[derive(Event, Debug, Default)]
pub struct SaveLayoutEvent;

/// Replace the current layout with a saved one. Without `json`, the contents
/// of `LayoutSaveBuffer` are loaded.
#[derive(Event, Debug, Default)]
pub struct LoadLayoutEvent {
    pub json: Option<String>,
}

// ---------------------------------------------------------------------------
// Plugin
// ---------------------------------------------------------------------------

pub struct SavePlugin;

impl Plugin for SavePlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<SaveLayoutEvent>()
            .add_event::<LoadLayoutEvent>()
            .init_resource::<LayoutSaveBuffer>()
            .init_resource::<LastSaveError>()
            .init_resource::<CityLayout>()
            .add_systems(
                Update,
                (handle_save_requests, handle_load_requests)
                    .chain()
                    .in_set(CitySet::Persistence),
            );
    }
}

// ---------------------------------------------------------------------------
// Systems
// ---------------------------------------------------------------------------

fn handle_save_requests(
    mut events: EventReader<SaveLayoutEvent>,
    layout: Res<CityLayout>,
    mut buffer: ResMut<LayoutSaveBuffer>,
    mut last_error: ResMut<LastSaveError>,
) {
    if events.read().next().is_none() {
        return;
    }
    // Drain remaining events (one save per frame is enough).
    events.read().for_each(drop);

    match layout_to_json(&layout) {
        Ok(json) => {
            buffer.json = Some(json);
            last_error.0 = None;
        }
        Err(e) => {
            warn!("Save failed: {}", e);
            last_error.0 = Some(e);
        }
    }
}

fn handle_load_requests(
    mut events: EventReader<LoadLayoutEvent>,
    mut layout: ResMut<CityLayout>,
    buffer: Res<LayoutSaveBuffer>,
    mut last_error: ResMut<LastSaveError>,
) {
    let Some(request) = events.read().last() else {
        return;
    };

    let result = match request.json.as_deref().or(buffer.json.as_deref()) {
        Some(json) => layout_from_json(json),
        None => Err(SaveError::NoData),
    };
    match result {
        Ok(loaded) => {
            *layout = loaded;
            last_error.0 = None;
        }
        Err(e) => {
            warn!("Load failed: {}", e);
            last_error.0 = Some(e);
        }
    }
}
