//! `SavePlugin` driven through events in a headless app.

use bevy::prelude::*;

use generation::{CityConfig, CityGenerationPlugin, CityLayout, CityRng, GenerateCityEvent};

use crate::save_error::SaveError;
use crate::save_plugin::{LastSaveError, LayoutSaveBuffer, LoadLayoutEvent, SaveLayoutEvent, SavePlugin};

fn app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.insert_resource(CityRng::from_seed_u64(42));
    app.insert_resource(CityConfig {
        layout_size: 3,
        ..Default::default()
    });
    app.add_plugins((CityGenerationPlugin, SavePlugin));
    app.update();
    app
}

fn send<E: Event>(app: &mut App, event: E) {
    app.world_mut().send_event(event);
    app.update();
}

#[test]
fn test_save_then_load_restores_layout() {
    let mut app = app();
    send(&mut app, GenerateCityEvent { seed: Some(1) });
    let saved = app.world().resource::<CityLayout>().clone();

    send(&mut app, SaveLayoutEvent);
    assert!(app.world().resource::<LayoutSaveBuffer>().json.is_some());

    send(&mut app, GenerateCityEvent { seed: Some(2) });
    assert_ne!(app.world().resource::<CityLayout>(), &saved);

    send(&mut app, LoadLayoutEvent::default());
    assert_eq!(app.world().resource::<CityLayout>(), &saved);
    assert!(app.world().resource::<LastSaveError>().0.is_none());
}

#[test]
fn test_generate_and_save_in_one_frame() {
    let mut app = app();
    app.world_mut().send_event(GenerateCityEvent { seed: Some(9) });
    app.world_mut().send_event(SaveLayoutEvent);
    app.update();

    let json = app.world().resource::<LayoutSaveBuffer>().json.clone();
    let json = json.expect("save runs after generation in the same frame");
    let restored = crate::json_codec::layout_from_json(&json).unwrap();
    assert_eq!(&restored, app.world().resource::<CityLayout>());
}

#[test]
fn test_save_before_generation_fails() {
    let mut app = app();
    send(&mut app, SaveLayoutEvent);
    assert!(app.world().resource::<LayoutSaveBuffer>().json.is_none());
    assert!(matches!(
        app.world().resource::<LastSaveError>().0,
        Some(SaveError::NoData)
    ));
}

#[test]
fn test_load_with_empty_buffer_fails() {
    let mut app = app();
    send(&mut app, LoadLayoutEvent::default());
    assert!(matches!(
        app.world().resource::<LastSaveError>().0,
        Some(SaveError::NoData)
    ));
    assert!(!app.world().resource::<CityLayout>().is_generated());
}

#[test]
fn test_bad_json_keeps_current_layout() {
    let mut app = app();
    send(&mut app, GenerateCityEvent { seed: Some(4) });
    let before = app.world().resource::<CityLayout>().clone();

    send(
        &mut app,
        LoadLayoutEvent {
            json: Some("{ nope".to_string()),
        },
    );
    assert_eq!(app.world().resource::<CityLayout>(), &before);
    assert!(matches!(
        app.world().resource::<LastSaveError>().0,
        Some(SaveError::Decode(_))
    ));
}
