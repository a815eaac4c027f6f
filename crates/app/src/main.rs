mod options;

use std::process::ExitCode;

use bevy::log::LogPlugin;
use bevy::prelude::*;

use generation::{
    CityConfig, CityGenerationPlugin, CityLayout, CityRng, GenerateCityEvent, GenerationStatus,
    PlaceBuildingEvent,
};
use save::{LayoutSaveBuffer, SaveLayoutEvent, SavePlugin};

use options::RunOptions;

fn main() -> ExitCode {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, LogPlugin::default()));

    let options = match RunOptions::from_env() {
        Ok(options) => options,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    app.insert_resource(options.config.clone());
    if let Some(seed) = options.seed {
        app.insert_resource(CityRng::from_seed_u64(seed));
    }
    app.add_plugins((CityGenerationPlugin, SavePlugin));
    app.update();

    info!("Seed: {}", app.world().resource::<CityRng>().seed);
    app.world_mut().send_event(GenerateCityEvent::default());
    app.update();

    let status = app.world().resource::<GenerationStatus>();
    if let Some(e) = &status.last_error {
        error!("Invalid config: {}", e);
        return ExitCode::FAILURE;
    }

    for &(x, y) in &options.clicks {
        app.world_mut().send_event(PlaceBuildingEvent { x, y });
    }
    if !options.clicks.is_empty() {
        app.update();
        let status = app.world().resource::<GenerationStatus>();
        info!(
            "Clicks: {} accepted, {} rejected",
            status.accepted_clicks, status.rejected_clicks
        );
    }

    match &options.out {
        Some(path) => {
            let layout = app.world().resource::<CityLayout>();
            if let Err(e) = save::write_layout_file(path, layout) {
                error!("Could not write {}: {}", path.display(), e);
                return ExitCode::FAILURE;
            }
            info!("Wrote {}", path.display());
        }
        None => {
            app.world_mut().send_event(SaveLayoutEvent);
            app.update();
            match &app.world().resource::<LayoutSaveBuffer>().json {
                Some(json) => println!("{json}"),
                None => return ExitCode::FAILURE,
            }
        }
    }

    print_summary(app.world().resource::<CityConfig>(), app.world().resource::<CityLayout>());
    ExitCode::SUCCESS
}

fn print_summary(config: &CityConfig, layout: &CityLayout) {
    info!(
        "{} city on {}x{}: {} roads ({} points), {} parks, {} buildings",
        config.road_pattern.label(),
        config.screen_width,
        config.screen_height,
        layout.roads.len(),
        layout.total_road_points(),
        layout.parks.len(),
        layout.buildings.len(),
    );
}
