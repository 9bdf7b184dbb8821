mod board;
mod constants;
mod coord;
mod game;

use bevy::prelude::*;
use bevy::window::{PresentMode, WindowResolution};
use bevy_prototype_lyon::prelude::ShapePlugin;
use bevy_rapier2d::prelude::*;

use ball_core::BallConfig;
use constants::PPM;
use game::{BallPlugin, CorePlugin, HudPlugin, SurfacesPlugin};

fn main() {
    let config = config_from_env_or_default();

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Friction Ball".to_string(),
                resolution: WindowResolution::new(960, 360),
                present_mode: PresentMode::AutoVsync,
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(RapierPhysicsPlugin::<NoUserData>::pixels_per_meter(PPM).in_fixed_schedule())
        .add_plugins(ShapePlugin)
        .add_plugins(CorePlugin { config })
        .add_plugins(SurfacesPlugin)
        .add_plugins(BallPlugin)
        .add_plugins(HudPlugin)
        .run();
}

/// Ball configuration is read from the JSON file named by BALL_CONFIG;
/// anything missing or unparseable falls back to the built-in defaults.
fn config_from_env_or_default() -> BallConfig {
    let Ok(path) = std::env::var("BALL_CONFIG") else {
        return BallConfig::default();
    };

    let text = match std::fs::read_to_string(&path) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Ignoring BALL_CONFIG ({path}): {e}");
            return BallConfig::default();
        }
    };

    match serde_json::from_str(&text) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Ignoring BALL_CONFIG ({path}): {e}");
            BallConfig::default()
        }
    }
}
