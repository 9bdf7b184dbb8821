use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_rapier2d::prelude::{PhysicsSet, RapierConfiguration, TimestepMode};

use ball_core::BallConfig;

use crate::constants::{color_from_hex, Colors, CANVAS_HEIGHT, CANVAS_WIDTH, PHYSICS_DT};

use super::ball::{RespawnState, SpawnBallMessage};

#[derive(SystemSet, Debug, Hash, Eq, PartialEq, Clone)]
pub(crate) enum UpdateSet {
    Visuals,
}

/// Per-tick ordering: surface contacts are dispatched before the
/// integrator runs. The core itself does not care (contacts just feed the
/// force accumulator the same tick); this host picks a deterministic
/// order.
#[derive(SystemSet, Debug, Hash, Eq, PartialEq, Clone)]
pub(crate) enum FixedSet {
    Contacts,
    Integrate,
    Spawn,
}

/// The ball configuration the whole app runs with, loaded once at startup.
#[derive(Resource, Clone)]
pub(crate) struct SimConfig(pub(crate) BallConfig);

pub struct CorePlugin {
    pub config: BallConfig,
}

#[derive(Component)]
struct MainCamera;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(SimConfig(self.config))
            .init_resource::<RespawnState>()
            .add_message::<SpawnBallMessage>()
            .insert_resource(ClearColor(color_from_hex(Colors::BG)))
            .insert_resource(Time::<Fixed>::from_seconds(PHYSICS_DT as f64))
            .insert_resource(TimestepMode::Fixed {
                dt: PHYSICS_DT,
                substeps: 1,
            })
            .configure_sets(
                FixedUpdate,
                (FixedSet::Contacts, FixedSet::Integrate, FixedSet::Spawn).chain(),
            )
            .configure_sets(
                FixedUpdate,
                FixedSet::Contacts.after(PhysicsSet::Writeback),
            )
            .add_systems(
                Startup,
                (log_config, setup_camera, configure_rapier_gravity).chain(),
            )
            .add_systems(Update, fit_camera_to_canvas);
    }
}

fn log_config(config: Res<SimConfig>) {
    info!("running with {:?}", config.0);
}

fn setup_camera(mut commands: Commands) {
    commands.spawn((Camera2d, Msaa::Sample4, MainCamera));
}

fn configure_rapier_gravity(mut q_config: Query<&mut RapierConfiguration>) {
    // Rapier only provides overlap detection here; the ball core owns all
    // forces, so the physics world itself is gravity-free.
    for mut cfg in &mut q_config {
        cfg.gravity = Vec2::ZERO;
    }
}

fn fit_camera_to_canvas(
    q_window: Query<&Window, With<PrimaryWindow>>,
    mut q_projection: Query<&mut Projection, With<MainCamera>>,
) {
    let Ok(window) = q_window.single() else {
        return;
    };

    if window.width() <= 0.0 || window.height() <= 0.0 {
        return;
    }

    let scale_x = CANVAS_WIDTH / window.width();
    let scale_y = CANVAS_HEIGHT / window.height();
    let target_scale = scale_x.max(scale_y).max(0.0001);

    for mut projection in &mut q_projection {
        if let Projection::Orthographic(ortho) = &mut *projection {
            ortho.scale = target_scale;
        }
    }
}
