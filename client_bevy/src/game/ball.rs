use std::collections::{HashMap, HashSet};

use bevy::prelude::*;
use bevy_prototype_lyon::prelude::*;
use bevy_rapier2d::prelude::*;

use ball_core::vec3::Vec3 as SimVec3;
use ball_core::BallConfig;

use crate::board::layout::{ball_spawn, LANE_LENGTH};
use crate::constants::{color_from_hex, Colors, BALL_FILL_ALPHA, BALL_RADIUS, RESPAWN_DELAY};
use crate::coord::{px_to_world, sim_to_px};

use super::{FixedSet, SimConfig, SurfaceRegion};

pub struct BallPlugin;

#[derive(Message, Clone, Copy)]
pub(crate) struct SpawnBallMessage {
    pub(crate) position: SimVec3,
}

#[derive(Resource)]
pub(crate) struct RespawnState {
    pub(crate) seconds_left: f32,
}

impl Default for RespawnState {
    fn default() -> Self {
        Self {
            seconds_left: RESPAWN_DELAY,
        }
    }
}

#[derive(Component)]
pub(crate) struct Ball;

/// Host-side ball state: the pure integrator plus the sim-space position
/// it writes into. The Bevy `Transform` is derived from `position` every
/// tick, never the other way around.
#[derive(Component)]
pub(crate) struct BallSim {
    pub(crate) ball: ball_core::Ball,
    pub(crate) position: SimVec3,
}

/// Which surface regions each ball currently overlaps, maintained from
/// rapier's started/stopped events. Dispatch walks this every fixed tick,
/// so a persisting overlap re-applies its friction each tick.
#[derive(Resource, Default)]
pub(crate) struct ActiveContacts(pub(crate) HashMap<Entity, HashSet<Entity>>);

impl Plugin for BallPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ActiveContacts>()
            .add_systems(Startup, spawn_initial_ball)
            .add_systems(
                FixedUpdate,
                (track_overlaps, dispatch_contacts)
                    .chain()
                    .in_set(FixedSet::Contacts),
            )
            .add_systems(
                FixedUpdate,
                (integrate_system, retire_system)
                    .chain()
                    .in_set(FixedSet::Integrate),
            )
            .add_systems(
                FixedUpdate,
                (respawn_system, spawn_ball_system)
                    .chain()
                    .in_set(FixedSet::Spawn),
            );
    }
}

fn spawn_initial_ball(mut commands: Commands, config: Res<SimConfig>) {
    do_spawn_ball(&mut commands, &config.0, ball_spawn());
}

fn spawn_ball_system(
    mut commands: Commands,
    config: Res<SimConfig>,
    mut ball_reader: MessageReader<SpawnBallMessage>,
) {
    for msg in ball_reader.read() {
        do_spawn_ball(&mut commands, &config.0, msg.position);
    }
}

fn do_spawn_ball(commands: &mut Commands, config: &BallConfig, position: SimVec3) {
    let color = color_from_hex(Colors::BALL);

    commands.spawn((
        // Physics: kinematic, rapier only reports sensor overlaps.
        ball_physics(),
        // Transform (derived from the sim position)
        Transform::from_translation(ball_world_translation(position)),
        // Visual
        ShapeBuilder::with(&shapes::Circle {
            radius: BALL_RADIUS,
            center: Vec2::ZERO,
        })
        .fill(color.with_alpha(BALL_FILL_ALPHA))
        .stroke((color, 2.0))
        .build(),
        // Simulation state
        Ball,
        BallSim {
            ball: ball_core::Ball::new(config),
            position,
        },
    ));

    info!(
        "spawned ball at x={:.2} z={:.2} (mass {})",
        position.x, position.z, config.mass
    );
}

/// Physics components for a ball. Rapier skips kinematic-vs-fixed pairs
/// by default, so collision events against the fixed sensor strips must
/// be enabled explicitly.
fn ball_physics() -> impl Bundle {
    (
        RigidBody::KinematicPositionBased,
        Collider::ball(BALL_RADIUS),
        ActiveEvents::COLLISION_EVENTS,
        ActiveCollisionTypes::default() | ActiveCollisionTypes::KINEMATIC_STATIC,
    )
}

/// World-space translation for a ball whose contact point is at the sim
/// position; the visual circle sits on top of the ground line.
fn ball_world_translation(position: SimVec3) -> Vec3 {
    let mut world = px_to_world(sim_to_px(position), 4.0);
    world.y += BALL_RADIUS;
    world
}

/// Fold rapier's started/stopped collision events into the active
/// overlap set.
fn track_overlaps(
    mut contacts: ResMut<ActiveContacts>,
    mut collision_events: MessageReader<CollisionEvent>,
    q_ball: Query<(), With<Ball>>,
    q_region: Query<(), With<SurfaceRegion>>,
) {
    for event in collision_events.read() {
        let (started, a, b) = match event {
            CollisionEvent::Started(a, b, _) => (true, *a, *b),
            CollisionEvent::Stopped(a, b, _) => (false, *a, *b),
        };

        let pair = if q_ball.get(a).is_ok() && q_region.get(b).is_ok() {
            Some((a, b))
        } else if q_ball.get(b).is_ok() && q_region.get(a).is_ok() {
            Some((b, a))
        } else {
            None
        };

        if let Some((ball, region)) = pair {
            if started {
                contacts.0.entry(ball).or_default().insert(region);
            } else if let Some(set) = contacts.0.get_mut(&ball) {
                set.remove(&region);
            }
        }
    }
}

/// OnTriggerStay analogue: every fixed tick, each still-overlapping
/// region applies its friction into the ball's force accumulator.
fn dispatch_contacts(
    contacts: Res<ActiveContacts>,
    mut q_ball: Query<(Entity, &mut BallSim)>,
    q_regions: Query<&SurfaceRegion>,
) {
    for (entity, mut sim) in &mut q_ball {
        let Some(regions) = contacts.0.get(&entity) else {
            continue;
        };
        for &region in regions {
            if let Ok(SurfaceRegion(surface)) = q_regions.get(region) {
                sim.ball.on_surface_contact(*surface);
            }
        }
    }
}

fn integrate_system(mut q_ball: Query<(&mut BallSim, &mut Transform), With<Ball>>) {
    for (mut sim, mut transform) in &mut q_ball {
        let BallSim { ball, position } = &mut *sim;
        ball.tick(position);
        transform.translation = ball_world_translation(*position);
    }
}

/// Despawn balls that friction has parked (the direction lock zeroed the
/// velocity) or that rolled off the end of the lane, and arm the respawn
/// timer.
fn retire_system(
    mut commands: Commands,
    q_ball: Query<(Entity, &BallSim), With<Ball>>,
    mut contacts: ResMut<ActiveContacts>,
    mut respawn: ResMut<RespawnState>,
) {
    for (entity, sim) in &q_ball {
        let parked = sim.ball.velocity() == SimVec3::ZERO;
        let off_lane = sim.position.x > LANE_LENGTH;

        if parked || off_lane {
            if parked {
                info!("ball parked at x={:.2}", sim.position.x);
            } else {
                info!("ball left the lane at x={:.2}", sim.position.x);
            }
            commands.entity(entity).despawn();
            contacts.0.remove(&entity);
            respawn.seconds_left = RESPAWN_DELAY;
        }
    }
}

fn respawn_system(
    mut respawn: ResMut<RespawnState>,
    q_ball: Query<(), With<Ball>>,
    time: Res<Time<Fixed>>,
    mut ball_writer: MessageWriter<SpawnBallMessage>,
) {
    if q_ball.is_empty() {
        respawn.seconds_left -= time.delta_secs();
        if respawn.seconds_left <= 0.0 {
            ball_writer.write(SpawnBallMessage {
                position: ball_spawn(),
            });
            respawn.seconds_left = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::PPM;
    use ball_core::vec3::vec3;
    use ball_core::Surface;

    /// Headless app running the real rapier plugin plus the contact
    /// pipeline, plenty for overlap detection.
    fn test_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .add_plugins(TransformPlugin)
            .add_plugins(RapierPhysicsPlugin::<NoUserData>::pixels_per_meter(PPM))
            .init_resource::<ActiveContacts>()
            .add_systems(Last, (track_overlaps, dispatch_contacts).chain());
        app
    }

    fn spawn_strip(app: &mut App, surface: Surface) -> Entity {
        app.world_mut()
            .spawn((
                RigidBody::Fixed,
                Collider::cuboid(100.0, 100.0),
                Sensor,
                ActiveEvents::COLLISION_EVENTS,
                Transform::default(),
                GlobalTransform::default(),
                SurfaceRegion(surface),
            ))
            .id()
    }

    /// A ball overlapping the strip from the first frame, with the same
    /// physics components the real spawn uses.
    fn spawn_overlapping_ball(app: &mut App) -> Entity {
        app.world_mut()
            .spawn((
                ball_physics(),
                Transform::default(),
                GlobalTransform::default(),
                Ball,
                BallSim {
                    ball: ball_core::Ball::new(&BallConfig::default()),
                    position: vec3(0.0, 0.0, 0.0),
                },
            ))
            .id()
    }

    fn ball_acceleration_x(app: &mut App, ball: Entity) -> f32 {
        let mut q_ball = app.world_mut().query::<&BallSim>();
        q_ball
            .get(app.world(), ball)
            .expect("ball despawned")
            .ball
            .acceleration()
            .x
    }

    #[test]
    fn kinematic_ball_overlapping_strip_reaches_contact_set() {
        let mut app = test_app();
        let strip = spawn_strip(&mut app, Surface::Carpet);
        let ball = spawn_overlapping_ball(&mut app);

        for _ in 0..10 {
            app.update();
        }

        let contacts = app.world().resource::<ActiveContacts>();
        let regions = contacts
            .0
            .get(&ball)
            .expect("no overlap recorded for the ball");
        assert!(regions.contains(&strip));
    }

    #[test]
    fn persisting_overlap_applies_friction_every_tick() {
        let mut app = test_app();
        spawn_strip(&mut app, Surface::Carpet);
        let ball = spawn_overlapping_ball(&mut app);

        for _ in 0..10 {
            app.update();
        }
        let after_ten = ball_acceleration_x(&mut app, ball);
        assert!(
            after_ten < 0.0,
            "carpet friction never reached the accumulator: {after_ten}"
        );

        for _ in 0..5 {
            app.update();
        }
        let after_fifteen = ball_acceleration_x(&mut app, ball);
        assert!(
            after_fifteen < after_ten,
            "friction stopped accumulating while the overlap persisted"
        );
    }
}
