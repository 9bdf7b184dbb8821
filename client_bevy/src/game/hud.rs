use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use crate::constants::{color_from_hex, Colors};

use super::ball::{ActiveContacts, Ball, BallSim};
use super::{SurfaceRegion, UpdateSet};

pub struct HudPlugin;

const HUD_LEFT: f32 = 16.0;
const HUD_TOP: f32 = 14.0;
const HUD_ROW_SPACING: f32 = 18.0;

#[derive(Component)]
struct HudVelocityText;

#[derive(Component)]
struct HudAccelerationText;

#[derive(Component)]
struct HudPositionText;

#[derive(Component)]
struct HudSurfaceText;

type VelocityTextQuery<'w, 's> = Query<'w, 's, &'static mut Text, With<HudVelocityText>>;
type AccelerationTextQuery<'w, 's> = Query<'w, 's, &'static mut Text, With<HudAccelerationText>>;
type PositionTextQuery<'w, 's> = Query<'w, 's, &'static mut Text, With<HudPositionText>>;
type SurfaceTextQuery<'w, 's> = Query<'w, 's, &'static mut Text, With<HudSurfaceText>>;

type HudTextSet<'w, 's> = ParamSet<
    'w,
    's,
    (
        VelocityTextQuery<'w, 's>,
        AccelerationTextQuery<'w, 's>,
        PositionTextQuery<'w, 's>,
        SurfaceTextQuery<'w, 's>,
    ),
>;

#[derive(SystemParam)]
struct HudTextQueries<'w, 's> {
    texts: HudTextSet<'w, 's>,
}

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_hud)
            .add_systems(Update, update_hud.in_set(UpdateSet::Visuals));
    }
}

fn spawn_hud(mut commands: Commands) {
    let font = TextFont::from_font_size(12.0);

    spawn_row(&mut commands, font.clone(), 0, "vel  -", HudVelocityText);
    spawn_row(&mut commands, font.clone(), 1, "acc  -", HudAccelerationText);
    spawn_row(&mut commands, font.clone(), 2, "pos  -", HudPositionText);
    spawn_row(&mut commands, font, 3, "on   -", HudSurfaceText);
}

fn spawn_row<M: Component>(
    commands: &mut Commands,
    font: TextFont,
    row: usize,
    initial: &str,
    marker: M,
) {
    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(HUD_LEFT),
            top: Val::Px(HUD_TOP + row as f32 * HUD_ROW_SPACING),
            ..default()
        },
        Text::new(initial),
        font,
        TextColor(color_from_hex(Colors::HUD_TEXT)),
        marker,
    ));
}

fn update_hud(
    q_ball: Query<(Entity, &BallSim), With<Ball>>,
    contacts: Res<ActiveContacts>,
    q_regions: Query<&SurfaceRegion>,
    mut queries: HudTextQueries,
) {
    let Ok((entity, sim)) = q_ball.single() else {
        for mut text in queries.texts.p3().iter_mut() {
            text.0 = "on   (respawning)".to_string();
        }
        return;
    };

    let v = sim.ball.velocity();
    let a = sim.ball.acceleration();
    let p = sim.position;

    let surface = contacts
        .0
        .get(&entity)
        .and_then(|regions| {
            regions
                .iter()
                .find_map(|&region| q_regions.get(region).ok())
        })
        .map(|SurfaceRegion(surface)| surface.name())
        .unwrap_or("-");

    for mut text in queries.texts.p0().iter_mut() {
        text.0 = format!("vel  ({:+.3}, {:+.3}, {:+.4})", v.x, v.y, v.z);
    }
    for mut text in queries.texts.p1().iter_mut() {
        text.0 = format!("acc  ({:+.3}, {:+.3}, {:+.4})", a.x, a.y, a.z);
    }
    for mut text in queries.texts.p2().iter_mut() {
        text.0 = format!("pos  ({:+.2}, {:+.2}, {:+.3})", p.x, p.y, p.z);
    }
    for mut text in queries.texts.p3().iter_mut() {
        text.0 = format!("on   {}", surface);
    }
}
