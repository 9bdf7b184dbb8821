use bevy::prelude::*;
use bevy_prototype_lyon::prelude::*;
use bevy_rapier2d::prelude::*;

use ball_core::Surface;

use crate::board::layout::{friction_strips, StripDef, LANE_LENGTH};
use crate::constants::{
    color_from_hex, Colors, GROUND_Y_PX, STRIP_FILL_ALPHA, STRIP_HEIGHT_PX,
};
use crate::coord::sim_x_to_px;

use super::to_world2;

pub struct SurfacesPlugin;

/// Tags a sensor collider as a friction-bearing region. Contact dispatch
/// reads the enum off this component instead of matching tag strings.
#[derive(Component)]
pub(crate) struct SurfaceRegion(pub(crate) Surface);

impl Plugin for SurfacesPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_surfaces);
    }
}

pub(crate) fn surface_color(surface: Surface) -> Color {
    match surface {
        Surface::Ice => color_from_hex(Colors::ICE),
        Surface::Concrete => color_from_hex(Colors::CONCRETE),
        Surface::Carpet => color_from_hex(Colors::CARPET),
    }
}

fn spawn_surfaces(mut commands: Commands) {
    for strip in friction_strips() {
        spawn_strip(&mut commands, strip);
    }

    spawn_ground_line(&mut commands);
}

fn spawn_strip(commands: &mut Commands, strip: StripDef) {
    let left = sim_x_to_px(strip.from_x);
    let right = sim_x_to_px(strip.to_x);
    let half_w = (right - left) * 0.5;
    let half_h = STRIP_HEIGHT_PX * 0.5;
    let center = to_world2(left + half_w, GROUND_Y_PX - half_h);
    let color = surface_color(strip.surface);

    commands.spawn((
        RigidBody::Fixed,
        Collider::cuboid(half_w, half_h),
        Sensor,
        ActiveEvents::COLLISION_EVENTS,
        Transform::from_xyz(center.x, center.y, 1.0),
        GlobalTransform::default(),
        ShapeBuilder::with(&shapes::Rectangle {
            extents: Vec2::new(half_w * 2.0, half_h * 2.0),
            origin: shapes::RectangleOrigin::Center,
            radii: None,
        })
        .fill(color.with_alpha(STRIP_FILL_ALPHA))
        .stroke((color, 1.5))
        .build(),
        SurfaceRegion(strip.surface),
    ));
}

fn spawn_ground_line(commands: &mut Commands) {
    let a = to_world2(sim_x_to_px(0.0), GROUND_Y_PX);
    let b = to_world2(sim_x_to_px(LANE_LENGTH), GROUND_Y_PX);

    commands.spawn((
        ShapeBuilder::with(&shapes::Line(a, b))
            .stroke((color_from_hex(Colors::GROUND), 3.0))
            .build(),
        Transform::from_xyz(0.0, 0.0, 2.0),
    ));
}
