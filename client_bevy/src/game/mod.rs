mod ball;
mod core;
mod hud;
mod surfaces;

pub use ball::BallPlugin;
pub use core::CorePlugin;
pub(crate) use core::{FixedSet, SimConfig, UpdateSet};
pub use hud::HudPlugin;
pub use surfaces::SurfacesPlugin;
pub(crate) use surfaces::SurfaceRegion;

use bevy::prelude::Vec2;

use crate::coord::{px_to_world, PxPos};

pub(crate) fn to_world2(px: f32, py: f32) -> Vec2 {
    px_to_world(PxPos::new(px, py), 0.0).truncate()
}
