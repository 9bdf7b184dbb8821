//! Static lane layout in simulation coordinates.

use ball_core::vec3::{vec3, Vec3};
use ball_core::Surface;

/// A friction strip on the lane. Covers `[from_x, to_x)` in sim units;
/// vertically it spans the whole ball path, overlap depends only on X.
#[derive(Clone, Copy)]
pub struct StripDef {
    pub surface: Surface,
    pub from_x: f32,
    pub to_x: f32,
}

/// Total lane length in sim units (drives canvas sizing).
pub const LANE_LENGTH: f32 = 11.0;

pub fn friction_strips() -> Vec<StripDef> {
    vec![
        StripDef {
            surface: Surface::Ice,
            from_x: 1.0,
            to_x: 4.0,
        },
        StripDef {
            surface: Surface::Concrete,
            from_x: 4.0,
            to_x: 7.0,
        },
        StripDef {
            surface: Surface::Carpet,
            from_x: 7.0,
            to_x: 10.0,
        },
    ]
}

/// Where a fresh ball appears: start of the lane, half a unit above the
/// ground plane so gravity visibly settles it.
pub fn ball_spawn() -> Vec3 {
    vec3(0.0, 0.0, -0.5)
}
