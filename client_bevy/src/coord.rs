#[cfg(test)]
use bevy::prelude::Vec2;
use bevy::prelude::Vec3;

use crate::constants::{CANVAS_HEIGHT, CANVAS_WIDTH, GROUND_Y_PX, LANE_LEFT_PX, SIM_TO_PX};

/// Pixel coordinates in screen space (origin top-left, Y-down).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PxPos {
    pub x: f32,
    pub y: f32,
}

impl PxPos {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Convert screen pixel coordinates (Y-down) to Bevy world coordinates (Y-up).
pub fn px_to_world(px: PxPos, z: f32) -> Vec3 {
    let wx = px.x - CANVAS_WIDTH * 0.5;
    let wy = (CANVAS_HEIGHT - px.y) - CANVAS_HEIGHT * 0.5;
    Vec3::new(wx, wy, z)
}

/// Convert Bevy world coordinates (Y-up) to screen pixel coordinates
/// (Y-down). Only used in tests.
#[cfg(test)]
pub fn world_to_px(world_xy: Vec2) -> PxPos {
    PxPos {
        x: world_xy.x + CANVAS_WIDTH * 0.5,
        y: CANVAS_HEIGHT * 0.5 - world_xy.y,
    }
}

/// Map a simulation-space position onto the screen. Sim X runs along the
/// lane; sim Z is depth with the ground plane at 0, negative Z is height
/// above the ground, so a ball at z = 0 sits on the ground line.
pub fn sim_to_px(sim: ball_core::Vec3) -> PxPos {
    PxPos {
        x: LANE_LEFT_PX + sim.x * SIM_TO_PX,
        y: GROUND_Y_PX + sim.z * SIM_TO_PX,
    }
}

/// Pixel x of a sim-space lane coordinate (for static strip layout).
pub fn sim_x_to_px(x: f32) -> f32 {
    LANE_LEFT_PX + x * SIM_TO_PX
}

#[cfg(test)]
mod tests {
    use super::*;
    use ball_core::vec3::vec3;

    #[test]
    fn px_world_roundtrip() {
        for (x, y) in [
            (0.0, 0.0),
            (CANVAS_WIDTH, 0.0),
            (0.0, CANVAS_HEIGHT),
            (CANVAS_WIDTH, CANVAS_HEIGHT),
            (CANVAS_WIDTH * 0.5, CANVAS_HEIGHT * 0.5),
        ] {
            let world = px_to_world(PxPos::new(x, y), 0.0);
            let roundtrip = world_to_px(world.truncate());
            assert!((roundtrip.x - x).abs() < 1e-6);
            assert!((roundtrip.y - y).abs() < 1e-6);
        }
    }

    #[test]
    fn sim_origin_sits_on_ground_line() {
        let px = sim_to_px(vec3(0.0, 0.0, 0.0));
        assert_eq!(px.x, LANE_LEFT_PX);
        assert_eq!(px.y, GROUND_Y_PX);
    }

    #[test]
    fn negative_depth_is_above_ground() {
        let px = sim_to_px(vec3(2.0, 0.0, -0.5));
        assert_eq!(px.x, LANE_LEFT_PX + 2.0 * SIM_TO_PX);
        assert!(px.y < GROUND_Y_PX);
        assert_eq!(px.y, GROUND_Y_PX - 0.5 * SIM_TO_PX);
    }

    #[test]
    fn sim_x_matches_full_mapping() {
        assert_eq!(sim_x_to_px(3.0), sim_to_px(vec3(3.0, 0.0, 0.0)).x);
    }
}
