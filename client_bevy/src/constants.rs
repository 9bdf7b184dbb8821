pub const CANVAS_WIDTH: f32 = 960.0;
pub const CANVAS_HEIGHT: f32 = 360.0;

/// Rapier pixels_per_meter scaling factor. Rapier divides internally by this
/// so we can work in pixel coordinates everywhere.
pub const PPM: f32 = 500.0;

/// Pixels per simulation unit along the lane.
pub const SIM_TO_PX: f32 = 80.0;

/// Horizontal pixel offset of sim x = 0.
pub const LANE_LEFT_PX: f32 = 40.0;

/// Vertical pixel position of the ground plane (sim z = 0).
pub const GROUND_Y_PX: f32 = 240.0;

pub const BALL_RADIUS: f32 = 10.0;
pub const BALL_FILL_ALPHA: f32 = 0.08;
pub const STRIP_HEIGHT_PX: f32 = 120.0;
pub const STRIP_FILL_ALPHA: f32 = 0.18;

pub const RESPAWN_DELAY: f32 = 1.0;

/// Fixed simulation timestep. The integrator is tick-based (one call
/// moves the ball by its velocity, no dt scaling), so this only sets how
/// often it runs.
pub const PHYSICS_DT: f32 = 1.0 / 50.0;

#[derive(Clone, Copy)]
pub struct Colors;

impl Colors {
    pub const BG: u32 = 0x050510;
    pub const GROUND: u32 = 0x4da6a6;
    pub const BALL: u32 = 0x88ccff;
    pub const ICE: u32 = 0x9fd8ef;
    pub const CONCRETE: u32 = 0x9a9a9a;
    pub const CARPET: u32 = 0xb5543d;
    pub const HUD_TEXT: u32 = 0x4da6a6;
}

pub fn color_from_hex(rgb: u32) -> bevy::prelude::Color {
    let r = ((rgb >> 16) & 0xff) as f32 / 255.0;
    let g = ((rgb >> 8) & 0xff) as f32 / 255.0;
    let b = (rgb & 0xff) as f32 / 255.0;
    bevy::prelude::Color::srgb(r, g, b)
}
