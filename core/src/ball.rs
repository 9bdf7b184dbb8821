use crate::config::BallConfig;
use crate::vec3::{add, scale, vec3, Vec3};

/// Kind of friction-bearing surface the host's collision system can
/// report contact with. Closed set; the host dispatches on this instead
/// of engine-side tag strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Surface {
    Ice,
    Concrete,
    Carpet,
}

impl Surface {
    pub const ALL: [Surface; 3] = [Surface::Ice, Surface::Concrete, Surface::Carpet];

    pub fn name(self) -> &'static str {
        match self {
            Surface::Ice => "ice",
            Surface::Concrete => "concrete",
            Surface::Carpet => "carpet",
        }
    }
}

/// A ball rolling rightward on a plane, integrated once per fixed tick.
///
/// Forces are summed into the acceleration accumulator; `tick` then folds
/// the accumulator into velocity and velocity into a host-owned position.
/// The accumulator is intentionally never cleared between ticks, so every
/// tick's forces stack on top of all previous ticks' (the observed
/// long-run behavior this crate reproduces; see DESIGN.md).
#[derive(Debug, Clone)]
pub struct Ball {
    mass: f32,
    velocity: Vec3,
    acceleration: Vec3,
    ice_friction: Vec3,
    concrete_friction: Vec3,
    carpet_friction: Vec3,
    gravitational_force: Vec3,
}

impl Ball {
    /// Derives the per-surface friction forces and the gravitational
    /// force from the configuration and seeds the velocity. Pure
    /// arithmetic: identical configuration yields bit-identical vectors.
    pub fn new(config: &BallConfig) -> Self {
        let normal = config.ground_normal_force;
        Self {
            mass: config.mass,
            velocity: config.initial_velocity,
            acceleration: Vec3::ZERO,
            ice_friction: friction_force(config.ice_friction_coefficient, normal),
            concrete_friction: friction_force(config.concrete_friction_coefficient, normal),
            carpet_friction: friction_force(config.carpet_friction_coefficient, normal),
            gravitational_force: vec3(0.0, 0.0, config.gravitational_constant * config.mass),
        }
    }

    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    pub fn acceleration(&self) -> Vec3 {
        self.acceleration
    }

    /// Adds a net force to the acceleration accumulator after factoring
    /// in mass. A degenerate mass (zero or negative) falls back to
    /// adding the raw force, which avoids dividing by zero or inverting
    /// the force's direction.
    pub fn apply_force(&mut self, force: Vec3) {
        if self.mass <= 0.0 {
            self.acceleration = add(self.acceleration, force);
            return;
        }

        self.acceleration = add(self.acceleration, scale(force, 1.0 / self.mass));
    }

    /// Applies the precomputed friction force for the reported surface.
    /// Called by the host's collision system zero-to-many times per tick,
    /// once per overlapping region.
    pub fn on_surface_contact(&mut self, surface: Surface) {
        let friction = match surface {
            Surface::Ice => self.ice_friction,
            Surface::Concrete => self.concrete_friction,
            Surface::Carpet => self.carpet_friction,
        };
        self.apply_force(friction);
    }

    /// One fixed-tick movement step. Applies gravity, folds the
    /// accumulator into velocity, and integrates the host-owned position
    /// in place.
    pub fn tick(&mut self, position: &mut Vec3) {
        self.apply_force(self.gravitational_force);
        self.velocity = add(self.velocity, self.acceleration);

        // Prevent the forces on the ball from changing its direction.
        if self.velocity.x < 0.0 {
            self.velocity = Vec3::ZERO;
        }

        *position = add(*position, self.velocity);
        if position.z >= 0.0 {
            position.z = 0.0;
        }
    }
}

/// Simulates the formula for friction in the real world. Friction acts
/// only on the horizontal axis, opposing the ball's rightward travel.
fn friction_force(coefficient: f32, ground_normal_force: f32) -> Vec3 {
    vec3(-1.0 * coefficient * ground_normal_force, 0.0, 0.0)
}
