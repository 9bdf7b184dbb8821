//! Ball physics core.
//!
//! Pure, engine-free simulation of a single ball rolling on a 2D-in-3D
//! plane: per-tick force accumulation (gravity, surface friction), a
//! position integrator, and a ground-plane constraint. The host engine
//! owns scheduling, collision detection, and the spatial transform; this
//! crate only mutates state it is handed.

pub mod ball;
pub mod config;
pub mod vec3;

pub use ball::{Ball, Surface};
pub use config::BallConfig;
pub use vec3::Vec3;
