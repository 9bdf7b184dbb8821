use crate::vec3::{vec3, Vec3};

/// Ball configuration
///
/// Values are accepted as-is, including non-physical ones (zero or
/// negative mass, negative coefficients); the simulation is total over
/// its input domain and never validates plausibility.
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BallConfig {
    /// Not to be confused with weight (gravity * mass).
    pub mass: f32,
    /// An initial push to the right to get the ball moving.
    pub initial_velocity: Vec3,
    /// Coefficient of friction for ice.
    pub ice_friction_coefficient: f32,
    /// Coefficient of friction for concrete.
    pub concrete_friction_coefficient: f32,
    /// Coefficient of friction for carpet.
    pub carpet_friction_coefficient: f32,
    /// The force exerted upwards on the ball from the ground.
    pub ground_normal_force: f32,
    /// The force exerted downwards on the ball (Z axis in 2D).
    pub gravitational_constant: f32,
}

impl Default for BallConfig {
    fn default() -> Self {
        Self {
            mass: 1.0,
            initial_velocity: vec3(0.3, 0.0, 0.0),
            ice_friction_coefficient: 0.08,
            concrete_friction_coefficient: 0.15,
            carpet_friction_coefficient: 0.36,
            ground_normal_force: 1.0,
            gravitational_constant: 0.0001,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_carries_documented_literals() {
        let config = BallConfig::default();
        assert_eq!(config.initial_velocity, vec3(0.3, 0.0, 0.0));
        assert_eq!(config.ice_friction_coefficient, 0.08);
        assert_eq!(config.concrete_friction_coefficient, 0.15);
        assert_eq!(config.carpet_friction_coefficient, 0.36);
        assert_eq!(config.ground_normal_force, 1.0);
        assert_eq!(config.gravitational_constant, 0.0001);
    }

    #[test]
    fn deserializes_camel_case_with_defaults_for_missing_fields() {
        let config: BallConfig =
            serde_json::from_str(r#"{"mass": 2.5, "iceFrictionCoefficient": 0.01}"#).unwrap();
        assert_eq!(config.mass, 2.5);
        assert_eq!(config.ice_friction_coefficient, 0.01);
        assert_eq!(config.concrete_friction_coefficient, 0.15);
        assert_eq!(config.initial_velocity, vec3(0.3, 0.0, 0.0));
    }

    #[test]
    fn round_trips_through_json() {
        let config = BallConfig {
            mass: -3.0,
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: BallConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.mass, -3.0);
        assert_eq!(back.carpet_friction_coefficient, 0.36);
    }
}
