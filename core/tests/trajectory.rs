//! Long-run trajectory tests for the ball core.
//!
//! These drive the integrator the way a host engine would: one `tick`
//! per fixed step, with surface contacts reported for every step the
//! ball overlaps a friction strip.

use ball_core::vec3::{vec3, Vec3};
use ball_core::{Ball, BallConfig, Surface};

/// A friction strip on the lane, in sim-space X.
struct Strip {
    surface: Surface,
    from_x: f32,
    to_x: f32,
}

fn lane() -> Vec<Strip> {
    vec![
        Strip {
            surface: Surface::Ice,
            from_x: 1.0,
            to_x: 4.0,
        },
        Strip {
            surface: Surface::Concrete,
            from_x: 4.0,
            to_x: 7.0,
        },
        Strip {
            surface: Surface::Carpet,
            from_x: 7.0,
            to_x: 10.0,
        },
    ]
}

/// One host step: report contacts for the current position, then tick.
fn host_step(ball: &mut Ball, position: &mut Vec3, strips: &[Strip]) {
    for strip in strips {
        if position.x >= strip.from_x && position.x < strip.to_x {
            ball.on_surface_contact(strip.surface);
        }
    }
    ball.tick(position);
}

#[test]
fn ball_never_moves_left_and_never_sinks_below_ground() {
    let mut ball = Ball::new(&BallConfig::default());
    let mut position = vec3(0.0, 0.0, -0.5);
    let strips = lane();

    let mut prev_x = position.x;
    for _ in 0..1000 {
        host_step(&mut ball, &mut position, &strips);
        assert!(
            position.x >= prev_x,
            "ball moved left: {} -> {}",
            prev_x,
            position.x
        );
        assert!(position.z <= 0.0, "ball above ground plane: {:?}", position);
        prev_x = position.x;
    }
}

#[test]
fn friction_parks_the_ball_and_it_stays_parked() {
    let mut ball = Ball::new(&BallConfig::default());
    let mut position = vec3(0.0, 0.0, 0.0);
    let strips = lane();

    let mut parked_at = None;
    for step in 0..1000 {
        host_step(&mut ball, &mut position, &strips);
        if ball.velocity() == Vec3::ZERO {
            parked_at = Some((step, position));
            break;
        }
    }

    let (step, parked_position) = parked_at.expect("ball never stopped");
    assert!(step < 100, "ball took too long to park: {} steps", step);
    // Friction only exists on the strips, so the ball must have reached one.
    assert!(parked_position.x >= 1.0);

    // Once parked the accumulated friction keeps the direction lock
    // engaged; the ball never moves again.
    for _ in 0..500 {
        host_step(&mut ball, &mut position, &strips);
        assert_eq!(ball.velocity(), Vec3::ZERO);
        assert_eq!(position, parked_position);
    }
}

#[test]
fn frictionless_lane_lets_the_ball_coast() {
    let mut ball = Ball::new(&BallConfig::default());
    let mut position = vec3(0.0, 0.0, 0.0);

    for _ in 0..100 {
        ball.tick(&mut position);
    }

    // Gravity never touches X, so the ball covers 0.3 per tick forever.
    assert!((position.x - 30.0).abs() < 1e-3);
    assert_eq!(ball.velocity().x, 0.3);
}

#[test]
fn heavier_ball_decelerates_more_slowly_on_contact() {
    let light = BallConfig::default();
    let heavy = BallConfig {
        mass: 4.0,
        ..Default::default()
    };

    let mut light_ball = Ball::new(&light);
    let mut heavy_ball = Ball::new(&heavy);

    light_ball.on_surface_contact(Surface::Concrete);
    heavy_ball.on_surface_contact(Surface::Concrete);

    assert!(light_ball.acceleration().x < heavy_ball.acceleration().x);
    assert!((heavy_ball.acceleration().x - (-0.15 / 4.0)).abs() < 1e-6);
}
