//! Pendulum integrator: acceleration model plus a 4th-order Runge-Kutta
//! step. Euler is not good enough here; at the damping and restoring-force
//! magnitudes in use it visibly diverges at large amplitude.

use crate::engine::constants::*;
use glam::Vec2;

/// Angular acceleration for the current deflection and conjugate velocity.
///
/// Pure function of its inputs. The restoring term is cross-axis (x
/// accelerates from rotY and vice versa), matching the conjugate velocity
/// pairing in `MotionState`.
pub fn angular_acceleration(rotation: Vec2, velocity: Vec2) -> Vec2 {
    let omega_sq = GRAVITY / PENDULUM_LENGTH;
    let theta = rotation.length();
    // large-angle correction, sin(theta)/theta, valid well past small angles
    let factor = if theta > 1e-6 { theta.sin() / theta } else { 1.0 };

    let mut accel = Vec2::new(
        -omega_sq * rotation.y.sin() * factor,
        -omega_sq * rotation.x.sin() * factor,
    );

    // quadratic air drag plus linear pivot friction
    accel -= velocity * velocity.abs() * AIR_DRAG;
    accel -= velocity * FRICTION;

    // weak 3-D coupling, opposite sign per axis
    let cross = rotation.x.sin() * rotation.y.sin();
    accel.x += AXIS_COUPLING * cross * velocity.x;
    accel.y -= AXIS_COUPLING * cross * velocity.y;

    // only large swings pick up the non-repeating wander
    if theta > CHAOS_THRESHOLD {
        accel.x += CHAOS_GAIN * (3.0 * rotation.y).sin() * velocity.x;
        accel.y += CHAOS_GAIN * (3.0 * rotation.x).sin() * velocity.y;
    }

    accel
}

/// Advance (rotation, velocity) by one RK4 step and clamp the result.
///
/// `dt` is capped at `MAX_STEP_SEC` so a stalled tab cannot teleport the
/// pendant. Angle advance follows the conjugate pairing: rotation.x moves
/// with velocity.y and rotation.y with velocity.x.
pub fn rk4_step(rotation: Vec2, velocity: Vec2, dt: f32) -> (Vec2, Vec2) {
    let dt = dt.clamp(0.0, MAX_STEP_SEC);
    let deriv = |r: Vec2, v: Vec2| -> (Vec2, Vec2) {
        (Vec2::new(v.y, v.x), angular_acceleration(r, v))
    };

    let (k1_r, k1_v) = deriv(rotation, velocity);
    let (k2_r, k2_v) = deriv(rotation + k1_r * (dt * 0.5), velocity + k1_v * (dt * 0.5));
    let (k3_r, k3_v) = deriv(rotation + k2_r * (dt * 0.5), velocity + k2_v * (dt * 0.5));
    let (k4_r, k4_v) = deriv(rotation + k3_r * dt, velocity + k3_v * dt);

    let sixth = dt / 6.0;
    let next_rotation = rotation + (k1_r + k2_r * 2.0 + k3_r * 2.0 + k4_r) * sixth;
    let next_velocity = velocity + (k1_v + k2_v * 2.0 + k3_v * 2.0 + k4_v) * sixth;
    (clamp_rotation(next_rotation), next_velocity)
}

/// Keep both deflection axes inside the physical stop.
pub fn clamp_rotation(rotation: Vec2) -> Vec2 {
    rotation.clamp(Vec2::splat(-MAX_ANGLE), Vec2::splat(MAX_ANGLE))
}
