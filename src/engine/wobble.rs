//! Secondary motion: a per-tick damped spring that lags behind the primary
//! swing, standing in for chain-link slack without a real multi-body model.

use crate::engine::constants::{WOBBLE_DAMPING, WOBBLE_DRIVE, WOBBLE_SPRING, WOBBLE_TWIST};
use crate::engine::state::MotionState;

/// One filter tick. Runs every frame in every scheduled mode.
///
/// The forcing is proportional to the primary angle advanced this tick
/// (velocity * dt), in the same conjugate pairing the integrator uses, so
/// the overlay stays a small fraction of the primary motion. With no
/// forcing the spring decays to zero.
pub fn step(state: &mut MotionState, dt: f32) {
    let drive = state.velocity * (WOBBLE_DRIVE * dt);
    state.wobble_velocity.x += drive.y;
    state.wobble_velocity.y += drive.x;
    state.wobble_velocity.z += (drive.x - drive.y) * WOBBLE_TWIST;

    let pull = state.wobble * WOBBLE_SPRING;
    state.wobble_velocity = (state.wobble_velocity - pull) * WOBBLE_DAMPING;
    state.wobble += state.wobble_velocity;
}
