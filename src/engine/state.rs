//! Shared motion state and the values published to collaborators.
//!
//! These types are pure data and compile on any target; the wasm shell and
//! the host-side tests both consume them directly.

use crate::engine::constants::{RETURN_EASE_SEC, SCALE_MAX, SCALE_MIN};
use glam::{Vec2, Vec3};

/// Which control source currently owns the orientation. Exactly one is
/// active at a time; entering a new mode cancels the previous owner's work.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ControlMode {
    /// Free pendulum physics advanced by the integrator.
    Swinging,
    /// Orientation follows the pointer; the integrator is suspended.
    Dragging,
    /// Orientation follows the device-tilt sensor; physics is bypassed.
    Tilting,
    /// Terminal resting state; no frame callbacks are scheduled.
    #[default]
    Settled,
}

/// The mutable record every component reads and (when authorized) writes.
///
/// `velocity` is a conjugate pair: `velocity.x` advances `rotation.y` and
/// `velocity.y` advances `rotation.x`. The cross-pairing is intentional and
/// produces the figure-eight swing.
#[derive(Clone, Debug, Default)]
pub struct MotionState {
    /// Primary orientation in radians. x tilts forward/back (negative is
    /// toward the viewer), y tilts left/right, z stays 0.
    pub rotation: Vec3,
    /// Conjugate angular velocity in rad/s.
    pub velocity: Vec2,
    /// Cosmetic damped-spring offset layered on top of `rotation`.
    pub wobble: Vec3,
    pub wobble_velocity: Vec3,
}

impl MotionState {
    /// Scalar motion heuristic used to decide when a swing has died out.
    pub fn energy(&self) -> f32 {
        self.velocity.x.abs()
            + self.velocity.y.abs()
            + 0.1 * self.rotation.x.abs()
            + 0.1 * self.rotation.y.abs()
            + self.wobble_velocity.x.abs()
            + self.wobble_velocity.y.abs()
    }

    /// The primary rotation as the (x, y) pair the integrator works on.
    pub fn primary(&self) -> Vec2 {
        Vec2::new(self.rotation.x, self.rotation.y)
    }
}

/// Per-tick output consumed by the rendering collaborator.
///
/// `orientation` combines primary rotation and wobble; `scale` is derived
/// from primary rotation only. When `animating` is false the pose is the
/// neutral rest pose and `ease_sec` carries the suggested spring-back
/// duration for the renderer's own smoothing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualPose {
    pub orientation: Vec3,
    pub scale: f32,
    pub animating: bool,
    pub ease_sec: f32,
}

impl Default for VisualPose {
    fn default() -> Self {
        Self {
            orientation: Vec3::ZERO,
            scale: (SCALE_MIN + SCALE_MAX) * 0.5,
            animating: false,
            ease_sec: RETURN_EASE_SEC,
        }
    }
}
