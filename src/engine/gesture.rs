//! Gesture mapper: cumulative pointer offsets become a rotation target, and
//! the drag's discrete derivative becomes momentum to hand back to the
//! pendulum on release.

use crate::engine::constants::{
    DRAG_MAX_ANGLE, DRAG_RESISTANCE, DRAG_SENSITIVITY, MIN_DRAG_DT, MOMENTUM_TRANSFER,
    RELEASE_SPEED_MAX,
};
use glam::Vec2;

/// Convert a planar pointer offset (css px, +y down) into a resisted
/// rotation target.
///
/// The offset goes to polar form; the radius is scaled by sensitivity and
/// clamped to the max drag angle, then the angle maps onto the two tilt
/// axes. Dragging down pulls the pendant toward the viewer (negative x).
pub fn drag_rotation(offset: Vec2) -> Vec2 {
    let radius = (offset.length() * DRAG_SENSITIVITY).min(DRAG_MAX_ANGLE);
    let angle = offset.y.atan2(offset.x);
    Vec2::new(
        -radius * angle.sin() * DRAG_RESISTANCE,
        radius * angle.cos() * DRAG_RESISTANCE,
    )
}

/// Transient per-gesture state: created on press, dropped on release.
#[derive(Clone, Debug)]
pub struct DragSample {
    /// Last resisted rotation target (x, y).
    pub rotation: Vec2,
    /// Drag velocity in the conjugate pairing (x tracks rotation.y).
    pub velocity: Vec2,
    last_time: f64,
}

impl DragSample {
    pub fn begin(offset: Vec2, t: f64) -> Self {
        Self {
            rotation: drag_rotation(offset),
            velocity: Vec2::ZERO,
            last_time: t,
        }
    }

    /// Fold in the next pointer sample; returns the new rotation target.
    ///
    /// The instantaneous velocity is the discrete derivative of the
    /// resisted rotation, with a minimum dt so coincident timestamps
    /// cannot blow it up.
    pub fn advance(&mut self, offset: Vec2, t: f64) -> Vec2 {
        let target = drag_rotation(offset);
        let dt = ((t - self.last_time) as f32).max(MIN_DRAG_DT);
        self.velocity = Vec2::new(
            (target.y - self.rotation.y) / dt,
            (target.x - self.rotation.x) / dt,
        );
        self.rotation = target;
        self.last_time = t;
        target
    }

    /// Velocity handed to the pendulum on release: momentum transfer is
    /// lossy, and a flick is bounded per axis so it cannot inject
    /// unbounded energy through the minimum-dt derivative.
    pub fn release_velocity(&self) -> Vec2 {
        clamp_release(self.velocity * MOMENTUM_TRANSFER)
    }
}

/// Bound a transferred velocity per axis.
pub fn clamp_release(velocity: Vec2) -> Vec2 {
    velocity.clamp(Vec2::splat(-RELEASE_SPEED_MAX), Vec2::splat(RELEASE_SPEED_MAX))
}
