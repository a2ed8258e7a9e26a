//! Perspective scale cue: swinging toward the viewer reads as larger
//! without moving the camera or the object's true depth.

use crate::engine::constants::{SCALE_BASE, SCALE_MAX, SCALE_MIN, SCALE_SIDE_LEAN, SCALE_SPAN};

/// Map primary rotation to a uniform scale factor in `[SCALE_MIN, SCALE_MAX]`.
#[inline]
pub fn scale_for(rot_x: f32, rot_y: f32) -> f32 {
    let forward = -rot_x + rot_y.abs() * SCALE_SIDE_LEAN;
    (SCALE_BASE + forward.sin() * SCALE_SPAN).clamp(SCALE_MIN, SCALE_MAX)
}
