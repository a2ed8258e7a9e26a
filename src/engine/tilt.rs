//! Device-tilt fusion: raw (beta, gamma) degrees in, smoothed rotation
//! target out. Mean smoothing handles ordinary jitter; the upright band
//! needs an extra previous-output blend because the sensor is noisiest
//! exactly at the resting pose.

use crate::engine::constants::{
    GAMMA_DEAD_ZONE_DEG, GAMMA_FADE_BAND_DEG, GAMMA_GAIN_MAX, GAMMA_GAIN_MIN,
    TILT_INPUT_RANGE_DEG, TILT_OUTPUT_RANGE_RAD, TILT_SMOOTH_SAMPLES, UPRIGHT_BETA_DEG,
    UPRIGHT_BLEND_BAND_DEG, UPRIGHT_BLEND_KEEP, UPRIGHT_FORWARD_BIAS, UPRIGHT_RANGE_CUT,
};
use glam::Vec2;
use smallvec::SmallVec;
use thiserror::Error;

/// Why sensor mode could not be entered. Surfaced to the permission
/// collaborator; never fatal to the engine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SensorError {
    #[error("device orientation is not supported here")]
    Unsupported,
    #[error("device orientation permission was denied")]
    Denied,
}

/// Rolling smoothing state for one sensor-mode activation.
#[derive(Clone, Debug, Default)]
pub struct TiltFilter {
    beta: SmallVec<[f32; TILT_SMOOTH_SAMPLES]>,
    gamma: SmallVec<[f32; TILT_SMOOTH_SAMPLES]>,
    blended: Option<Vec2>,
}

impl TiltFilter {
    /// Fold in one raw sample and return the smoothed (beta, gamma) in
    /// degrees. Non-finite axes read as zero rather than poisoning the
    /// buffer.
    pub fn push(&mut self, beta_deg: f32, gamma_deg: f32) -> Vec2 {
        push_sample(&mut self.beta, if beta_deg.is_finite() { beta_deg } else { 0.0 });
        push_sample(&mut self.gamma, if gamma_deg.is_finite() { gamma_deg } else { 0.0 });
        let averaged = Vec2::new(mean(&self.beta), mean(&self.gamma));

        // near upright, lean on the previous output to kill the twitch the
        // mean alone cannot suppress
        let smoothed = match self.blended {
            Some(prev) if (averaged.x - UPRIGHT_BETA_DEG).abs() < UPRIGHT_BLEND_BAND_DEG => {
                prev * UPRIGHT_BLEND_KEEP + averaged * (1.0 - UPRIGHT_BLEND_KEEP)
            }
            _ => averaged,
        };
        self.blended = Some(smoothed);
        smoothed
    }
}

fn push_sample(buf: &mut SmallVec<[f32; TILT_SMOOTH_SAMPLES]>, value: f32) {
    if buf.len() == TILT_SMOOTH_SAMPLES {
        buf.remove(0);
    }
    buf.push(value);
}

fn mean(buf: &[f32]) -> f32 {
    if buf.is_empty() {
        return 0.0;
    }
    buf.iter().sum::<f32>() / buf.len() as f32
}

/// Map smoothed (beta, gamma) degrees to a rotation target in radians.
///
/// Beta is re-centered on the upright reference and scaled so extremes need
/// large physical tilts. Approaching upright, the forward range shrinks, a
/// small constant forward bias takes over, and gamma fades to zero inside
/// its dead-zone band so the pendant does not glitch at vertical. The
/// caller still applies the final max-angle clamp.
pub fn tilt_rotation(beta_deg: f32, gamma_deg: f32) -> Vec2 {
    let centered = beta_deg - UPRIGHT_BETA_DEG;
    let forward_full = (centered * (TILT_OUTPUT_RANGE_RAD / TILT_INPUT_RANGE_DEG))
        .clamp(-TILT_OUTPUT_RANGE_RAD, TILT_OUTPUT_RANGE_RAD);
    // 1 at perfectly upright, 0 at the edge of the blend band
    let upright = 1.0 - (centered.abs() / UPRIGHT_BLEND_BAND_DEG).min(1.0);
    let rot_x = forward_full * (1.0 - UPRIGHT_RANGE_CUT * upright) - UPRIGHT_FORWARD_BIAS * upright;

    let gamma = gamma_deg.clamp(-90.0, 90.0);
    let magnitude = (gamma.abs() - GAMMA_DEAD_ZONE_DEG).max(0.0);
    let gain = GAMMA_GAIN_MIN + (GAMMA_GAIN_MAX - GAMMA_GAIN_MIN) * (magnitude / 90.0).min(1.0);
    let fade = (centered.abs() / GAMMA_FADE_BAND_DEG).min(1.0);
    let rot_y = magnitude.to_radians().copysign(gamma) * gain * fade;

    Vec2::new(rot_x, rot_y)
}
