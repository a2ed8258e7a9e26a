//! Mode arbiter: owns the motion state, decides which control source may
//! write it, applies discrete input events, and runs the per-tick update.
//! The wasm shell drives `step` once per display frame and stops scheduling
//! when it reports `Settled`.

use crate::engine::constants::{
    CLICK_IMPULSE, MAX_STEP_SEC, MOMENTUM_TRANSFER, RETURN_EASE_SEC, STOP_THRESHOLD,
    TILT_RATE_CLAMP, TILT_RETURN_EASE_SEC,
};
use crate::engine::gesture::{clamp_release, DragSample};
use crate::engine::state::{ControlMode, MotionState, VisualPose};
use crate::engine::tilt::{tilt_rotation, TiltFilter};
use crate::engine::{pendulum, projector, wobble};
use glam::Vec2;

/// What the scheduler should do after a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// Keep scheduling frames.
    Continue,
    /// Motion is over; publish the rest pose and stop scheduling.
    Settled,
}

pub struct MotionEngine {
    state: MotionState,
    mode: ControlMode,
    drag: Option<DragSample>,
    tilt: TiltFilter,
    tilt_enabled: bool,
    /// Set when a press interrupts a running swing, so the following click
    /// (if the gesture never becomes a drag) toggles the swing off instead
    /// of re-kicking it.
    interrupted_swing: bool,
    /// Primary rotation at the end of the previous tick; in tilt mode the
    /// wobble drive is derived from how far the sensor moved it since.
    prev_rotation: Vec2,
    return_ease: f32,
}

impl MotionEngine {
    pub fn new() -> Self {
        Self {
            state: MotionState::default(),
            mode: ControlMode::Settled,
            drag: None,
            tilt: TiltFilter::default(),
            tilt_enabled: false,
            interrupted_swing: false,
            prev_rotation: Vec2::ZERO,
            return_ease: RETURN_EASE_SEC,
        }
    }

    pub fn mode(&self) -> ControlMode {
        self.mode
    }

    pub fn is_animating(&self) -> bool {
        self.mode != ControlMode::Settled
    }

    pub fn tilt_enabled(&self) -> bool {
        self.tilt_enabled
    }

    pub fn state(&self) -> &MotionState {
        &self.state
    }

    /// The output published to collaborators. Orientation combines primary
    /// rotation and wobble; scale is a cue from primary rotation alone.
    pub fn pose(&self) -> VisualPose {
        VisualPose {
            orientation: self.state.rotation + self.state.wobble,
            scale: projector::scale_for(self.state.rotation.x, self.state.rotation.y),
            animating: self.is_animating(),
            ease_sec: if self.mode == ControlMode::Settled {
                self.return_ease
            } else {
                0.0
            },
        }
    }

    /// Pointer went down. Any running swing stops here; whether this turns
    /// into a drag or a click is decided by the events that follow.
    pub fn pointer_press(&mut self, _x: f32, _y: f32, t: f64) {
        self.interrupted_swing = self.mode == ControlMode::Swinging;
        self.state.velocity = Vec2::ZERO;
        self.drag = Some(DragSample::begin(Vec2::ZERO, t));
        self.set_mode(ControlMode::Dragging);
    }

    /// Pointer moved while down; `offset` is cumulative from the press
    /// position. Rotation follows the pointer directly, not the integrator.
    pub fn pointer_move(&mut self, offset: Vec2, t: f64) {
        if self.mode != ControlMode::Dragging {
            return;
        }
        let Some(drag) = self.drag.as_mut() else {
            return;
        };
        let target = drag.advance(offset, t);
        self.apply_primary(target);
    }

    /// Pointer released after a drag. The drag's momentum (or an externally
    /// supplied hint) carries into the swing, unless sensor mode is enabled,
    /// which takes precedence over swing physics.
    pub fn pointer_release(&mut self, velocity_hint: Option<Vec2>, _t: f64) {
        let transferred = match (velocity_hint, self.drag.take()) {
            (Some(hint), _) => clamp_release(hint * MOMENTUM_TRANSFER),
            (None, Some(drag)) => drag.release_velocity(),
            (None, None) => Vec2::ZERO,
        };
        self.interrupted_swing = false;
        if self.tilt_enabled {
            self.state.velocity = Vec2::ZERO;
            self.set_mode(ControlMode::Tilting);
            return;
        }
        self.state.velocity = transferred;
        self.set_mode(ControlMode::Swinging);
    }

    /// Press and release with no drag in between. From rest this is a
    /// backward impulse; against a running swing it is a toggle that
    /// cancels the motion instead of feeding it.
    pub fn click(&mut self) {
        self.drag = None;
        if self.tilt_enabled {
            self.interrupted_swing = false;
            self.set_mode(ControlMode::Tilting);
            return;
        }
        if self.interrupted_swing || self.mode == ControlMode::Swinging {
            self.interrupted_swing = false;
            self.settle(RETURN_EASE_SEC);
            return;
        }
        self.state.velocity = Vec2::new(0.0, CLICK_IMPULSE);
        self.set_mode(ControlMode::Swinging);
    }

    /// One raw sensor sample. Always smoothed; written to rotation only
    /// while tilt mode actually owns the orientation (samples arriving
    /// mid-drag are buffered, nothing more).
    ///
    /// This is the one rotation write that happens outside the frame tick.
    /// Safe while the engine lives on a single-threaded wasm target; a
    /// threaded port would need to route samples through the tick.
    pub fn tilt_sample(&mut self, beta_deg: f32, gamma_deg: f32) {
        if !self.tilt_enabled {
            return;
        }
        let smoothed = self.tilt.push(beta_deg, gamma_deg);
        if self.mode != ControlMode::Tilting {
            return;
        }
        let target = tilt_rotation(smoothed.x, smoothed.y);
        self.apply_primary(target);
    }

    /// Permission granted; the sensor takes over the orientation.
    pub fn enable_tilt(&mut self) {
        self.tilt_enabled = true;
        self.tilt = TiltFilter::default();
        self.drag = None;
        self.interrupted_swing = false;
        self.state.velocity = Vec2::ZERO;
        self.prev_rotation = self.state.primary();
        self.set_mode(ControlMode::Tilting);
    }

    /// Sensor mode ends with a gentler-than-default return to neutral.
    pub fn disable_tilt(&mut self) {
        self.tilt_enabled = false;
        self.settle(TILT_RETURN_EASE_SEC);
    }

    /// Explicit stop command for a running swing.
    pub fn stop(&mut self) {
        if self.mode == ControlMode::Swinging {
            self.settle(RETURN_EASE_SEC);
        }
    }

    /// One frame tick. In `Swinging` the integrator advances the state; in
    /// `Dragging`/`Tilting` rotation is already target-driven and only the
    /// effective velocity is refreshed. Wobble and the settle check run on
    /// top, and the scale is derived on publish.
    pub fn step(&mut self, dt: f32) -> StepOutcome {
        let dt = dt.clamp(0.0, MAX_STEP_SEC);

        match self.mode {
            ControlMode::Settled => return StepOutcome::Settled,
            ControlMode::Swinging => {
                let (rotation, velocity) =
                    pendulum::rk4_step(self.state.primary(), self.state.velocity, dt);
                self.apply_primary(rotation);
                self.state.velocity = velocity;
            }
            ControlMode::Dragging => {
                if let Some(drag) = &self.drag {
                    self.state.velocity = drag.velocity;
                }
            }
            ControlMode::Tilting => {
                if dt > 1e-6 {
                    let delta = self.state.primary() - self.prev_rotation;
                    let rate = Vec2::new(delta.y / dt, delta.x / dt);
                    self.state.velocity =
                        rate.clamp(Vec2::splat(-TILT_RATE_CLAMP), Vec2::splat(TILT_RATE_CLAMP));
                }
            }
        }

        self.prev_rotation = self.state.primary();
        wobble::step(&mut self.state, dt);

        if self.mode == ControlMode::Swinging && self.state.energy() < STOP_THRESHOLD {
            self.settle(RETURN_EASE_SEC);
            return StepOutcome::Settled;
        }
        StepOutcome::Continue
    }

    fn apply_primary(&mut self, rotation: Vec2) {
        let clamped = pendulum::clamp_rotation(rotation);
        self.state.rotation.x = clamped.x;
        self.state.rotation.y = clamped.y;
    }

    /// Snap the state to neutral and record the spring-back profile the
    /// renderer should use. `Settled` is terminal; nothing schedules it.
    fn settle(&mut self, ease_sec: f32) {
        self.drag = None;
        self.state = MotionState::default();
        self.prev_rotation = Vec2::ZERO;
        self.return_ease = ease_sec;
        self.set_mode(ControlMode::Settled);
    }

    fn set_mode(&mut self, mode: ControlMode) {
        self.mode = mode;
    }
}

impl Default for MotionEngine {
    fn default() -> Self {
        Self::new()
    }
}
