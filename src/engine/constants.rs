// Motion tuning constants shared by the integrator, filters, and input
// mapping. Fixed for the engine's lifetime; no runtime mutation.

// Pendulum model
pub const GRAVITY: f32 = 9.8;
pub const PENDULUM_LENGTH: f32 = 2.0;
pub const AIR_DRAG: f32 = 0.12; // quadratic, acts on v*|v|
pub const FRICTION: f32 = 0.35; // linear pivot friction
pub const AXIS_COUPLING: f32 = 0.15; // sin(x)*sin(y) cross feed
pub const CHAOS_GAIN: f32 = 0.12;
pub const CHAOS_THRESHOLD: f32 = 1.0; // radians of combined deflection
pub const MAX_ANGLE: f32 = std::f32::consts::PI / 2.5;
pub const MAX_STEP_SEC: f32 = 0.033; // frame-time spike guard
pub const STOP_THRESHOLD: f32 = 0.002; // settle below this energy

// Secondary wobble spring (per-tick filter)
pub const WOBBLE_SPRING: f32 = 0.1;
pub const WOBBLE_DAMPING: f32 = 0.95;
pub const WOBBLE_DRIVE: f32 = 0.05; // forcing from primary angle advance
pub const WOBBLE_TWIST: f32 = 0.5; // z forcing from the x/y drive difference

// Perspective scale cue
pub const SCALE_BASE: f32 = 1.5;
pub const SCALE_SPAN: f32 = 0.4;
pub const SCALE_MIN: f32 = 1.0;
pub const SCALE_MAX: f32 = 2.0;
pub const SCALE_SIDE_LEAN: f32 = 0.25; // how much |rotY| feeds the cue

// Drag mapping
pub const DRAG_SENSITIVITY: f32 = 0.008; // radians per css pixel
pub const DRAG_MAX_ANGLE: f32 = std::f32::consts::FRAC_PI_3;
pub const DRAG_RESISTANCE: f32 = 0.85; // the pendant feels heavy
pub const MOMENTUM_TRANSFER: f32 = 0.7; // inelastic hand-off on release
pub const MIN_DRAG_DT: f32 = 0.004; // seconds; guards the velocity derivative
pub const RELEASE_SPEED_MAX: f32 = 6.0; // rad/s per axis
pub const CLICK_IMPULSE: f32 = 2.0; // rad/s backward push

// Return-to-rest profiles, published as ease durations for the renderer
pub const RETURN_EASE_SEC: f32 = 0.8;
pub const TILT_RETURN_EASE_SEC: f32 = 1.6; // gentler after sensor mode

// Device tilt fusion
pub const TILT_SMOOTH_SAMPLES: usize = 5;
pub const UPRIGHT_BETA_DEG: f32 = 90.0; // device held upright
pub const UPRIGHT_BLEND_BAND_DEG: f32 = 20.0;
pub const UPRIGHT_BLEND_KEEP: f32 = 0.7; // previous-output weight inside the band
pub const UPRIGHT_RANGE_CUT: f32 = 0.5; // forward range reduction at upright
pub const UPRIGHT_FORWARD_BIAS: f32 = 0.05; // radians
pub const TILT_INPUT_RANGE_DEG: f32 = 120.0;
pub const TILT_OUTPUT_RANGE_RAD: f32 = 1.2;
pub const GAMMA_FADE_BAND_DEG: f32 = 15.0; // beta dead-zone that mutes gamma
pub const GAMMA_DEAD_ZONE_DEG: f32 = 3.0; // subtracted from |gamma|
pub const GAMMA_GAIN_MIN: f32 = 0.8; // near upright
pub const GAMMA_GAIN_MAX: f32 = 1.5; // at full tilt
pub const TILT_RATE_CLAMP: f32 = 8.0; // rad/s bound on the derived tilt rate
