//! The motion engine: pendulum physics, control-mode arbitration, secondary
//! wobble, and the perspective scale cue. Pure Rust with no platform
//! dependencies, so the host-side tests under `tests/` import this tree
//! directly.

pub mod arbiter;
pub mod constants;
pub mod gesture;
pub mod pendulum;
pub mod projector;
pub mod state;
pub mod tilt;
pub mod wobble;

pub use arbiter::{MotionEngine, StepOutcome};
pub use state::{ControlMode, MotionState, VisualPose};
pub use tilt::SensorError;
