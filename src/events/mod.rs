pub mod pointer;
pub mod tilt;

pub use pointer::{wire_input_handlers, InputWiring, PointerTracker};
pub use tilt::{wire_tilt_commands, TiltWiring};
