// Shell wiring constants: DOM ids, event names, and pointer thresholds.
// Motion tuning lives in `engine/constants.rs`.

// The element the pendant hangs from; pointer gestures and pose events are
// bound to it.
pub const STAGE_ELEMENT_ID: &str = "pendant-stage";

// Published custom events
pub const POSE_EVENT: &str = "pendant:pose";
pub const TILT_ERROR_EVENT: &str = "pendant:tilt-error";

// Command custom events consumed from collaborators
pub const TILT_ENABLE_EVENT: &str = "pendant:tilt-enable";
pub const TILT_DISABLE_EVENT: &str = "pendant:tilt-disable";
pub const STOP_EVENT: &str = "pendant:stop";

// Pointer handling
pub const CLICK_SLOP_PX: f32 = 4.0; // movement under this stays a click
pub const DRAGGING_CLASS: &str = "dragging"; // cursor affordance hook
