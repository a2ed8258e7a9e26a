//! Publishing boundary: the engine's pose crosses to collaborators as a
//! `CustomEvent` on the stage element. The renderer, debug overlay, and
//! permission UI all subscribe there; nothing in this crate draws.

use crate::constants::{POSE_EVENT, TILT_ERROR_EVENT};
use crate::engine::VisualPose;
use wasm_bindgen::JsValue;
use web_sys as web;

#[derive(Clone)]
pub struct PoseSink {
    target: web::EventTarget,
}

impl PoseSink {
    pub fn new(target: web::EventTarget) -> Self {
        Self { target }
    }

    /// Publish one pose as `pendant:pose` with a plain-object detail:
    /// `{x, y, z, scale, animating, ease}`.
    pub fn publish(&self, pose: &VisualPose) {
        let detail = js_sys::Object::new();
        set_f32(&detail, "x", pose.orientation.x);
        set_f32(&detail, "y", pose.orientation.y);
        set_f32(&detail, "z", pose.orientation.z);
        set_f32(&detail, "scale", pose.scale);
        _ = js_sys::Reflect::set(
            &detail,
            &JsValue::from_str("animating"),
            &JsValue::from_bool(pose.animating),
        );
        set_f32(&detail, "ease", pose.ease_sec);
        self.dispatch(POSE_EVENT, &detail);
    }

    /// Surface a failed sensor handshake as `pendant:tilt-error`.
    pub fn publish_tilt_error(&self, message: &str) {
        let detail = js_sys::Object::new();
        _ = js_sys::Reflect::set(
            &detail,
            &JsValue::from_str("message"),
            &JsValue::from_str(message),
        );
        self.dispatch(TILT_ERROR_EVENT, &detail);
    }

    fn dispatch(&self, name: &str, detail: &js_sys::Object) {
        let init = web::CustomEventInit::new();
        init.set_detail(detail);
        if let Ok(event) = web::CustomEvent::new_with_event_init_dict(name, &init) {
            _ = self.target.dispatch_event(&event);
        }
    }
}

fn set_f32(obj: &js_sys::Object, key: &str, value: f32) {
    _ = js_sys::Reflect::set(obj, &JsValue::from_str(key), &JsValue::from_f64(value as f64));
}
