//! Sensor command wiring. The permission collaborator drives this with
//! custom events; the handshake itself (iOS requestPermission gate) is an
//! async operation that resolves to granted or a typed error, and only a
//! grant touches the engine.

use crate::constants::{STOP_EVENT, TILT_DISABLE_EVENT, TILT_ENABLE_EVENT};
use crate::dom;
use crate::engine::{ControlMode, MotionEngine, SensorError};
use crate::frame::Scheduler;
use crate::sink::PoseSink;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

type SampleClosure = Closure<dyn FnMut(web::DeviceOrientationEvent)>;

#[derive(Clone)]
pub struct TiltWiring {
    pub engine: Rc<RefCell<MotionEngine>>,
    pub scheduler: Scheduler,
    pub sink: PoseSink,
}

pub fn wire_tilt_commands(document: &web::Document, w: TiltWiring) {
    // the deviceorientation closure is kept (not forgotten) so disable can
    // actually remove the listener
    let sample_slot: Rc<RefCell<Option<SampleClosure>>> = Rc::new(RefCell::new(None));

    {
        let w = w.clone();
        let sample_slot = sample_slot.clone();
        dom::listen(document.as_ref(), TILT_ENABLE_EVENT, move || {
            let w = w.clone();
            let sample_slot = sample_slot.clone();
            spawn_local(async move {
                match request_permission().await {
                    Ok(()) => {
                        attach_sample_listener(&w, &sample_slot);
                        w.engine.borrow_mut().enable_tilt();
                        w.scheduler.restart();
                        log::info!("[tilt] enabled");
                    }
                    Err(e) => {
                        log::warn!("[tilt] unavailable: {e}");
                        w.sink.publish_tilt_error(&e.to_string());
                    }
                }
            });
        });
    }

    {
        let w = w.clone();
        let sample_slot = sample_slot.clone();
        dom::listen(document.as_ref(), TILT_DISABLE_EVENT, move || {
            detach_sample_listener(&sample_slot);
            w.engine.borrow_mut().disable_tilt();
            w.scheduler.restart();
            log::info!("[tilt] disabled");
        });
    }

    {
        let w = w;
        dom::listen(document.as_ref(), STOP_EVENT, move || {
            w.engine.borrow_mut().stop();
            w.scheduler.restart();
            log::info!("[input] stop");
        });
    }
}

fn attach_sample_listener(w: &TiltWiring, slot: &Rc<RefCell<Option<SampleClosure>>>) {
    if slot.borrow().is_some() {
        return;
    }
    let engine = w.engine.clone();
    let sink = w.sink.clone();
    let closure: SampleClosure = Closure::wrap(Box::new(move |ev: web::DeviceOrientationEvent| {
        // missing axes read as zero rather than dropping the sample
        let beta = ev.beta().unwrap_or(0.0) as f32;
        let gamma = ev.gamma().unwrap_or(0.0) as f32;
        // direct sensor writes publish immediately instead of waiting for
        // the next frame tick; the borrow ends before the dispatch
        let pose = {
            let mut engine = engine.borrow_mut();
            engine.tilt_sample(beta, gamma);
            (engine.mode() == ControlMode::Tilting).then(|| engine.pose())
        };
        if let Some(pose) = pose {
            sink.publish(&pose);
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("deviceorientation", closure.as_ref().unchecked_ref());
    }
    *slot.borrow_mut() = Some(closure);
}

fn detach_sample_listener(slot: &Rc<RefCell<Option<SampleClosure>>>) {
    if let Some(closure) = slot.borrow_mut().take() {
        if let Some(window) = web::window() {
            _ = window.remove_event_listener_with_callback(
                "deviceorientation",
                closure.as_ref().unchecked_ref(),
            );
        }
    }
}

/// Resolve the platform's permission gate. Platforms without an explicit
/// gate (no `requestPermission` on the constructor) count as granted.
async fn request_permission() -> Result<(), SensorError> {
    let window = web::window().ok_or(SensorError::Unsupported)?;
    let ctor = js_sys::Reflect::get(
        window.as_ref(),
        &JsValue::from_str("DeviceOrientationEvent"),
    )
    .map_err(|_| SensorError::Unsupported)?;
    if ctor.is_undefined() || ctor.is_null() {
        return Err(SensorError::Unsupported);
    }

    let request = js_sys::Reflect::get(&ctor, &JsValue::from_str("requestPermission"))
        .unwrap_or(JsValue::UNDEFINED);
    if !request.is_function() {
        return Ok(());
    }

    let promise = js_sys::Function::from(request)
        .call0(&ctor)
        .map_err(|_| SensorError::Denied)?
        .dyn_into::<js_sys::Promise>()
        .map_err(|_| SensorError::Denied)?;
    let verdict = JsFuture::from(promise)
        .await
        .map_err(|_| SensorError::Denied)?;
    match verdict.as_string().as_deref() {
        Some("granted") => Ok(()),
        _ => Err(SensorError::Denied),
    }
}
