use crate::constants::{CLICK_SLOP_PX, DRAGGING_CLASS};
use crate::engine::MotionEngine;
use crate::frame::Scheduler;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Shell-side gesture bookkeeping: where the press started and whether the
/// pointer has left the click slop.
#[derive(Default)]
pub struct PointerTracker {
    pub down: bool,
    pub moved: bool,
    pub origin: Vec2,
}

#[derive(Clone)]
pub struct InputWiring {
    pub stage: web::Element,
    pub engine: Rc<RefCell<MotionEngine>>,
    pub scheduler: Scheduler,
    pub tracker: Rc<RefCell<PointerTracker>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointerup(&w);
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let stage_for_listener = w.stage.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        {
            let mut tracker = w.tracker.borrow_mut();
            tracker.down = true;
            tracker.moved = false;
            tracker.origin = pos;
        }
        w.engine
            .borrow_mut()
            .pointer_press(pos.x, pos.y, ev.time_stamp() / 1000.0);
        w.scheduler.restart();
        _ = w.stage.class_list().add_1(DRAGGING_CLASS);
        _ = w.stage.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
        log::debug!("[input] press at ({:.0},{:.0})", pos.x, pos.y);
    }) as Box<dyn FnMut(_)>);
    _ = stage_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let offset = {
            let mut tracker = w.tracker.borrow_mut();
            if !tracker.down {
                return;
            }
            let pos = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
            let offset = pos - tracker.origin;
            // stay a click until the pointer leaves the slop radius
            if !tracker.moved && offset.length_squared() < CLICK_SLOP_PX * CLICK_SLOP_PX {
                return;
            }
            tracker.moved = true;
            offset
        };
        w.engine
            .borrow_mut()
            .pointer_move(offset, ev.time_stamp() / 1000.0);
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointerup(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let moved = {
            let mut tracker = w.tracker.borrow_mut();
            if !tracker.down {
                return;
            }
            tracker.down = false;
            let moved = tracker.moved;
            tracker.moved = false;
            moved
        };
        _ = w.stage.class_list().remove_1(DRAGGING_CLASS);

        let t = ev.time_stamp() / 1000.0;
        if moved {
            w.engine.borrow_mut().pointer_release(None, t);
            log::info!("[input] release");
        } else {
            w.engine.borrow_mut().click();
            log::info!("[input] click");
        }
        w.scheduler.restart();
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
