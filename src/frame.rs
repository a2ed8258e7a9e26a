//! Frame scheduling. One requestAnimationFrame callback may be outstanding
//! at a time; every mode entry restarts the loop through `Scheduler`, which
//! cancels the previous schedule first. A generation counter makes a
//! cancelled tick inert even if the browser already dequeued it.

use crate::engine::{MotionEngine, StepOutcome, VisualPose};
use crate::sink::PoseSink;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub engine: Rc<RefCell<MotionEngine>>,
    pub sink: PoseSink,
    pub last_instant: Instant,
}

impl FrameContext {
    /// Advance the engine by the elapsed wall time. Publishing is the
    /// caller's job; no borrows may be held across the dispatch.
    pub fn frame(&mut self) -> (StepOutcome, VisualPose) {
        let now = Instant::now();
        let dt = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        let mut engine = self.engine.borrow_mut();
        let outcome = engine.step(dt);
        (outcome, engine.pose())
    }
}

struct SchedulerInner {
    ctx: RefCell<FrameContext>,
    raf_id: Cell<Option<i32>>,
    generation: Cell<u64>,
}

/// Cancellable owner of the frame loop. Cloning shares the same schedule.
#[derive(Clone)]
pub struct Scheduler {
    inner: Rc<SchedulerInner>,
}

impl Scheduler {
    pub fn new(ctx: FrameContext) -> Self {
        Self {
            inner: Rc::new(SchedulerInner {
                ctx: RefCell::new(ctx),
                raf_id: Cell::new(None),
                generation: Cell::new(0),
            }),
        }
    }

    /// Cancel whatever is scheduled and start a fresh loop from "now" (the
    /// dt baseline resets so a long idle gap is not integrated).
    pub fn restart(&self) {
        self.cancel();
        self.inner.ctx.borrow_mut().last_instant = Instant::now();
        self.spawn_loop();
    }

    /// Idempotent: bumps the generation so an already-dequeued tick closure
    /// returns without running its body, and drops the queued callback.
    pub fn cancel(&self) {
        self.inner.generation.set(self.inner.generation.get() + 1);
        if let Some(id) = self.inner.raf_id.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
    }

    fn spawn_loop(&self) {
        let generation = self.inner.generation.get();
        let inner = self.inner.clone();

        // the closure keeps itself alive through the Rc cycle; a stale
        // generation makes an orphaned one inert
        let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let tick_clone = tick.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if inner.generation.get() != generation {
                return;
            }
            inner.raf_id.set(None);
            let (outcome, pose) = inner.ctx.borrow_mut().frame();
            // both borrows end before the dispatch; a pose listener may
            // synchronously issue a command that restarts this scheduler
            let sink = inner.ctx.borrow().sink.clone();
            sink.publish(&pose);
            match outcome {
                StepOutcome::Continue => {
                    // a listener may have restarted the loop during publish
                    if inner.generation.get() != generation {
                        return;
                    }
                    if let Some(w) = web::window() {
                        if let Ok(id) = w.request_animation_frame(
                            tick_clone.borrow().as_ref().unwrap().as_ref().unchecked_ref(),
                        ) {
                            inner.raf_id.set(Some(id));
                        }
                    }
                }
                StepOutcome::Settled => {
                    log::info!("[frame] motion settled");
                }
            }
        }) as Box<dyn FnMut()>));

        if let Some(w) = web::window() {
            if let Ok(id) = w
                .request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref())
            {
                self.inner.raf_id.set(Some(id));
            }
        }
    }
}
