#![cfg(target_arch = "wasm32")]
use crate::engine::MotionEngine;
use crate::events::{InputWiring, PointerTracker, TiltWiring};
use crate::frame::{FrameContext, Scheduler};
use crate::sink::PoseSink;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

mod constants;
mod dom;
mod engine;
mod events;
mod frame;
mod sink;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("pendant-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document =
        dom::window_document().ok_or_else(|| anyhow::anyhow!("no window or document"))?;

    let stage = dom::stage_element(&document)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::STAGE_ELEMENT_ID))?;

    let engine = Rc::new(RefCell::new(MotionEngine::new()));
    let sink = PoseSink::new(stage.clone().into());
    let scheduler = Scheduler::new(FrameContext {
        engine: engine.clone(),
        sink: sink.clone(),
        last_instant: Instant::now(),
    });

    events::wire_input_handlers(InputWiring {
        stage,
        engine: engine.clone(),
        scheduler: scheduler.clone(),
        tracker: Rc::new(RefCell::new(PointerTracker::default())),
    });
    events::wire_tilt_commands(
        &document,
        TiltWiring {
            engine: engine.clone(),
            scheduler,
            sink: sink.clone(),
        },
    );

    // collaborators get a pose before the first interaction
    let rest_pose = engine.borrow().pose();
    sink.publish(&rest_pose);
    log::info!("[init] wired, at rest");
    Ok(())
}
