#![cfg(target_arch = "wasm32")]
use crate::core::{CarConfig, CursorSim, MotionMode};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
pub mod core;
mod dom;
mod events;
mod frame;
mod render;

/// `<body data-car-mode="velocity">` opts into the older follower.
fn motion_mode(document: &web::Document) -> MotionMode {
    let Some(raw) = document
        .body()
        .and_then(|b| b.get_attribute(constants::MODE_ATTRIBUTE))
    else {
        return MotionMode::default();
    };
    match raw.parse::<MotionMode>() {
        Ok(mode) => mode,
        Err(e) => {
            log::warn!("[car] {e}; using steering");
            MotionMode::default()
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let viewport = dom::viewport_size(&window);
    if crate::core::platform::is_mobile(&dom::user_agent(&window), viewport.x) {
        log::info!("[car] mobile or narrow viewport, cursor disabled");
        return Ok(());
    }

    let config = CarConfig::default().with_mode(motion_mode(&document));
    let seed = (js_sys::Math::random() * u32::MAX as f64) as u64;
    let sim = CursorSim::new(config, viewport, seed);
    let sink = render::DomSink::attach(&document)?;

    let input = events::InputWiring::new(sim.state().position);
    events::wire_input_handlers(&input);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        sim,
        sink,
        input: input.clone(),
        last_instant: Instant::now(),
    }));

    let ctx_teardown = frame_ctx.clone();
    events::wire_teardown(&input, move || {
        ctx_teardown.borrow_mut().dispose();
    });

    log::info!(
        "[car] cursor loaded ({} model)",
        frame_ctx.borrow().sim.model_name()
    );
    frame::start_loop(frame_ctx);
    Ok(())
}
