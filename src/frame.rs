use crate::core::CursorSim;
use crate::events::InputWiring;
use crate::render::DomSink;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub sim: CursorSim,
    pub sink: DomSink,
    pub input: InputWiring,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        if let Some(viewport) = self.input.queued_resize.borrow_mut().take() {
            self.sim.resize(viewport);
        }

        // One consistent pointer read per frame.
        let pointer = {
            let mut tracker = self.input.pointer.borrow_mut();
            tracker.advance(dt_sec);
            tracker.snapshot()
        };

        self.sim.tick(pointer, dt_sec, &mut self.sink);
    }

    pub fn dispose(&mut self) {
        self.sim.dispose(&mut self.sink);
    }
}

/// Self-rescheduling requestAnimationFrame loop. Keeps going until the
/// teardown flag is raised, then disposes the sink and stops rescheduling.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let teardown = frame_ctx.borrow().input.teardown.clone();

    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if teardown.get() {
            frame_ctx.borrow_mut().dispose();
            log::info!("[frame] loop stopped");
            return;
        }
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));

    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
