use super::InputWiring;
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Queue the new viewport size; the frame loop applies it before its next step.
pub fn wire_resize(w: &InputWiring) {
    let queued = w.queued_resize.clone();

    let closure = Closure::wrap(Box::new(move || {
        if let Some(window) = web::window() {
            *queued.borrow_mut() = Some(dom::viewport_size(&window));
        }
    }) as Box<dyn FnMut()>);

    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}

/// Page unload raises the teardown flag, which stops the loop, then runs
/// `on_teardown` so owned elements go away without waiting for another frame.
pub fn wire_teardown(w: &InputWiring, mut on_teardown: impl FnMut() + 'static) {
    let teardown = w.teardown.clone();

    let closure = Closure::wrap(Box::new(move || {
        if teardown.replace(true) {
            return;
        }
        on_teardown();
    }) as Box<dyn FnMut()>);

    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("beforeunload", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}
