use super::InputWiring;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Track the pointer in viewport coordinates.
pub fn wire_pointermove(w: &InputWiring) {
    let pointer = w.pointer.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        pointer
            .borrow_mut()
            .on_move(ev.client_x() as f32, ev.client_y() as f32);
    }) as Box<dyn FnMut(_)>);

    if let Some(doc) = crate::dom::window_document() {
        _ = doc.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}
