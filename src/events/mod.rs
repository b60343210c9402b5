pub mod pointer;
pub mod window;

pub use pointer::wire_pointermove;
pub use window::{wire_resize, wire_teardown};

use crate::core::PointerTracker;
use glam::Vec2;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Shared cells the DOM callbacks write into and the frame loop reads from.
#[derive(Clone)]
pub struct InputWiring {
    pub pointer: Rc<RefCell<PointerTracker>>,
    pub queued_resize: Rc<RefCell<Option<Vec2>>>,
    pub teardown: Rc<Cell<bool>>,
}

impl InputWiring {
    pub fn new(initial_pointer: Vec2) -> Self {
        Self {
            pointer: Rc::new(RefCell::new(PointerTracker::new(initial_pointer))),
            queued_resize: Rc::new(RefCell::new(None)),
            teardown: Rc::new(Cell::new(false)),
        }
    }
}

pub fn wire_input_handlers(w: &InputWiring) {
    wire_pointermove(w);
    wire_resize(w);
}
