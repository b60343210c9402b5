use super::constants::POINTER_IDLE_SECS;
use glam::Vec2;

/// Latest pointer position plus a debounced "still moving" flag.
///
/// Event handlers call `on_move`; the frame loop calls `advance` with the
/// elapsed step and reads one `snapshot` per tick.
#[derive(Clone, Copy, Debug)]
pub struct PointerTracker {
    position: Vec2,
    idle_remaining: f32,
}

/// Copy of the pointer taken once per tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSnapshot {
    pub position: Vec2,
    pub is_moving: bool,
}

impl PointerSnapshot {
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
            is_moving: false,
        }
    }
}

impl PointerTracker {
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            idle_remaining: 0.0,
        }
    }

    pub fn on_move(&mut self, x: f32, y: f32) {
        if !x.is_finite() || !y.is_finite() {
            return;
        }
        self.position = Vec2::new(x, y);
        self.idle_remaining = POINTER_IDLE_SECS;
    }

    pub fn advance(&mut self, dt: f32) {
        if dt > 0.0 {
            self.idle_remaining = (self.idle_remaining - dt).max(0.0);
        }
    }

    #[inline]
    pub fn is_moving(&self) -> bool {
        self.idle_remaining > 0.0
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn snapshot(&self) -> PointerSnapshot {
        PointerSnapshot {
            position: self.position,
            is_moving: self.is_moving(),
        }
    }
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new(Vec2::ZERO)
    }
}
