use super::constants::RESIZE_MARGIN;
use super::geometry::normalize_angle;
use glam::Vec2;

/// Kinematic state of the car between frames.
#[derive(Clone, Debug, PartialEq)]
pub struct MotionState {
    pub position: Vec2,
    pub heading: f32, // radians, (-π, π]
    pub speed: f32,   // px/s, [0, max_speed]
    pub tilt: f32,    // degrees, smoothed bank
    pub prev_position: Vec2,
}

impl MotionState {
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            heading: 0.0,
            speed: 0.0,
            tilt: 0.0,
            prev_position: position,
        }
    }

    /// Start in the middle of a viewport, facing right.
    pub fn centered(viewport: Vec2) -> Self {
        Self::new(viewport * 0.5)
    }

    pub fn set_heading(&mut self, heading: f32) {
        self.heading = normalize_angle(heading);
    }

    /// Clamp speed into [0, max_speed], snapping to 0 below `min_speed`.
    pub fn clamp_speed(&mut self, min_speed: f32, max_speed: f32) {
        let s = if self.speed.is_finite() {
            self.speed.clamp(0.0, max_speed.max(0.0))
        } else {
            0.0
        };
        self.speed = if s < min_speed { 0.0 } else { s };
    }

    /// Advance position by `displacement`, remembering where we came from.
    pub fn integrate(&mut self, displacement: Vec2) {
        self.prev_position = self.position;
        self.position += displacement;
    }

    /// Displacement over the last step divided by `dt`.
    pub fn velocity(&self, dt: f32) -> Vec2 {
        if dt <= 0.0 {
            return Vec2::ZERO;
        }
        (self.position - self.prev_position) / dt
    }

    /// Pull the car back inside `viewport` shrunk by `RESIZE_MARGIN` on every
    /// edge. Returns true when the position changed.
    pub fn clamp_into(&mut self, viewport: Vec2) -> bool {
        let before = self.position;
        self.position.x = clamp_axis(self.position.x, viewport.x, RESIZE_MARGIN);
        self.position.y = clamp_axis(self.position.y, viewport.y, RESIZE_MARGIN);
        let moved = before != self.position;
        if moved {
            log::debug!(
                "[resize] car clamped ({:.0},{:.0}) -> ({:.0},{:.0})",
                before.x,
                before.y,
                self.position.x,
                self.position.y
            );
            self.prev_position = self.position;
        }
        moved
    }
}

fn clamp_axis(v: f32, extent: f32, margin: f32) -> f32 {
    if extent <= margin * 2.0 {
        return (extent * 0.5).max(0.0);
    }
    v.clamp(margin, extent - margin)
}
