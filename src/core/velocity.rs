use super::config::CarConfig;
use super::constants::DIST_EPSILON;
use super::geometry::{distance, normalize_angle};
use super::motion::MotionState;
use super::pointer::PointerSnapshot;
use super::steering::{bank, clamp_dt, throttle, MotionModel, StepOutcome};
use glam::Vec2;

// Reference frame rate the per-frame factors were tuned at.
const TUNED_FPS: f32 = 60.0;

/// Older follower: velocity is pulled straight at the pointer and bled off
/// by friction, and the body rotates after the velocity vector.
#[derive(Clone, Copy, Debug, Default)]
pub struct VelocityModel {
    velocity: Vec2,
}

impl VelocityModel {
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }
}

impl MotionModel for VelocityModel {
    fn name(&self) -> &'static str {
        "velocity"
    }

    fn step(
        &mut self,
        cfg: &CarConfig,
        state: &mut MotionState,
        pointer: PointerSnapshot,
        dt: f32,
    ) -> StepOutcome {
        let Some(dt) = clamp_dt(dt) else {
            return StepOutcome::default();
        };
        let vc = &cfg.velocity;

        let offset = pointer.position - state.position;
        let dist = distance(state.position, pointer.position);

        self.velocity += offset * vc.follow_gain * dt;
        self.velocity *= vc.friction.clamp(0.0, 1.0).powf(dt * TUNED_FPS);
        let speed = self.velocity.length();
        if speed > cfg.max_speed && speed > 0.0 {
            self.velocity *= cfg.max_speed / speed;
        }

        state.speed = self.velocity.length();
        state.clamp_speed(cfg.min_speed, cfg.max_speed);
        if state.speed == 0.0 {
            self.velocity = Vec2::ZERO;
        }
        state.integrate(self.velocity * dt);

        // Rotation chases the direction of travel, not the pointer.
        let heading_error = if state.speed > 0.0 {
            normalize_angle(self.velocity.y.atan2(self.velocity.x) - state.heading)
        } else {
            0.0
        };
        let lerp = 1.0 - (1.0 - vc.rotation_lerp.clamp(0.0, 1.0)).powf(dt * TUNED_FPS);
        let turn = heading_error * lerp;
        state.set_heading(state.heading + turn);

        // Turning half a revolution in one step counts as full lock.
        let max_turn = std::f32::consts::PI * lerp / dt;
        bank(cfg, state, turn, max_turn, dt);

        let pointer_error = if dist > DIST_EPSILON {
            normalize_angle(offset.y.atan2(offset.x) - state.heading)
        } else {
            0.0
        };

        StepOutcome {
            dt,
            distance: dist,
            heading_error,
            max_turn_rate: max_turn,
            turn,
            throttle: throttle(cfg, dist, pointer_error),
        }
    }
}
