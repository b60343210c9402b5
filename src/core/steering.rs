use super::config::CarConfig;
use super::constants::*;
use super::geometry::{bearing, distance, heading_vec, normalize_angle};
use super::motion::MotionState;
use super::pointer::PointerSnapshot;

/// What a single physics step decided, for the emitter and for tests.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StepOutcome {
    pub dt: f32,
    pub distance: f32,
    pub heading_error: f32,
    pub max_turn_rate: f32,
    pub turn: f32,
    pub throttle: f32,
}

/// A strategy that advances `MotionState` towards the pointer by one step.
pub trait MotionModel {
    fn name(&self) -> &'static str;

    fn step(
        &mut self,
        cfg: &CarConfig,
        state: &mut MotionState,
        pointer: PointerSnapshot,
        dt: f32,
    ) -> StepOutcome;
}

/// Clamp a raw frame delta into (0, MAX_STEP_SECS]. Returns None for steps
/// that should not advance anything (zero, negative, NaN).
#[inline]
pub fn clamp_dt(dt: f32) -> Option<f32> {
    if dt.is_finite() && dt > 0.0 {
        Some(dt.min(MAX_STEP_SECS))
    } else {
        None
    }
}

/// Exponential decay of `speed` over `dt`. Two half steps equal one full step.
#[inline]
pub fn apply_drag(speed: f32, drag: f32, dt: f32) -> f32 {
    speed * (-drag * dt).exp()
}

/// Turning authority at the given speed.
#[inline]
pub fn max_turn_rate(cfg: &CarConfig, speed: f32) -> f32 {
    cfg.base_turn_rate * (1.0 - cfg.turn_speed_reduction * cfg.speed_ratio(speed))
}

/// Forward intent in [0, 1]: saturates with distance, collapses with heading error.
#[inline]
pub fn throttle(cfg: &CarConfig, dist: f32, heading_error: f32) -> f32 {
    let alignment = 1.0 - (heading_error.abs() / std::f32::consts::PI).clamp(0.0, 1.0);
    let distance_factor = if cfg.accel_distance > 0.0 {
        (dist / cfg.accel_distance).clamp(0.0, 1.0)
    } else {
        1.0
    };
    distance_factor * alignment.powf(ALIGNMENT_EXPONENT)
}

/// Ease `state.tilt` toward the bank implied by this step's turn.
pub fn bank(cfg: &CarConfig, state: &mut MotionState, turn: f32, max_turn: f32, dt: f32) {
    let lock = if max_turn > TURN_RATE_EPSILON {
        turn / max_turn
    } else {
        0.0
    };
    let speed_scale = if cfg.max_speed > 0.0 {
        (state.speed / cfg.max_speed).clamp(TILT_SPEED_RATIO_MIN, 1.0)
    } else {
        TILT_SPEED_RATIO_MIN
    };
    let target = -lock * cfg.tilt_factor * speed_scale;
    let alpha = 1.0 - (-TILT_SMOOTHING_RATE * dt).exp();
    state.tilt += (target - state.tilt) * alpha;
}

/// Heading-and-forward-speed follower: the car steers towards the pointer
/// with limited turn rate and only drives along its own heading.
#[derive(Clone, Copy, Debug, Default)]
pub struct SteeringModel;

impl MotionModel for SteeringModel {
    fn name(&self) -> &'static str {
        "steering"
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

        let dist = distance(state.position, pointer.position);
        let heading_error = if dist > DIST_EPSILON {
            normalize_angle(bearing(state.position, pointer.position) - state.heading)
        } else {
            0.0
        };

        let max_turn = max_turn_rate(cfg, state.speed).max(0.0);
        let turn_limit = max_turn * dt;
        let turn = heading_error.clamp(-turn_limit, turn_limit);
        state.set_heading(state.heading + turn);

        let throttle = throttle(cfg, dist, heading_error);
        if dist < cfg.stop_distance {
            state.speed -= cfg.braking * dt;
        } else {
            state.speed += cfg.acceleration * throttle * dt;
        }
        state.speed = apply_drag(state.speed, cfg.drag, dt);
        state.clamp_speed(cfg.min_speed, cfg.max_speed);

        state.integrate(heading_vec(state.heading) * state.speed * dt);
        bank(cfg, state, turn, max_turn, dt);

        StepOutcome {
            dt,
            distance: dist,
            heading_error,
            max_turn_rate: max_turn,
            turn,
            throttle,
        }
    }
}
