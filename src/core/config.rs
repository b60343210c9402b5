use std::f32::consts::PI;
use std::fmt;
use std::str::FromStr;

/// Tunables for the steering car. Built once at startup and never mutated.
#[derive(Clone, Debug)]
pub struct CarConfig {
    pub acceleration: f32,         // px/s^2 at full throttle
    pub braking: f32,              // px/s^2 inside the stop distance
    pub drag: f32,                 // exponential drag coefficient, 1/s
    pub base_turn_rate: f32,       // rad/s at standstill
    pub turn_speed_reduction: f32, // 0..1, share of turn rate lost at max speed
    pub max_speed: f32,            // px/s
    pub min_speed: f32,            // px/s, below this speed snaps to 0
    pub stop_distance: f32,        // px
    pub accel_distance: f32,       // px, distance at which throttle saturates
    pub tilt_factor: f32,          // degrees of bank at full steering lock
    pub particle_base_interval: f32,
    pub drift_particle_interval: f32,
    pub mode: MotionMode,
    pub velocity: VelocityConfig,
}

impl Default for CarConfig {
    fn default() -> Self {
        Self {
            acceleration: 2500.0,
            braking: 0.0,
            drag: 3.0,
            base_turn_rate: PI * 1.8,
            turn_speed_reduction: 0.75,
            max_speed: 1000.0,
            min_speed: 2.0,
            stop_distance: 18.0,
            accel_distance: 500.0,
            tilt_factor: 18.0,
            particle_base_interval: 0.05,
            drift_particle_interval: 0.02,
            mode: MotionMode::Steering,
            velocity: VelocityConfig::default(),
        }
    }
}

impl CarConfig {
    pub fn with_mode(mut self, mode: MotionMode) -> Self {
        self.mode = mode;
        self
    }

    /// Speed as a fraction of `max_speed`, clamped to [0, 1].
    #[inline]
    pub fn speed_ratio(&self, speed: f32) -> f32 {
        if self.max_speed <= 0.0 {
            return 0.0;
        }
        (speed / self.max_speed).clamp(0.0, 1.0)
    }
}

/// Tunables for the older direct-velocity follower.
///
/// `friction` and `rotation_lerp` are per-frame factors at 60 Hz; the model
/// converts them to exponentials of elapsed time.
#[derive(Clone, Debug)]
pub struct VelocityConfig {
    pub follow_gain: f32, // 1/s^2, pull towards the pointer per px of offset
    pub friction: f32,
    pub rotation_lerp: f32,
}

impl Default for VelocityConfig {
    fn default() -> Self {
        Self {
            follow_gain: 8.0,
            friction: 0.9,
            rotation_lerp: 0.15,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MotionMode {
    #[default]
    Steering,
    Velocity,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown motion mode `{0}` (expected `steering` or `velocity`)")]
pub struct ParseModeError(pub String);

impl FromStr for MotionMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "steering" | "" => Ok(MotionMode::Steering),
            "velocity" | "classic" => Ok(MotionMode::Velocity),
            other => Err(ParseModeError(other.to_string())),
        }
    }
}

impl fmt::Display for MotionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotionMode::Steering => f.write_str("steering"),
            MotionMode::Velocity => f.write_str("velocity"),
        }
    }
}
