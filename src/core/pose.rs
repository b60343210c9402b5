use super::constants::*;
use super::motion::MotionState;

/// Per-frame visual transform handed to the render sink.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CarPose {
    pub x: f32,
    pub y: f32,
    pub rotation_deg: f32, // sprite faces up, so heading + 90°
    pub tilt_x: f32,       // degrees
    pub tilt_y: f32,       // degrees
    pub pitch: f32,        // degrees of nose-down lean, grows with speed
    pub bounce: f32,       // px along Z
    pub wheel_spin_secs: f32,
}

impl CarPose {
    pub fn from_state(state: &MotionState, elapsed: f32) -> Self {
        let (sin_h, cos_h) = state.heading.sin_cos();
        let speed = state.speed;
        let bounce = if speed > BOUNCE_MIN_SPEED {
            (elapsed * BOUNCE_FREQUENCY).sin() * (speed / BOUNCE_SPEED_DIVISOR).min(BOUNCE_MAX)
        } else {
            0.0
        };
        Self {
            x: state.position.x,
            y: state.position.y,
            rotation_deg: state.heading.to_degrees() + 90.0,
            tilt_x: sin_h * state.tilt,
            tilt_y: -cos_h * state.tilt,
            pitch: (speed / PITCH_SPEED_DIVISOR).min(PITCH_MAX_DEG),
            bounce,
            wheel_spin_secs: wheel_spin_secs(speed),
        }
    }
}

/// Duration of one wheel revolution in the CSS animation.
#[inline]
pub fn wheel_spin_secs(speed: f32) -> f32 {
    if speed > WHEEL_SPIN_MIN_SPEED {
        (WHEEL_SPIN_BASE_SECS - speed / WHEEL_SPIN_SPEED_DIVISOR).max(WHEEL_SPIN_FASTEST_SECS)
    } else {
        WHEEL_SPIN_IDLE_SECS
    }
}

pub fn car_transform_css(pose: &CarPose) -> String {
    format!(
        "translate(-50%, -50%) perspective({:.0}px) rotateX({:.3}deg) rotateY({:.3}deg) rotateZ({:.3}deg) translateZ({:.3}px)",
        PERSPECTIVE_PX,
        pose.tilt_x - pose.pitch,
        pose.tilt_y,
        pose.rotation_deg,
        pose.bounce
    )
}

#[inline]
pub fn wheel_spin_css(pose: &CarPose) -> String {
    format!("{:.3}s", pose.wheel_spin_secs)
}

pub fn trail_transform_css(rotation: f32) -> String {
    format!("rotate({:.2}deg)", rotation.to_degrees())
}
