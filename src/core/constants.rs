// Fixed tuning for the car follower that is not exposed through `CarConfig`.
// Distances are CSS pixels, times are seconds, angles are radians unless noted.

// Frame stepping
pub const MAX_STEP_SECS: f32 = 0.05; // longest step accepted, guards tab resume
pub const DIST_EPSILON: f32 = 1e-3; // pointer this close counts as "on top of" the car
pub const TURN_RATE_EPSILON: f32 = 1e-4; // floor before dividing by the turn rate

// Throttle shaping
pub const ALIGNMENT_EXPONENT: f32 = 1.4;

// Banking
pub const TILT_SMOOTHING_RATE: f32 = 8.0; // per second
pub const TILT_SPEED_RATIO_MIN: f32 = 0.25;

// Pointer idle window
pub const POINTER_IDLE_SECS: f32 = 0.12;

// Viewport clamp on resize
pub const RESIZE_MARGIN: f32 = 50.0;

// Trail emission
pub const TRAIL_MIN_SPEED: f32 = 120.0; // px/s
pub const TURNING_EPSILON: f32 = 0.08;
pub const DRIFT_SPEED_FRACTION: f32 = 0.45; // of max speed
pub const TRAIL_SPEED_REF: f32 = 600.0; // speed at which the base interval applies
pub const TRAIL_SPEED_FACTOR_MIN: f32 = 0.5;
pub const TRAIL_SPEED_FACTOR_MAX: f32 = 3.0;
pub const TRAIL_BACK_OFFSET: f32 = 26.0; // rear axle distance behind the center
pub const TRAIL_HALF_TRACK: f32 = 12.0;
pub const TRAIL_PUSH_BACK: f32 = 8.0;
pub const TRAIL_JITTER: f32 = 12.0; // full width of the positional cloud
pub const TRAIL_ROTATION_JITTER_DEG: f32 = 25.0; // full width
pub const TRAIL_INTENSITY_MIN: f32 = 0.2;
pub const DRIFT_INTENSITY_BOOST: f32 = 1.6;
pub const TRAIL_OPACITY_SCALE: f32 = 0.9;

// Exhaust
pub const EXHAUST_THROTTLE: f32 = 0.25;
pub const EXHAUST_MIN_INTERVAL_SECS: f32 = 0.14;

// Lifetimes of spawned visuals, owned by the sink
pub const TRAIL_PARTICLE_LIFETIME_SECS: f32 = 0.8;
pub const EXHAUST_LIFETIME_SECS: f32 = 0.7;

// Pose mapping
pub const PERSPECTIVE_PX: f32 = 1200.0;
pub const BOUNCE_MIN_SPEED: f32 = 500.0;
pub const BOUNCE_FREQUENCY: f32 = 4.0; // rad/s of elapsed time
pub const BOUNCE_SPEED_DIVISOR: f32 = 1600.0;
pub const BOUNCE_MAX: f32 = 2.0;
pub const PITCH_SPEED_DIVISOR: f32 = 400.0;
pub const PITCH_MAX_DEG: f32 = 5.0;
pub const WHEEL_SPIN_MIN_SPEED: f32 = 10.0;
pub const WHEEL_SPIN_IDLE_SECS: f32 = 10.0; // effectively stopped
pub const WHEEL_SPIN_BASE_SECS: f32 = 0.8;
pub const WHEEL_SPIN_FASTEST_SECS: f32 = 0.02;
pub const WHEEL_SPIN_SPEED_DIVISOR: f32 = 2200.0;

// Platform gating
pub const MOBILE_MAX_WIDTH: f32 = 768.0;
