// Host-side tests for constants and their mathematical relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}
mod config {
    include!("../src/core/config.rs");
}

use config::CarConfig;
use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn step_and_timer_constants_are_positive() {
    assert!(MAX_STEP_SECS > 0.0 && MAX_STEP_SECS <= 0.05);
    assert!(TILT_SMOOTHING_RATE > 0.0);
    assert!(EXHAUST_MIN_INTERVAL_SECS > 0.0);
    assert!(TRAIL_PARTICLE_LIFETIME_SECS > 0.0);
    assert!(EXHAUST_LIFETIME_SECS > 0.0);
    assert!(DIST_EPSILON > 0.0 && TURN_RATE_EPSILON > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn idle_window_and_lifetimes_are_in_expected_ranges() {
    assert!((0.1..=0.12).contains(&POINTER_IDLE_SECS));
    assert!((0.4..=0.8).contains(&TRAIL_PARTICLE_LIFETIME_SECS));
    assert!((0.4..=0.8).contains(&EXHAUST_LIFETIME_SECS));
    assert!(RESIZE_MARGIN >= 50.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn emitter_constants_have_logical_relationships() {
    let cfg = CarConfig::default();
    // Drifting needs more speed than leaving any trail at all.
    assert!(cfg.max_speed * DRIFT_SPEED_FRACTION > TRAIL_MIN_SPEED);
    assert!(cfg.drift_particle_interval < cfg.particle_base_interval);
    assert!(TRAIL_SPEED_FACTOR_MIN < TRAIL_SPEED_FACTOR_MAX);
    assert!(DRIFT_INTENSITY_BOOST > 1.0);
    assert!(TRAIL_INTENSITY_MIN > 0.0 && TRAIL_INTENSITY_MIN < 1.0);
    // Half track wider than the jitter cloud keeps left and right apart.
    assert!(TRAIL_HALF_TRACK > TRAIL_JITTER / 2.0);
    assert!(EXHAUST_THROTTLE > 0.0 && EXHAUST_THROTTLE < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn config_defaults_are_consistent() {
    let cfg = CarConfig::default();
    assert!(cfg.min_speed < TRAIL_MIN_SPEED);
    assert!(cfg.stop_distance < cfg.accel_distance);
    assert!(cfg.turn_speed_reduction > 0.0 && cfg.turn_speed_reduction < 1.0);
    assert!(cfg.drag > 0.0);
    // Terminal speed under full throttle stays under the hard cap.
    assert!(cfg.acceleration / cfg.drag < cfg.max_speed);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn pose_mapping_constants_are_sane() {
    assert!(WHEEL_SPIN_FASTEST_SECS < WHEEL_SPIN_BASE_SECS);
    assert!(WHEEL_SPIN_BASE_SECS < WHEEL_SPIN_IDLE_SECS);
    assert!(BOUNCE_MAX > 0.0 && PITCH_MAX_DEG > 0.0);
    assert!(PERSPECTIVE_PX > 0.0);
    assert!(MOBILE_MAX_WIDTH > 0.0);
}

#[test]
fn dom_names_match_markup() {
    assert!(CAR_MARKUP.contains("exhaust-container"));
    assert!(CAR_MARKUP.contains(EXHAUST_CLASS));
    assert_eq!(EXHAUST_CONTAINER_SELECTOR, ".exhaust-container");
    assert!(WHEEL_SPIN_PROPERTY.starts_with("--"));
    assert!(MODE_ATTRIBUTE.starts_with("data-"));
    assert!(TRAIL_FADE_SCALE_BASE > 1.0);
    assert!(TRAIL_OPACITY_SCALE <= 1.0);
}
