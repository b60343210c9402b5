// Host-side tests for pointer tracking and the resize clamp.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod geometry {
    include!("../src/core/geometry.rs");
}
mod motion {
    include!("../src/core/motion.rs");
}
mod pointer {
    include!("../src/core/pointer.rs");
}
mod platform {
    include!("../src/core/platform.rs");
}

use glam::Vec2;
use motion::MotionState;
use platform::is_mobile;
use pointer::*;

#[test]
fn pointer_is_moving_until_idle_window_passes() {
    let mut p = PointerTracker::new(Vec2::new(10.0, 10.0));
    assert!(!p.is_moving());

    p.on_move(120.0, 80.0);
    assert!(p.is_moving());
    assert_eq!(p.position(), Vec2::new(120.0, 80.0));

    p.advance(0.1);
    assert!(p.is_moving());
    p.advance(0.03);
    assert!(!p.is_moving());
}

#[test]
fn each_move_rearms_the_idle_window() {
    let mut p = PointerTracker::default();
    p.on_move(1.0, 1.0);
    for i in 0..10 {
        p.advance(0.1);
        p.on_move(1.0 + i as f32, 1.0);
        assert!(p.is_moving());
    }
    p.advance(0.2);
    assert!(!p.is_moving());
}

#[test]
fn non_finite_moves_are_ignored() {
    let mut p = PointerTracker::new(Vec2::new(5.0, 6.0));
    p.on_move(f32::NAN, 3.0);
    p.on_move(2.0, f32::INFINITY);
    assert_eq!(p.position(), Vec2::new(5.0, 6.0));
    assert!(!p.is_moving());
}

#[test]
fn snapshot_is_a_detached_copy() {
    let mut p = PointerTracker::default();
    p.on_move(30.0, 40.0);
    let snap = p.snapshot();
    p.on_move(300.0, 400.0);
    assert_eq!(snap.position, Vec2::new(30.0, 40.0));
    assert!(snap.is_moving);
}

#[test]
fn resize_clamps_onto_margin() {
    let mut car = MotionState::new(Vec2::new(900.0, -20.0));
    assert!(car.clamp_into(Vec2::new(800.0, 600.0)));
    assert_eq!(car.position, Vec2::new(750.0, 50.0));
    assert_eq!(car.prev_position, car.position);

    let mut car = MotionState::new(Vec2::new(10.0, 700.0));
    car.clamp_into(Vec2::new(800.0, 600.0));
    assert_eq!(car.position, Vec2::new(50.0, 550.0));
}

#[test]
fn resize_leaves_inside_positions_alone() {
    let mut car = MotionState::new(Vec2::new(400.0, 300.0));
    assert!(!car.clamp_into(Vec2::new(800.0, 600.0)));
    assert_eq!(car.position, Vec2::new(400.0, 300.0));
}

#[test]
fn resize_centers_on_tiny_viewports() {
    let mut car = MotionState::new(Vec2::new(300.0, 30.0));
    car.clamp_into(Vec2::new(80.0, 600.0));
    assert_eq!(car.position, Vec2::new(40.0, 50.0));
}

#[test]
fn velocity_is_displacement_over_dt() {
    let mut car = MotionState::new(Vec2::ZERO);
    car.integrate(Vec2::new(2.0, -1.0));
    assert_eq!(car.velocity(0.5), Vec2::new(4.0, -2.0));
    assert_eq!(car.velocity(0.0), Vec2::ZERO);
}

#[test]
fn mobile_detection() {
    let desktop = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 Chrome/120.0 Safari/537.36";
    let phone = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) Mobile/15E148";
    let opera = "Opera/9.80 (J2ME/MIDP; Opera Mini/9.80) Presto/2.5.25";
    assert!(!is_mobile(desktop, 1440.0));
    assert!(is_mobile(desktop, 700.0));
    assert!(is_mobile(phone, 1024.0));
    assert!(is_mobile(opera, 1024.0));
    assert!(!is_mobile(desktop, 768.0));
}
