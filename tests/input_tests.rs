// Host-side tests for the pointer-drag controller math.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod error {
    include!("../src/error.rs");
}
mod config {
    include!("../src/config.rs");
}
mod geometry {
    include!("../src/geometry.rs");
}
mod rotation {
    include!("../src/rotation.rs");
}
mod input {
    include!("../src/input.rs");
}

use glam::DVec2;
use input::DragSession;
use rotation::RotationState;

#[test]
fn horizontal_drag_maps_pixels_to_yaw_via_sensitivity() {
    let mut session = DragSession::begin(DVec2::ZERO, RotationState::default());
    let r = session.update(DVec2::new(100.0, 0.0), 20.0, 5.0);
    assert!((r.yaw - 5.0).abs() < 1e-12);
    assert_eq!(r.pitch, 0.0);
}

#[test]
fn vertical_drag_is_clamped_to_the_vertical_limit() {
    let mut session = DragSession::begin(DVec2::ZERO, RotationState::default());
    let r = session.update(DVec2::new(0.0, 500.0), 20.0, 5.0);
    assert_eq!(r.pitch, -5.0);
    let r = session.update(DVec2::new(0.0, -500.0), 20.0, 5.0);
    assert_eq!(r.pitch, 5.0);
}

#[test]
fn pitch_stays_within_limits_for_any_move_sequence() {
    let mut session = DragSession::begin(DVec2::ZERO, RotationState::default());
    let mut point = DVec2::ZERO;
    for i in 0..200 {
        point += DVec2::new((i % 7) as f64 - 3.0, (i % 11) as f64 - 5.0) * 13.0;
        let r = session.update(point, 20.0, 5.0);
        assert!(r.pitch >= -5.0 && r.pitch <= 5.0);
        assert!(r.yaw > -180.0 && r.yaw <= 180.0);
    }
}

#[test]
fn drag_starts_from_the_snapshotted_rotation() {
    let start = RotationState { pitch: 1.0, yaw: 10.0 };
    let mut session = DragSession::begin(DVec2::new(50.0, 50.0), start);
    let r = session.update(DVec2::new(150.0, 50.0), 20.0, 5.0);
    assert!((r.yaw - 15.0).abs() < 1e-12);
    assert!((r.pitch - 1.0).abs() < 1e-12);
}

#[test]
fn yaw_wraps_through_the_half_turn_boundary() {
    let start = RotationState { pitch: 0.0, yaw: 179.0 };
    let mut session = DragSession::begin(DVec2::ZERO, start);
    let r = session.update(DVec2::new(40.0, 0.0), 20.0, 5.0);
    assert!((r.yaw - (-179.0)).abs() < 1e-12);
}

#[test]
fn small_moves_stay_below_the_tap_threshold() {
    let mut session = DragSession::begin(DVec2::ZERO, RotationState::default());
    session.update(DVec2::new(1.0, 1.0), 20.0, 5.0);
    assert!(!session.moved());
    // Exactly at the threshold still counts as a tap.
    session.update(DVec2::new(4.0, 0.0), 20.0, 5.0);
    assert!(!session.moved());
}

#[test]
fn crossing_the_threshold_marks_the_session_moved() {
    let mut session = DragSession::begin(DVec2::ZERO, RotationState::default());
    session.update(DVec2::new(5.0, 0.0), 20.0, 5.0);
    assert!(session.moved());
    // The flag is sticky even if the pointer returns to the origin.
    session.update(DVec2::ZERO, 20.0, 5.0);
    assert!(session.moved());
}

#[test]
fn release_velocity_uses_the_final_move_delta() {
    let mut session = DragSession::begin(DVec2::ZERO, RotationState::default());
    session.update(DVec2::new(40.0, 0.0), 20.0, 5.0);
    session.update(DVec2::new(50.0, -6.0), 20.0, 5.0);
    let v = session.release_velocity(20.0);
    assert!((v.x - 0.5).abs() < 1e-12); // (50 - 40) / 20
    assert!((v.y - (-0.3)).abs() < 1e-12); // (-6 - 0) / 20
}

#[test]
fn release_without_moves_has_zero_velocity() {
    let session = DragSession::begin(DVec2::new(3.0, 4.0), RotationState::default());
    assert_eq!(session.release_velocity(20.0), DVec2::ZERO);
}
