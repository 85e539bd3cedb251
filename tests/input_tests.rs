// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;

#[test]
fn primary_button_rotates_and_secondary_pans() {
    assert_eq!(drag_mode_for_button(0, false), Some(DragMode::Rotate));
    assert_eq!(drag_mode_for_button(2, false), Some(DragMode::Pan));
    assert_eq!(drag_mode_for_button(0, true), Some(DragMode::Pan));
}

#[test]
fn middle_and_extra_buttons_do_not_drag() {
    assert_eq!(drag_mode_for_button(1, false), None);
    assert_eq!(drag_mode_for_button(3, false), None);
    assert_eq!(drag_mode_for_button(-1, true), None);
}

#[test]
fn drag_reports_incremental_deltas() {
    let mut d = DragState::default();
    assert!(!d.active());
    assert_eq!(d.advance(1, Vec2::new(5.0, 5.0)), None);

    d.begin(DragMode::Rotate, 7, Vec2::new(10.0, 20.0));
    assert!(d.active());
    assert_eq!(
        d.advance(7, Vec2::new(15.0, 18.0)),
        Some((DragMode::Rotate, Vec2::new(5.0, -2.0)))
    );
    assert_eq!(
        d.advance(7, Vec2::new(15.0, 28.0)),
        Some((DragMode::Rotate, Vec2::new(0.0, 10.0)))
    );
}

#[test]
fn other_pointers_are_ignored_while_dragging() {
    let mut d = DragState::default();
    d.begin(DragMode::Pan, 1, Vec2::ZERO);
    assert_eq!(d.advance(2, Vec2::new(100.0, 100.0)), None);
    assert!(!d.end(2));
    assert!(d.active());
    assert!(d.end(1));
    assert!(!d.active());
    assert!(!d.end(1));
}

#[test]
fn drag_feeds_orbit_camera() {
    let mut cam = modelgen_core::OrbitCamera::default();
    let mut d = DragState::default();
    d.begin(DragMode::Rotate, 1, Vec2::new(0.0, 250.0));
    let (mode, delta) = d.advance(1, Vec2::new(-125.0, 250.0)).unwrap();
    assert_eq!(mode, DragMode::Rotate);
    cam.rotate(delta.x, delta.y, 500.0);
    let eye = cam.eye();
    assert!((eye.x - 5.0).abs() < 1e-4);
    assert!(eye.z.abs() < 1e-4);
}
