// Host-side tests for scene mounting and per-frame spin.

use glam::{Vec3, Vec4};
use instant::Instant;
use modelgen_core::*;
use std::time::Duration;

fn completed_store() -> MemoryStore {
    let mut c = LifecycleController::new(MemoryStore::new());
    let t0 = Instant::now();
    c.submit(t0).unwrap();
    c.poll(t0 + Duration::from_millis(3000)).unwrap();
    c.store().clone()
}

#[test]
fn mounts_two_primitives_after_generation() {
    let scene = SceneState::from_store(&completed_store(), &DemoConfig::default());
    assert_eq!(scene.len(), 2);
    for p in scene.primitives() {
        assert_eq!(p.color, MODEL_COLOR);
        assert_eq!(p.position, Vec3::ZERO);
    }
}

#[test]
fn cleared_store_mounts_empty_scene() {
    let mut store = completed_store();
    store.clear_placements();
    let mut scene = SceneState::from_store(&store, &DemoConfig::default());
    assert!(scene.is_empty());
    scene.tick();
    assert!(scene.instances().is_empty());
}

#[test]
fn malformed_store_mounts_empty_scene() {
    let mut store = MemoryStore::new();
    store.set(POSITIONS_KEY, "not json").unwrap();
    store.set(ROTATIONS_KEY, "[[0,0,0]]").unwrap();
    assert!(SceneState::from_store(&store, &DemoConfig::default()).is_empty());
}

#[test]
fn group_angle_increases_at_constant_rate() {
    let mut scene = SceneState::mount(&generate_placements(""), &DemoConfig::default());
    let mut prev = scene.group_rotation_y();
    for _ in 0..120 {
        scene.tick();
        let cur = scene.group_rotation_y();
        assert!(cur > prev);
        assert!((cur - prev - f64::from(SPIN_PER_FRAME)).abs() < 1e-9);
        prev = cur;
    }
    assert_eq!(scene.frames(), 120);
}

#[test]
fn spin_rate_stays_constant_over_long_runs() {
    let mut scene = SceneState::mount(&generate_placements(""), &DemoConfig::default());
    let step = f64::from(SPIN_PER_FRAME);
    for _ in 0..150_000 {
        scene.tick();
    }
    let mut prev = scene.group_rotation_y();
    for _ in 0..1_000 {
        scene.tick();
        let cur = scene.group_rotation_y();
        assert!(cur > prev);
        assert!((cur - prev - step).abs() < 1e-9);
        prev = cur;
    }
    assert!((scene.group_rotation_y() - 151_000.0 * step).abs() < 1e-6);

    // The matrix wraps the angle, so it matches the same turn taken mod 2*pi.
    let wrapped = scene.group_rotation_y().rem_euclid(std::f64::consts::TAU) as f32;
    let expected = glam::Mat4::from_rotation_y(wrapped);
    assert!(scene.group_matrix().abs_diff_eq(expected, 1e-5));
}

#[test]
fn primitives_keep_their_own_rotation() {
    let mut scene = SceneState::mount(&generate_placements(""), &DemoConfig::default());
    let before: Vec<Vec3> = scene.primitives().iter().map(|p| p.rotation).collect();
    for _ in 0..10 {
        scene.tick();
    }
    let after: Vec<Vec3> = scene.primitives().iter().map(|p| p.rotation).collect();
    assert_eq!(before, after);
}

#[test]
fn second_primitive_is_quarter_turn_about_y() {
    let scene = SceneState::mount(&generate_placements(""), &DemoConfig::default());
    let m = scene.model_matrix(1).unwrap();
    // +X maps to -Z under a +90 degree turn about Y.
    let x = m * Vec4::new(1.0, 0.0, 0.0, 0.0);
    assert!((x.z + 1.0).abs() < 1e-5);
    assert!(x.x.abs() < 1e-5);
    assert!(scene.model_matrix(2).is_none());
}

#[test]
fn instances_follow_group_rotation() {
    let mut scene = SceneState::mount(&generate_placements(""), &DemoConfig::default());
    scene.tick();
    let inst = scene.instances();
    assert_eq!(inst.len(), 2);
    let expected = scene.model_matrix(0).unwrap().to_cols_array_2d();
    assert_eq!(inst[0].model, expected);
    assert_eq!(inst[0].color, [0.0, 0.5, 0.0, 1.0]);
}

#[test]
fn configured_color_and_spin_apply() {
    let cfg = DemoConfig {
        spin_per_frame: 0.05,
        color: [1.0, 0.0, 0.0],
        ..DemoConfig::default()
    };
    let mut scene = SceneState::mount(&generate_placements(""), &cfg);
    scene.tick();
    assert!((scene.group_rotation_y() - f64::from(0.05f32)).abs() < 1e-9);
    assert_eq!(scene.primitives()[0].color, [1.0, 0.0, 0.0]);
}
