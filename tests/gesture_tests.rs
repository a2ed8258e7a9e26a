// Host-side tests for the drag-gesture mapping.
// The main crate is wasm-only, so we import the pure engine tree directly.

#![allow(dead_code)]
#[path = "../src/engine/mod.rs"]
mod engine;

use engine::constants::*;
use engine::gesture::{clamp_release, drag_rotation, DragSample};
use glam::Vec2;

#[test]
fn downward_drag_tips_toward_viewer() {
    let rotation = drag_rotation(Vec2::new(0.0, 120.0));
    assert!(rotation.x < 0.0, "expected negative rotX, got {}", rotation.x);
    assert!(rotation.y.abs() < 1e-6);
}

#[test]
fn rightward_drag_tips_right() {
    let rotation = drag_rotation(Vec2::new(120.0, 0.0));
    assert!(rotation.y > 0.0);
    assert!(rotation.x.abs() < 1e-6);
}

#[test]
fn radius_saturates_far_from_the_press() {
    let near = drag_rotation(Vec2::new(0.0, 5_000.0));
    let far = drag_rotation(Vec2::new(0.0, 50_000.0));
    assert_eq!(near, far);
    let expected = DRAG_MAX_ANGLE * DRAG_RESISTANCE;
    assert!((near.x.abs() - expected).abs() < 1e-5);
}

#[test]
fn resistance_scales_the_target() {
    // 100 px maps to 0.8 rad of radius before resistance.
    let rotation = drag_rotation(Vec2::new(100.0, 0.0));
    let expected = 100.0 * DRAG_SENSITIVITY * DRAG_RESISTANCE;
    assert!((rotation.y - expected).abs() < 1e-5);
}

#[test]
fn sample_velocity_is_the_target_derivative() {
    let mut sample = DragSample::begin(Vec2::ZERO, 10.0);
    let rotation = sample.advance(Vec2::new(100.0, 0.0), 10.1);
    let expected_ry = 100.0 * DRAG_SENSITIVITY * DRAG_RESISTANCE;
    assert!((rotation.y - expected_ry).abs() < 1e-4);
    // velocity.x pairs with rotY; 0.68 rad over 0.1 s
    assert!((sample.velocity.x - expected_ry / 0.1).abs() < 1e-3);
    assert!(sample.velocity.y.abs() < 1e-4);
}

#[test]
fn zero_net_movement_releases_dead() {
    let mut sample = DragSample::begin(Vec2::ZERO, 4.0);
    sample.advance(Vec2::ZERO, 4.05);
    assert_eq!(sample.velocity, Vec2::ZERO);
    assert_eq!(sample.release_velocity(), Vec2::ZERO);
}

#[test]
fn coincident_timestamps_stay_finite() {
    let mut sample = DragSample::begin(Vec2::ZERO, 2.0);
    sample.advance(Vec2::new(50.0, 50.0), 2.0);
    assert!(sample.velocity.x.is_finite());
    assert!(sample.velocity.y.is_finite());
    let release = sample.release_velocity();
    assert!(release.x.abs() <= RELEASE_SPEED_MAX);
    assert!(release.y.abs() <= RELEASE_SPEED_MAX);
}

#[test]
fn release_transfers_a_momentum_fraction() {
    let mut sample = DragSample::begin(Vec2::ZERO, 0.0);
    sample.advance(Vec2::new(40.0, 0.0), 0.1);
    let release = sample.release_velocity();
    let expected = sample.velocity.x * MOMENTUM_TRANSFER;
    assert!((release.x - expected).abs() < 1e-4);
    assert!(release.x > 0.0 && release.x < RELEASE_SPEED_MAX);
}

#[test]
fn release_clamp_caps_wild_flicks() {
    let clamped = clamp_release(Vec2::new(40.0, -40.0));
    assert_eq!(
        clamped,
        Vec2::new(RELEASE_SPEED_MAX, -RELEASE_SPEED_MAX)
    );
}
