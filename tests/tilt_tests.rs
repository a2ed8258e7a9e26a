// Host-side tests for the device-tilt fusion.
// The main crate is wasm-only, so we import the pure engine tree directly.

#![allow(dead_code)]
#[path = "../src/engine/mod.rs"]
mod engine;

use engine::constants::*;
use engine::tilt::{tilt_rotation, TiltFilter};
use engine::SensorError;
use glam::Vec2;

#[test]
fn upright_stream_rests_near_neutral() {
    let mut filter = TiltFilter::default();
    let mut smoothed = Vec2::ZERO;
    for _ in 0..10 {
        smoothed = filter.push(90.0, 0.0);
    }
    let rotation = tilt_rotation(smoothed.x, smoothed.y);
    assert!(rotation.x.abs() < 0.1, "upright rotX too large: {}", rotation.x);
    assert_eq!(rotation.y, 0.0);
}

#[test]
fn forward_tilt_lands_in_the_expected_band() {
    let mut filter = TiltFilter::default();
    let mut smoothed = Vec2::ZERO;
    for _ in 0..10 {
        smoothed = filter.push(45.0, 0.0);
    }
    let rotation = tilt_rotation(smoothed.x, smoothed.y);
    assert!(
        rotation.x > -1.2 && rotation.x < -0.3,
        "45 degree tilt out of band: {}",
        rotation.x
    );
}

#[test]
fn jitter_around_upright_is_averaged_out() {
    let mut filter = TiltFilter::default();
    let mut smoothed = Vec2::ZERO;
    for i in 0..10 {
        let beta = if i % 2 == 0 { 85.0 } else { 95.0 };
        smoothed = filter.push(beta, 0.0);
    }
    assert!(
        (smoothed.x - 90.0).abs() < 2.5,
        "jitter leaked through: {}",
        smoothed.x
    );
    assert_eq!(smoothed.y, 0.0);
}

#[test]
fn upright_blend_suppresses_a_single_twitch() {
    let mut filter = TiltFilter::default();
    for _ in 0..5 {
        filter.push(90.0, 0.0);
    }
    let smoothed = filter.push(100.0, 0.0);
    // raw buffer mean after the twitch is 92; the blend keeps most of the
    // previous output
    assert!(smoothed.x > 90.0);
    assert!(smoothed.x < 91.0, "twitch leaked through: {}", smoothed.x);
}

#[test]
fn gamma_fades_out_at_vertical() {
    assert_eq!(tilt_rotation(90.0, 40.0).y, 0.0);

    let tilted = tilt_rotation(60.0, 40.0);
    assert!(tilted.y > 0.0);
    let mirrored = tilt_rotation(60.0, -40.0);
    assert!((tilted.y + mirrored.y).abs() < 1e-6);
}

#[test]
fn gamma_gain_grows_with_the_lean() {
    // measured at beta 0 where the fade is fully open
    let strong = tilt_rotation(0.0, 80.0).y;
    let gentle = tilt_rotation(0.0, 20.0).y;
    let linear_ratio = (80.0 - GAMMA_DEAD_ZONE_DEG) / (20.0 - GAMMA_DEAD_ZONE_DEG);
    assert!(
        strong / gentle > linear_ratio,
        "gain is not progressive: {} vs {}",
        strong / gentle,
        linear_ratio
    );
}

#[test]
fn non_finite_samples_read_as_zero() {
    let mut filter = TiltFilter::default();
    let smoothed = filter.push(f32::NAN, f32::INFINITY);
    assert_eq!(smoothed, Vec2::ZERO);
}

#[test]
fn mapped_output_is_bounded_everywhere() {
    let mut b = -180;
    while b <= 180 {
        let mut g = -90;
        while g <= 90 {
            let rotation = tilt_rotation(b as f32, g as f32);
            assert!(rotation.x.is_finite() && rotation.y.is_finite());
            assert!(
                rotation.x.abs() <= TILT_OUTPUT_RANGE_RAD + UPRIGHT_FORWARD_BIAS + 1e-5,
                "rotX out of range at beta {b} gamma {g}: {}",
                rotation.x
            );
            let max_y = (90.0 - GAMMA_DEAD_ZONE_DEG).to_radians() * GAMMA_GAIN_MAX;
            assert!(
                rotation.y.abs() <= max_y + 1e-5,
                "rotY out of range at beta {b} gamma {g}: {}",
                rotation.y
            );
            g += 15;
        }
        b += 15;
    }
}

#[test]
fn sensor_errors_explain_themselves() {
    assert_eq!(
        SensorError::Unsupported.to_string(),
        "device orientation is not supported here"
    );
    assert!(SensorError::Denied.to_string().contains("denied"));
    assert_ne!(SensorError::Unsupported, SensorError::Denied);
}
