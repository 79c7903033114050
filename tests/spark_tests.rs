// Host-side tests for the click spark burst.

#![allow(dead_code)]
mod common;

use common::fx::config::SparkConfig;
use common::fx::easing::Easing;
use common::fx::spark::*;
use common::{DrawCall, RecordingSurface};
use glam::Vec2;
use std::f32::consts::FRAC_PI_4;

fn burst(size: Vec2) -> SparkBurst {
    let mut b = SparkBurst::new(SparkConfig::default());
    b.set_size(size);
    b
}

#[test]
fn default_burst_has_eight_evenly_spaced_sparks() {
    let mut b = burst(Vec2::new(800.0, 600.0));
    b.click(Vec2::new(100.0, 100.0), 0.0);
    assert_eq!(b.sparks().len(), 8);
    for (k, spark) in b.sparks().iter().enumerate() {
        assert!((spark.angle - k as f32 * FRAC_PI_4).abs() < 1e-5);
        assert_eq!(spark.origin, Vec2::new(100.0, 100.0));
        assert_eq!(spark.start_ms, 0.0);
    }
}

#[test]
fn burst_angles_cover_the_circle() {
    let angles: Vec<f32> = burst_angles(3).collect();
    assert_eq!(angles.len(), 3);
    assert!((angles[1] - std::f32::consts::TAU / 3.0).abs() < 1e-5);
    assert_eq!(burst_angles(0).count(), 0);
}

#[test]
fn sparks_expire_when_duration_is_reached() {
    let mut b = burst(Vec2::new(800.0, 600.0));
    b.click(Vec2::new(50.0, 50.0), 1000.0);
    b.expire(1399.0);
    assert_eq!(b.sparks().len(), 8);
    b.expire(1400.0);
    assert!(b.sparks().is_empty());
}

#[test]
fn overlapping_bursts_expire_independently() {
    let mut b = burst(Vec2::new(800.0, 600.0));
    b.click(Vec2::new(10.0, 10.0), 0.0);
    b.click(Vec2::new(90.0, 90.0), 200.0);
    assert_eq!(b.sparks().len(), 16);
    b.expire(450.0);
    assert_eq!(b.sparks().len(), 8);
    assert!(b.sparks().iter().all(|s| s.start_ms == 200.0));
    b.expire(600.0);
    assert!(b.sparks().is_empty());
}

#[test]
fn first_frame_draws_full_length_segments_at_the_origin() {
    let mut b = burst(Vec2::new(800.0, 600.0));
    let origin = Vec2::new(200.0, 150.0);
    b.click(origin, 0.0);
    let mut surface = RecordingSurface::default();
    b.frame(0.0, &mut surface);
    let lines = surface.lines();
    assert_eq!(lines.len(), 8);
    for (from, to) in lines {
        assert!((from - origin).length() < 1e-4);
        assert!(((to - from).length() - 10.0).abs() < 1e-4);
    }
    assert!(surface.calls.iter().any(|c| matches!(
        c,
        DrawCall::Line { width, .. } if *width == 2.0
    )));
}

#[test]
fn segments_travel_out_and_shrink() {
    let config = SparkConfig::default();
    let spark = Spark {
        origin: Vec2::ZERO,
        angle: 0.0,
        start_ms: 0.0,
    };
    let eased = config.easing.apply(0.5);
    assert!((eased - 0.75).abs() < 1e-6);
    let (near, far) = spark.segment(eased, &config);
    assert!((near.x - 0.75 * 15.0).abs() < 1e-4);
    assert!((far.x - near.x - 0.25 * 10.0).abs() < 1e-4);
    assert!(near.y.abs() < 1e-6);

    let (near, far) = spark.segment(1.0, &config);
    assert!((near.x - 15.0).abs() < 1e-4);
    assert!((far - near).length() < 1e-6);
}

#[test]
fn extra_scale_stretches_travel_only() {
    let config = SparkConfig {
        extra_scale: 2.0,
        ..SparkConfig::default()
    };
    let spark = Spark {
        origin: Vec2::ZERO,
        angle: 0.0,
        start_ms: 0.0,
    };
    let (near, far) = spark.segment(0.5, &config);
    assert!((near.x - 15.0).abs() < 1e-4);
    assert!((far.x - near.x - 5.0).abs() < 1e-4);
}

#[test]
fn easing_curves_hit_their_reference_values() {
    assert_eq!(Easing::Linear.apply(0.5), 0.5);
    assert_eq!(Easing::EaseIn.apply(0.5), 0.25);
    assert_eq!(Easing::EaseOut.apply(0.5), 0.75);
    assert_eq!(Easing::EaseInOut.apply(0.25), 0.125);
    assert_eq!(Easing::EaseInOut.apply(0.75), 0.875);
    for e in [Easing::Linear, Easing::EaseIn, Easing::EaseOut, Easing::EaseInOut] {
        assert_eq!(e.apply(0.0), 0.0);
        assert_eq!(e.apply(1.0), 1.0);
        assert_eq!(e.apply(2.0), 1.0);
    }
}

#[test]
fn unknown_easing_name_falls_back_to_ease_out() {
    assert_eq!(Easing::from_name("linear"), Easing::Linear);
    assert_eq!(Easing::from_name("ease-in-out"), Easing::EaseInOut);
    assert_eq!(Easing::from_name("bounce"), Easing::EaseOut);
    assert_eq!(Easing::from_name(""), Easing::EaseOut);
}

#[test]
fn zero_area_skips_drawing_but_still_expires() {
    let mut b = burst(Vec2::new(0.0, 0.0));
    b.click(Vec2::ZERO, 0.0);
    let mut surface = RecordingSurface::default();
    b.frame(10.0, &mut surface);
    assert!(surface.calls.is_empty());
    b.frame(500.0, &mut surface);
    assert!(b.sparks().is_empty());
}

#[test]
fn empty_frame_only_clears() {
    let mut b = burst(Vec2::new(320.0, 240.0));
    let mut surface = RecordingSurface::default();
    b.frame(0.0, &mut surface);
    assert_eq!(surface.calls, vec![DrawCall::Clear(Vec2::new(320.0, 240.0))]);
}

#[test]
fn resize_waits_for_quiet_viewport() {
    let mut b = burst(Vec2::new(800.0, 600.0));
    b.request_resize(Vec2::new(640.0, 480.0), 0.0);
    b.request_resize(Vec2::new(1024.0, 768.0), 50.0);
    assert_eq!(b.take_resize(120.0), None);
    assert_eq!(b.size(), Vec2::new(800.0, 600.0));
    assert_eq!(b.take_resize(150.0), Some(Vec2::new(1024.0, 768.0)));
    assert_eq!(b.size(), Vec2::new(1024.0, 768.0));
    assert_eq!(b.take_resize(400.0), None);
}
