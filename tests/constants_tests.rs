// Host-side tests for the effect tuning constants and their relationships.

#![allow(dead_code)]
mod common;

use common::fx::color::Rgb;
use common::fx::constants::*;
use common::fx::easing::Easing;

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    // Sizes and distances should be positive
    assert!(DOT_SIZE > 0.0);
    assert!(DOT_GAP >= 0.0);
    assert!(DOT_PROXIMITY > 0.0);
    assert!(DOT_SHOCK_RADIUS > 0.0);
    assert!(SPARK_SIZE > 0.0 && SPARK_RADIUS > 0.0);
    assert!(EMPHASIS_RADIUS > 0.0);

    // Rates and durations should be positive
    assert!(DOT_RESISTANCE > 0.0);
    assert!(DOT_RETURN_SECS > 0.0);
    assert!(INERTIA_MAX_SECS > 0.0);
    assert!(SPARK_DURATION_MS > 0.0);
    assert!(EMPHASIS_IN_SECS > 0.0 && EMPHASIS_OUT_SECS > 0.0);

    // The velocity share of a pointer push is a small nudge
    assert!(POINTER_VELOCITY_PUSH > 0.0 && POINTER_VELOCITY_PUSH < 1.0);
    assert!(SPARK_COUNT > 0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn speed_limits_are_consistent() {
    // The trigger must be reachable under the clamp
    assert!(DOT_SPEED_TRIGGER < POINTER_SPEED_MAX);
    // The fastest push still settles inside the inertia cap
    assert!(POINTER_SPEED_MAX / DOT_RESISTANCE >= INERTIA_MAX_SECS);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn emphasis_fades_out_slower_than_in() {
    assert!(EMPHASIS_OUT_SECS > EMPHASIS_IN_SECS);
    assert!(EMPHASIS_SCALE_BOOST > 0.0 && EMPHASIS_SCALE_BOOST < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn throttles_are_at_least_a_frame() {
    assert!(GRID_POINTER_THROTTLE_MS >= NOMINAL_FRAME_MS);
    assert!(EMPHASIS_POINTER_THROTTLE_MS >= NOMINAL_FRAME_MS);
    assert!(RESIZE_DEBOUNCE_MS > GRID_POINTER_THROTTLE_MS);
}

#[test]
fn default_colors_and_easing_parse() {
    for hex in [
        DOT_BASE_COLOR,
        DOT_ACTIVE_COLOR,
        SPARK_COLOR,
        EMPHASIS_TEXT_COLOR,
        EMPHASIS_ACCENT_COLOR,
    ] {
        assert!(Rgb::parse(hex).is_some(), "{hex}");
    }
    assert_eq!(Easing::from_name(SPARK_EASING), Easing::EaseOut);
}
