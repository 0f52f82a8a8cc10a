// Host-side tests for tuning constants and their relationships.

use waves_core::constants::*;
use waves_core::DriverParams;

#[test]
#[allow(clippy::assertions_on_constants)]
fn decay_and_easing_factors_are_fractions() {
    assert!(SCROLL_DECAY > 0.0 && SCROLL_DECAY < 1.0);
    assert!(GAP_TRANSITION_SPEED > 0.0 && GAP_TRANSITION_SPEED < 1.0);
    assert!(INTRO_TIME_FACTOR > 0.0 && INTRO_TIME_FACTOR < 1.0);
    assert!(SAFE_WIDTH_RATIO > 0.0 && SAFE_WIDTH_RATIO <= 1.0);
    assert!(SAFE_AMPLITUDE_RATIO > 0.0 && SAFE_AMPLITUDE_RATIO <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_have_logical_relationships() {
    // parking at the bottom pulls the waves closer to the edge
    assert!(BOTTOM_GAP_AT_BOTTOM < NORMAL_BOTTOM_GAP);
    // wheel deltas are coarser than scroll pixel deltas
    assert!(WHEEL_DELTA_DIVISOR > SCROLL_DELTA_DIVISOR);
    assert!(MIN_DOT_SPACING > 0.0 && MIN_DOT_SPACING < MAX_DOT_SPACING);
    assert!(VELOCITY_EPSILON < MAX_SCROLL_SPEED);
    assert!(SPHERE_GLOW_EXTRA > SPHERE_GLOW);
    // intro must finish in a whole number of frames
    assert_eq!((1.0 / FIRST_LOAD_SPEED).round() as u32, 200);
}

#[test]
fn default_params_mirror_constants() {
    let p = DriverParams::default();
    assert_eq!(p.max_scroll_speed, MAX_SCROLL_SPEED);
    assert_eq!(p.settle_delay_ms, SETTLE_DELAY_MS);
    assert_eq!(p.bottom_threshold, BOTTOM_THRESHOLD);
    assert!(p.play_intro);
    assert!(!p.reversible_time);
}
