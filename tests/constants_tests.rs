// Host-side sanity checks for tuning constants and their relationships.

use showroom_core::constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn transition_schedule_is_ordered() {
    assert!(SECTION_SWAP_DELAY_MS > 0);
    assert!(SECTION_SWAP_DELAY_MS < CARD_SHOW_DELAY_MS);
    assert!(CARD_SHOW_DELAY_MS < TRANSITION_LOCK_MS);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn decay_speeds_are_fractions() {
    for s in [
        CAMERA_POSITION_SPEED,
        MODEL_POSITION_SPEED,
        MODEL_ROTATION_SPEED,
        MODEL_SCALE_SPEED,
        PROGRESS_STEP_PER_TICK,
    ] {
        assert!(s > 0.0 && s < 1.0, "speed {s}");
    }
    for f in [
        CAMERA_LOOK_AT_FACTOR,
        CAMERA_FOV_FACTOR,
        SLOW_PAIR_POSITION_FACTOR,
        SLOW_PAIR_ROTATION_FACTOR,
        SLOW_PAIR_SCALE_FACTOR,
    ] {
        assert!(f > 0.0 && f <= 1.0, "factor {f}");
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn rotation_and_scale_trail_position() {
    assert!(MODEL_ROTATION_SPEED < MODEL_POSITION_SPEED);
    assert!(MODEL_SCALE_SPEED < MODEL_POSITION_SPEED);
    assert!(SLOW_PAIR_ROTATION_FACTOR < SLOW_PAIR_POSITION_FACTOR);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn input_and_overlay_windows_are_sane() {
    assert!(WHEEL_DEBOUNCE_MS > 0 && WHEEL_DEBOUNCE_MS < TRANSITION_LOCK_MS);
    assert!(MIN_SWIPE_DISTANCE_PX > 0.0);
    assert!(HINT_TIMEOUT_MS > TRANSITION_LOCK_MS);
    assert!(INITIAL_CAMERA_FOV > 0.0);
}
