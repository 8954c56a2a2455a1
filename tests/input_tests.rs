// Host-side tests for wheel debounce, swipe classification and nav buttons.

use showroom_core::{intent_for_swipe, InputAggregator, InputConfig, Intent, NavButton};
use std::time::Duration;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn aggregator() -> InputAggregator {
    InputAggregator::new(InputConfig::default())
}

#[test]
fn wheel_burst_within_window_collapses_to_one_intent() {
    let mut input = aggregator();
    input.on_wheel(30.0, ms(0), false);
    input.on_wheel(20.0, ms(10), false);
    // deadline moved to 10 + 50
    assert_eq!(input.poll(ms(40)), None);
    assert_eq!(input.poll(ms(59)), None);
    assert_eq!(input.poll(ms(60)), Some(Intent::Advance));
    assert_eq!(input.poll(ms(200)), None);
    assert!(!input.wheel_pending());
}

#[test]
fn wheel_up_emits_retreat() {
    let mut input = aggregator();
    input.on_wheel(-120.0, ms(0), false);
    assert_eq!(input.poll(ms(50)), Some(Intent::Retreat));
}

#[test]
fn wheel_direction_follows_accumulated_delta() {
    let mut input = aggregator();
    input.on_wheel(10.0, ms(0), false);
    input.on_wheel(-40.0, ms(20), false);
    assert_eq!(input.poll(ms(70)), Some(Intent::Retreat));

    input.on_wheel(25.0, ms(100), false);
    input.on_wheel(-25.0, ms(110), false);
    assert_eq!(input.poll(ms(200)), None);
    assert!(!input.wheel_pending());
}

#[test]
fn separated_wheel_gestures_emit_separately() {
    let mut input = aggregator();
    input.on_wheel(50.0, ms(0), false);
    assert_eq!(input.poll(ms(60)), Some(Intent::Advance));
    input.on_wheel(50.0, ms(100), false);
    assert_eq!(input.poll(ms(160)), Some(Intent::Advance));
}

#[test]
fn wheel_is_dropped_while_locked() {
    let mut input = aggregator();
    input.on_wheel(100.0, ms(0), true);
    assert!(!input.wheel_pending());
    assert_eq!(input.poll(ms(500)), None);
}

#[test]
fn short_swipe_emits_nothing() {
    let mut input = aggregator();
    input.on_touch_start(300.0);
    assert_eq!(input.on_touch_end(260.0, false), None);
    input.on_touch_start(300.0);
    assert_eq!(input.on_touch_end(250.0, false), None); // exactly the threshold
}

#[test]
fn long_swipes_map_to_direction() {
    let mut input = aggregator();
    input.on_touch_start(400.0);
    assert_eq!(input.on_touch_end(300.0, false), Some(Intent::Advance));
    input.on_touch_start(300.0);
    assert_eq!(input.on_touch_end(400.0, false), Some(Intent::Retreat));
}

#[test]
fn touch_end_without_start_is_ignored() {
    let mut input = aggregator();
    assert_eq!(input.on_touch_end(0.0, false), None);
    input.on_touch_start(500.0);
    assert_eq!(input.on_touch_end(100.0, false), Some(Intent::Advance));
    // start is consumed by the first end
    assert_eq!(input.on_touch_end(100.0, false), None);
}

#[test]
fn swipe_while_locked_is_dropped() {
    let mut input = aggregator();
    input.on_touch_start(500.0);
    assert_eq!(input.on_touch_end(100.0, true), None);
}

#[test]
fn swipe_classifier_handles_non_finite_input() {
    assert_eq!(intent_for_swipe(f32::NAN, 0.0, 50.0), None);
    assert_eq!(intent_for_swipe(0.0, f32::INFINITY, 50.0), None);
}

#[test]
fn keys_are_dropped_while_locked() {
    let mut input = aggregator();
    assert_eq!(input.on_key("ArrowDown", false), Some(Intent::Advance));
    assert_eq!(input.on_key("ArrowDown", true), None);
}

#[test]
fn nav_buttons_map_to_intents() {
    let mut input = aggregator();
    assert_eq!(input.on_nav_click(NavButton::Prev, false), Some(Intent::Retreat));
    assert_eq!(input.on_nav_click(NavButton::Next, false), Some(Intent::Advance));
    assert_eq!(input.on_nav_click(NavButton::Dot(2), false), Some(Intent::JumpTo(2)));
    assert_eq!(input.on_nav_click(NavButton::Dot(2), true), None);
}

#[test]
fn cancel_drops_pending_gestures() {
    let mut input = aggregator();
    input.on_wheel(100.0, ms(0), false);
    input.on_touch_start(300.0);
    input.cancel();
    assert_eq!(input.poll(ms(1000)), None);
    assert_eq!(input.on_touch_end(0.0, false), None);
}
