//! Normalizes wheel, keyboard, touch and nav-button input into intents.
//!
//! The aggregator never consults the controller directly: every entry point
//! takes the current lock flag and drops input while a transition runs.

use crate::constants::{MIN_SWIPE_DISTANCE_PX, WHEEL_DEBOUNCE_MS};
use std::time::Duration;

/// A user action independent of the device that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    Advance,
    Retreat,
    JumpTo(isize),
    Home,
    End,
}

impl Intent {
    /// Target index for this intent. May fall outside `0..len`; the controller
    /// rejects such targets.
    #[inline]
    pub fn resolve(self, current: usize, len: usize) -> isize {
        match self {
            Intent::Advance => current as isize + 1,
            Intent::Retreat => current as isize - 1,
            Intent::JumpTo(i) => i,
            Intent::Home => 0,
            Intent::End => len as isize - 1,
        }
    }
}

/// Bottom navigation controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavButton {
    Prev,
    Next,
    Dot(usize),
}

#[inline]
pub fn intent_for_key(key: &str) -> Option<Intent> {
    match key {
        "ArrowDown" | "PageDown" | " " => Some(Intent::Advance),
        "ArrowUp" | "PageUp" => Some(Intent::Retreat),
        "Home" => Some(Intent::Home),
        "End" => Some(Intent::End),
        _ => None,
    }
}

#[inline]
pub fn intent_for_nav(button: NavButton) -> Intent {
    match button {
        NavButton::Prev => Intent::Retreat,
        NavButton::Next => Intent::Advance,
        NavButton::Dot(i) => Intent::JumpTo(i as isize),
    }
}

/// Vertical swipe classification: `start_y - end_y` beyond `min_distance`
/// (strictly) maps to Advance when the finger moved up.
#[inline]
pub fn intent_for_swipe(start_y: f32, end_y: f32, min_distance: f32) -> Option<Intent> {
    let delta = start_y - end_y;
    if !delta.is_finite() || delta.abs() <= min_distance {
        return None;
    }
    Some(if delta > 0.0 {
        Intent::Advance
    } else {
        Intent::Retreat
    })
}

#[derive(Clone, Copy, Debug)]
pub struct InputConfig {
    pub wheel_debounce: Duration,
    pub min_swipe_distance: f32,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            wheel_debounce: Duration::from_millis(WHEEL_DEBOUNCE_MS),
            min_swipe_distance: MIN_SWIPE_DISTANCE_PX,
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct WheelGesture {
    accumulated: f32,
    deadline: Duration,
}

#[derive(Debug, Default)]
pub struct InputAggregator {
    config: InputConfig,
    wheel: Option<WheelGesture>,
    touch_start_y: Option<f32>,
}

impl InputAggregator {
    pub fn new(config: InputConfig) -> Self {
        Self {
            config,
            wheel: None,
            touch_start_y: None,
        }
    }

    pub fn config(&self) -> &InputConfig {
        &self.config
    }

    /// Feed one wheel event. Each event pushes the quiet-period deadline
    /// forward so a single fling collapses into one intent.
    pub fn on_wheel(&mut self, delta_y: f32, now: Duration, locked: bool) {
        if locked || !delta_y.is_finite() {
            return;
        }
        let deadline = now + self.config.wheel_debounce;
        match &mut self.wheel {
            Some(g) => {
                g.accumulated += delta_y;
                g.deadline = deadline;
            }
            None => {
                self.wheel = Some(WheelGesture {
                    accumulated: delta_y,
                    deadline,
                });
            }
        }
    }

    /// Emit the pending wheel intent once its quiet period has elapsed.
    pub fn poll(&mut self, now: Duration) -> Option<Intent> {
        let gesture = self.wheel?;
        if now < gesture.deadline {
            return None;
        }
        self.wheel = None;
        if gesture.accumulated > 0.0 {
            Some(Intent::Advance)
        } else if gesture.accumulated < 0.0 {
            Some(Intent::Retreat)
        } else {
            None
        }
    }

    #[inline]
    pub fn wheel_pending(&self) -> bool {
        self.wheel.is_some()
    }

    pub fn on_key(&mut self, key: &str, locked: bool) -> Option<Intent> {
        if locked {
            return None;
        }
        intent_for_key(key)
    }

    pub fn on_touch_start(&mut self, y: f32) {
        self.touch_start_y = Some(y);
    }

    pub fn on_touch_end(&mut self, y: f32, locked: bool) -> Option<Intent> {
        let start = self.touch_start_y.take()?;
        if locked {
            return None;
        }
        intent_for_swipe(start, y, self.config.min_swipe_distance)
    }

    pub fn on_nav_click(&mut self, button: NavButton, locked: bool) -> Option<Intent> {
        if locked {
            return None;
        }
        Some(intent_for_nav(button))
    }

    /// Drop any in-flight gesture.
    pub fn cancel(&mut self) {
        self.wheel = None;
        self.touch_start_y = None;
    }
}
