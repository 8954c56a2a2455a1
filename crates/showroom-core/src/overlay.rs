//! View model for the description card, scroll hint and bottom navigation.
//!
//! Pure data: the web front-end diffs successive `OverlayView`s and touches
//! the DOM only where something changed.

use crate::constants::{CARD_FADE_MS, HINT_TIMEOUT_MS};
use crate::controller::TransitionState;
use crate::sections::SectionRegistry;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OverlayConfig {
    pub hint_timeout: Duration,
    /// Duration of the card's slide/fade; consumed by the stylesheet.
    pub card_fade: Duration,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            hint_timeout: Duration::from_millis(HINT_TIMEOUT_MS),
            card_fade: Duration::from_millis(CARD_FADE_MS),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CardView {
    pub title: String,
    pub description: String,
    pub icon: String,
    pub accent_color: String,
    pub visible: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavView {
    pub can_prev: bool,
    pub can_next: bool,
    pub active: usize,
    pub dots: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct OverlayView {
    pub card: CardView,
    pub hint_visible: bool,
    pub nav: NavView,
}

#[derive(Debug)]
pub struct OverlayPresenter {
    config: OverlayConfig,
    started_at: Duration,
    hint_timed_out: bool,
}

impl OverlayPresenter {
    pub fn new(config: OverlayConfig, now: Duration) -> Self {
        Self {
            config,
            started_at: now,
            hint_timed_out: false,
        }
    }

    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    #[inline]
    pub fn hint_timed_out(&self) -> bool {
        self.hint_timed_out
    }

    /// The hint only shows on the first section, and goes away for good once
    /// it times out.
    pub fn present(
        &mut self,
        state: &TransitionState,
        registry: &SectionRegistry,
        now: Duration,
    ) -> OverlayView {
        if !self.hint_timed_out && now.saturating_sub(self.started_at) >= self.config.hint_timeout {
            self.hint_timed_out = true;
            log::debug!("[overlay] scroll hint timed out");
        }

        let section = &registry[state.current_index];
        OverlayView {
            card: CardView {
                title: section.title.clone(),
                description: section.description.clone(),
                icon: section.icon.clone(),
                accent_color: section.color.clone(),
                visible: state.card_visible,
            },
            hint_visible: !self.hint_timed_out && state.current_index == 0,
            nav: NavView {
                can_prev: state.current_index > 0,
                can_next: state.current_index < registry.last_index(),
                active: state.current_index,
                dots: registry.len(),
            },
        }
    }
}
