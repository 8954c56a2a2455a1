//! Section transition controller.
//!
//! Two states: idle and transitioning (`is_locked`). An accepted intent locks
//! input, hides the card and schedules three timers: the index swap, the card
//! reveal and the unlock. Independently of the lock, every `tick` moves the
//! rig toward the current section's pose.
//!
//! Typical usage:
//! - Construct with `TransitionController::new(registry, config)`
//! - Forward intents with `handle_intent(intent, now)`
//! - Call `tick(now)` once per displayed frame and hand the output to a renderer
//! - Call `teardown()` when the page goes away

use crate::constants::*;
use crate::input::Intent;
use crate::motion::{float_offset, FrameOutput, MotionTuning, Rig, StepSpeeds};
use crate::sections::{CameraPose, PoseMode, Section, SectionPose, SectionRegistry};
use crate::timers::TimerQueue;
use glam::Vec3;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("a section transition is already in flight")]
    Locked,
    #[error("target section {index} is outside 0..{len}")]
    InvalidIndex { index: isize, len: usize },
    #[error("section {0} is already active")]
    AlreadyCurrent(usize),
    #[error("controller has been torn down")]
    TornDown,
    #[error("initial pose does not match the registry's pose mode")]
    ModeMismatch,
}

/// Fixed transition schedule, measured from the accepted intent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransitionTiming {
    pub swap_delay: Duration,
    pub card_show_delay: Duration,
    pub lock_duration: Duration,
}

impl Default for TransitionTiming {
    fn default() -> Self {
        Self {
            swap_delay: Duration::from_millis(SECTION_SWAP_DELAY_MS),
            card_show_delay: Duration::from_millis(CARD_SHOW_DELAY_MS),
            lock_duration: Duration::from_millis(TRANSITION_LOCK_MS),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ControllerConfig {
    pub timing: TransitionTiming,
    pub motion: MotionTuning,
    /// Pose the rig starts from; `None` starts settled on section 0.
    pub initial_pose: Option<SectionPose>,
}

impl ControllerConfig {
    /// Defaults for a deck of the given mode. Model decks start settled on
    /// their first section and use quartic easing.
    pub fn for_mode(mode: PoseMode) -> Self {
        let initial_pose = match mode {
            PoseMode::CameraMoves => Self::default().initial_pose,
            PoseMode::ModelMoves => None,
        };
        Self {
            timing: TransitionTiming::default(),
            motion: MotionTuning::for_mode(mode),
            initial_pose,
        }
    }
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            timing: TransitionTiming::default(),
            motion: MotionTuning::default(),
            initial_pose: Some(SectionPose::Camera(CameraPose {
                position: Vec3::from_array(INITIAL_CAMERA_POSITION),
                target: Vec3::from_array(INITIAL_CAMERA_TARGET),
                fov_degrees: INITIAL_CAMERA_FOV,
            })),
        }
    }
}

/// Mutable controller state. Only the controller writes it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransitionState {
    pub current_index: usize,
    pub previous_index: usize,
    pub is_locked: bool,
    /// Animation progress toward the current section, clamped to \[0, 1\].
    pub progress: f32,
    pub card_visible: bool,
}

impl Default for TransitionState {
    fn default() -> Self {
        Self {
            current_index: 0,
            previous_index: 0,
            is_locked: false,
            progress: 0.0,
            card_visible: true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TimedAction {
    SwapSection(usize),
    ShowCard,
    Unlock,
}

pub struct TransitionController {
    registry: SectionRegistry,
    config: ControllerConfig,
    state: TransitionState,
    rig: Rig,
    timers: TimerQueue<TimedAction>,
    clock: Duration,
    torn_down: bool,
}

impl TransitionController {
    pub fn new(
        registry: SectionRegistry,
        config: ControllerConfig,
    ) -> Result<Self, TransitionError> {
        let start_pose = match config.initial_pose {
            Some(pose) if pose.mode() != registry.mode() => {
                return Err(TransitionError::ModeMismatch)
            }
            Some(pose) => pose,
            None => registry[0].pose,
        };
        let rig = Rig::from_pose(&start_pose);
        log::info!(
            "[transition] controller ready: sections={} mode={:?}",
            registry.len(),
            registry.mode()
        );
        Ok(Self {
            registry,
            config,
            state: TransitionState::default(),
            rig,
            timers: TimerQueue::new(),
            clock: Duration::ZERO,
            torn_down: false,
        })
    }

    #[inline]
    pub fn state(&self) -> &TransitionState {
        &self.state
    }

    #[inline]
    pub fn registry(&self) -> &SectionRegistry {
        &self.registry
    }

    #[inline]
    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    #[inline]
    pub fn is_locked(&self) -> bool {
        self.state.is_locked
    }

    #[inline]
    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    pub fn current_section(&self) -> &Section {
        &self.registry[self.state.current_index]
    }

    #[inline]
    pub fn rig(&self) -> &Rig {
        &self.rig
    }

    #[inline]
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    #[inline]
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Validate and start a transition. Rejections leave state untouched.
    pub fn handle_intent(
        &mut self,
        intent: Intent,
        now: Duration,
    ) -> Result<usize, TransitionError> {
        if self.torn_down {
            return Err(TransitionError::TornDown);
        }
        self.fire_due(now);
        if self.state.is_locked {
            return Err(TransitionError::Locked);
        }
        let len = self.registry.len();
        let target = intent.resolve(self.state.current_index, len);
        if !self.registry.contains(target) {
            return Err(TransitionError::InvalidIndex { index: target, len });
        }
        let target = target as usize;
        if target == self.state.current_index {
            return Err(TransitionError::AlreadyCurrent(target));
        }

        let timing = self.config.timing;
        self.state.is_locked = true;
        self.state.card_visible = false;
        self.timers
            .schedule(now + timing.swap_delay, TimedAction::SwapSection(target));
        self.timers
            .schedule(now + timing.card_show_delay, TimedAction::ShowCard);
        self.timers
            .schedule(now + timing.lock_duration, TimedAction::Unlock);
        log::info!(
            "[transition] {:?}: {} -> {}",
            intent,
            self.state.current_index,
            target
        );
        Ok(target)
    }

    /// Fire due timers, then advance the rig one frame.
    pub fn tick(&mut self, now: Duration) -> FrameOutput {
        self.fire_due(now);

        let progress_step = self.config.motion.progress_step;
        self.state.progress = (self.state.progress + progress_step).clamp(0.0, 1.0);
        let eased = self.config.motion.easing.apply(self.state.progress);
        let slow = self.state.previous_index != self.state.current_index
            && self
                .config
                .motion
                .is_slow_pair(self.state.previous_index, self.state.current_index);
        let speeds = StepSpeeds::compute(&self.config.motion, self.registry.mode(), eased, slow);

        let section = self.current_section();
        let target = section.pose;
        let floating = matches!(target, SectionPose::Model(m) if m.floating);
        self.rig.step(&target, speeds);

        let lift = if floating {
            float_offset(&self.config.motion, now.as_secs_f32())
        } else {
            0.0
        };
        self.rig.output(lift)
    }

    /// Apply every timer due at `now`. Input handlers call this before reading
    /// `is_locked` so the lock reflects the event time, not the last frame.
    pub fn fire_due(&mut self, now: Duration) {
        self.clock = self.clock.max(now);
        for action in self.timers.drain_due(now) {
            self.apply(action);
        }
    }

    /// Cancel every pending timer; further intents are rejected.
    pub fn teardown(&mut self) {
        let cancelled = self.timers.cancel_all();
        self.torn_down = true;
        log::info!("[transition] teardown: cancelled {} pending timers", cancelled);
    }

    fn apply(&mut self, action: TimedAction) {
        match action {
            TimedAction::SwapSection(index) => {
                self.state.previous_index = self.state.current_index;
                self.state.current_index = index;
                self.state.progress = 0.0;
                log::debug!("[transition] section -> {}", index);
            }
            TimedAction::ShowCard => self.state.card_visible = true,
            TimedAction::Unlock => {
                self.state.is_locked = false;
                log::debug!("[transition] unlocked at {:?}", self.clock);
            }
        }
    }
}
