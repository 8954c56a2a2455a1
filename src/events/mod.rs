pub mod keyboard;
pub mod nav;
pub mod pointer;

pub use keyboard::wire_keydown;
pub use nav::wire_nav_buttons;
pub use pointer::{wire_touch, wire_wheel};

use crate::clock::Clock;
use showroom_core::{InputAggregator, Intent, TransitionController};
use std::cell::RefCell;
use std::rc::Rc;

/// Handles shared by every input listener.
#[derive(Clone)]
pub struct InputWiring {
    pub controller: Rc<RefCell<TransitionController>>,
    pub input: Rc<RefCell<InputAggregator>>,
    pub clock: Clock,
}

impl InputWiring {
    /// Lock state at the event's time; due timers fire first.
    pub fn locked(&self) -> bool {
        let mut controller = self.controller.borrow_mut();
        controller.fire_due(self.clock.now());
        controller.is_locked()
    }

    /// Forward an intent; rejections are expected and only logged.
    pub fn dispatch(&self, intent: Intent) {
        let now = self.clock.now();
        let result = self.controller.borrow_mut().handle_intent(intent, now);
        if let Err(e) = result {
            log::debug!("[input] {:?} ignored: {}", intent, e);
        }
    }
}
