//! One displayed frame: surface the debounced wheel gesture, tick the
//! controller and derive the overlay view.
//!
//! Shared state is borrowed only while the frame is computed. The renderer
//! runs with nothing borrowed, so it may navigate or tear the showroom down
//! from inside its callback.

use crate::controller::TransitionController;
use crate::input::InputAggregator;
use crate::motion::FrameOutput;
use crate::overlay::{OverlayPresenter, OverlayView};
use crate::Renderer;
use std::cell::RefCell;
use std::time::Duration;

#[derive(Clone, Debug, PartialEq)]
pub struct FrameStep {
    pub output: FrameOutput,
    pub view: OverlayView,
}

pub fn advance_frame(
    controller: &RefCell<TransitionController>,
    input: &RefCell<InputAggregator>,
    presenter: &mut OverlayPresenter,
    now: Duration,
) -> FrameStep {
    let wheel_intent = input.borrow_mut().poll(now);

    let mut controller = controller.borrow_mut();
    if let Some(intent) = wheel_intent {
        if let Err(e) = controller.handle_intent(intent, now) {
            log::debug!("[wheel] {:?} ignored: {}", intent, e);
        }
    }
    let output = controller.tick(now);
    let view = presenter.present(controller.state(), controller.registry(), now);
    FrameStep { output, view }
}

/// Advance one frame and hand its output to `renderer`; returns the overlay
/// view for the caller to apply.
pub fn run_frame<R: Renderer + ?Sized>(
    controller: &RefCell<TransitionController>,
    input: &RefCell<InputAggregator>,
    presenter: &mut OverlayPresenter,
    renderer: &mut R,
    now: Duration,
) -> OverlayView {
    let step = advance_frame(controller, input, presenter, now);
    renderer.apply(&step.output);
    step.view
}
