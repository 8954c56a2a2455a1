// Per-frame driver: wheel polling, ticking and renderer hand-off with shared
// state that the renderer itself may touch.

use showroom_core::showroom;
use showroom_core::{
    advance_frame, run_frame, FrameOutput, InputAggregator, InputConfig, Intent, OverlayConfig,
    OverlayPresenter, PoseMode, Renderer, TransitionController, TransitionError,
};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

struct Shared {
    controller: Rc<RefCell<TransitionController>>,
    input: Rc<RefCell<InputAggregator>>,
    presenter: OverlayPresenter,
}

fn shared() -> Shared {
    let mode = PoseMode::CameraMoves;
    let controller = TransitionController::new(
        showroom::registry(mode).unwrap(),
        showroom::controller_config(mode),
    )
    .unwrap();
    Shared {
        controller: Rc::new(RefCell::new(controller)),
        input: Rc::new(RefCell::new(InputAggregator::new(InputConfig::default()))),
        presenter: OverlayPresenter::new(OverlayConfig::default(), ms(0)),
    }
}

/// Navigates on the first frame and tears down on the third, from inside
/// `apply`, the way a page callback can.
struct MeddlingRenderer {
    controller: Rc<RefCell<TransitionController>>,
    input: Rc<RefCell<InputAggregator>>,
    frames: Vec<FrameOutput>,
    now: Duration,
}

impl Renderer for MeddlingRenderer {
    fn apply(&mut self, frame: &FrameOutput) {
        self.frames.push(*frame);
        match self.frames.len() {
            1 => {
                let result = self
                    .controller
                    .borrow_mut()
                    .handle_intent(Intent::JumpTo(2), self.now);
                assert_eq!(result, Ok(2));
            }
            3 => {
                self.input.borrow_mut().cancel();
                self.controller.borrow_mut().teardown();
            }
            _ => {}
        }
    }
}

#[test]
fn renderer_may_reenter_shared_state() {
    let mut s = shared();
    let mut renderer = MeddlingRenderer {
        controller: s.controller.clone(),
        input: s.input.clone(),
        frames: Vec::new(),
        now: ms(0),
    };
    for t in [0, 16, 32, 150] {
        renderer.now = ms(t);
        run_frame(&s.controller, &s.input, &mut s.presenter, &mut renderer, ms(t));
    }
    assert_eq!(renderer.frames.len(), 4);
    let c = s.controller.borrow();
    assert!(c.is_torn_down());
    assert_eq!(c.pending_timers(), 0);
    // torn down before the swap at 100 ms
    assert_eq!(c.current_index(), 0);
}

#[test]
fn debounced_wheel_fires_from_the_frame() {
    let mut s = shared();
    s.input.borrow_mut().on_wheel(40.0, ms(0), false);
    s.input.borrow_mut().on_wheel(30.0, ms(10), false);

    advance_frame(&s.controller, &s.input, &mut s.presenter, ms(16));
    assert!(!s.controller.borrow().is_locked());

    let step = advance_frame(&s.controller, &s.input, &mut s.presenter, ms(64));
    assert!(s.controller.borrow().is_locked());
    assert!(!step.view.card.visible);
    assert!(!s.input.borrow().wheel_pending());

    let step = advance_frame(&s.controller, &s.input, &mut s.presenter, ms(200));
    assert_eq!(s.controller.borrow().current_index(), 1);
    assert_eq!(step.view.nav.active, 1);
    assert!(!step.view.hint_visible);
}

#[test]
fn wheel_during_lock_is_dropped_not_queued() {
    let mut s = shared();
    s.controller
        .borrow_mut()
        .handle_intent(Intent::Advance, ms(0))
        .unwrap();
    let locked = s.controller.borrow().is_locked();
    s.input.borrow_mut().on_wheel(50.0, ms(20), locked);
    advance_frame(&s.controller, &s.input, &mut s.presenter, ms(100));
    advance_frame(&s.controller, &s.input, &mut s.presenter, ms(1300));
    assert_eq!(s.controller.borrow().current_index(), 1);
    assert_eq!(
        s.controller.borrow_mut().handle_intent(Intent::Retreat, ms(1300)),
        Ok(0)
    );
    assert_eq!(
        s.controller.borrow_mut().handle_intent(Intent::Advance, ms(1301)),
        Err(TransitionError::Locked)
    );
}
