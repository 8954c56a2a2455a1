#![cfg(target_arch = "wasm32")]
use showroom_core::{
    showroom, InputAggregator, InputConfig, Intent, OverlayConfig, OverlayPresenter, PoseMode,
    TransitionController,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;

mod clock;
mod constants;
mod dom;
mod events;
mod frame;
mod overlay;
mod renderer;

use clock::Clock;
use dom::Listener;
use renderer::{CallbackSlot, JsRenderer};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("showroom-web starting");
    Ok(())
}

/// Handle returned to the page by `mount()`.
#[wasm_bindgen]
pub struct ShowroomHandle {
    controller: Rc<RefCell<TransitionController>>,
    input: Rc<RefCell<InputAggregator>>,
    renderer: CallbackSlot,
    running: Rc<Cell<bool>>,
    clock: Clock,
    listeners: RefCell<Vec<Listener>>,
}

#[wasm_bindgen]
impl ShowroomHandle {
    /// Register `fn(Float32Array)` to receive every frame.
    pub fn set_renderer(&self, callback: js_sys::Function) {
        self.renderer.set(callback);
    }

    /// Request a section; returns false when the request is rejected.
    pub fn go_to(&self, index: i32) -> bool {
        self.send(Intent::JumpTo(index as isize))
    }

    pub fn next(&self) -> bool {
        self.send(Intent::Advance)
    }

    pub fn prev(&self) -> bool {
        self.send(Intent::Retreat)
    }

    pub fn current_index(&self) -> u32 {
        self.controller.borrow().current_index() as u32
    }

    pub fn section_count(&self) -> u32 {
        self.controller.borrow().registry().len() as u32
    }

    pub fn is_locked(&self) -> bool {
        self.controller.borrow().is_locked()
    }

    /// Stop the frame loop, detach input listeners and cancel pending
    /// transition timers. Safe to call from inside the frame callback.
    pub fn teardown(&self) {
        self.running.set(false);
        let detached = self.listeners.take().len();
        self.input.borrow_mut().cancel();
        self.controller.borrow_mut().teardown();
        self.renderer.clear();
        log::info!("[api] teardown: detached {} listeners", detached);
    }
}

impl ShowroomHandle {
    fn send(&self, intent: Intent) -> bool {
        let now = self.clock.now();
        match self.controller.borrow_mut().handle_intent(intent, now) {
            Ok(_) => true,
            Err(e) => {
                log::debug!("[api] {:?} ignored: {}", intent, e);
                false
            }
        }
    }
}

/// Build the controller, wire input and overlay, and start the frame loop.
#[wasm_bindgen]
pub fn mount() -> Result<ShowroomHandle, JsValue> {
    init().map_err(|e| JsValue::from_str(&format!("{e:#}")))
}

fn init() -> anyhow::Result<ShowroomHandle> {
    let window = web_sys::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let mode = if dom::query_has(constants::MODE_QUERY_MODEL) {
        PoseMode::ModelMoves
    } else {
        PoseMode::CameraMoves
    };
    let registry = showroom::registry(mode)?;
    let config = showroom::controller_config(mode);
    let controller = TransitionController::new(registry, config)?;
    let dots = controller.registry().len();

    overlay::build_nav_dots(&document, controller.registry());

    let clock = Clock::start();
    let controller = Rc::new(RefCell::new(controller));
    let input = Rc::new(RefCell::new(InputAggregator::new(InputConfig::default())));
    let renderer = CallbackSlot::default();
    let running = Rc::new(Cell::new(true));

    let wiring = events::InputWiring {
        controller: controller.clone(),
        input: input.clone(),
        clock,
    };
    let mut listeners = Vec::new();
    listeners.extend(events::wire_keydown(&window, &wiring));
    listeners.extend(events::wire_wheel(&window, &wiring));
    listeners.extend(events::wire_touch(&window, &wiring));
    listeners.extend(events::wire_nav_buttons(&document, &wiring, dots));

    let overlay_config = OverlayConfig::default();
    overlay::set_card_fade(&document, overlay_config.card_fade.as_millis());
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        controller: controller.clone(),
        input: input.clone(),
        renderer: JsRenderer::new(renderer.clone()),
        presenter: OverlayPresenter::new(overlay_config, clock.now()),
        document: document.clone(),
        clock,
        running: running.clone(),
        last_view: None,
    }));
    frame::start_loop(frame_ctx);
    log::info!("[init] mounted {:?} tour with {} sections", mode, dots);

    Ok(ShowroomHandle {
        controller,
        input,
        renderer,
        running,
        clock,
        listeners: RefCell::new(listeners),
    })
}
