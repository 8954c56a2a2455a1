use crate::clock::Clock;
use crate::overlay;
use crate::renderer::JsRenderer;
use showroom_core::{
    run_frame, InputAggregator, OverlayPresenter, OverlayView, TransitionController,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub controller: Rc<RefCell<TransitionController>>,
    pub input: Rc<RefCell<InputAggregator>>,
    pub renderer: JsRenderer,
    pub presenter: OverlayPresenter,
    pub document: web::Document,
    pub clock: Clock,
    pub running: Rc<Cell<bool>>,
    pub last_view: Option<OverlayView>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = self.clock.now();
        let view = run_frame(
            &self.controller,
            &self.input,
            &mut self.presenter,
            &mut self.renderer,
            now,
        );

        if self.last_view.as_ref() != Some(&view) {
            overlay::apply(&self.document, &view, self.last_view.as_ref());
            self.last_view = Some(view);
        }
    }
}

/// Drive `frame()` from `requestAnimationFrame` until `running` is cleared.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !frame_ctx_tick.borrow().running.get() {
            log::info!("[frame] loop stopped");
            // drop our own closure to break the Rc cycle
            let _ = tick_clone.borrow_mut().take();
            return;
        }
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
