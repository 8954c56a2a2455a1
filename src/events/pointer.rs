use super::InputWiring;
use crate::dom::Listener;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Wheel events only feed the debounce; the frame loop polls the intent out.
pub fn wire_wheel(window: &web::Window, w: &InputWiring) -> Option<Listener> {
    let w = w.clone();
    Listener::attach(window, "wheel", false, move |ev: web::Event| {
        let Ok(ev) = ev.dyn_into::<web::WheelEvent>() else {
            return;
        };
        ev.prevent_default();
        let locked = w.locked();
        w.input
            .borrow_mut()
            .on_wheel(ev.delta_y() as f32, w.clock.now(), locked);
    })
}

pub fn wire_touch(window: &web::Window, w: &InputWiring) -> Vec<Listener> {
    [wire_touchstart(window, w), wire_touchend(window, w)]
        .into_iter()
        .flatten()
        .collect()
}

fn wire_touchstart(window: &web::Window, w: &InputWiring) -> Option<Listener> {
    let w = w.clone();
    Listener::attach(window, "touchstart", true, move |ev: web::Event| {
        let Ok(ev) = ev.dyn_into::<web::TouchEvent>() else {
            return;
        };
        if let Some(t) = ev.touches().get(0) {
            w.input.borrow_mut().on_touch_start(t.client_y() as f32);
        }
    })
}

fn wire_touchend(window: &web::Window, w: &InputWiring) -> Option<Listener> {
    let w = w.clone();
    Listener::attach(window, "touchend", false, move |ev: web::Event| {
        let Ok(ev) = ev.dyn_into::<web::TouchEvent>() else {
            return;
        };
        let Some(t) = ev.changed_touches().get(0) else {
            return;
        };
        let locked = w.locked();
        let intent = w
            .input
            .borrow_mut()
            .on_touch_end(t.client_y() as f32, locked);
        if let Some(intent) = intent {
            ev.prevent_default();
            log::debug!("[touch] swipe -> {:?}", intent);
            w.dispatch(intent);
        }
    })
}
