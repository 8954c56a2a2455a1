use super::InputWiring;
use crate::dom::Listener;
use showroom_core::intent_for_key;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_keydown(ev: &web::KeyboardEvent, w: &InputWiring) {
    let key = ev.key();
    if intent_for_key(&key).is_none() {
        return;
    }
    // navigation keys never scroll the page, even mid-transition
    ev.prevent_default();
    let locked = w.locked();
    let intent = w.input.borrow_mut().on_key(&key, locked);
    if let Some(intent) = intent {
        w.dispatch(intent);
    }
}

pub fn wire_keydown(window: &web::Window, w: &InputWiring) -> Option<Listener> {
    let w = w.clone();
    Listener::attach(window, "keydown", false, move |ev: web::Event| {
        if let Ok(ev) = ev.dyn_into::<web::KeyboardEvent>() {
            handle_keydown(&ev, &w);
        }
    })
}
