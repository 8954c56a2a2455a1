use super::InputWiring;
use crate::constants::{NAV_DOT_PREFIX, NAV_NEXT_ID, NAV_PREV_ID};
use crate::dom::{self, Listener};
use showroom_core::NavButton;
use web_sys as web;

fn on_click(w: &InputWiring, button: NavButton) {
    let locked = w.locked();
    let intent = w.input.borrow_mut().on_nav_click(button, locked);
    if let Some(intent) = intent {
        w.dispatch(intent);
    }
}

/// Prev/next arrows plus one dot per section (built by `overlay::build_nav_dots`).
pub fn wire_nav_buttons(document: &web::Document, w: &InputWiring, dots: usize) -> Vec<Listener> {
    let mut listeners = Vec::with_capacity(dots + 2);
    let wp = w.clone();
    listeners.extend(dom::add_click_listener(document, NAV_PREV_ID, move || {
        on_click(&wp, NavButton::Prev)
    }));
    let wn = w.clone();
    listeners.extend(dom::add_click_listener(document, NAV_NEXT_ID, move || {
        on_click(&wn, NavButton::Next)
    }));
    for i in 0..dots {
        let wd = w.clone();
        listeners.extend(dom::add_click_listener(
            document,
            &format!("{NAV_DOT_PREFIX}{i}"),
            move || on_click(&wd, NavButton::Dot(i)),
        ));
    }
    listeners
}
