use crate::constants::*;
use crate::dom;
use showroom_core::{OverlayView, SectionRegistry};
use web_sys as web;

/// Build one dot button per section inside `#nav-dots`.
pub fn build_nav_dots(document: &web::Document, registry: &SectionRegistry) {
    let Some(container) = document.get_element_by_id(NAV_DOTS_ID) else {
        log::warn!("[overlay] missing #{NAV_DOTS_ID}; section dots disabled");
        return;
    };
    container.set_inner_html("");
    for (i, section) in registry.iter().enumerate() {
        let Ok(button) = document.create_element("button") else {
            continue;
        };
        button.set_id(&format!("{NAV_DOT_PREFIX}{i}"));
        _ = button.set_attribute("aria-label", &section.title);
        button.set_text_content(Some(&section.icon));
        _ = container.append_child(&button);
    }
}

/// Publish the card fade duration to the stylesheet.
pub fn set_card_fade(document: &web::Document, fade_ms: u128) {
    if let Some(card) = document.get_element_by_id(CARD_ID) {
        dom::set_css_var(&card, CARD_FADE_VAR, &format!("{fade_ms}ms"));
    }
}

/// Apply `view`, touching only what differs from `prev`.
pub fn apply(document: &web::Document, view: &OverlayView, prev: Option<&OverlayView>) {
    let card = &view.card;
    let content_changed = prev.map_or(true, |p| {
        p.card.title != card.title
            || p.card.description != card.description
            || p.card.icon != card.icon
            || p.card.accent_color != card.accent_color
    });
    if content_changed {
        dom::set_text(document, CARD_TITLE_ID, &card.title);
        dom::set_text(document, CARD_DESCRIPTION_ID, &card.description);
        dom::set_text(document, CARD_ICON_ID, &card.icon);
    }

    if let Some(el) = document.get_element_by_id(CARD_ID) {
        if content_changed {
            dom::set_css_var(&el, ACCENT_VAR, &card.accent_color);
        }
        if prev.map_or(true, |p| p.card.visible != card.visible) {
            dom::set_class(&el, VISIBLE_CLASS, card.visible);
        }
    }

    if prev.map_or(true, |p| p.hint_visible != view.hint_visible) {
        if let Some(el) = document.get_element_by_id(HINT_ID) {
            dom::set_shown(&el, view.hint_visible);
        }
    }

    let nav = view.nav;
    if prev.map_or(true, |p| p.nav != nav) {
        if let Some(el) = document.get_element_by_id(NAV_PREV_ID) {
            dom::set_disabled(&el, !nav.can_prev);
        }
        if let Some(el) = document.get_element_by_id(NAV_NEXT_ID) {
            dom::set_disabled(&el, !nav.can_next);
        }
        for i in 0..nav.dots {
            if let Some(el) = document.get_element_by_id(&format!("{NAV_DOT_PREFIX}{i}")) {
                dom::set_class(&el, ACTIVE_CLASS, i == nav.active);
            }
        }
    }
}
