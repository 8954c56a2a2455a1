use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A DOM event listener; dropping it removes the handler from its target.
pub struct Listener {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub fn attach(
        target: &web::EventTarget,
        kind: &'static str,
        passive: bool,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Option<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        let opts = web::AddEventListenerOptions::new();
        opts.set_passive(passive);
        if let Err(e) = target.add_event_listener_with_callback_and_add_event_listener_options(
            kind,
            closure.as_ref().unchecked_ref(),
            &opts,
        ) {
            log::warn!("[dom] could not listen for {kind}: {:?}", e);
            return None;
        }
        Some(Self {
            target: target.clone(),
            kind,
            closure,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}

pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) -> Option<Listener> {
    let Some(el) = document.get_element_by_id(element_id) else {
        log::warn!("[dom] missing #{element_id}; click handler not wired");
        return None;
    };
    Listener::attach(&el, "click", false, move |_| handler())
}

#[inline]
pub fn set_text(document: &web::Document, element_id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        el.set_text_content(Some(text));
    }
}

#[inline]
pub fn set_class(el: &web::Element, class: &str, on: bool) {
    _ = el.class_list().toggle_with_force(class, on);
}

#[inline]
pub fn set_css_var(el: &web::Element, name: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
        _ = html.style().set_property(name, value);
    }
}

#[inline]
pub fn set_disabled(el: &web::Element, disabled: bool) {
    if disabled {
        _ = el.set_attribute("disabled", "");
    } else {
        _ = el.remove_attribute("disabled");
    }
}

#[inline]
pub fn set_shown(el: &web::Element, shown: bool) {
    if shown {
        _ = el.set_attribute("style", "");
    } else {
        _ = el.set_attribute("style", "display:none");
    }
}

/// True when the page was opened with the given query fragment, e.g. `mode=model`.
pub fn query_has(fragment: &str) -> bool {
    web::window()
        .and_then(|w| w.location().search().ok())
        .map(|s| s.trim_start_matches('?').split('&').any(|kv| kv == fragment))
        .unwrap_or(false)
}
