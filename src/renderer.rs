use showroom_core::{FrameOutput, Renderer};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsValue;

/// Page-supplied frame callback, shared between the frame loop and the JS
/// handle. Never borrowed across a call into JS, so the callback may swap or
/// clear itself.
#[derive(Clone, Default)]
pub struct CallbackSlot(Rc<RefCell<Option<js_sys::Function>>>);

impl CallbackSlot {
    pub fn set(&self, callback: js_sys::Function) {
        *self.0.borrow_mut() = Some(callback);
        log::info!("[renderer] callback registered");
    }

    pub fn clear(&self) {
        self.0.borrow_mut().take();
    }

    fn get(&self) -> Option<js_sys::Function> {
        self.0.borrow().clone()
    }
}

/// Forwards each frame to the slot's callback as a `Float32Array` of
/// `showroom_core::PACKED_FRAME_LEN` floats. The page owns the 3D scene and
/// any placeholder shown while assets load.
pub struct JsRenderer {
    slot: CallbackSlot,
    warned_missing: bool,
    warned_error: bool,
}

impl JsRenderer {
    pub fn new(slot: CallbackSlot) -> Self {
        Self {
            slot,
            warned_missing: false,
            warned_error: false,
        }
    }
}

impl Renderer for JsRenderer {
    fn apply(&mut self, frame: &FrameOutput) {
        let Some(cb) = self.slot.get() else {
            if !self.warned_missing {
                log::debug!("[renderer] no callback registered; dropping frames");
                self.warned_missing = true;
            }
            return;
        };
        let packed = frame.to_array();
        let array = js_sys::Float32Array::from(&packed[..]);
        if let Err(e) = cb.call1(&JsValue::NULL, &array) {
            if !self.warned_error {
                log::error!("[renderer] callback failed: {:?}", e);
                self.warned_error = true;
            }
        }
    }
}
