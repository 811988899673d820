pub mod keyboard;
pub mod pointer;

pub use keyboard::wire_escape_close;
pub use pointer::{wire_pointer_handlers, PointerWiring};

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A registered DOM listener that detaches itself when dropped, so unmounting
/// the gallery leaves nothing behind on `window` or the root element.
pub struct ListenerGuard<T: ?Sized> {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<T>,
}

impl<T: ?Sized> ListenerGuard<T> {
    pub fn attach(target: &web::EventTarget, event: &'static str, closure: Closure<T>) -> Self {
        _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        Self {
            target: target.clone(),
            event,
            closure,
        }
    }
}

impl<T: ?Sized> Drop for ListenerGuard<T> {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}
