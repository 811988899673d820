use crate::events::ListenerGuard;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use web_sys as web;

/// Escape asks the focus machine to close; the frame loop services the flag
/// so close handling shares one code path with scrim clicks.
pub fn wire_escape_close(
    window: &web::Window,
    close_requested: Rc<Cell<bool>>,
) -> ListenerGuard<dyn FnMut(web::KeyboardEvent)> {
    let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        if ev.key() == "Escape" {
            close_requested.set(true);
        }
    }) as Box<dyn FnMut(_)>);
    ListenerGuard::attach(window.as_ref(), "keydown", closure)
}
