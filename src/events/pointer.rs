use crate::config::GalleryOptions;
use crate::events::ListenerGuard;
use crate::input::DragSession;
use crate::motion::Inertia;
use crate::rotation::{ActiveDriver, RotationState};
use glam::DVec2;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Shared handles the pointer closures write into; cloned per listener.
#[derive(Clone)]
pub struct PointerWiring {
    pub root: web::HtmlElement,
    pub options: Rc<GalleryOptions>,
    pub rotation: Rc<RefCell<RotationState>>,
    pub driver: Rc<RefCell<ActiveDriver>>,
    pub drag: Rc<RefCell<Option<DragSession>>>,
    pub inertia: Rc<RefCell<Inertia>>,
    pub open_requested: Rc<Cell<Option<usize>>>,
}

pub type PointerGuard = ListenerGuard<dyn FnMut(web::PointerEvent)>;

pub fn wire_pointer_handlers(window: &web::Window, w: PointerWiring) -> [PointerGuard; 3] {
    [
        wire_pointerdown(&w),
        wire_pointermove(window, &w),
        wire_pointerup(window, &w),
    ]
}

#[inline]
fn event_point(ev: &web::PointerEvent) -> DVec2 {
    DVec2::new(ev.client_x() as f64, ev.client_y() as f64)
}

/// Tile index from the event target, walking up to the nearest tile element.
fn tile_index_from_event(ev: &web::PointerEvent) -> Option<usize> {
    let target = ev.target()?;
    let el = target.dyn_into::<web::Element>().ok()?;
    let tile = el.closest("[data-index]").ok()??;
    tile.get_attribute("data-index")?.parse().ok()
}

fn wire_pointerdown(w: &PointerWiring) -> PointerGuard {
    let w = w.clone();
    let root = w.root.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        // First touch point only; secondary pointers are ignored.
        if !ev.is_primary() || w.drag.borrow().is_some() {
            return;
        }
        if !w.driver.borrow().accepts_drag() {
            return;
        }
        // A fresh drag takes over from any coasting rotation.
        w.inertia.borrow_mut().stop();
        *w.drag.borrow_mut() = Some(DragSession::begin(event_point(&ev), *w.rotation.borrow()));
        *w.driver.borrow_mut() = ActiveDriver::Dragging;
        _ = w.root.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    ListenerGuard::attach(root.as_ref(), "pointerdown", closure)
}

fn wire_pointermove(window: &web::Window, w: &PointerWiring) -> PointerGuard {
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if !ev.is_primary() {
            return;
        }
        let next = w.drag.borrow_mut().as_mut().map(|session| {
            session.update(
                event_point(&ev),
                w.options.drag_sensitivity,
                w.options.max_vertical_rotation_deg,
            )
        });
        if let Some(next) = next {
            *w.rotation.borrow_mut() = next;
        }
    }) as Box<dyn FnMut(_)>);
    ListenerGuard::attach(window.as_ref(), "pointermove", closure)
}

fn wire_pointerup(window: &web::Window, w: &PointerWiring) -> PointerGuard {
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if !ev.is_primary() {
            return;
        }
        let Some(session) = w.drag.borrow_mut().take() else {
            return;
        };
        if session.moved() {
            w.inertia.borrow_mut().start(
                session.release_velocity(w.options.drag_sensitivity),
                w.options.dampening,
            );
            *w.driver.borrow_mut() = ActiveDriver::Inertia;
        } else {
            // A tap: let the focus machine decide on the next frame.
            *w.driver.borrow_mut() = ActiveDriver::None;
            if let Some(index) = tile_index_from_event(&ev) {
                w.open_requested.set(Some(index));
            }
        }
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    ListenerGuard::attach(window.as_ref(), "pointerup", closure)
}
