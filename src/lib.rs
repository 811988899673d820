#![cfg(target_arch = "wasm32")]
//! Spherical image gallery: tiles arranged on the inner surface of a virtual
//! sphere, rotated by pointer drag with inertia, auto-rotating when idle,
//! with a FLIP-style focus viewer on tile selection.
//!
//! The host page provides a `#gallery-host` element whose `<img>` children
//! become the tile pool; everything else is self-contained.

use instant::Instant;
use std::any::Any;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod config;
mod constants;
mod dom;
mod error;
mod events;
mod focus;
mod frame;
mod geometry;
mod input;
mod motion;
mod overlay;
mod render;
mod rotation;
mod viewport;

pub use config::{FitBasis, GalleryOptions, ImageDescriptor};
pub use error::GalleryError;

const HOST_ID: &str = "gallery-host";

/// A mounted gallery. Dropping it stops the frame loop, detaches every
/// window/root listener and removes the gallery subtree from the host.
struct Gallery {
    frame_loop: frame::FrameLoop,
    listeners: Vec<Box<dyn Any>>,
    frame_ctx: Rc<RefCell<frame::FrameContext>>,
}

impl Drop for Gallery {
    fn drop(&mut self) {
        self.frame_loop.stop();
        self.listeners.clear();
        let mut ctx = self.frame_ctx.borrow_mut();
        ctx.focus.abort();
        ctx.overlay.teardown();
        ctx.stage.root.remove();
    }
}

thread_local! {
    static ACTIVE: RefCell<Option<Gallery>> = RefCell::new(None);
}

/// Tear down the mounted gallery, if any.
#[wasm_bindgen]
pub fn unmount() {
    let gallery = ACTIVE.with(|slot| slot.borrow_mut().take());
    drop(gallery);
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("dome-gallery starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let host = document
        .get_element_by_id(HOST_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", HOST_ID))?;
    let host: web::HtmlElement = host
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let images = collect_images(&host);
    let options = Rc::new(options_from_dataset(&host));
    options.validate(&images)?;

    let placements = geometry::build_placements(&images, options.segments)?;
    log::info!(
        "[gallery] {} images over {} placements ({} segments)",
        images.len(),
        placements.len(),
        options.segments
    );

    let stage = render::Stage::build(&document, host, &placements, &options)?;
    stage.resize(&options);

    // Shared interaction state
    let rotation = Rc::new(RefCell::new(rotation::RotationState::default()));
    let driver = Rc::new(RefCell::new(rotation::ActiveDriver::None));
    let drag = Rc::new(RefCell::new(None));
    let inertia = Rc::new(RefCell::new(motion::Inertia::default()));
    let open_requested: Rc<Cell<Option<usize>>> = Rc::new(Cell::new(None));
    let close_requested = Rc::new(Cell::new(false));

    let mut listeners: Vec<Box<dyn Any>> = Vec::new();
    listeners.push(Box::new(wire_host_resize(&window, &stage, options.clone())));
    for guard in events::wire_pointer_handlers(
        &window,
        events::PointerWiring {
            root: stage.root.clone(),
            options: options.clone(),
            rotation: rotation.clone(),
            driver: driver.clone(),
            drag: drag.clone(),
            inertia: inertia.clone(),
            open_requested: open_requested.clone(),
        },
    ) {
        listeners.push(Box::new(guard));
    }
    listeners.push(Box::new(events::wire_escape_close(
        &window,
        close_requested.clone(),
    )));

    let overlay = overlay::FocusOverlay::new(document.clone(), close_requested.clone());
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        overlay,
        focus: focus::FocusMachine::new(options.transition_ms),
        stage,
        options,
        rotation,
        driver,
        drag,
        inertia,
        autorotate: motion::AutoRotate::default(),
        open_requested,
        close_requested,
        epoch: Instant::now(),
    }));
    let frame_loop = frame::start_loop(frame_ctx.clone());

    // Replacing a previous mount tears the old one down.
    ACTIVE.with(|slot| {
        *slot.borrow_mut() = Some(Gallery {
            frame_loop,
            listeners,
            frame_ctx,
        })
    });

    Ok(())
}

/// Harvest the tile pool from the host's existing `<img>` children. Content
/// loading stays the page's concern; the gallery only reads descriptors.
fn collect_images(host: &web::HtmlElement) -> Vec<config::ImageDescriptor> {
    let mut images = Vec::new();
    let imgs = host.get_elements_by_tag_name("img");
    for i in 0..imgs.length() {
        let Some(el) = imgs.item(i) else { continue };
        let Ok(img) = el.dyn_into::<web::HtmlImageElement>() else {
            continue;
        };
        let source = img.src();
        if source.is_empty() {
            continue;
        }
        images.push(config::ImageDescriptor {
            source,
            alt_text: img.alt(),
        });
    }
    images
}

/// Optional overrides via `data-*` attributes on the host element; anything
/// absent or unparsable keeps its default.
fn options_from_dataset(host: &web::HtmlElement) -> config::GalleryOptions {
    let mut options = config::GalleryOptions::default();
    let attr = |name: &str| host.get_attribute(name);
    if let Some(v) = attr("data-segments").and_then(|v| v.parse().ok()) {
        options.segments = v;
    }
    if let Some(v) = attr("data-fit").and_then(|v| v.parse().ok()) {
        options.fit = v;
    }
    if let Some(v) = attr("data-fit-basis").and_then(|v| config::FitBasis::parse(&v)) {
        options.fit_basis = v;
    }
    if let Some(v) = attr("data-drag-sensitivity").and_then(|v| v.parse().ok()) {
        options.drag_sensitivity = v;
    }
    if let Some(v) = attr("data-max-vertical").and_then(|v| v.parse().ok()) {
        options.max_vertical_rotation_deg = v;
    }
    if let Some(v) = attr("data-transition-ms").and_then(|v| v.parse().ok()) {
        options.transition_ms = v;
    }
    if let Some(v) = attr("data-dampening").and_then(|v| v.parse().ok()) {
        options.dampening = v;
    }
    if let Some(v) = attr("data-opened-width").and_then(|v| v.parse().ok()) {
        options.opened_width = Some(v);
    }
    if let Some(v) = attr("data-opened-height").and_then(|v| v.parse().ok()) {
        options.opened_height = Some(v);
    }
    if let Some(v) = attr("data-grayscale").and_then(|v| v.parse().ok()) {
        options.grayscale = v;
    }
    options
}

/// Keep the sphere radius in step with the host's size.
fn wire_host_resize(
    window: &web::Window,
    stage: &render::Stage,
    options: Rc<config::GalleryOptions>,
) -> events::ListenerGuard<dyn FnMut()> {
    let host = stage.host.clone();
    let root = stage.root.clone();
    let radius = stage.radius_handle();
    let closure = Closure::wrap(Box::new(move || {
        render::sync_stage_size(&host, &root, &radius, &options);
    }) as Box<dyn FnMut()>);
    events::ListenerGuard::attach(window.as_ref(), "resize", closure)
}
