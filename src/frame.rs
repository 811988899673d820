use crate::config::GalleryOptions;
use crate::focus::{CloseOutcome, FocusEvent, FocusMachine};
use crate::input::DragSession;
use crate::motion::{AutoRotate, Inertia};
use crate::overlay::FocusOverlay;
use crate::render::Stage;
use crate::rotation::{ActiveDriver, RotationState};
use crate::viewport;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Per-frame state for the gallery: the three rotation drivers, the focus
/// machine, and the DOM surfaces they steer. Pointer and keyboard closures
/// share the `Rc` handles; everything else is owned here.
pub struct FrameContext {
    pub stage: Stage,
    pub overlay: FocusOverlay,
    pub options: Rc<GalleryOptions>,

    pub rotation: Rc<RefCell<RotationState>>,
    pub driver: Rc<RefCell<ActiveDriver>>,
    pub drag: Rc<RefCell<Option<DragSession>>>,
    pub inertia: Rc<RefCell<Inertia>>,
    pub autorotate: AutoRotate,
    pub focus: FocusMachine,

    pub open_requested: Rc<Cell<Option<usize>>>,
    pub close_requested: Rc<Cell<bool>>,

    pub epoch: Instant,
}

impl FrameContext {
    fn now_ms(&self) -> f64 {
        self.epoch.elapsed().as_secs_f64() * 1000.0
    }

    pub fn frame(&mut self) {
        let now_ms = self.now_ms();

        self.service_focus_requests(now_ms);

        if let Some(event) = self.focus.tick(now_ms) {
            match event {
                FocusEvent::Opened { resize_to } => {
                    if let Some(rect) = resize_to {
                        self.overlay.apply_resize(&rect);
                    }
                }
                FocusEvent::Closed { tile_index } => {
                    self.overlay.finish_close();
                    self.stage.fade_tile_back(tile_index);
                    *self.driver.borrow_mut() = ActiveDriver::AutoRotate;
                    self.autorotate.reset();
                }
            }
        }

        let driver = *self.driver.borrow();
        match driver {
            ActiveDriver::Focused | ActiveDriver::Dragging => {}
            ActiveDriver::Inertia => {
                let finished = {
                    let mut rotation = self.rotation.borrow_mut();
                    !self.inertia.borrow_mut().step(
                        &mut rotation,
                        self.options.max_vertical_rotation_deg,
                    )
                };
                if finished {
                    *self.driver.borrow_mut() = ActiveDriver::AutoRotate;
                    self.autorotate.reset();
                }
            }
            ActiveDriver::AutoRotate | ActiveDriver::None => {
                if driver == ActiveDriver::None {
                    *self.driver.borrow_mut() = ActiveDriver::AutoRotate;
                    self.autorotate.reset();
                }
                self.autorotate
                    .tick(now_ms, &mut self.rotation.borrow_mut());
            }
        }

        self.stage.apply_rotation(&self.rotation.borrow());
    }

    fn service_focus_requests(&mut self, now_ms: f64) {
        if let Some(index) = self.open_requested.take() {
            self.try_open(index, now_ms);
        }
        if self.close_requested.take()
            && self.focus.request_close(now_ms) == CloseOutcome::Accepted
        {
            if let Some(back_to) = self.focus.source_rect() {
                self.overlay.begin_close(&back_to, &self.options);
            }
        }
    }

    fn try_open(&mut self, index: usize, now_ms: f64) {
        let pad = viewport::viewer_pad(self.stage.radius(), self.options.pad_factor);
        let plan = match self.focus.open(
            now_ms,
            index,
            &self.stage,
            self.options.opened_width,
            self.options.opened_height,
            pad,
        ) {
            Ok(Some(plan)) => plan,
            // A session already exists; the request is a no-op.
            Ok(None) => return,
            Err(e) => {
                log::warn!("focus open aborted: {}", e);
                return;
            }
        };
        let Some(tile) = self.stage.tile(index) else {
            return;
        };
        let (source, alt_text) = (tile.placement.source.clone(), tile.placement.alt_text.clone());
        self.stage.set_tile_hidden(index, true);
        self.overlay.open(&plan, &source, &alt_text, &self.options);
        self.inertia.borrow_mut().stop();
        *self.driver.borrow_mut() = ActiveDriver::Focused;
        log::info!("[focus] opening tile {}", index);
    }
}

/// Handle to the running requestAnimationFrame loop. `stop` cancels the
/// pending callback and breaks the closure's self-reference cycle so the
/// whole frame state can be dropped.
pub struct FrameLoop {
    running: Rc<Cell<bool>>,
    raf_id: Rc<Cell<i32>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl FrameLoop {
    pub fn stop(&self) {
        self.running.set(false);
        if let Some(w) = web::window() {
            _ = w.cancel_animation_frame(self.raf_id.get());
        }
        self.tick.borrow_mut().take();
    }
}

/// requestAnimationFrame loop that reschedules itself every frame.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> FrameLoop {
    let running = Rc::new(Cell::new(true));
    let raf_id = Rc::new(Cell::new(0));
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let running_tick = running.clone();
    let raf_id_tick = raf_id.clone();
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !running_tick.get() {
            return;
        }
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            if let Ok(id) = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            ) {
                raf_id_tick.set(id);
            }
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        if let Ok(id) =
            w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref())
        {
            raf_id.set(id);
        }
    }
    FrameLoop { running, raf_id, tick }
}
