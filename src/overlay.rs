use crate::config::GalleryOptions;
use crate::dom;
use crate::events::ListenerGuard;
use crate::focus::{OpenPlan, Rect};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use web_sys as web;

/// The focus viewer subtree: a full-viewport scrim plus a floating frame that
/// animates between the tile's rect and the centred viewer rect. Exists only
/// while a focus session is active.
pub struct FocusOverlay {
    document: web::Document,
    close_requested: Rc<Cell<bool>>,
    scrim: Option<web::HtmlElement>,
    scrim_click: Option<ListenerGuard<dyn FnMut()>>,
    frame: Option<web::HtmlElement>,
    closer: Option<web::HtmlElement>,
    image_source: String,
    alt_text: String,
}

impl FocusOverlay {
    pub fn new(document: web::Document, close_requested: Rc<Cell<bool>>) -> Self {
        Self {
            document,
            close_requested,
            scrim: None,
            scrim_click: None,
            frame: None,
            closer: None,
            image_source: String::new(),
            alt_text: String::new(),
        }
    }

    fn body(&self) -> Option<web::HtmlElement> {
        self.document.body()
    }

    /// Mount the scrim and the floating frame at the tile's rect, then send
    /// both to their end states. The forced style flush between mount and
    /// target is what makes the CSS transitions run.
    pub fn open(&mut self, plan: &OpenPlan, source: &str, alt_text: &str, options: &GalleryOptions) {
        self.teardown();
        self.image_source = source.to_string();
        self.alt_text = alt_text.to_string();

        let Some(body) = self.body() else {
            return;
        };

        if let Some(scrim) = dom::make_div(&self.document, "dome-scrim") {
            dom::set_style(&scrim, "position", "fixed");
            dom::set_style(&scrim, "inset", "0");
            dom::set_style(&scrim, "background", "rgba(0, 0, 0, 0.65)");
            dom::set_style(&scrim, "opacity", "0");
            dom::set_style(
                &scrim,
                "transition",
                &format!("opacity {}ms ease", options.transition_ms),
            );
            let flag = self.close_requested.clone();
            let closure = Closure::wrap(Box::new(move || {
                flag.set(true);
            }) as Box<dyn FnMut()>);
            self.scrim_click = Some(ListenerGuard::attach(scrim.as_ref(), "click", closure));
            _ = body.append_child(&scrim);
            self.scrim = Some(scrim);
        }

        if let Some(frame) = self.build_frame(&plan.source_rect, options, 0.35) {
            _ = body.append_child(&frame);
            _ = frame.offset_width();
            dom::apply_rect(&frame, &plan.dest_rect);
            dom::set_style(&frame, "opacity", "1");
            self.frame = Some(frame);
        }
        if let Some(scrim) = &self.scrim {
            dom::set_style(scrim, "opacity", "1");
        }
    }

    /// Secondary sub-step: re-centre at the explicitly configured size.
    pub fn apply_resize(&self, rect: &Rect) {
        if let Some(frame) = &self.frame {
            dom::apply_rect(frame, rect);
        }
    }

    /// Snapshot the frame's current visual into a transient closing element
    /// and animate it back to the tile's original rect.
    pub fn begin_close(&mut self, back_to: &Rect, options: &GalleryOptions) {
        let current = self
            .frame
            .as_ref()
            .and_then(|f| dom::element_rect(f.as_ref()));
        if let Some(frame) = self.frame.take() {
            frame.remove();
        }
        let Some(body) = self.body() else {
            return;
        };
        let Some(current) = current else {
            // Nothing to animate from; fall through to a plain fade of the scrim.
            if let Some(scrim) = &self.scrim {
                dom::set_style(scrim, "opacity", "0");
            }
            return;
        };
        if let Some(closer) = self.build_frame(&current, options, 1.0) {
            closer.set_class_name("dome-closer");
            _ = body.append_child(&closer);
            _ = closer.offset_width();
            dom::apply_rect(&closer, back_to);
            dom::set_style(&closer, "opacity", "0");
            self.closer = Some(closer);
        }
        if let Some(scrim) = &self.scrim {
            dom::set_style(scrim, "opacity", "0");
        }
    }

    /// Closing animation finished; drop the whole subtree.
    pub fn finish_close(&mut self) {
        self.teardown();
    }

    pub fn teardown(&mut self) {
        self.scrim_click = None;
        if let Some(el) = self.scrim.take() {
            el.remove();
        }
        if let Some(el) = self.frame.take() {
            el.remove();
        }
        if let Some(el) = self.closer.take() {
            el.remove();
        }
    }

    fn build_frame(
        &self,
        rect: &Rect,
        options: &GalleryOptions,
        opacity: f64,
    ) -> Option<web::HtmlElement> {
        let frame = dom::make_div(&self.document, "dome-frame")?;
        dom::set_style(&frame, "position", "fixed");
        dom::apply_rect(&frame, rect);
        dom::set_style(&frame, "overflow", "hidden");
        dom::set_style(
            &frame,
            "border-radius",
            &format!("{}px", options.opened_radius_px),
        );
        dom::set_style(&frame, "opacity", &format!("{}", opacity));
        dom::set_style(
            &frame,
            "transition",
            &format!(
                "left {0}ms ease, top {0}ms ease, width {0}ms ease, height {0}ms ease, opacity {0}ms ease",
                options.transition_ms
            ),
        );
        let image = dom::make_image(&self.document, &self.image_source, &self.alt_text)?;
        let img_el: &web::HtmlElement = image.as_ref();
        dom::set_style(img_el, "width", "100%");
        dom::set_style(img_el, "height", "100%");
        dom::set_style(img_el, "object-fit", "cover");
        dom::set_style(img_el, "pointer-events", "none");
        _ = frame.append_child(image.as_ref());
        Some(frame)
    }
}
