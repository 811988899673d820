use crate::focus::Rect;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Create a styled `<div>`; `None` only when the document refuses, which the
/// callers treat as a mount failure.
pub fn make_div(document: &web::Document, class_name: &str) -> Option<web::HtmlElement> {
    let el = document.create_element("div").ok()?;
    el.set_class_name(class_name);
    el.dyn_into::<web::HtmlElement>().ok()
}

pub fn make_image(
    document: &web::Document,
    source: &str,
    alt_text: &str,
) -> Option<web::HtmlImageElement> {
    let el = document.create_element("img").ok()?;
    let img = el.dyn_into::<web::HtmlImageElement>().ok()?;
    img.set_src(source);
    img.set_alt(alt_text);
    img.set_draggable(false);
    Some(img)
}

#[inline]
pub fn set_style(el: &web::HtmlElement, prop: &str, value: &str) {
    _ = el.style().set_property(prop, value);
}

/// Measured on-screen rect in CSS pixels; `None` when the element has no
/// layout (zero-sized), which the focus machine treats as unmeasurable.
pub fn element_rect(el: &web::Element) -> Option<Rect> {
    if !el.is_connected() {
        return None;
    }
    let r = el.get_bounding_client_rect();
    if r.width() <= 0.0 || r.height() <= 0.0 {
        return None;
    }
    Some(Rect::new(r.left(), r.top(), r.width(), r.height()))
}

/// Position a fixed-layout element to a screen rect.
pub fn apply_rect(el: &web::HtmlElement, rect: &Rect) {
    set_style(el, "left", &format!("{:.2}px", rect.x));
    set_style(el, "top", &format!("{:.2}px", rect.y));
    set_style(el, "width", &format!("{:.2}px", rect.width));
    set_style(el, "height", &format!("{:.2}px", rect.height));
}
