use wasm_bindgen::JsCast;
use web_sys as web;

use crate::core::constants::FLASH_DURATION_MS;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

#[inline]
pub fn window_inner_size() -> (f32, f32) {
    let Some(w) = web::window() else {
        return (0.0, 0.0);
    };
    let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (width as f32, height as f32)
}

/// Smooth-scroll the page so `element_id` lands at the top, nudged by
/// `offset_px`. A missing element is a silent no-op.
pub fn scroll_to_section(document: &web::Document, element_id: &str, offset_px: f32) {
    let Some(el) = document.get_element_by_id(element_id) else {
        return;
    };
    let Some(window) = web::window() else {
        return;
    };
    let page_y = window.page_y_offset().unwrap_or(0.0);
    let y = el.get_bounding_client_rect().top() + page_y + offset_px as f64;
    let opts = web::ScrollToOptions::new();
    opts.set_top(y);
    opts.set_behavior(web::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&opts);
}

/// Run a closure once after `delay_ms`.
pub fn set_timeout(f: impl FnOnce() + 'static, delay_ms: u32) {
    if let Some(window) = web::window() {
        let cb = wasm_bindgen::closure::Closure::once_into_js(f);
        _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.unchecked_ref(),
            delay_ms as i32,
        );
    }
}

fn root_style() -> Option<web::CssStyleDeclaration> {
    window_document()
        .and_then(|d| d.document_element())
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
        .map(|el| el.style())
}

/// Invert the whole document for one flash interval, then restore.
pub fn flash_invert() {
    if let Some(style) = root_style() {
        _ = style.set_property("filter", "invert(1)");
    }
    set_timeout(clear_invert, FLASH_DURATION_MS);
}

pub fn clear_invert() {
    if let Some(style) = root_style() {
        _ = style.remove_property("filter");
    }
}
