use crate::core::backing_size;
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn element_by_id<T: JsCast>(document: &web::Document, id: &str) -> anyhow::Result<T> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))?
        .dyn_into::<T>()
        .map_err(|e| anyhow::anyhow!("#{} has unexpected type: {:?}", id, e))
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
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    } else {
        log::warn!("[dom] no #{} to attach a click handler to", element_id);
    }
}

#[inline]
pub fn set_text(document: &web::Document, element_id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        el.set_text_content(Some(text));
    }
}

/// Blocking yes/no prompt. A failing prompt counts as "no".
pub fn confirm(message: &str) -> bool {
    let Some(window) = web::window() else {
        return false;
    };
    window.confirm_with_message(message).unwrap_or_else(|e| {
        log::warn!("[dom] confirm failed: {:?}", e);
        false
    })
}

/// Short haptic pulse where the platform supports it.
pub fn vibrate(ms: u32) {
    if ms == 0 {
        return;
    }
    if let Some(window) = web::window() {
        _ = window.navigator().vibrate_with_duration(ms);
    }
}

pub fn location_query() -> String {
    web::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

/// Size the backing store 1:1 with CSS pixels so glow radii and the exported
/// PNG are in CSS pixels on every display.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    let rect = canvas.get_bounding_client_rect();
    let (w_px, h_px) = backing_size(Vec2::new(rect.width() as f32, rect.height() as f32));
    canvas.set_width(w_px);
    canvas.set_height(h_px);
}
