use crate::core::client_to_canvas_px;
use glam::Vec2;
use web_sys as web;

#[inline]
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    client_to_canvas_px(
        Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
        Vec2::new(rect.left() as f32, rect.top() as f32),
        Vec2::new(rect.width() as f32, rect.height() as f32),
        Vec2::new(canvas.width() as f32, canvas.height() as f32),
    )
}
