use glam::Vec2;

/// Map a pointer's client position to canvas backing pixels.
///
/// `rect_origin`/`rect_size` are the canvas bounding rect in CSS pixels and
/// `backing` is the canvas width/height attribute. A collapsed rect maps to the
/// canvas center.
#[inline]
pub fn client_to_canvas_px(client: Vec2, rect_origin: Vec2, rect_size: Vec2, backing: Vec2) -> Vec2 {
    if rect_size.x <= 0.0 || rect_size.y <= 0.0 {
        return backing * 0.5;
    }
    (client - rect_origin) / rect_size * backing
}

/// Backing-store size for a canvas shown at `css_size`, one pixel per CSS pixel.
#[inline]
pub fn backing_size(css_size: Vec2) -> (u32, u32) {
    let w = css_size.x.round() as u32;
    let h = css_size.y.round() as u32;
    (w.max(1), h.max(1))
}
