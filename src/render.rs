use crate::core::{Glow, EXPORT_BACKGROUND, EXPORT_FILENAME, EXPORT_MIME};
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

pub fn context_2d(canvas: &web::HtmlCanvasElement) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("get_context error: {:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))
}

#[inline]
pub fn clear(ctx: &web::CanvasRenderingContext2d, canvas: &web::HtmlCanvasElement) {
    ctx.clear_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);
}

pub fn draw_glow(ctx: &web::CanvasRenderingContext2d, glow: &Glow) -> anyhow::Result<()> {
    let gradient = ctx
        .create_radial_gradient(glow.x, glow.y, 0.0, glow.x, glow.y, glow.radius)
        .map_err(|e| anyhow::anyhow!("gradient error: {:?}", e))?;
    for (offset, color) in &glow.stops {
        gradient
            .add_color_stop(*offset, color)
            .map_err(|e| anyhow::anyhow!("color stop {} error: {:?}", color, e))?;
    }
    #[allow(deprecated)]
    ctx.set_fill_style(&gradient);
    ctx.begin_path();
    ctx.arc(glow.x, glow.y, glow.radius, 0.0, std::f64::consts::TAU)
        .map_err(|e| anyhow::anyhow!("arc error: {:?}", e))?;
    ctx.fill();
    Ok(())
}

/// Flatten the drawing onto the export background and download it as a PNG.
pub fn export_png(document: &web::Document, canvas: &web::HtmlCanvasElement) -> anyhow::Result<()> {
    let flat: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    flat.set_width(canvas.width());
    flat.set_height(canvas.height());
    let flat_ctx = context_2d(&flat)?;
    #[allow(deprecated)]
    flat_ctx.set_fill_style(&JsValue::from_str(EXPORT_BACKGROUND));
    flat_ctx.fill_rect(0.0, 0.0, flat.width() as f64, flat.height() as f64);
    flat_ctx
        .draw_image_with_html_canvas_element(canvas, 0.0, 0.0)
        .map_err(|e| anyhow::anyhow!("draw_image error: {:?}", e))?;

    let url = flat
        .to_data_url_with_type(EXPORT_MIME)
        .map_err(|e| anyhow::anyhow!("encode error: {:?}", e))?;
    let link: web::HtmlAnchorElement = document
        .create_element("a")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    link.set_download(EXPORT_FILENAME);
    link.set_href(&url);
    link.click();
    log::info!("[export] offered {} ({} bytes of data url)", EXPORT_FILENAME, url.len());
    Ok(())
}
