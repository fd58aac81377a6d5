#![cfg(target_arch = "wasm32")]
use crate::core::GameConfig;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod audio;
mod core;
mod dom;
mod events;
mod game;
mod input;
mod overlay;
mod render;

/// Defaults plus URL query overrides, with the rejected entries.
fn load_config() -> (GameConfig, Vec<crate::core::ConfigError>) {
    let mut config = GameConfig::default();
    let errors = config.apply_query(&dom::location_query());
    (config, errors)
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let (config, errors) = load_config();
    console_log::init_with_level(config.log_level).ok();
    log::info!("tap-glow starting");
    for e in &errors {
        log::warn!("[config] ignored: {}", e);
    }
    log::debug!("[config] {:?}", config);

    if let Err(e) = init(config) {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init(config: GameConfig) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = dom::element_by_id(&document, "tap-area")?;
    // Sized once; resizing a canvas wipes what was drawn on it.
    dom::sync_canvas_backing_size(&canvas);
    let ctx2d = render::context_2d(&canvas)?;

    let game = Rc::new(RefCell::new(game::Game::new(
        config,
        document.clone(),
        canvas.clone(),
        ctx2d,
        rand::random(),
    )));
    game::install_tick(&game);
    game.borrow().refresh_labels();
    overlay::hide_progress(&document);

    events::wire_start_button(&document, game.clone());
    events::wire_pointer_handlers(&canvas, game);
    Ok(())
}
