use crate::dom;
use crate::game::{self, GameHandle};
use web_sys as web;

pub fn wire_start_button(document: &web::Document, game: GameHandle) {
    dom::add_click_listener(document, "start-button", move || {
        log::info!("[click] start");
        game::request_start(&game);
    });
}
