use crate::game::{self, GameHandle};
use crate::input;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_pointer_handlers(canvas: &web::HtmlCanvasElement, game: GameHandle) {
    wire_pointerdown(canvas, game.clone());
    for event in ["pointerup", "pointerleave", "pointercancel"] {
        wire_release(canvas, event, game.clone());
    }
}

fn wire_pointerdown(canvas: &web::HtmlCanvasElement, game: GameHandle) {
    let canvas_for_pos = canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_canvas_px(&ev, &canvas_for_pos);
        game::on_pointer_down(&game, pos);
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_release(canvas: &web::HtmlCanvasElement, event: &str, game: GameHandle) {
    let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        game::on_pointer_release(&game);
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}
