use crate::core::LoadProgress;
use wasm_bindgen::JsCast;
use web_sys as web;

const PROGRESS_ID: &str = "load-progress";
const BAR_ID: &str = "load-bar";
const TEXT_ID: &str = "load-text";

#[inline]
pub fn show_progress(document: &web::Document, progress: &LoadProgress) {
    if let Some(el) = document.get_element_by_id(PROGRESS_ID) {
        let cl = el.class_list();
        _ = cl.remove_1("hidden");
        // fallback for environments without CSS class
        _ = el.set_attribute("style", "");
    }
    update_progress(document, progress);
}

pub fn update_progress(document: &web::Document, progress: &LoadProgress) {
    if let Some(bar) = document
        .get_element_by_id(BAR_ID)
        .and_then(|el| el.dyn_into::<web::HtmlProgressElement>().ok())
    {
        bar.set_max(1.0);
        bar.set_value(progress.fraction());
    }
    if let Some(el) = document.get_element_by_id(TEXT_ID) {
        el.set_text_content(Some(&progress.label()));
    }
}

#[inline]
pub fn hide_progress(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(PROGRESS_ID) {
        let cl = el.class_list();
        _ = cl.add_1("hidden");
        // fallback
        _ = el.set_attribute("style", "display:none");
    }
}
