use crate::constants::NAV_BUTTON_SELECTOR;
use crate::core::{is_typing_target, panel_for_key_code};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

fn focus_is_editable(document: &web::Document) -> bool {
    let Some(active) = document.active_element() else {
        return false;
    };
    let editable = active
        .dyn_ref::<web::HtmlElement>()
        .map(|el| el.is_content_editable())
        .unwrap_or(false);
    is_typing_target(Some(&active.tag_name()), editable)
}

/// Digit keys 1-5 press the matching nav button, unless the user is typing.
pub fn handle_quick_nav(ev: &web::KeyboardEvent, document: &web::Document) {
    if focus_is_editable(document) {
        return;
    }
    let Some(panel) = panel_for_key_code(&ev.code()) else {
        return;
    };
    let selector = format!("{}[data-target=\"{}\"]", NAV_BUTTON_SELECTOR, panel.id());
    if let Ok(Some(el)) = document.query_selector(&selector) {
        if let Some(button) = el.dyn_ref::<web::HtmlElement>() {
            button.click();
        }
    }
}

pub fn wire_quick_nav(document: &web::Document) {
    let document = document.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        handle_quick_nav(&ev, &document);
    }) as Box<dyn FnMut(_)>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
