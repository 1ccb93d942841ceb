use crate::core::ParticleField;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Follow the viewport: resize the canvas and rebuild the particle field.
pub fn wire_viewport_resize(
    canvas: &web::HtmlCanvasElement,
    field: Rc<RefCell<ParticleField>>,
) {
    let canvas = canvas.clone();
    let closure = Closure::wrap(Box::new(move || {
        let (w, h) = dom::sync_canvas_to_viewport(&canvas);
        let mut f = field.borrow_mut();
        f.resize(w, h);
        log::info!("[field] resize {}x{} particles={}", w, h, f.len());
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
