#![cfg(target_arch = "wasm32")]
use crate::constants::CANVAS_ID;
use crate::core::{ParticleField, Theme, ThemeStore};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod canvas;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod panels;
mod theme_toggle;
mod thought;

/// Set up the glyph background on `#bgCanvas`. Returns `None`, and runs no
/// animation, when the canvas or its 2D context is missing.
fn start_background(
    document: &web::Document,
    theme: Rc<Cell<Theme>>,
) -> Option<Rc<RefCell<ParticleField>>> {
    let Some(canvas) = document
        .get_element_by_id(CANVAS_ID)
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok())
    else {
        log::info!("no #{} canvas; background disabled", CANVAS_ID);
        return None;
    };
    let Some(surface) = canvas::CanvasSurface::for_canvas(&canvas) else {
        log::info!("no 2d context; background disabled");
        return None;
    };

    let (w, h) = dom::sync_canvas_to_viewport(&canvas);
    let field = Rc::new(RefCell::new(ParticleField::from_entropy(w, h)));
    log::info!("[field] {}x{} particles={}", w, h, field.borrow().len());

    events::wire_viewport_resize(&canvas, field.clone());
    frame::start_loop(Rc::new(RefCell::new(frame::FrameContext {
        field: field.clone(),
        surface,
        theme,
    })));
    Some(field)
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("glyphfield starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    panels::set_year(&document);
    panels::wire_nav(&document);
    panels::wire_menu_toggle(&document);

    let storage = dom::LocalStore::open();
    thought::wire_thought(&document, storage.clone());

    let theme_store = ThemeStore::new(storage);
    let theme = theme_store.load();
    let body = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("document has no <body>"))?;
    theme_toggle::apply(&body, theme);
    log::info!("[theme] {}", theme.as_str());
    let current_theme = Rc::new(Cell::new(theme));

    let field = start_background(&document, current_theme.clone());

    theme_toggle::wire_theme_buttons(
        &document,
        theme_toggle::ThemeWiring {
            store: Rc::new(RefCell::new(theme_store)),
            current: current_theme,
            field,
        },
    );
    events::wire_quick_nav(&document);

    Ok(())
}
