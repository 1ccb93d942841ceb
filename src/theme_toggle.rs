use crate::constants::{THEME_DARK_BUTTON_ID, THEME_LIGHT_BUTTON_ID};
use crate::core::{ParticleField, Theme, ThemeStore};
use crate::dom::{self, LocalStore};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use web_sys as web;

/// Swap the theme class on `<body>`.
pub fn apply(body: &web::HtmlElement, theme: Theme) {
    let cl = body.class_list();
    for t in Theme::ALL {
        _ = cl.remove_1(t.body_class());
    }
    _ = cl.add_1(theme.body_class());
}

#[derive(Clone)]
pub struct ThemeWiring {
    pub store: Rc<RefCell<ThemeStore<LocalStore>>>,
    pub current: Rc<Cell<Theme>>,
    /// Absent when the background canvas could not be set up.
    pub field: Option<Rc<RefCell<ParticleField>>>,
}

fn select(w: &ThemeWiring, theme: Theme) {
    if let Some(body) = dom::body() {
        apply(&body, theme);
    }
    w.current.set(theme);
    if let Err(e) = w.store.borrow_mut().save(theme) {
        log::warn!("[theme] save failed: {}", e);
    }
    if let Some(field) = &w.field {
        field.borrow_mut().randomize_labels();
    }
    log::info!("[theme] {}", theme.as_str());
}

/// Light/dark buttons: apply, persist, and reshuffle the background glyphs.
pub fn wire_theme_buttons(document: &web::Document, wiring: ThemeWiring) {
    for (id, theme) in [
        (THEME_LIGHT_BUTTON_ID, Theme::Light),
        (THEME_DARK_BUTTON_ID, Theme::Dark),
    ] {
        let w = wiring.clone();
        dom::add_click_listener(document, id, move || select(&w, theme));
    }
}
