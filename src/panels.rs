use crate::constants::{
    ACTIVE_CLASS, MENU_OPEN_CLASS, MENU_TOGGLE_ID, NAV_BUTTON_SELECTOR, PANEL_SELECTOR, YEAR_ID,
};
use crate::core::Panel;
use crate::dom;
use std::rc::Rc;
use web_sys as web;

/// Mark `selected` as the active nav button and show the panel whose id
/// equals `target`. Also closes the mobile menu.
fn activate(
    buttons: &[web::Element],
    panels: &[web::Element],
    selected: &web::Element,
    target: Option<&str>,
) {
    for b in buttons {
        _ = b.class_list().remove_1(ACTIVE_CLASS);
    }
    _ = selected.class_list().add_1(ACTIVE_CLASS);
    for p in panels {
        let on = target == Some(p.id().as_str());
        _ = p.class_list().toggle_with_force(ACTIVE_CLASS, on);
    }
    if let Some(body) = dom::body() {
        _ = body.class_list().remove_1(MENU_OPEN_CLASS);
    }
    match target.and_then(Panel::from_id) {
        Some(panel) => log::info!("[nav] panel={:?}", panel),
        None => log::info!("[nav] target={:?}", target),
    }
}

pub fn wire_nav(document: &web::Document) {
    let buttons = Rc::new(dom::query_all(document, NAV_BUTTON_SELECTOR));
    let panels = Rc::new(dom::query_all(document, PANEL_SELECTOR));
    for btn in buttons.iter() {
        let target = btn.get_attribute("data-target");
        let selected = btn.clone();
        let buttons = buttons.clone();
        let panels = panels.clone();
        dom::on_click(btn, move || {
            activate(&buttons, &panels, &selected, target.as_deref());
        });
    }
}

pub fn wire_menu_toggle(document: &web::Document) {
    dom::add_click_listener(document, MENU_TOGGLE_ID, || {
        if let Some(body) = dom::body() {
            _ = body.class_list().toggle(MENU_OPEN_CLASS);
        }
    });
}

pub fn set_year(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(YEAR_ID) {
        let year = js_sys::Date::new_0().get_full_year();
        el.set_text_content(Some(&year.to_string()));
    }
}
