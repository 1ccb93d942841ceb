use crate::constants::*;
use crate::core::{NoteError, NoteStore};
use crate::dom::{self, LocalStore};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

fn flash_saved(button: &web::Element) {
    button.set_text_content(Some(NOTE_SAVED_LABEL));
    let button = button.clone();
    dom::set_timeout(NOTE_SAVED_LABEL_MS, move || {
        button.set_text_content(Some(NOTE_SAVE_LABEL));
    });
}

/// Restore the saved thought into its slot and wire the save/clear buttons.
pub fn wire_thought(document: &web::Document, store: LocalStore) {
    let slot = document
        .get_element_by_id(NOTE_SLOT_ID)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok());
    let notes = Rc::new(RefCell::new(NoteStore::new(store)));

    if let Some(save_btn) = document.get_element_by_id(NOTE_SAVE_ID) {
        let slot = slot.clone();
        let notes = notes.clone();
        let label_target = save_btn.clone();
        dom::on_click(&save_btn, move || {
            let text = slot.as_ref().map(|s| s.inner_text()).unwrap_or_default();
            match notes.borrow_mut().save(&text) {
                Ok(saved) => {
                    log::info!("[note] saved {} chars", saved.chars().count());
                    flash_saved(&label_target);
                }
                Err(NoteError::Empty) => dom::alert(NOTE_EMPTY_MESSAGE),
                Err(e) => log::warn!("[note] save failed: {}", e),
            }
        });
    }

    {
        let slot = slot.clone();
        let notes = notes.clone();
        dom::add_click_listener(document, NOTE_CLEAR_ID, move || {
            if !dom::confirm(NOTE_CLEAR_PROMPT) {
                return;
            }
            if let Some(s) = &slot {
                s.set_inner_text("");
            }
            if let Err(e) = notes.borrow_mut().clear() {
                log::warn!("[note] clear failed: {}", e);
            }
        });
    }

    let stored = notes.borrow().load();
    match stored {
        Ok(Some(text)) => {
            if let Some(s) = &slot {
                s.set_inner_text(&text);
            }
        }
        Ok(None) => {}
        Err(e) => log::warn!("[note] load failed: {}", e),
    }
}
