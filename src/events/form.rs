use crate::constants::{FORM_ID, PROMPT_INPUT_ID, TOAST_CLOSE_ID};
use crate::{dom, ui, Controller};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Mirror the prompt field into the controller and start a generation on
/// submit. Submitting while a generation runs is rejected by the controller.
pub fn wire_prompt_form(document: &web::Document, controller: Rc<RefCell<Controller>>) {
    let doc_input = document.clone();
    let controller_input = controller.clone();
    dom::add_event_listener(document, PROMPT_INPUT_ID, "input", move |_ev| {
        if let Some(v) = dom::input_value(&doc_input, PROMPT_INPUT_ID) {
            controller_input.borrow_mut().set_prompt(v);
        }
    });

    let doc_submit = document.clone();
    dom::add_event_listener(document, FORM_ID, "submit", move |ev| {
        ev.prevent_default();
        let mut c = controller.borrow_mut();
        if let Some(v) = dom::input_value(&doc_submit, PROMPT_INPUT_ID) {
            c.set_prompt(v);
        }
        match c.submit(Instant::now()) {
            Ok(()) => ui::set_loading(&doc_submit, true),
            Err(e) => log::info!("[ui] {}", e),
        }
    });
}

pub fn wire_toast_close(document: &web::Document) {
    let doc = document.clone();
    dom::add_click_listener(document, TOAST_CLOSE_ID, move || ui::hide_toast(&doc));
}
