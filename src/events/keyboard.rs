use crate::{dom, ui, Controller};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_keydown(
    ev: &web::KeyboardEvent,
    document: &web::Document,
    controller: &Rc<RefCell<Controller>>,
) {
    // Escape abandons a running generation; nothing else is bound.
    if ev.key() == "Escape" && controller.borrow_mut().cancel() {
        ui::set_loading(document, false);
        log::info!("[keys] generation cancelled");
    }
}

pub fn wire_escape_cancel(document: &web::Document, controller: Rc<RefCell<Controller>>) {
    let doc = document.clone();
    dom::listen(document, "keydown", move |ev| {
        if let Some(kev) = ev.dyn_ref::<web::KeyboardEvent>() {
            handle_keydown(kev, &doc, &controller);
        }
    });
}
