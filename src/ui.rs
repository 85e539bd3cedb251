use crate::constants::*;
use crate::dom;
use modelgen_core::{Notification, Status};
use wasm_bindgen::JsCast;
use web_sys as web;

const STATUS_CLASSES: [Status; 4] = [Status::Success, Status::Info, Status::Warning, Status::Error];

/// Spinner visibility and submit-button state follow the loading flag.
pub fn set_loading(document: &web::Document, loading: bool) {
    dom::set_hidden(document, SPINNER_ID, !loading);
    if let Some(btn) = document
        .get_element_by_id(SUBMIT_BUTTON_ID)
        .and_then(|el| el.dyn_into::<web::HtmlButtonElement>().ok())
    {
        btn.set_disabled(loading);
    }
}

pub fn show_viewport(document: &web::Document) {
    dom::set_hidden(document, VIEWPORT_ID, false);
}

pub fn show_toast(document: &web::Document, notification: &Notification) {
    dom::set_text(document, TOAST_TITLE_ID, &notification.title);
    dom::set_text(document, TOAST_DESCRIPTION_ID, &notification.description);
    dom::set_hidden(document, TOAST_CLOSE_ID, !notification.closable);
    if let Some(el) = document.get_element_by_id(TOAST_ID) {
        let cl = el.class_list();
        for s in STATUS_CLASSES {
            _ = cl.remove_1(s.css_class());
        }
        _ = cl.add_1(notification.status.css_class());
    }
    dom::set_hidden(document, TOAST_ID, false);
}

#[inline]
pub fn hide_toast(document: &web::Document) {
    dom::set_hidden(document, TOAST_ID, true);
}
