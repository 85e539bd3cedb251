use crate::dom;
use crate::input::{self, DragMode, DragState};
use modelgen_core::OrbitCamera;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct ViewportWiring {
    pub canvas: web::HtmlCanvasElement,
    pub orbit: Rc<RefCell<OrbitCamera>>,
    pub drag: Rc<RefCell<DragState>>,
}

pub fn wire_viewport_input(w: ViewportWiring) {
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointerup(&w);
    wire_wheel(&w);
    // Secondary-button drags pan; keep the browser menu out of the way.
    dom::listen(&w.canvas, "contextmenu", |ev| ev.prevent_default());
}

fn wire_pointerdown(w: &ViewportWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let modifier = ev.ctrl_key() || ev.meta_key() || ev.shift_key();
        let Some(mode) = input::drag_mode_for_button(ev.button(), modifier) else {
            return;
        };
        let pos = input::pointer_canvas_css(&ev, &w.canvas);
        w.drag.borrow_mut().begin(mode, ev.pointer_id(), pos);
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &ViewportWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_canvas_css(&ev, &w.canvas);
        let step = w.drag.borrow_mut().advance(ev.pointer_id(), pos);
        if let Some((mode, delta)) = step {
            let h = input::canvas_css_height(&w.canvas);
            let mut orbit = w.orbit.borrow_mut();
            match mode {
                DragMode::Rotate => orbit.rotate(delta.x, delta.y, h),
                DragMode::Pan => orbit.pan(delta.x, delta.y, h),
            }
        }
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerup(w: &ViewportWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if w.drag.borrow_mut().end(ev.pointer_id()) {
            _ = w.canvas.release_pointer_capture(ev.pointer_id());
        }
    }) as Box<dyn FnMut(_)>);
    for event in ["pointerup", "pointercancel"] {
        _ = canvas_for_listener
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_wheel(w: &ViewportWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        w.orbit.borrow_mut().zoom(ev.delta_y() as f32);
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    // Non-passive so the page does not scroll while zooming.
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(false);
    _ = canvas_for_listener.add_event_listener_with_callback_and_add_event_listener_options(
        "wheel",
        closure.as_ref().unchecked_ref(),
        &opts,
    );
    closure.forget();
}
