#![cfg(target_arch = "wasm32")]
use crate::constants::{CANVAS_ID, CONFIG_ID, PROMPT_INPUT_ID};
use modelgen_core::{DemoConfig, LifecycleController, OrbitCamera, Phase, ScratchStore};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod render;
mod storage;
mod ui;

/// The controller as the page uses it: backed by whichever store the browser allows.
pub(crate) type Controller = LifecycleController<Box<dyn ScratchStore>>;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("modelgen-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let config =
        DemoConfig::from_json_or_default(dom::text_content(&document, CONFIG_ID).as_deref());
    log::info!("[config] {:?}", config);

    let mut controller = LifecycleController::with_config(storage::open(&window), &config);
    // Browsers may restore the field's value on reload.
    if let Some(v) = dom::input_value(&document, PROMPT_INPUT_ID) {
        controller.set_prompt(v);
    }
    let controller = Rc::new(RefCell::new(controller));

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    let orbit = Rc::new(RefCell::new(OrbitCamera::default()));
    let drag = Rc::new(RefCell::new(input::DragState::default()));

    events::wire_prompt_form(&document, controller.clone());
    events::wire_toast_close(&document);
    events::wire_escape_cancel(&document, controller.clone());
    events::wire_viewport_input(events::ViewportWiring {
        canvas: canvas.clone(),
        orbit: orbit.clone(),
        drag,
    });

    ui::set_loading(&document, false);

    // Lifecycle polling and rendering driven by requestAnimationFrame
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        document,
        canvas,
        config,
        controller,
        orbit,
        gpu: Rc::new(RefCell::new(frame::GpuSlot::default())),
        scene: None,
        toast: None,
        last_phase: Phase::Idle,
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
