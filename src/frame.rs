use crate::input;
use crate::render::GpuState;
use crate::{dom, ui, Controller};
use instant::Instant;
use modelgen_core::{Completion, DemoConfig, Notification, OrbitCamera, Phase, SceneState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// GPU slot filled asynchronously once the viewport is first revealed.
#[derive(Default)]
pub enum GpuSlot {
    #[default]
    Unrequested,
    Pending,
    Ready(GpuState),
    Failed,
}

pub struct FrameContext {
    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub config: DemoConfig,

    pub controller: Rc<RefCell<Controller>>,
    pub orbit: Rc<RefCell<OrbitCamera>>,
    pub gpu: Rc<RefCell<GpuSlot>>,

    pub scene: Option<SceneState>,
    pub toast: Option<(Notification, Instant)>,
    pub last_phase: Phase,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();

        let completion = self.controller.borrow_mut().poll(now);
        if let Some(done) = completion {
            self.on_generation_complete(done, now);
        }

        let phase = self.controller.borrow().phase();
        if phase != self.last_phase {
            ui::set_loading(&self.document, phase == Phase::Generating);
            self.last_phase = phase;
        }

        if let Some((n, shown_at)) = &self.toast {
            if n.expired(*shown_at, now) {
                ui::hide_toast(&self.document);
                self.toast = None;
            }
        }

        let Some(scene) = &mut self.scene else {
            return;
        };
        let mut slot = self.gpu.borrow_mut();
        let GpuSlot::Ready(g) = &mut *slot else {
            return;
        };
        g.resize_if_needed(self.canvas.width(), self.canvas.height());
        scene.tick();
        let camera = self.orbit.borrow().camera(input::canvas_aspect(&self.canvas));
        match g.render(scene, &camera) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => g.reconfigure(),
            Err(e) => log::error!("render error: {:?}", e),
        }
    }

    fn on_generation_complete(&mut self, done: Completion, now: Instant) {
        ui::show_viewport(&self.document);
        dom::sync_canvas_backing_size(&self.canvas);

        // Placements come back through the scratch store, as written at submit.
        let scene = SceneState::from_store(self.controller.borrow().store(), &self.config);
        log::info!(
            "[scene] generation {} shows {} primitives",
            done.generation,
            scene.len()
        );
        self.scene = Some(scene);

        ui::show_toast(&self.document, &done.notification);
        self.toast = Some((done.notification, now));

        self.request_gpu();
    }

    fn request_gpu(&self) {
        if !matches!(*self.gpu.borrow(), GpuSlot::Unrequested) {
            return;
        }
        *self.gpu.borrow_mut() = GpuSlot::Pending;
        let slot = self.gpu.clone();
        let canvas = self.canvas.clone();
        spawn_local(async move {
            let next = match GpuState::new(&canvas).await {
                Ok(g) => GpuSlot::Ready(g),
                Err(e) => {
                    log::error!("WebGPU init error: {:?}", e);
                    GpuSlot::Failed
                }
            };
            *slot.borrow_mut() = next;
        });
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
