use glam::Vec2;
use web_sys as web;

/// What a pointer drag on the viewport does to the orbit camera.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragMode {
    Rotate,
    Pan,
}

/// Standard orbit mapping: primary rotates, secondary pans, primary with a
/// modifier also pans. The middle button is left to the wheel.
#[inline]
pub fn drag_mode_for_button(button: i16, modifier: bool) -> Option<DragMode> {
    match button {
        0 if modifier => Some(DragMode::Pan),
        0 => Some(DragMode::Rotate),
        2 => Some(DragMode::Pan),
        _ => None,
    }
}

#[derive(Default, Clone, Copy, Debug)]
pub struct DragState {
    pub mode: Option<DragMode>,
    pub pointer_id: i32,
    pub last: Vec2,
}

impl DragState {
    pub fn begin(&mut self, mode: DragMode, pointer_id: i32, pos: Vec2) {
        self.mode = Some(mode);
        self.pointer_id = pointer_id;
        self.last = pos;
    }

    /// Movement since the previous sample for the captured pointer.
    pub fn advance(&mut self, pointer_id: i32, pos: Vec2) -> Option<(DragMode, Vec2)> {
        let mode = self.mode?;
        if pointer_id != self.pointer_id {
            return None;
        }
        let delta = pos - self.last;
        self.last = pos;
        Some((mode, delta))
    }

    pub fn end(&mut self, pointer_id: i32) -> bool {
        if self.mode.is_some() && pointer_id == self.pointer_id {
            self.mode = None;
            return true;
        }
        false
    }

    #[inline]
    pub fn active(&self) -> bool {
        self.mode.is_some()
    }
}

// ---------------- Pointer helpers ----------------
/// Pointer position in CSS pixels relative to the canvas' top-left corner.
#[inline]
pub fn pointer_canvas_css(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    Vec2::new(
        ev.client_x() as f32 - rect.left() as f32,
        ev.client_y() as f32 - rect.top() as f32,
    )
}

#[inline]
pub fn canvas_css_height(canvas: &web::HtmlCanvasElement) -> f32 {
    canvas.get_bounding_client_rect().height() as f32
}

#[inline]
pub fn canvas_aspect(canvas: &web::HtmlCanvasElement) -> f32 {
    canvas.width().max(1) as f32 / canvas.height().max(1) as f32
}
