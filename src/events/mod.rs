pub mod form;
pub mod keyboard;
pub mod pointer;

pub use form::{wire_prompt_form, wire_toast_close};
pub use keyboard::wire_escape_cancel;
pub use pointer::{wire_viewport_input, ViewportWiring};
