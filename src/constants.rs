// DOM hooks shared with index.html.

pub const CONFIG_ID: &str = "modelgen-config";
pub const FORM_ID: &str = "prompt-form";
pub const PROMPT_INPUT_ID: &str = "prompt";
pub const SUBMIT_BUTTON_ID: &str = "generate";
pub const SPINNER_ID: &str = "spinner";
pub const VIEWPORT_ID: &str = "viewport";
pub const CANVAS_ID: &str = "app-canvas";

pub const TOAST_ID: &str = "toast";
pub const TOAST_TITLE_ID: &str = "toast-title";
pub const TOAST_DESCRIPTION_ID: &str = "toast-description";
pub const TOAST_CLOSE_ID: &str = "toast-close";

pub const HIDDEN_CLASS: &str = "hidden";

