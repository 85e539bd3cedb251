use crate::constants::NOTIFICATION_MS;
use instant::Instant;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Success,
    Info,
    Warning,
    Error,
}

impl Status {
    /// CSS modifier class used by the toast banner.
    pub fn css_class(self) -> &'static str {
        match self {
            Status::Success => "toast-success",
            Status::Info => "toast-info",
            Status::Warning => "toast-warning",
            Status::Error => "toast-error",
        }
    }
}

/// One-shot, user-visible banner.
#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub status: Status,
    pub duration: Duration,
    pub closable: bool,
}

impl Notification {
    pub fn model_loaded(duration: Duration) -> Self {
        Self {
            title: "Model loaded.".to_string(),
            description: "Your 3D model has been loaded successfully.".to_string(),
            status: Status::Success,
            duration,
            closable: true,
        }
    }

    #[inline]
    pub fn expired(&self, shown_at: Instant, now: Instant) -> bool {
        crate::elapsed_between(shown_at, now) >= self.duration
    }
}

impl Default for Notification {
    fn default() -> Self {
        Self::model_loaded(Duration::from_millis(NOTIFICATION_MS))
    }
}
