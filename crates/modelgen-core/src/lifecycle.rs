//! Prompt submission -> simulated generation -> shown.
//!
//! The controller owns everything the form and the viewport share: the prompt
//! text, the pending generation and the show-model flag. Time is passed in by
//! the caller so the frame loop (or a test) decides when a generation is due.

use crate::config::DemoConfig;
use crate::notification::Notification;
use crate::placement::generate_placements;
use crate::store::{write_placements, ScratchStore};
use instant::Instant;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    /// Double submission is rejected; the running generation keeps its deadline.
    #[error("a generation is already running ({remaining:?} left)")]
    GenerationPending { remaining: Duration },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Generating,
    Shown,
}

#[derive(Clone, Copy, Debug)]
struct PendingGeneration {
    started: Instant,
    delay: Duration,
}

impl PendingGeneration {
    fn deadline_passed(&self, now: Instant) -> bool {
        crate::elapsed_between(self.started, now) >= self.delay
    }

    fn remaining(&self, now: Instant) -> Duration {
        self.delay
            .saturating_sub(crate::elapsed_between(self.started, now))
    }
}

/// Result of a generation reaching its deadline.
#[derive(Clone, Debug, PartialEq)]
pub struct Completion {
    /// 1 for the first completed generation of the session.
    pub generation: u32,
    pub notification: Notification,
}

pub struct LifecycleController<S: ScratchStore> {
    store: S,
    prompt: String,
    pending: Option<PendingGeneration>,
    show_model: bool,
    completed: u32,
    delay: Duration,
    notification_duration: Duration,
}

impl<S: ScratchStore> LifecycleController<S> {
    pub fn new(store: S) -> Self {
        Self::with_config(store, &DemoConfig::default())
    }

    pub fn with_config(store: S, config: &DemoConfig) -> Self {
        Self {
            store,
            prompt: String::new(),
            pending: None,
            show_model: false,
            completed: 0,
            delay: config.generation_delay(),
            notification_duration: config.notification_duration(),
        }
    }

    pub fn set_prompt(&mut self, text: impl Into<String>) {
        self.prompt = text.into();
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn submit(&mut self, now: Instant) -> Result<(), SubmitError> {
        if let Some(p) = &self.pending {
            let remaining = p.remaining(now);
            log::warn!("[lifecycle] submit ignored, generation pending ({:?} left)", remaining);
            return Err(SubmitError::GenerationPending { remaining });
        }

        let placements = generate_placements(&self.prompt);
        if let Err(e) = write_placements(&mut self.store, &placements) {
            // Leave nothing stale behind; the viewport renders an empty scene.
            log::warn!("[lifecycle] {}", e);
            self.store.clear_placements();
        }

        self.pending = Some(PendingGeneration {
            started: now,
            delay: self.delay,
        });
        log::info!(
            "[lifecycle] generation started ({} placements, {:?})",
            placements.len(),
            self.delay
        );
        Ok(())
    }

    /// Drop the pending generation. Returns whether one was running.
    pub fn cancel(&mut self) -> bool {
        let was_pending = self.pending.take().is_some();
        if was_pending {
            log::info!("[lifecycle] generation cancelled");
        }
        was_pending
    }

    pub fn poll(&mut self, now: Instant) -> Option<Completion> {
        match self.pending {
            Some(p) if p.deadline_passed(now) => {
                self.pending = None;
                self.show_model = true;
                self.completed += 1;
                log::info!("[lifecycle] generation {} complete", self.completed);
                Some(Completion {
                    generation: self.completed,
                    notification: Notification::model_loaded(self.notification_duration),
                })
            }
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    pub fn show_model(&self) -> bool {
        self.show_model
    }

    pub fn phase(&self) -> Phase {
        match (self.pending.is_some(), self.show_model) {
            (true, _) => Phase::Generating,
            (false, true) => Phase::Shown,
            (false, false) => Phase::Idle,
        }
    }

    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.pending.as_ref().map(|p| p.remaining(now))
    }

    pub fn completed_generations(&self) -> u32 {
        self.completed
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }
}
