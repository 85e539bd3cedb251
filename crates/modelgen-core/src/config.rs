//! Runtime-tunable page settings.
//!
//! The page may embed a JSON object; every field is optional and falls back
//! to the values in `constants.rs`.

use crate::constants::{GENERATION_DELAY_MS, MODEL_COLOR, NOTIFICATION_MS, SPIN_PER_FRAME};
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid page config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("`{field}` must be {expected}")]
    OutOfRange {
        field: &'static str,
        expected: &'static str,
    },
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct DemoConfig {
    pub generation_delay_ms: u64,
    pub spin_per_frame: f32,
    pub color: [f32; 3],
    pub notification_ms: u64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            generation_delay_ms: GENERATION_DELAY_MS,
            spin_per_frame: SPIN_PER_FRAME,
            color: MODEL_COLOR,
            notification_ms: NOTIFICATION_MS,
        }
    }
}

impl DemoConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let cfg: DemoConfig = serde_json::from_str(raw)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse, or log and fall back to defaults.
    pub fn from_json_or_default(raw: Option<&str>) -> Self {
        match raw.map(str::trim).filter(|s| !s.is_empty()) {
            None => Self::default(),
            Some(s) => Self::from_json(s).unwrap_or_else(|e| {
                log::warn!("[config] {}; using defaults", e);
                Self::default()
            }),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        // The group angle has to keep increasing while mounted.
        if !(self.spin_per_frame.is_finite() && self.spin_per_frame > 0.0) {
            return Err(ConfigError::OutOfRange {
                field: "spin_per_frame",
                expected: "a positive finite number",
            });
        }
        if self.color.iter().any(|c| !(0.0..=1.0).contains(c)) {
            return Err(ConfigError::OutOfRange {
                field: "color",
                expected: "three components in 0..=1",
            });
        }
        Ok(())
    }

    pub fn generation_delay(&self) -> Duration {
        Duration::from_millis(self.generation_delay_ms)
    }

    pub fn notification_duration(&self) -> Duration {
        Duration::from_millis(self.notification_ms)
    }
}
