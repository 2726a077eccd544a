//! Runtime configuration, loaded from an optional TOML file.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::simulation::feedback::FeedbackCategory;
use crate::simulation::params::{
    FEEDBACK_INTERVAL, FRAME_RATE, INITIAL_CONFIDENCE, INITIAL_CURIOSITY, SPARKLE_COUNT,
};

/// Tunable settings for a run. Missing keys fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimConfig {
    /// Frames between gated feedback updates.
    pub feedback_interval: u64,
    /// Target frames per second of the render loop.
    pub frame_rate: u32,
    pub sparkle_count: usize,
    /// Seed for reproducible runs; random when absent.
    pub seed: Option<u64>,
    pub initial_confidence: f64,
    pub initial_curiosity: f64,
    pub initial_feedback: FeedbackCategory,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            feedback_interval: FEEDBACK_INTERVAL,
            frame_rate: FRAME_RATE,
            sparkle_count: SPARKLE_COUNT,
            seed: None,
            initial_confidence: INITIAL_CONFIDENCE,
            initial_curiosity: INITIAL_CURIOSITY,
            initial_feedback: FeedbackCategory::default(),
        }
    }
}

impl SimConfig {
    /// Reads and validates a TOML config file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read, is not valid TOML
    /// for this schema, or holds out-of-range values.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        content.parse()
    }

    /// Checks ranges that the TOML schema cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending key.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.feedback_interval == 0 {
            return Err(ConfigError::Invalid(
                "feedback_interval must be greater than 0".to_string(),
            ));
        }
        if self.frame_rate == 0 {
            return Err(ConfigError::Invalid(
                "frame_rate must be greater than 0".to_string(),
            ));
        }
        for (key, value) in [
            ("initial_confidence", self.initial_confidence),
            ("initial_curiosity", self.initial_curiosity),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::Invalid(format!(
                    "{key} must be within [0, 1], got {value}"
                )));
            }
        }
        Ok(())
    }

    /// Time budget of one frame.
    #[must_use]
    pub fn tick_rate(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.frame_rate.max(1)))
    }
}

impl std::str::FromStr for SimConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let config: SimConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }
}
