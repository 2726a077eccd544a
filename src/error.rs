//! Error types for configuration and command-line input.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or validating a [`crate::config::SimConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config value: {0}")]
    Invalid(String),
}

/// An unknown feedback category name.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown feedback category '{0}' (expected supportive, neutral or critical)")]
pub struct ParseFeedbackError(pub String);
