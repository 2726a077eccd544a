//! Feedback categories offered by the control panel.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::ParseFeedbackError;
use crate::simulation::params::{CRITICAL_FEEDBACK, NEUTRAL_FEEDBACK, SUPPORTIVE_FEEDBACK};

/// The kind of feedback the agent currently receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackCategory {
    Supportive,
    #[default]
    Neutral,
    Critical,
}

impl FeedbackCategory {
    /// Returns all categories in panel order.
    #[must_use]
    pub const fn all() -> [FeedbackCategory; 3] {
        [Self::Supportive, Self::Neutral, Self::Critical]
    }

    /// Numeric feedback applied to confidence on a gated frame.
    #[must_use]
    pub const fn value(self) -> f64 {
        match self {
            Self::Supportive => SUPPORTIVE_FEEDBACK,
            Self::Neutral => NEUTRAL_FEEDBACK,
            Self::Critical => CRITICAL_FEEDBACK,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Supportive => "supportive",
            Self::Neutral => "neutral",
            Self::Critical => "critical",
        }
    }

    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Supportive => Self::Neutral,
            Self::Neutral => Self::Critical,
            Self::Critical => Self::Supportive,
        }
    }

    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Supportive => Self::Critical,
            Self::Neutral => Self::Supportive,
            Self::Critical => Self::Neutral,
        }
    }
}

impl fmt::Display for FeedbackCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FeedbackCategory {
    type Err = ParseFeedbackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|category| category.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseFeedbackError(s.to_string()))
    }
}
