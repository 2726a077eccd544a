//! Input port between the simulation and whatever surface provides the
//! confidence slider and the feedback selection.

use crate::simulation::feedback::FeedbackCategory;
use crate::simulation::params::{INITIAL_CONFIDENCE, SLIDER_STEP};

/// Source of the two user-controlled inputs, sampled once per frame.
pub trait InputPort {
    /// Current slider value in [0, 1].
    fn confidence_override(&self) -> f64;

    /// Currently selected feedback category.
    fn feedback_category(&self) -> FeedbackCategory;

    /// Writes the program's confidence back so the slider stays in sync.
    fn sync_confidence(&mut self, confidence: f64);
}

/// Rounds onto the slider grid, ties rounding up. The small offset keeps
/// values such as 0.525, stored just below the tie, rounding up.
fn snap_to_step(value: f64) -> f64 {
    (value / SLIDER_STEP + 0.5 + 1e-9).floor() * SLIDER_STEP
}

/// Slider and option list state of the left-hand control panel.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlPanel {
    confidence: f64,
    feedback: FeedbackCategory,
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self::new(INITIAL_CONFIDENCE, FeedbackCategory::default())
    }
}

impl ControlPanel {
    #[must_use]
    pub fn new(confidence: f64, feedback: FeedbackCategory) -> Self {
        let confidence = if confidence.is_finite() {
            confidence.clamp(0.0, 1.0)
        } else {
            INITIAL_CONFIDENCE
        };
        Self {
            confidence,
            feedback,
        }
    }

    #[must_use]
    pub const fn confidence(&self) -> f64 {
        self.confidence
    }

    #[must_use]
    pub const fn feedback(&self) -> FeedbackCategory {
        self.feedback
    }

    /// Moves the slider by `steps` increments and snaps to the step grid.
    pub fn nudge_confidence(&mut self, steps: i32) {
        let raw = self.confidence + f64::from(steps) * SLIDER_STEP;
        self.set_confidence(snap_to_step(raw));
    }

    /// Sets the slider, ignoring non-finite values.
    pub fn set_confidence(&mut self, confidence: f64) {
        if confidence.is_finite() {
            self.confidence = confidence.clamp(0.0, 1.0);
        }
    }

    pub fn select(&mut self, feedback: FeedbackCategory) {
        self.feedback = feedback;
    }

    pub fn select_next(&mut self) {
        self.feedback = self.feedback.next();
    }

    pub fn select_prev(&mut self) {
        self.feedback = self.feedback.prev();
    }
}

impl InputPort for ControlPanel {
    fn confidence_override(&self) -> f64 {
        self.confidence
    }

    fn feedback_category(&self) -> FeedbackCategory {
        self.feedback
    }

    /// The slider only holds values on its step grid.
    fn sync_confidence(&mut self, confidence: f64) {
        self.set_confidence(snap_to_step(confidence));
    }
}
