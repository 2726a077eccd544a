//! Psychological state of the agent: confidence, learning progress and
//! curiosity, plus the feedback that drives them.

use tracing::trace;

use crate::simulation::feedback::FeedbackCategory;
use crate::simulation::params::{
    CONFIDENCE_CURIOSITY_RATE, CONFIDENCE_RATE, CRITICAL_CURIOSITY_DECAY, NEUTRAL_CURIOSITY_DRIFT,
    PROGRESS_CURIOSITY_RATE, SETBACK_CURIOSITY_PENALTY,
};

/// Confidence, learning progress and curiosity of the agent.
///
/// Confidence and curiosity are kept in [0, 1] after every mutation.
/// `learning_progress` is only recomputed by [`Psyche::apply_feedback`].
#[derive(Debug, Clone, PartialEq)]
pub struct Psyche {
    pub confidence: f64,
    pub prev_confidence: f64,
    pub learning_progress: f64,
    pub curiosity: f64,
    /// Feedback applied on the last gated frame.
    pub feedback: f64,
    pub category: FeedbackCategory,
}

impl Psyche {
    #[must_use]
    pub fn new(confidence: f64, curiosity: f64, category: FeedbackCategory) -> Self {
        let confidence = confidence.clamp(0.0, 1.0);
        Self {
            confidence,
            prev_confidence: confidence,
            learning_progress: 0.0,
            curiosity: curiosity.clamp(0.0, 1.0),
            feedback: 0.0,
            category,
        }
    }

    /// Takes this frame's slider value and feedback selection.
    ///
    /// A non-finite slider value leaves confidence unchanged.
    pub fn sample(&mut self, confidence_override: f64, category: FeedbackCategory) {
        if confidence_override.is_finite() {
            self.confidence = confidence_override.clamp(0.0, 1.0);
        }
        self.category = category;
    }

    /// Applies the selected feedback to confidence and recomputes learning
    /// progress against the confidence of the previous gated frame.
    ///
    /// Returns the new confidence so the caller can sync the slider.
    pub fn apply_feedback(&mut self) -> f64 {
        self.feedback = self.category.value();

        self.confidence += CONFIDENCE_RATE * self.feedback;
        self.confidence = self.confidence.clamp(0.0, 1.0);

        self.learning_progress = self.confidence - self.prev_confidence;
        self.prev_confidence = self.confidence;

        self.confidence
    }

    /// Per-frame curiosity update.
    ///
    /// Critical feedback only ever lowers curiosity, neutral feedback lets it
    /// drift down slowly, and only supportive feedback can raise it.
    pub fn update_curiosity(&mut self) {
        match self.category {
            FeedbackCategory::Critical => self.curiosity -= CRITICAL_CURIOSITY_DECAY,
            FeedbackCategory::Neutral => self.curiosity -= NEUTRAL_CURIOSITY_DRIFT,
            FeedbackCategory::Supportive => {
                let lp = self.learning_progress;
                if lp > 0.0 {
                    self.curiosity += lp * PROGRESS_CURIOSITY_RATE;
                }
                self.curiosity += self.confidence * CONFIDENCE_CURIOSITY_RATE;
                // Confidence dropped since the last gated frame
                if lp < 0.0 {
                    self.curiosity -= SETBACK_CURIOSITY_PENALTY;
                }
            }
        }
        self.curiosity = self.curiosity.clamp(0.0, 1.0);
        trace!(category = %self.category, curiosity = self.curiosity, "curiosity updated");
    }
}
