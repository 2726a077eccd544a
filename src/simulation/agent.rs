use crate::simulation::params::{
    AGENT_START_X, AGENT_START_Y, BOTTOM_BUFFER, HEADING_NOISE, MAX_RIGHT_BIAS, MAX_SPEED,
    MIN_SPEED, POSITION_JITTER, REORIENT_PROBABILITY, TOP_BUFFER,
};
use crate::simulation::zones::Bounds;
use rand::Rng;
use std::f64::consts::PI;

/// Validates that a value is finite (not NaN or infinite).
/// Returns a safe fallback (0.0) in release mode if the value is non-finite.
#[inline]
fn assert_finite(value: f64, context: &str) -> f64 {
    debug_assert!(value.is_finite(), "Non-finite value in {context}: {value}");
    if value.is_finite() { value } else { 0.0 }
}

/// Maps curiosity in [0, 1] onto the agent's speed.
#[must_use]
pub fn speed_for(curiosity: f64) -> f64 {
    MIN_SPEED + (MAX_SPEED - MIN_SPEED) * curiosity
}

/// Maps curiosity in [0, 1] onto the per-frame heading drift.
#[must_use]
pub fn right_bias_for(curiosity: f64) -> f64 {
    MAX_RIGHT_BIAS * curiosity
}

/// The wandering agent.
///
/// Movement is a biased random walk: curiosity sets both how fast the agent
/// moves and how strongly its heading drifts, and the zone bounds decide
/// where it may go.
#[derive(Debug, Clone)]
pub struct Explorer {
    pub x: f64,
    pub y: f64,
    /// Radians, unbounded.
    pub heading: f64,
    /// Speed used on the last step.
    pub speed: f64,
}

impl Default for Explorer {
    fn default() -> Self {
        Self::new(AGENT_START_X, AGENT_START_Y)
    }
}

impl Explorer {
    /// Creates an agent at the given position heading right.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            heading: 0.0,
            speed: 0.0,
        }
    }

    /// Advances the agent by one frame.
    ///
    /// 1. Drifts the heading by noise plus a curiosity-scaled bias.
    /// 2. Occasionally reorients by a large random turn.
    /// 3. Moves along the heading at the curiosity speed, with jitter.
    /// 4. Clamps into the allowed rectangle.
    pub fn step<R: Rng>(&mut self, curiosity: f64, bounds: &Bounds, rng: &mut R) {
        self.speed = speed_for(curiosity);

        let d_heading = rng.random_range(-HEADING_NOISE..HEADING_NOISE) + right_bias_for(curiosity);
        self.heading = assert_finite(self.heading + d_heading, "heading");

        if rng.random_bool(REORIENT_PROBABILITY) {
            self.heading += rng.random_range(-PI..PI);
        }

        let jitter_x = rng.random_range(-POSITION_JITTER..POSITION_JITTER);
        let jitter_y = rng.random_range(-POSITION_JITTER..POSITION_JITTER);

        let new_x = assert_finite(self.x + self.heading.cos() * self.speed + jitter_x, "x");
        let new_y = assert_finite(self.y + self.heading.sin() * self.speed + jitter_y, "y");

        self.x = bounds.clamp(new_x);
        self.y = new_y.clamp(TOP_BUFFER, BOTTOM_BUFFER);
    }
}
