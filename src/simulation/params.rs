//! Simulation hyperparameters.
//!
//! Coordinates are logical canvas units: a 600x400 surface whose left 200
//! units hold the control panel and whose remaining 400 units hold the world.

pub const CANVAS_WIDTH: f64 = 600.0;
pub const CANVAS_HEIGHT: f64 = 400.0;
pub const PANEL_WIDTH: f64 = 200.0;
pub const WORLD_WIDTH: f64 = 400.0;
pub const ZONE_COUNT: usize = 3;

pub const TOP_BUFFER: f64 = 20.0;
pub const BOTTOM_BUFFER: f64 = 380.0;
pub const RIGHT_BUFFER: f64 = 20.0;

pub const AGENT_START_X: f64 = PANEL_WIDTH + 50.0;
pub const AGENT_START_Y: f64 = CANVAS_HEIGHT / 2.0;

// Inputs
pub const INITIAL_CONFIDENCE: f64 = 0.5;
pub const INITIAL_CURIOSITY: f64 = 0.3;
pub const SLIDER_STEP: f64 = 0.01;

// Feedback cadence and confidence
pub const FEEDBACK_INTERVAL: u64 = 60;
pub const FRAME_RATE: u32 = 60;
pub const CONFIDENCE_RATE: f64 = 0.05;
pub const SUPPORTIVE_FEEDBACK: f64 = 0.5;
pub const NEUTRAL_FEEDBACK: f64 = 0.0;
pub const CRITICAL_FEEDBACK: f64 = -1.0;

// Curiosity
pub const CRITICAL_CURIOSITY_DECAY: f64 = 0.01;
pub const NEUTRAL_CURIOSITY_DRIFT: f64 = 0.0005;
pub const PROGRESS_CURIOSITY_RATE: f64 = 0.02;
pub const CONFIDENCE_CURIOSITY_RATE: f64 = 0.002;
pub const SETBACK_CURIOSITY_PENALTY: f64 = 0.01;

// Zone bounds
pub const MIN_BOUND_LERP_SCALE: f64 = 1.2;
pub const COMFORT_LOCK_THRESHOLD: f64 = 0.5;
pub const GROWTH_UNLOCK_THRESHOLD: f64 = 0.7;

// Movement
pub const MIN_SPEED: f64 = 0.4;
pub const MAX_SPEED: f64 = 4.0;
pub const MAX_RIGHT_BIAS: f64 = 0.08;
pub const HEADING_NOISE: f64 = 0.15;
pub const REORIENT_PROBABILITY: f64 = 0.02;
pub const POSITION_JITTER: f64 = 0.6;

// Decoration
pub const SPARKLE_COUNT: usize = 120;
