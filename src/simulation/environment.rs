use crate::simulation::params::{CANVAS_HEIGHT, PANEL_WIDTH, WORLD_WIDTH};
use crate::simulation::zones::ZoneLayout;
use rand::Rng;

/// A decorative point of light in the Growth zone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sparkle {
    pub x: f64,
    pub y: f64,
}

impl Sparkle {
    /// Creates a sparkle at a random position within the Growth zone.
    fn random<R: Rng>(layout: &ZoneLayout, height: f64, rng: &mut R) -> Self {
        Self {
            x: rng.random_range(layout.growth_min..layout.right()),
            y: rng.random_range(0.0..height),
        }
    }
}

/// The world the agent walks in: the zone layout and the fixed sparkle field.
///
/// Sparkles are generated once and never change.
#[derive(Debug, Clone)]
pub struct World {
    pub width: f64,
    pub height: f64,
    pub layout: ZoneLayout,
    sparkles: Vec<Sparkle>,
}

impl World {
    /// Creates the standard 400x400 world right of the control panel.
    #[must_use]
    pub fn new<R: Rng>(sparkle_count: usize, rng: &mut R) -> Self {
        let layout = ZoneLayout::new(PANEL_WIDTH, WORLD_WIDTH);
        let sparkles = (0..sparkle_count)
            .map(|_| Sparkle::random(&layout, CANVAS_HEIGHT, rng))
            .collect();

        Self {
            width: WORLD_WIDTH,
            height: CANVAS_HEIGHT,
            layout,
            sparkles,
        }
    }

    #[must_use]
    pub fn sparkles(&self) -> &[Sparkle] {
        &self.sparkles
    }
}
