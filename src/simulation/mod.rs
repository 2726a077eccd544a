//! Per-frame state update: input sampling, gated feedback, curiosity and
//! movement.

pub mod agent;
pub mod environment;
pub mod feedback;
pub mod input;
pub mod params;
pub mod psyche;
pub mod zones;

pub use feedback::FeedbackCategory;
pub use input::{ControlPanel, InputPort};
pub use zones::{Bounds, Lockout, Zone};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::config::SimConfig;
use agent::Explorer;
use environment::World;
use psyche::Psyche;

/// What happened during one call to [`Simulation::tick`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    pub frame: u64,
    /// True when feedback was applied to confidence this frame.
    pub feedback_applied: bool,
    pub bounds: Bounds,
    pub zone: Zone,
}

/// The complete simulation state, mutated once per frame.
#[derive(Debug, Clone)]
pub struct Simulation<R: Rng = StdRng> {
    /// Frames processed so far; the first frame is frame 1.
    pub frame: u64,
    pub psyche: Psyche,
    pub agent: Explorer,
    pub world: World,
    feedback_interval: u64,
    lockout: Lockout,
    zone: Zone,
    rng: R,
}

impl Simulation<StdRng> {
    /// Builds a simulation from config, seeded from `config.seed` when set.
    #[must_use]
    pub fn new(config: &SimConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> Simulation<R> {
    pub fn with_rng(config: &SimConfig, mut rng: R) -> Self {
        let world = World::new(config.sparkle_count, &mut rng);
        let agent = Explorer::default();
        let psyche = Psyche::new(
            config.initial_confidence,
            config.initial_curiosity,
            config.initial_feedback,
        );
        let bounds = world.layout.allowed_bounds(psyche.confidence);
        let zone = world.layout.zone_at(agent.x);

        Self {
            frame: 0,
            psyche,
            agent,
            world,
            feedback_interval: config.feedback_interval.max(1),
            lockout: bounds.lockout,
            zone,
            rng,
        }
    }

    #[must_use]
    pub const fn feedback_interval(&self) -> u64 {
        self.feedback_interval
    }

    /// Allowed bounds for the current confidence.
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        self.world.layout.allowed_bounds(self.psyche.confidence)
    }

    /// Zone the agent occupied after the last frame.
    #[must_use]
    pub const fn zone(&self) -> Zone {
        self.zone
    }

    /// Runs one frame.
    ///
    /// 1. Samples the slider and the feedback selection.
    /// 2. On every `feedback_interval`-th frame applies feedback to confidence
    ///    and syncs the slider.
    /// 3. Updates curiosity.
    /// 4. Moves the agent inside the bounds for the current confidence.
    pub fn tick<I: InputPort + ?Sized>(&mut self, input: &mut I) -> FrameReport {
        self.frame += 1;

        self.psyche
            .sample(input.confidence_override(), input.feedback_category());

        let feedback_applied = self.frame % self.feedback_interval == 0;
        if feedback_applied {
            let confidence = self.psyche.apply_feedback();
            input.sync_confidence(confidence);
            debug!(
                frame = self.frame,
                category = %self.psyche.category,
                feedback = self.psyche.feedback,
                confidence,
                learning_progress = self.psyche.learning_progress,
                "feedback applied"
            );
        }

        self.psyche.update_curiosity();

        let bounds = self.bounds();
        if bounds.lockout != self.lockout {
            info!(
                frame = self.frame,
                confidence = self.psyche.confidence,
                from = ?self.lockout,
                to = ?bounds.lockout,
                "zone lockout changed"
            );
            self.lockout = bounds.lockout;
        }

        self.agent
            .step(self.psyche.curiosity, &bounds, &mut self.rng);

        let zone = self.world.layout.zone_at(self.agent.x);
        if zone != self.zone {
            debug!(frame = self.frame, from = %self.zone, to = %zone, "agent changed zone");
            self.zone = zone;
        }

        FrameReport {
            frame: self.frame,
            feedback_applied,
            bounds,
            zone,
        }
    }
}
