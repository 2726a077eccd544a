//! Application shell: keyboard handling around a running simulation.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use rand::rngs::StdRng;
use rand::Rng;

use crate::config::SimConfig;
use crate::simulation::{ControlPanel, FeedbackCategory, FrameReport, Simulation};

/// A simulation together with the control panel that feeds it.
pub struct App<R: Rng = StdRng> {
    pub simulation: Simulation<R>,
    pub panel: ControlPanel,
}

impl App<StdRng> {
    #[must_use]
    pub fn new(config: &SimConfig) -> Self {
        Self::from_parts(Simulation::new(config), config)
    }
}

impl<R: Rng> App<R> {
    /// Wraps an existing simulation with a panel at the configured inputs.
    pub fn from_parts(simulation: Simulation<R>, config: &SimConfig) -> Self {
        Self {
            simulation,
            panel: ControlPanel::new(config.initial_confidence, config.initial_feedback),
        }
    }

    /// Advances the simulation by one frame.
    pub fn on_tick(&mut self) -> FrameReport {
        self.simulation.tick(&mut self.panel)
    }

    /// Applies a key press to the panel. Returns true when the app should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind == KeyEventKind::Release {
            return false;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return true,
            KeyCode::Char('q') | KeyCode::Esc => return true,

            KeyCode::Left | KeyCode::Char('h') => self.panel.nudge_confidence(-1),
            KeyCode::Right | KeyCode::Char('l') => self.panel.nudge_confidence(1),

            KeyCode::Up | KeyCode::Char('k') => self.panel.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.panel.select_next(),
            KeyCode::Char('1') => self.panel.select(FeedbackCategory::Supportive),
            KeyCode::Char('2') => self.panel.select(FeedbackCategory::Neutral),
            KeyCode::Char('3') => self.panel.select(FeedbackCategory::Critical),
            _ => {}
        }
        false
    }
}
