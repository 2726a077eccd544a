use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, LineGauge, Paragraph},
    Frame,
};

use rand::Rng;

use crate::simulation::{ControlPanel, FeedbackCategory, Lockout, Simulation};
use crate::ui::field::{compute_world_grid, GridCell};
use crate::ui::theme;

/// Maps a world position (relative to the world's top-left corner) onto a
/// grid cell, clamping to the grid.
#[allow(clippy::cast_precision_loss)]
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_sign_loss)]
#[must_use]
pub fn world_to_grid_coords(
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    rows: usize,
    cols: usize,
) -> (usize, usize) {
    let r = ((y / height) * rows as f64).floor().max(0.0) as usize;
    let c = ((x / width) * cols as f64).floor().max(0.0) as usize;
    (
        r.min(rows.saturating_sub(1)),
        c.min(cols.saturating_sub(1)),
    )
}

/// One-line status readout shown above the panes.
#[must_use]
pub fn hud_text<R: Rng>(sim: &Simulation<R>) -> String {
    let psyche = &sim.psyche;
    format!(
        "Frame: {} | Conf: {:.2} | LP: {:+.3} | Cur: {:.2} | Fb: {:+.2} | Zone: {}",
        sim.frame,
        psyche.confidence,
        psyche.learning_progress,
        psyche.curiosity,
        psyche.feedback,
        sim.zone()
    )
}

/// Turns grid cells into styled lines, merging runs of equal style.
#[must_use]
pub fn grid_to_lines(grid: Vec<Vec<GridCell>>) -> Vec<Line<'static>> {
    grid.into_iter()
        .map(|row| {
            let mut spans = Vec::new();
            let mut run = String::new();
            let mut run_style: Option<Style> = None;

            for cell in &row {
                let style = theme::cell_style(cell);
                if run_style.is_some_and(|s| s != style) {
                    spans.push(Span::styled(std::mem::take(&mut run), run_style.unwrap_or_default()));
                }
                run_style = Some(style);
                run.push(cell.glyph);
            }
            if let Some(style) = run_style {
                spans.push(Span::styled(run, style));
            }
            Line::from(spans)
        })
        .collect()
}

fn lockout_text(lockout: Lockout) -> &'static str {
    match lockout {
        Lockout::Open => "open",
        Lockout::ComfortLocked => "comfort closed",
        Lockout::GrowthUnlocked => "growth unlocked",
    }
}

fn draw_panel<R: Rng>(f: &mut Frame, area: Rect, sim: &Simulation<R>, panel: &ControlPanel) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Controls ")
        .style(theme::panel_style());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Confidence label
            Constraint::Length(1), // Slider
            Constraint::Length(1),
            Constraint::Length(1), // Feedback label
            Constraint::Length(3), // Options
            Constraint::Length(1),
            Constraint::Length(1), // Curiosity label
            Constraint::Length(1), // Meter
            Constraint::Length(1),
            Constraint::Min(0), // Stats and help
        ])
        .split(inner);

    let heading = |text: &'static str| {
        Paragraph::new(Span::styled(text, Style::default().add_modifier(Modifier::BOLD)))
    };

    f.render_widget(heading("Confidence Level"), chunks[0]);
    let slider = LineGauge::default()
        .line_set(symbols::line::THICK)
        .filled_style(Style::default().fg(theme::SLIDER_FILL))
        .unfilled_style(Style::default().fg(theme::SLIDER_TRACK))
        .label(format!("{:.2} ", panel.confidence()))
        .ratio(panel.confidence().clamp(0.0, 1.0));
    f.render_widget(slider, chunks[1]);

    f.render_widget(heading("Feedback Type"), chunks[3]);
    let options: Vec<Line> = FeedbackCategory::all()
        .into_iter()
        .map(|category| {
            if category == panel.feedback() {
                Line::from(Span::styled(
                    format!("> {category}"),
                    Style::default().add_modifier(Modifier::REVERSED),
                ))
            } else {
                Line::from(format!("  {category}"))
            }
        })
        .collect();
    f.render_widget(Paragraph::new(options), chunks[4]);

    f.render_widget(heading("Curiosity Meter"), chunks[6]);
    let meter = Gauge::default()
        .gauge_style(Style::default().fg(theme::METER_FILL).bg(theme::METER_BG))
        .label(format!("{:.2}", sim.psyche.curiosity))
        .ratio(sim.psyche.curiosity.clamp(0.0, 1.0));
    f.render_widget(meter, chunks[7]);

    let bounds = sim.bounds();
    let stats = vec![
        Line::from(format!("Learning: {:+.3}", sim.psyche.learning_progress)),
        Line::from(format!("Bounds: {:.0}-{:.0}", bounds.min_x, bounds.max_x)),
        Line::from(format!("Lockout: {}", lockout_text(bounds.lockout))),
        Line::from(""),
        Line::from("←/→ confidence"),
        Line::from("↑/↓ 1-3 feedback"),
        Line::from("q quit"),
    ];
    f.render_widget(Paragraph::new(stats), chunks[9]);
}

pub fn draw_ui<R: Rng>(f: &mut Frame, sim: &Simulation<R>, panel: &ControlPanel) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // HUD
            Constraint::Min(0),    // Panel and world
        ])
        .split(f.area());

    // HUD
    let hud = Paragraph::new(Span::styled(
        hud_text(sim),
        Style::default().add_modifier(Modifier::REVERSED),
    ));
    f.render_widget(hud, chunks[0]);

    // Panel takes 200 of the 600 canvas units
    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3), Constraint::Ratio(2, 3)])
        .split(chunks[1]);

    draw_panel(f, panes[0], sim, panel);

    let world_area = panes[1];
    let grid = compute_world_grid(
        &sim.world,
        &sim.agent,
        world_area.height as usize,
        world_area.width as usize,
    );
    f.render_widget(Paragraph::new(grid_to_lines(grid)), world_area);
}
