use crate::simulation::agent::Explorer;
use crate::simulation::environment::World;
use crate::simulation::Zone;
use crate::ui::render::world_to_grid_coords;
use rayon::prelude::*;

pub const SPARKLE_GLYPH: char = '·';
pub const AGENT_HEAD_GLYPH: char = 'o';
pub const AGENT_BODY_GLYPH: char = 'O';

/// Canvas y of the zone labels.
const LABEL_Y: f64 = 25.0;
/// Vertical offsets of the agent's head and body from its position.
const AGENT_HEAD_OFFSET: f64 = -4.0;
const AGENT_BODY_OFFSET: f64 = 6.0;

/// What occupies a world cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Ground,
    Sparkle,
    Label,
    Agent,
}

/// One terminal cell of the world pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    pub glyph: char,
    pub zone: Zone,
    pub kind: CellKind,
}

/// A zone label placed on the label row.
struct PlacedLabel {
    start: usize,
    chars: Vec<char>,
}

impl PlacedLabel {
    fn char_at(&self, col: usize) -> Option<char> {
        col.checked_sub(self.start)
            .and_then(|i| self.chars.get(i).copied())
    }
}

/// Centres each zone's label in its columns, shortening it to fit.
fn place_labels(world: &World, cols: usize) -> Vec<PlacedLabel> {
    let layout = &world.layout;
    let scale_x = world.width / cols as f64;

    Zone::all()
        .into_iter()
        .map(|zone| {
            let zone_left = layout.left() + layout.zone_width * zone.index() as f64;
            let first_col = ((zone_left - layout.left()) / scale_x).ceil() as usize;
            let last_col = (((zone_left + layout.zone_width - layout.left()) / scale_x).floor()
                as usize)
                .min(cols);
            let available = last_col.saturating_sub(first_col);

            let text = if zone.label().len() <= available {
                zone.label()
            } else {
                zone.short_label()
            };
            let chars: Vec<char> = text.chars().take(available).collect();

            let center_col = ((layout.center_of(zone) - layout.left()) / scale_x) as usize;
            let start = center_col
                .saturating_sub(chars.len() / 2)
                .min(last_col.saturating_sub(chars.len()))
                .max(first_col);

            PlacedLabel { start, chars }
        })
        .collect()
}

/// Rasterises the world (zones, labels, sparkles, agent) into a grid of
/// `rows` x `cols` cells.
#[allow(clippy::cast_precision_loss)]
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_sign_loss)]
#[must_use]
pub fn compute_world_grid(
    world: &World,
    agent: &Explorer,
    rows: usize,
    cols: usize,
) -> Vec<Vec<GridCell>> {
    if rows == 0 || cols == 0 {
        return Vec::new();
    }

    let layout = &world.layout;
    let scale_x = world.width / cols as f64;
    let to_grid = |x: f64, y: f64| {
        world_to_grid_coords(x - layout.left(), y, world.width, world.height, rows, cols)
    };

    let mut sparkle_cells = vec![false; rows * cols];
    for sparkle in world.sparkles() {
        let (r, c) = to_grid(sparkle.x, sparkle.y);
        sparkle_cells[r * cols + c] = true;
    }

    let (label_row, _) = to_grid(layout.left(), LABEL_Y);
    let labels = place_labels(world, cols);

    // Head is drawn over the body
    let body = to_grid(agent.x, agent.y + AGENT_BODY_OFFSET);
    let head = to_grid(agent.x, agent.y + AGENT_HEAD_OFFSET);

    // Use rayon to compute rows in parallel
    (0..rows)
        .into_par_iter()
        .map(|r| {
            (0..cols)
                .map(|c| {
                    let world_x = layout.left() + (c as f64 + 0.5) * scale_x;
                    let zone = layout.zone_at(world_x);
                    let mut cell = GridCell {
                        glyph: ' ',
                        zone,
                        kind: CellKind::Ground,
                    };

                    if sparkle_cells[r * cols + c] {
                        cell.glyph = SPARKLE_GLYPH;
                        cell.kind = CellKind::Sparkle;
                    }

                    if r == label_row {
                        if let Some(ch) = labels.iter().find_map(|label| label.char_at(c)) {
                            cell.glyph = ch;
                            cell.kind = CellKind::Label;
                        }
                    }

                    if (r, c) == body {
                        cell.glyph = AGENT_BODY_GLYPH;
                        cell.kind = CellKind::Agent;
                    }
                    if (r, c) == head {
                        cell.glyph = AGENT_HEAD_GLYPH;
                        cell.kind = CellKind::Agent;
                    }

                    cell
                })
                .collect()
        })
        .collect()
}
