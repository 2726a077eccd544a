//! Colours for the zones, the control panel and the meters.

use ratatui::style::{Color, Modifier, Style};

use crate::simulation::Zone;
use crate::ui::field::{CellKind, GridCell};

pub const COMFORT: Color = Color::Rgb(0xED, 0xE7, 0xF6);
pub const STRETCH: Color = Color::Rgb(0x95, 0x75, 0xCD);
pub const GROWTH: Color = Color::Rgb(0x7E, 0x57, 0xC2);

pub const PANEL_BG: Color = Color::Rgb(240, 240, 240);
pub const TEXT: Color = Color::Black;
pub const SPARKLE: Color = Color::Rgb(255, 245, 255);
pub const AGENT: Color = Color::Rgb(60, 60, 60);

pub const METER_BG: Color = Color::Rgb(255, 200, 120);
pub const METER_FILL: Color = Color::Rgb(255, 140, 0);
pub const SLIDER_FILL: Color = Color::Rgb(0x7E, 0x57, 0xC2);
pub const SLIDER_TRACK: Color = Color::Rgb(200, 200, 200);

#[must_use]
pub const fn zone_color(zone: Zone) -> Color {
    match zone {
        Zone::Comfort => COMFORT,
        Zone::Stretch => STRETCH,
        Zone::Growth => GROWTH,
    }
}

/// Style of one world cell: zone background with a foreground per content.
#[must_use]
pub fn cell_style(cell: &GridCell) -> Style {
    let base = Style::default().bg(zone_color(cell.zone));
    match cell.kind {
        CellKind::Ground => base,
        CellKind::Sparkle => base.fg(SPARKLE),
        CellKind::Label => base.fg(TEXT).add_modifier(Modifier::BOLD),
        CellKind::Agent => base.fg(AGENT).add_modifier(Modifier::BOLD),
    }
}

#[must_use]
pub fn panel_style() -> Style {
    Style::default().fg(TEXT).bg(PANEL_BG)
}
