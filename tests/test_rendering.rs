use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::TestBackend, Terminal};
use zone_explorer::config::SimConfig;
use zone_explorer::simulation::agent::Explorer;
use zone_explorer::simulation::environment::World;
use zone_explorer::simulation::{ControlPanel, Simulation, Zone};
use zone_explorer::ui::field::{AGENT_BODY_GLYPH, AGENT_HEAD_GLYPH, SPARKLE_GLYPH};
use zone_explorer::ui::render::{grid_to_lines, hud_text};
use zone_explorer::ui::{compute_world_grid, draw_ui, world_to_grid_coords, CellKind};

fn world(seed: u64) -> World {
    let mut rng = StdRng::seed_from_u64(seed);
    World::new(120, &mut rng)
}

fn row_text(row: &[zone_explorer::ui::GridCell]) -> String {
    row.iter().map(|cell| cell.glyph).collect()
}

#[test]
fn test_world_grid_dimensions() {
    let world = world(1);
    let agent = Explorer::default();
    let rows = 10;
    let cols = 20;

    let grid = compute_world_grid(&world, &agent, rows, cols);

    assert_eq!(grid.len(), rows);
    for row in &grid {
        assert_eq!(row.len(), cols);
    }
}

#[test]
fn test_empty_grid() {
    let world = world(2);
    let agent = Explorer::default();
    assert!(compute_world_grid(&world, &agent, 0, 20).is_empty());
    assert!(compute_world_grid(&world, &agent, 10, 0).is_empty());
}

#[test]
fn test_zone_columns() {
    let world = world(3);
    let agent = Explorer::default();
    let grid = compute_world_grid(&world, &agent, 40, 90);

    for row in &grid {
        assert_eq!(row[0].zone, Zone::Comfort);
        assert_eq!(row[45].zone, Zone::Stretch);
        assert_eq!(row[89].zone, Zone::Growth);
    }
}

#[test]
fn test_labels_on_label_row() {
    let world = world(4);
    let agent = Explorer::default();
    let grid = compute_world_grid(&world, &agent, 40, 90);

    // Canvas y = 25 of 400 falls on row 2 of 40
    let text = row_text(&grid[2]);
    assert!(text.contains("Comfort Zone"), "{text:?}");
    assert!(text.contains("Stretch Zone"), "{text:?}");
    assert!(text.contains("Growth Zone"), "{text:?}");
}

#[test]
fn test_narrow_grid_shortens_labels() {
    let world = world(5);
    let agent = Explorer::default();
    let grid = compute_world_grid(&world, &agent, 40, 24);

    let text = row_text(&grid[2]);
    assert!(text.contains("Comfort"), "{text:?}");
    assert!(!text.contains("Comfort Zone"), "{text:?}");
}

#[test]
fn test_agent_is_drawn() {
    let world = world(6);
    let agent = Explorer::new(400.0, 200.0);
    let grid = compute_world_grid(&world, &agent, 40, 80);

    let agent_cells: Vec<_> = grid
        .iter()
        .flatten()
        .filter(|cell| cell.kind == CellKind::Agent)
        .collect();
    assert_eq!(agent_cells.len(), 2, "head and body on separate rows");
    assert!(agent_cells.iter().any(|cell| cell.glyph == AGENT_HEAD_GLYPH));
    assert!(agent_cells.iter().any(|cell| cell.glyph == AGENT_BODY_GLYPH));
    assert!(agent_cells.iter().all(|cell| cell.zone == Zone::Stretch));
}

#[test]
fn test_agent_merges_on_coarse_grid() {
    let world = world(7);
    let agent = Explorer::new(400.0, 205.0);
    let grid = compute_world_grid(&world, &agent, 4, 12);

    let agent_cells: Vec<_> = grid
        .iter()
        .flatten()
        .filter(|cell| cell.kind == CellKind::Agent)
        .collect();
    assert_eq!(agent_cells.len(), 1);
    // Head is drawn last, so it covers the body
    assert_eq!(agent_cells[0].glyph, AGENT_HEAD_GLYPH);
}

#[test]
fn test_sparkles_only_in_growth_columns() {
    let world = world(8);
    let agent = Explorer::default();
    let grid = compute_world_grid(&world, &agent, 40, 90);

    let sparkles: Vec<_> = grid
        .iter()
        .flatten()
        .filter(|cell| cell.kind == CellKind::Sparkle)
        .collect();
    assert!(!sparkles.is_empty());
    for cell in sparkles {
        assert_eq!(cell.glyph, SPARKLE_GLYPH);
        assert_eq!(cell.zone, Zone::Growth);
    }
}

#[test]
fn test_world_to_grid_coords() {
    assert_eq!(world_to_grid_coords(0.0, 0.0, 400.0, 400.0, 40, 80), (0, 0));
    assert_eq!(world_to_grid_coords(200.0, 100.0, 400.0, 400.0, 40, 80), (10, 40));
    // Far edge and beyond clamp to the last cell
    assert_eq!(world_to_grid_coords(400.0, 400.0, 400.0, 400.0, 40, 80), (39, 79));
    assert_eq!(world_to_grid_coords(-5.0, 900.0, 400.0, 400.0, 40, 80), (39, 0));
}

#[test]
fn test_grid_to_lines_keeps_width() {
    let world = world(9);
    let agent = Explorer::default();
    let grid = compute_world_grid(&world, &agent, 12, 30);

    let lines = grid_to_lines(grid);

    assert_eq!(lines.len(), 12);
    for line in &lines {
        let width: usize = line.spans.iter().map(|s| s.content.chars().count()).sum();
        assert_eq!(width, 30);
    }
}

#[test]
fn test_hud_text() {
    let sim = Simulation::with_rng(&SimConfig::default(), StdRng::seed_from_u64(10));
    let hud = hud_text(&sim);
    assert!(hud.starts_with("Frame: 0"));
    assert!(hud.contains("Conf: 0.50"));
    assert!(hud.contains("Zone: Comfort"));
}

#[test]
fn test_draw_ui_renders_panel() {
    let mut sim = Simulation::with_rng(&SimConfig::default(), StdRng::seed_from_u64(11));
    let mut panel = ControlPanel::default();
    sim.tick(&mut panel);

    let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
    terminal.draw(|f| draw_ui(f, &sim, &panel)).unwrap();

    let screen: String = terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect();
    assert!(screen.contains("Confidence Level"));
    assert!(screen.contains("Feedback Type"));
    assert!(screen.contains("Curiosity Meter"));
    assert!(screen.contains("> neutral"));
    assert!(screen.contains("Frame: 1"));
}
