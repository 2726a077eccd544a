//! Terminal rendering of the control panel and the world.

pub mod field;
pub mod render;
pub mod theme;

pub use field::{compute_world_grid, CellKind, GridCell};
pub use render::{draw_ui, world_to_grid_coords};
