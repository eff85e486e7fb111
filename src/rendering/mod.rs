use macroquad::prelude::*;

use crate::application::GameState;
use crate::domain::{Cell, Grid};

/// Edge length of one cell in pixels.
pub const CELL_SIZE: f32 = 10.0;

/// Draw the grid: a filled block for each live cell, a hollow outline for
/// each dead one.
pub fn draw_grid(grid: &Grid) {
    for (x, y, cell) in grid.iter_cells() {
        let px = x as f32 * CELL_SIZE;
        let py = y as f32 * CELL_SIZE;
        match cell {
            Cell::Alive => draw_rectangle(px, py, CELL_SIZE, CELL_SIZE, WHITE),
            Cell::Dead => draw_rectangle_lines(px, py, CELL_SIZE, CELL_SIZE, 1.0, WHITE),
        }
    }
}

/// Draw the generation counter and, when paused, a pause marker in the
/// top-left corner.
pub fn draw_status(state: &GameState) {
    draw_text(
        &format!("gen {}", state.generation),
        6.0,
        16.0,
        18.0,
        GRAY,
    );
    if !state.is_running {
        draw_text("paused", 6.0, 32.0, 18.0, ORANGE);
    }
}
