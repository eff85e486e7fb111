use std::mem;

use rand::Rng;
use thiserror::Error;

use super::Cell;

/// Errors raised when constructing or seeding a grid.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    #[error("coordinate ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
}

/// Grid owns the cell array and the stepping algorithm.
///
/// Cells live in a flat row-major buffer; a second buffer of the same
/// shape receives the next generation so that every cell is evaluated
/// against the previous generation only, then the buffers are swapped.
/// The grid is edge-bounded: coordinates outside `[0, width) x [0, height)`
/// name no cell and never contribute to neighbor counts.
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    /// Scratch buffer; fully overwritten by each `step` before the swap.
    next: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells dead.
    ///
    /// Rejects zero width or height.
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![Cell::Dead; width * height],
            next: vec![Cell::Dead; width * height],
        })
    }

    /// Grid width in cells
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Get grid dimensions
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Convert 2D coordinates to 1D index
    const fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Get cell at position; `None` when the coordinate is out of range.
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        (x < self.width && y < self.height).then(|| self.cells[self.index(x, y)])
    }

    /// Set the named cells alive.
    ///
    /// Duplicate coordinates collapse (seeding is idempotent) and no cell
    /// is ever killed. An out-of-range coordinate is rejected with
    /// [`GridError::OutOfBounds`]; cells named by earlier elements of the
    /// iterator stay seeded when a later element fails.
    pub fn seed<I>(&mut self, coords: I) -> Result<(), GridError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        for (x, y) in coords {
            if x >= self.width || y >= self.height {
                return Err(GridError::OutOfBounds {
                    x,
                    y,
                    width: self.width,
                    height: self.height,
                });
            }
            let idx = self.index(x, y);
            self.cells[idx] = Cell::Alive;
        }
        Ok(())
    }

    /// Seed `width * height` uniformly random coordinates, with
    /// replacement, so roughly `1 - 1/e` of the cells end up alive on a
    /// large grid. A statistical convenience, not a density control.
    pub fn random_seed(&mut self) {
        let mut rng = rand::rng();
        for _ in 0..self.width * self.height {
            let x = rng.random_range(0..self.width);
            let y = rng.random_range(0..self.height);
            let idx = self.index(x, y);
            self.cells[idx] = Cell::Alive;
        }
    }

    /// Count live neighbors in the Moore neighborhood, skipping offsets
    /// that fall off the grid edge. No wraparound.
    fn live_neighbors(&self, x: usize, y: usize) -> u8 {
        (-1isize..=1)
            .flat_map(|dy| (-1isize..=1).map(move |dx| (dx, dy)))
            .filter(|&(dx, dy)| dx != 0 || dy != 0)
            .filter_map(|(dx, dy)| {
                let nx = x.checked_add_signed(dx)?;
                let ny = y.checked_add_signed(dy)?;
                self.get(nx, ny)
            })
            .filter(|cell| cell.is_alive())
            .count() as u8
    }

    /// Advance the simulation by one generation.
    ///
    /// Every cell's next state is computed from the current buffer alone,
    /// then the buffers swap, so all cells update as if simultaneously.
    pub fn step(&mut self) {
        for y in 0..self.height {
            for x in 0..self.width {
                let idx = self.index(x, y);
                let neighbors = self.live_neighbors(x, y);
                self.next[idx] = self.cells[idx].evolve(neighbors);
            }
        }
        mem::swap(&mut self.cells, &mut self.next);
    }

    /// Kill every cell, in both buffers.
    pub fn reset(&mut self) {
        self.cells.fill(Cell::Dead);
        self.next.fill(Cell::Dead);
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        (0..self.height)
            .flat_map(move |y| (0..self.width).map(move |x| (x, y)))
            .map(|(x, y)| (x, y, self.cells[self.index(x, y)]))
    }
}
