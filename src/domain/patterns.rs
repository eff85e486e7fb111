use super::{Grid, GridError};

/// A named arrangement of live cells that can be seeded onto a grid
#[derive(Clone)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub width: usize,
    pub height: usize,
    /// Relative coordinates of the live cells
    pub cells: Vec<(usize, usize)>,
}

impl Pattern {
    /// Create a pattern from its live-cell coordinates
    pub fn new(name: &'static str, description: &'static str, cells: Vec<(usize, usize)>) -> Self {
        let width = cells.iter().map(|(x, _)| *x).max().unwrap_or(0) + 1;
        let height = cells.iter().map(|(_, y)| *y).max().unwrap_or(0) + 1;
        Self {
            name,
            description,
            width,
            height,
            cells,
        }
    }

    /// Seed the pattern onto the grid with its top-left corner at (x, y).
    ///
    /// Fails if any translated cell falls outside the grid.
    pub fn seed_onto(&self, grid: &mut Grid, x: usize, y: usize) -> Result<(), GridError> {
        grid.seed(self.cells.iter().map(|&(dx, dy)| (x + dx, y + dy)))
    }
}

/// Classic Game of Life patterns
pub mod presets {
    use super::*;

    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::new(
            "Block",
            "Still life",
            vec![
                (0, 0), (1, 0),
                (0, 1), (1, 1),
            ],
        )
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::new(
            "Blinker",
            "Oscillator (period 2)",
            vec![
                (0, 1), (1, 1), (2, 1),
            ],
        )
    }

    /// Toad - period 2 oscillator
    pub fn toad() -> Pattern {
        Pattern::new(
            "Toad",
            "Oscillator (period 2)",
            vec![
                (1, 0), (2, 0), (3, 0),
                (0, 1), (1, 1), (2, 1),
            ],
        )
    }

    /// Beacon - period 2 oscillator
    pub fn beacon() -> Pattern {
        Pattern::new(
            "Beacon",
            "Oscillator (period 2)",
            vec![
                (0, 0), (1, 0),
                (0, 1),
                (3, 2),
                (2, 3), (3, 3),
            ],
        )
    }

    /// Glider - simplest spaceship, moves diagonally
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            "Moves diagonally (period 4)",
            vec![
                (1, 0),
                (2, 1),
                (0, 2), (1, 2), (2, 2),
            ],
        )
    }

    /// Get all available patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![block(), blinker(), toad(), beacon(), glider()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Cell;

    #[test]
    fn test_dimensions_cover_all_cells() {
        for pattern in presets::all_patterns() {
            for &(x, y) in &pattern.cells {
                assert!(x < pattern.width, "{} exceeds its width", pattern.name);
                assert!(y < pattern.height, "{} exceeds its height", pattern.name);
            }
        }
    }

    #[test]
    fn test_seed_onto_places_at_anchor() {
        let mut grid = Grid::new(8, 8).unwrap();
        presets::block().seed_onto(&mut grid, 3, 4).unwrap();
        assert_eq!(grid.get(3, 4), Some(Cell::Alive));
        assert_eq!(grid.get(4, 5), Some(Cell::Alive));
        assert_eq!(grid.get(2, 4), Some(Cell::Dead));
    }

    #[test]
    fn test_seed_onto_rejects_overhang() {
        let mut grid = Grid::new(4, 4).unwrap();
        assert!(presets::glider().seed_onto(&mut grid, 3, 3).is_err());
    }

    #[test]
    fn test_blinker_preset_oscillates() {
        let mut grid = Grid::new(7, 7).unwrap();
        presets::blinker().seed_onto(&mut grid, 2, 2).unwrap();

        grid.step();
        assert_eq!(grid.get(3, 2), Some(Cell::Alive));
        assert_eq!(grid.get(2, 3), Some(Cell::Dead));

        grid.step();
        assert_eq!(grid.get(2, 3), Some(Cell::Alive));
        assert_eq!(grid.get(3, 2), Some(Cell::Dead));
    }
}
