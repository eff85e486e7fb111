use log::info;

use crate::domain::{Grid, GridError};

/// Seconds between committed generations.
pub const STEP_INTERVAL: f32 = 0.25;

/// GameState orchestrates the simulation.
/// This is the application layer that coordinates domain logic.
pub struct GameState {
    pub grid: Grid,
    pub is_running: bool,
    pub generation: u64,
    update_timer: f32,
}

impl GameState {
    /// Create new game state with given grid dimensions
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        Ok(Self {
            grid: Grid::new(width, height)?,
            is_running: true,
            generation: 0,
            update_timer: 0.0,
        })
    }

    /// Toggle play/pause state
    pub fn toggle_running(mut self) -> Self {
        self.is_running = !self.is_running;
        self
    }

    /// Kill every cell, reset the generation counter, and pause
    pub fn clear(mut self) -> Self {
        self.grid.reset();
        self.generation = 0;
        self.is_running = false;
        info!("grid cleared");
        self
    }

    /// Reset the grid and reseed it randomly; the simulation keeps running
    pub fn reseed(mut self) -> Self {
        self.grid.reset();
        self.grid.random_seed();
        self.generation = 0;
        info!("grid reseeded");
        self
    }

    /// Advance the step timer by one frame's delta, committing a
    /// generation each time it crosses [`STEP_INTERVAL`]. Rendering stays
    /// per-frame; only the simulation is paced.
    pub fn tick(mut self, delta_time: f32) -> Self {
        if !self.is_running {
            return self;
        }

        self.update_timer += delta_time;
        if self.update_timer >= STEP_INTERVAL {
            self.grid.step();
            self.generation += 1;
            self.update_timer = 0.0;
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::presets;

    fn population(state: &GameState) -> usize {
        state
            .grid
            .iter_cells()
            .filter(|&(_, _, cell)| cell.is_alive())
            .count()
    }

    #[test]
    fn test_new_propagates_bad_dimensions() {
        assert!(GameState::new(0, 10).is_err());
    }

    #[test]
    fn test_tick_steps_only_after_interval() {
        let mut state = GameState::new(7, 7).unwrap();
        presets::blinker()
            .seed_onto(&mut state.grid, 2, 2)
            .unwrap();

        let state = state.tick(STEP_INTERVAL / 2.0);
        assert_eq!(state.generation, 0);

        let state = state.tick(STEP_INTERVAL);
        assert_eq!(state.generation, 1);
    }

    #[test]
    fn test_paused_state_does_not_step() {
        let state = GameState::new(5, 5).unwrap().toggle_running();
        assert!(!state.is_running);

        let state = state.tick(STEP_INTERVAL * 4.0);
        assert_eq!(state.generation, 0);
    }

    #[test]
    fn test_clear_empties_grid_and_pauses() {
        let mut state = GameState::new(10, 10).unwrap();
        state.grid.random_seed();
        let state = state.tick(STEP_INTERVAL).clear();

        assert_eq!(population(&state), 0);
        assert_eq!(state.generation, 0);
        assert!(!state.is_running);
    }

    #[test]
    fn test_reseed_replaces_population() {
        let mut state = GameState::new(20, 20).unwrap();
        state.grid.seed([(0, 0)]).unwrap();

        let state = state.reseed();
        assert!(population(&state) > 1);
        assert_eq!(state.generation, 0);
        assert!(state.is_running);
    }
}
