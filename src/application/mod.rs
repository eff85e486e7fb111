mod game_state;

pub use game_state::{GameState, STEP_INTERVAL};
