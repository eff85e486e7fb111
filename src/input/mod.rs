use macroquad::prelude::*;

use crate::application::GameState;

/// Map this frame's key presses onto state transitions:
/// Space toggles the simulation, C clears the grid, R reseeds it randomly.
pub fn process_keyboard_input(state: GameState) -> GameState {
    type KeyAction = (KeyCode, fn(GameState) -> GameState);

    let actions: [KeyAction; 3] = [
        (KeyCode::Space, GameState::toggle_running),
        (KeyCode::C, GameState::clear),
        (KeyCode::R, GameState::reseed),
    ];

    actions.iter().fold(state, |s, (key, action)| {
        if is_key_pressed(*key) { action(s) } else { s }
    })
}

/// True when the user asked to quit with Escape
pub fn quit_requested() -> bool {
    is_key_pressed(KeyCode::Escape)
}
