use log::{error, info};
use macroquad::prelude::*;

use gridlife::{
    GameState, input,
    rendering::{self, CELL_SIZE},
};

const GRID_WIDTH: usize = 80;
const GRID_HEIGHT: usize = 60;

fn window_conf() -> Conf {
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: (GRID_WIDTH as f32 * CELL_SIZE) as i32,
        window_height: (GRID_HEIGHT as f32 * CELL_SIZE) as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let state = match GameState::new(GRID_WIDTH, GRID_HEIGHT) {
        Ok(state) => state,
        Err(err) => {
            error!("failed to create grid: {err}");
            std::process::exit(1);
        }
    };
    let mut state = state.reseed();
    info!("simulating a {GRID_WIDTH}x{GRID_HEIGHT} grid");

    loop {
        if input::quit_requested() {
            break;
        }
        state = input::process_keyboard_input(state);
        state = state.tick(get_frame_time());

        clear_background(BLACK);
        rendering::draw_grid(&state.grid);
        rendering::draw_status(&state);

        next_frame().await;
    }
}
