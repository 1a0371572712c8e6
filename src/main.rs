//! Cave Runner headless demo
//!
//! Drives the core without a window: builds the test map, scripts a short
//! walk/jump input sequence, steps the game at a fixed frame time, and
//! logs a JSON trace of the player's physical state.

use serde::Serialize;

use cave_runner::sim::Map;
use cave_runner::{Button, Game, Input};

const FRAME_TIME: u32 = 1000 / 60;
const NUM_FRAMES: u32 = 300;

#[derive(Serialize)]
struct FrameTrace {
    frame: u32,
    x: f32,
    y: f32,
    velocity_x: f32,
    velocity_y: f32,
    on_ground: bool,
    health: i32,
}

fn main() {
    env_logger::init();
    log::info!("cave-runner headless demo starting");

    let mut game = Game::new(Map::create_test_map());
    let mut input = Input::new();
    let mut draw_list = cave_runner::render::DrawList::new();

    for frame in 0..NUM_FRAMES {
        input.begin_new_frame();
        match frame {
            30 => input.key_down(Button::Right),
            90 => input.key_down(Button::Jump),
            96 => input.key_up(Button::Jump),
            150 => input.key_up(Button::Right),
            180 => input.key_down(Button::Down),
            210 => input.key_up(Button::Down),
            _ => {}
        }

        game.process_input(&input);
        game.update(FRAME_TIME);

        draw_list.clear();
        game.draw(&mut draw_list);

        if frame % 30 == 0 {
            let player = game.player();
            let trace = FrameTrace {
                frame,
                x: player.x(),
                y: player.y(),
                velocity_x: player.velocity().x,
                velocity_y: player.velocity().y,
                on_ground: player.on_ground(),
                health: player.health(),
            };
            match serde_json::to_string(&trace) {
                Ok(json) => log::info!("{json}"),
                Err(e) => log::warn!("trace serialization failed: {e}"),
            }
        }
    }

    log::info!(
        "demo finished: {} draw commands in the final frame",
        draw_list.len()
    );
}
