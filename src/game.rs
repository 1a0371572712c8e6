//! Per-frame orchestration
//!
//! One frame is a strict sequence: resolve input into actor intents,
//! advance every timer once, update the player against the map, update
//! the enemy, then test the two damage rectangles for contact damage.
//! The OS event loop and frame pacing live outside; callers hand in the
//! elapsed milliseconds, which are clamped to bound the largest single
//! integration step.

use crate::consts::{MAX_FRAME_TIME, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::input::{Button, Input};
use crate::render::DrawList;
use crate::sim::bat::Bat;
use crate::sim::map::Map;
use crate::sim::player::Player;
use crate::sim::timer::Timers;
use crate::units::{Ms, tile_to_game};

pub struct Game {
    map: Map,
    player: Player,
    bat: Bat,
    timers: Timers,
}

impl Game {
    pub fn new(map: Map) -> Self {
        let mut timers = Timers::new();
        let player = Player::new(
            &mut timers,
            tile_to_game(SCREEN_WIDTH / 2),
            tile_to_game(SCREEN_HEIGHT / 2),
        );
        let bat = Bat::new(tile_to_game(7), tile_to_game(SCREEN_HEIGHT / 2 + 1));
        log::info!("game initialized");
        Self {
            map,
            player,
            bat,
            timers,
        }
    }

    /// Map the frame's input snapshot onto actor intents. Holding both
    /// directions of an axis is the same as holding neither.
    pub fn process_input(&mut self, input: &Input) {
        if input.is_held(Button::Left) && input.is_held(Button::Right) {
            self.player.stop_moving();
        } else if input.is_held(Button::Left) {
            self.player.start_moving_left();
        } else if input.is_held(Button::Right) {
            self.player.start_moving_right();
        } else {
            self.player.stop_moving();
        }

        if input.is_held(Button::Up) && input.is_held(Button::Down) {
            self.player.look_horizontal();
        } else if input.is_held(Button::Up) {
            self.player.look_up();
        } else if input.is_held(Button::Down) {
            self.player.look_down();
        } else {
            self.player.look_horizontal();
        }

        if input.was_pressed(Button::Jump) {
            self.player.start_jump();
        } else if input.was_released(Button::Jump) {
            self.player.stop_jump();
        }
    }

    pub fn update(&mut self, elapsed_time: Ms) {
        let elapsed_time = elapsed_time.min(MAX_FRAME_TIME);

        self.timers.update_all(elapsed_time);

        self.player.update(elapsed_time, &self.map, &self.timers);
        self.bat.update(elapsed_time, self.player.center_x());

        if self
            .bat
            .damage_rectangle()
            .collides_with(&self.player.damage_rectangle())
        {
            self.player
                .take_damage(&mut self.timers, self.bat.contact_damage());
        }
    }

    pub fn draw(&self, draw_list: &mut DrawList) {
        self.bat.draw(draw_list);
        self.player.draw(draw_list, &self.timers);
        self.map.draw(draw_list);
        self.player.draw_hud(draw_list, &self.timers);
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn bat(&self) -> &Bat {
        &self.bat
    }
}
