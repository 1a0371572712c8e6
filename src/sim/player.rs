//! Player actor
//!
//! Owns the continuous physical state (position, velocity, intent flags)
//! and the exhaustive sprite-state map built at construction. Each frame
//! the horizontal axis is integrated and resolved fully before the
//! vertical axis begins, each with a leading-edge sweep and a
//! trailing-edge recheck against the tile grid.

use std::collections::HashMap;

use glam::Vec2;

use crate::hud::{DamageText, Health};
use crate::render::DrawList;
use crate::sim::collision::{self, Axis, Direction, Pass, PassRule};
use crate::sim::kinematics::{HorizontalKinematics, VerticalKinematics, position_delta};
use crate::sim::map::Map;
use crate::sim::rect::Rectangle;
use crate::sim::state::{HorizontalFacing, MotionType, SpriteState, VerticalFacing};
use crate::sim::timer::{TimerId, Timers};
use crate::sprite::Sprite;
use crate::units::{Fps, Frame, Game, Hp, Ms, Tile, Velocity, tile_to_game, tile_to_pixel};

// Walk motion
const WALK: HorizontalKinematics = HorizontalKinematics {
    ground_acceleration: 0.00083007812,
    air_acceleration: 0.0003125,
    max_speed: 0.15859375,
    friction: 0.00049804587,
};

// Fall motion
const FALL: VerticalKinematics = VerticalKinematics {
    gravity: 0.00078125,
    jump_gravity: 0.0003125,
    max_fall_speed: 0.2998046875,
};

// Jump motion
const JUMP_SPEED: Velocity = 0.25;
const SHORT_JUMP_SPEED: Velocity = JUMP_SPEED / 1.5;

const MAX_HEALTH: Hp = 6;

const SPRITE_SHEET: &str = "content/player.bmp";

// Sheet layout in tile indices; the left-facing row comes first
const CHARACTER_ROW: Tile = 0;
const WALK_FRAME: Tile = 0;
const STAND_FRAME: Tile = 0;
const JUMP_FRAME: Tile = 1;
const FALL_FRAME: Tile = 2;
const UP_FRAME_OFFSET: Tile = 3;
const DOWN_FRAME: Tile = 6;
const BACK_FRAME: Tile = 7;

const NUM_WALK_FRAMES: Frame = 3;
const WALK_FPS: Fps = 15;

// Collision rectangles, relative to the sprite origin
const COLLISION_X: Rectangle = Rectangle::new(6.0, 10.0, 20.0, 12.0);
const COLLISION_Y: Rectangle = Rectangle::new(10.0, 2.0, 12.0, 30.0);

const INVINCIBLE_FLASH_TIME: Ms = 50;
const INVINCIBLE_TIME: Ms = 3000;

pub struct Player {
    pos: Vec2,
    velocity: Vec2,
    /// Held-direction sign: -1 left, 0 neither, +1 right
    acceleration_x: i32,
    horizontal_facing: HorizontalFacing,
    vertical_facing: VerticalFacing,
    on_ground: bool,
    jump_active: bool,
    interacting: bool,
    health: Health,
    invincible_timer: TimerId,
    damage_text: DamageText,
    sprites: HashMap<SpriteState, Sprite>,
}

impl Player {
    pub fn new(timers: &mut Timers, x: Game, y: Game) -> Self {
        Self {
            pos: Vec2::new(x, y),
            velocity: Vec2::ZERO,
            acceleration_x: 0,
            horizontal_facing: HorizontalFacing::Left,
            vertical_facing: VerticalFacing::Horizontal,
            on_ground: false,
            jump_active: false,
            interacting: false,
            health: Health::new(MAX_HEALTH),
            invincible_timer: timers.create(INVINCIBLE_TIME),
            damage_text: DamageText::new(timers),
            sprites: initialize_sprites(),
        }
    }

    pub fn update(&mut self, elapsed_time: Ms, map: &Map, timers: &Timers) {
        let state = self.sprite_state();
        self.sprites
            .get_mut(&state)
            .expect("sprite map covers every state")
            .update(elapsed_time);

        self.damage_text.update(elapsed_time, timers);

        self.update_x(elapsed_time, map);
        self.update_y(elapsed_time, map);
    }

    pub fn draw(&self, draw_list: &mut DrawList, timers: &Timers) {
        if self.sprite_is_visible(timers) {
            self.sprites
                .get(&self.sprite_state())
                .expect("sprite map covers every state")
                .draw(draw_list, self.pos.x, self.pos.y);
        }
    }

    pub fn draw_hud(&self, draw_list: &mut DrawList, timers: &Timers) {
        if self.sprite_is_visible(timers) {
            self.health.draw(draw_list);
        }
        self.damage_text
            .draw(draw_list, timers, self.center_x(), self.center_y());
    }

    pub fn start_moving_left(&mut self) {
        self.acceleration_x = -1;
        self.horizontal_facing = HorizontalFacing::Left;
        self.interacting = false;
    }

    pub fn start_moving_right(&mut self) {
        self.acceleration_x = 1;
        self.horizontal_facing = HorizontalFacing::Right;
        self.interacting = false;
    }

    pub fn stop_moving(&mut self) {
        self.acceleration_x = 0;
    }

    pub fn look_up(&mut self) {
        self.vertical_facing = VerticalFacing::Up;
        self.interacting = false;
    }

    /// Looking down only interacts when grounded; re-entry is idempotent.
    pub fn look_down(&mut self) {
        if self.vertical_facing == VerticalFacing::Down {
            return;
        }
        self.vertical_facing = VerticalFacing::Down;
        self.interacting = self.on_ground;
    }

    pub fn look_horizontal(&mut self) {
        self.vertical_facing = VerticalFacing::Horizontal;
    }

    pub fn start_jump(&mut self) {
        self.jump_active = true;
        self.interacting = false;
        if self.on_ground {
            self.velocity.y = -JUMP_SPEED;
        }
    }

    pub fn stop_jump(&mut self) {
        self.jump_active = false;
    }

    /// No-op while the invincibility window is active. Otherwise decrement
    /// health, show the damage number, impart the knockback hop, and
    /// restart the window. The hop only caps the velocity from below; an
    /// already-faster upward velocity is kept.
    pub fn take_damage(&mut self, timers: &mut Timers, damage: Hp) {
        if timers.active(self.invincible_timer) {
            return;
        }

        self.health.take_damage(damage);
        self.damage_text.set_damage(timers, damage);

        self.velocity.y = self.velocity.y.min(-SHORT_JUMP_SPEED);

        log::debug!("player takes {damage} damage");

        timers.reset(self.invincible_timer);
    }

    pub fn damage_rectangle(&self) -> Rectangle {
        Rectangle::new(
            self.pos.x + COLLISION_X.left(),
            self.pos.y + COLLISION_Y.top(),
            COLLISION_X.width(),
            COLLISION_Y.height(),
        )
    }

    pub fn x(&self) -> Game {
        self.pos.x
    }

    pub fn y(&self) -> Game {
        self.pos.y
    }

    pub fn center_x(&self) -> Game {
        self.pos.x + COLLISION_X.center_x()
    }

    pub fn center_y(&self) -> Game {
        self.pos.y + COLLISION_Y.center_y()
    }

    pub fn on_ground(&self) -> bool {
        self.on_ground
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn health(&self) -> Hp {
        self.health.current()
    }

    fn sprite_state(&self) -> SpriteState {
        SpriteState::new(
            MotionType::from_physics(
                self.interacting,
                self.on_ground,
                self.acceleration_x,
                self.velocity.y,
            ),
            self.horizontal_facing,
            self.vertical_facing,
        )
    }

    /// Hidden on alternating flash intervals while invincible.
    fn sprite_is_visible(&self, timers: &Timers) -> bool {
        !(timers.active(self.invincible_timer)
            && timers.current_time(self.invincible_timer) / INVINCIBLE_FLASH_TIME % 2 == 0)
    }

    fn apply_hit_x(&mut self, rule: PassRule) {
        if rule.zero_velocity {
            self.velocity.x = 0.0;
        }
        if let Some(grounded) = rule.on_ground_hit {
            self.on_ground = grounded;
        }
    }

    fn apply_hit_y(&mut self, rule: PassRule) {
        if rule.zero_velocity {
            self.velocity.y = 0.0;
        }
        if let Some(grounded) = rule.on_ground_hit {
            self.on_ground = grounded;
        }
    }

    fn update_x(&mut self, elapsed_time: Ms, map: &Map) {
        self.velocity.x = WALK.step(
            self.velocity.x,
            self.acceleration_x,
            self.on_ground,
            elapsed_time,
        );
        let delta = position_delta(self.velocity.x, elapsed_time);

        if delta > 0.0 {
            if let Some(tile) = collision::first_wall(map, &self.right_collision(delta)) {
                self.pos.x = tile_to_game(tile.col) - COLLISION_X.right();
                self.apply_hit_x(collision::pass_rule(Axis::X, Direction::Positive, Pass::Leading));
            } else {
                self.pos.x += delta;
                if let Some(grounded) = collision::clear_on_free_move(Axis::X) {
                    self.on_ground = grounded;
                }
            }
            if let Some(tile) = collision::first_wall(map, &self.left_collision(0.0)) {
                self.pos.x = tile_to_game(tile.col) + COLLISION_X.right();
                self.apply_hit_x(collision::pass_rule(
                    Axis::X,
                    Direction::Positive,
                    Pass::Trailing,
                ));
            }
        } else {
            if let Some(tile) = collision::first_wall(map, &self.left_collision(delta)) {
                self.pos.x = tile_to_game(tile.col) + COLLISION_X.right();
                self.apply_hit_x(collision::pass_rule(Axis::X, Direction::Negative, Pass::Leading));
            } else {
                self.pos.x += delta;
                if let Some(grounded) = collision::clear_on_free_move(Axis::X) {
                    self.on_ground = grounded;
                }
            }
            if let Some(tile) = collision::first_wall(map, &self.right_collision(0.0)) {
                self.pos.x = tile_to_game(tile.col) - COLLISION_X.right();
                self.apply_hit_x(collision::pass_rule(
                    Axis::X,
                    Direction::Negative,
                    Pass::Trailing,
                ));
            }
        }
    }

    fn update_y(&mut self, elapsed_time: Ms, map: &Map) {
        self.velocity.y = FALL.step(self.velocity.y, self.jump_active, elapsed_time);
        let delta = position_delta(self.velocity.y, elapsed_time);

        if delta > 0.0 {
            if let Some(tile) = collision::first_wall(map, &self.bottom_collision(delta)) {
                self.pos.y = tile_to_game(tile.row) - COLLISION_Y.bottom();
                self.apply_hit_y(collision::pass_rule(Axis::Y, Direction::Positive, Pass::Leading));
            } else {
                self.pos.y += delta;
                if let Some(grounded) = collision::clear_on_free_move(Axis::Y) {
                    self.on_ground = grounded;
                }
            }
            if let Some(tile) = collision::first_wall(map, &self.top_collision(0.0)) {
                self.pos.y = tile_to_game(tile.row) + COLLISION_Y.height();
                self.apply_hit_y(collision::pass_rule(
                    Axis::Y,
                    Direction::Positive,
                    Pass::Trailing,
                ));
            }
        } else {
            if let Some(tile) = collision::first_wall(map, &self.top_collision(delta)) {
                self.pos.y = tile_to_game(tile.row) + COLLISION_Y.height();
                self.apply_hit_y(collision::pass_rule(Axis::Y, Direction::Negative, Pass::Leading));
            } else {
                self.pos.y += delta;
                if let Some(grounded) = collision::clear_on_free_move(Axis::Y) {
                    self.on_ground = grounded;
                }
            }
            if let Some(tile) = collision::first_wall(map, &self.bottom_collision(0.0)) {
                self.pos.y = tile_to_game(tile.row) - COLLISION_Y.bottom();
                self.apply_hit_y(collision::pass_rule(
                    Axis::Y,
                    Direction::Negative,
                    Pass::Trailing,
                ));
            }
        }
    }

    fn left_collision(&self, delta: Game) -> Rectangle {
        assert!(delta <= 0.0);
        Rectangle::new(
            self.pos.x + COLLISION_X.left() + delta,
            self.pos.y + COLLISION_X.top(),
            COLLISION_X.width() / 2.0 - delta,
            COLLISION_X.height(),
        )
    }

    fn right_collision(&self, delta: Game) -> Rectangle {
        assert!(delta >= 0.0);
        Rectangle::new(
            self.pos.x + COLLISION_X.left() + COLLISION_X.width() / 2.0,
            self.pos.y + COLLISION_X.top(),
            COLLISION_X.width() / 2.0 + delta,
            COLLISION_X.height(),
        )
    }

    fn top_collision(&self, delta: Game) -> Rectangle {
        assert!(delta <= 0.0);
        Rectangle::new(
            self.pos.x + COLLISION_Y.left(),
            self.pos.y + COLLISION_Y.top() + delta,
            COLLISION_Y.width(),
            COLLISION_Y.height() / 2.0 - delta,
        )
    }

    fn bottom_collision(&self, delta: Game) -> Rectangle {
        assert!(delta >= 0.0);
        Rectangle::new(
            self.pos.x + COLLISION_Y.left(),
            self.pos.y + COLLISION_Y.top() + COLLISION_Y.height() / 2.0,
            COLLISION_Y.width(),
            COLLISION_Y.height() / 2.0 + delta,
        )
    }
}

/// Full cross-product of motion type and both facings.
fn initialize_sprites() -> HashMap<SpriteState, Sprite> {
    let mut sprites = HashMap::new();
    for motion_type in MotionType::ALL {
        for horizontal_facing in HorizontalFacing::ALL {
            for vertical_facing in VerticalFacing::ALL {
                let state = SpriteState::new(motion_type, horizontal_facing, vertical_facing);
                sprites.insert(state, sprite_for(state));
            }
        }
    }
    sprites
}

fn sprite_for(state: SpriteState) -> Sprite {
    let tile_y = match state.horizontal_facing {
        HorizontalFacing::Left => CHARACTER_ROW,
        HorizontalFacing::Right => CHARACTER_ROW + 1,
    };

    let mut tile_x = match state.motion_type {
        MotionType::Walking => WALK_FRAME,
        MotionType::Standing => STAND_FRAME,
        MotionType::Interacting => BACK_FRAME,
        MotionType::Jumping => JUMP_FRAME,
        MotionType::Falling => FALL_FRAME,
    };
    if state.vertical_facing == VerticalFacing::Up {
        tile_x += UP_FRAME_OFFSET;
    }

    if state.motion_type == MotionType::Walking {
        Sprite::animated(
            SPRITE_SHEET,
            tile_to_pixel(tile_x),
            tile_to_pixel(tile_y),
            tile_to_pixel(1),
            tile_to_pixel(1),
            WALK_FPS,
            NUM_WALK_FRAMES,
        )
    } else {
        // airborne while looking down shows the dedicated down frame
        if state.vertical_facing == VerticalFacing::Down
            && matches!(state.motion_type, MotionType::Jumping | MotionType::Falling)
        {
            tile_x = DOWN_FRAME;
        }
        Sprite::new(
            SPRITE_SHEET,
            tile_to_pixel(tile_x),
            tile_to_pixel(tile_y),
            tile_to_pixel(1),
            tile_to_pixel(1),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::map::TileType;
    use crate::units::TILE_SIZE;

    const FRAME_TIME: Ms = 16;
    const FLOOR_ROW: Tile = 11;
    /// y at which the collision box rests exactly on the floor
    const FLOOR_Y: Game = 11.0 * TILE_SIZE - 32.0;

    fn floor_map() -> Map {
        let mut map = Map::new(15, 20);
        for col in 0..20 {
            map.set_tile(FLOOR_ROW, col, TileType::Wall);
        }
        map
    }

    /// Player standing on the floor, one update in so the ground flag is set.
    fn grounded_player(timers: &mut Timers, map: &Map) -> Player {
        let mut player = Player::new(timers, tile_to_game(5), FLOOR_Y);
        player.update(FRAME_TIME, map, timers);
        assert!(player.on_ground);
        player
    }

    #[test]
    fn test_rest_on_floor_stays_put() {
        let mut timers = Timers::new();
        let map = floor_map();
        let mut player = grounded_player(&mut timers, &map);

        for _ in 0..60 {
            timers.update_all(FRAME_TIME);
            player.update(FRAME_TIME, &map, &timers);
        }
        assert_eq!(player.velocity.x, 0.0);
        assert_eq!(player.pos.y, FLOOR_Y);
        assert!(player.on_ground);
    }

    #[test]
    fn test_fall_snaps_exactly_to_floor() {
        let mut timers = Timers::new();
        let map = floor_map();
        let mut player = Player::new(&mut timers, tile_to_game(5), FLOOR_Y - 100.0);

        for _ in 0..300 {
            player.update(FRAME_TIME, &map, &timers);
            if player.on_ground {
                break;
            }
        }
        assert!(player.on_ground);
        assert_eq!(player.pos.y, FLOOR_Y);
        assert_eq!(player.velocity.y, 0.0);
    }

    #[test]
    fn test_single_step_overshoot_still_snaps() {
        let mut timers = Timers::new();
        let map = floor_map();
        let mut player = Player::new(&mut timers, tile_to_game(5), FLOOR_Y - 1.0);

        // one maximum-length frame produces a delta well past the boundary
        player.update(crate::consts::MAX_FRAME_TIME, &map, &timers);
        assert_eq!(player.pos.y, FLOOR_Y);
        assert_eq!(player.velocity.y, 0.0);
        assert!(player.on_ground);
    }

    #[test]
    fn test_jump_impulse_and_liftoff() {
        let mut timers = Timers::new();
        let map = floor_map();
        let mut player = grounded_player(&mut timers, &map);

        player.start_jump();
        assert_eq!(player.velocity.y, -JUMP_SPEED);

        player.update(FRAME_TIME, &map, &timers);
        assert!(!player.on_ground);
    }

    #[test]
    fn test_jump_while_airborne_has_no_impulse() {
        let mut timers = Timers::new();
        let map = floor_map();
        let mut player = Player::new(&mut timers, tile_to_game(5), FLOOR_Y - 100.0);
        player.update(FRAME_TIME, &map, &timers);

        let falling = player.velocity.y;
        player.start_jump();
        assert_eq!(player.velocity.y, falling);
    }

    #[test]
    fn test_released_jump_peaks_lower() {
        let mut timers = Timers::new();
        let map = floor_map();
        let mut held = grounded_player(&mut timers, &map);
        let mut released = grounded_player(&mut timers, &map);

        held.start_jump();
        released.start_jump();

        let mut held_peak = Game::MAX;
        let mut released_peak = Game::MAX;
        for frame in 0..120 {
            if frame == 3 {
                released.stop_jump();
            }
            held.update(FRAME_TIME, &map, &timers);
            released.update(FRAME_TIME, &map, &timers);
            held_peak = held_peak.min(held.pos.y);
            released_peak = released_peak.min(released.pos.y);
        }
        assert!(held_peak < released_peak);
    }

    #[test]
    fn test_walk_into_wall_snaps_and_stops() {
        let mut timers = Timers::new();
        let mut map = floor_map();
        for row in 8..=10 {
            map.set_tile(row, 15, TileType::Wall);
        }
        let wall_x = tile_to_game(15) - COLLISION_X.right();

        let mut player = grounded_player(&mut timers, &map);
        player.start_moving_right();
        for _ in 0..300 {
            player.update(FRAME_TIME, &map, &timers);
            assert!(player.pos.x <= wall_x);
        }
        assert_eq!(player.pos.x, wall_x);
        assert_eq!(player.velocity.x, 0.0);
    }

    #[test]
    fn test_invincibility_window_gates_damage() {
        let mut timers = Timers::new();
        let map = floor_map();
        let mut player = grounded_player(&mut timers, &map);

        player.take_damage(&mut timers, 1);
        assert_eq!(player.health(), MAX_HEALTH - 1);

        // immediately again, and again after 100 ms: still within the window
        player.take_damage(&mut timers, 1);
        timers.update_all(100);
        player.take_damage(&mut timers, 1);
        assert_eq!(player.health(), MAX_HEALTH - 1);

        timers.update_all(INVINCIBLE_TIME);
        player.take_damage(&mut timers, 1);
        assert_eq!(player.health(), MAX_HEALTH - 2);
    }

    #[test]
    fn test_damage_knockback_caps_upward() {
        let mut timers = Timers::new();
        let map = floor_map();
        let mut player = grounded_player(&mut timers, &map);

        player.take_damage(&mut timers, 1);
        assert_eq!(player.velocity.y, -SHORT_JUMP_SPEED);

        // a faster upward velocity is not slowed down
        timers.update_all(INVINCIBLE_TIME);
        player.velocity.y = -2.0 * SHORT_JUMP_SPEED;
        player.take_damage(&mut timers, 1);
        assert_eq!(player.velocity.y, -2.0 * SHORT_JUMP_SPEED);
    }

    #[test]
    fn test_flicker_alternates_while_invincible() {
        let mut timers = Timers::new();
        let map = floor_map();
        let mut player = grounded_player(&mut timers, &map);

        player.take_damage(&mut timers, 1);
        assert!(!player.sprite_is_visible(&timers));
        timers.update_all(INVINCIBLE_FLASH_TIME);
        assert!(player.sprite_is_visible(&timers));
        timers.update_all(INVINCIBLE_FLASH_TIME);
        assert!(!player.sprite_is_visible(&timers));

        timers.update_all(INVINCIBLE_TIME);
        assert!(player.sprite_is_visible(&timers));
    }

    #[test]
    fn test_look_down_interacts_only_when_grounded() {
        let mut timers = Timers::new();
        let map = floor_map();
        let mut player = grounded_player(&mut timers, &map);

        player.look_down();
        assert_eq!(player.sprite_state().motion_type, MotionType::Interacting);

        let mut airborne = grounded_player(&mut timers, &map);
        airborne.start_jump();
        airborne.update(FRAME_TIME, &map, &timers);
        airborne.look_down();
        assert_eq!(airborne.sprite_state().motion_type, MotionType::Jumping);
    }

    #[test]
    fn test_walking_requires_intent() {
        let mut timers = Timers::new();
        let map = floor_map();
        let mut player = grounded_player(&mut timers, &map);

        assert_eq!(player.sprite_state().motion_type, MotionType::Standing);
        player.start_moving_right();
        assert_eq!(player.sprite_state().motion_type, MotionType::Walking);
        player.stop_moving();
        assert_eq!(player.sprite_state().motion_type, MotionType::Standing);
    }

    #[test]
    fn test_damage_rectangle_spans_both_collision_boxes() {
        let mut timers = Timers::new();
        let player = Player::new(&mut timers, 100.0, 200.0);
        let rect = player.damage_rectangle();
        assert_eq!(rect.left(), 100.0 + COLLISION_X.left());
        assert_eq!(rect.top(), 200.0 + COLLISION_Y.top());
        assert_eq!(rect.width(), COLLISION_X.width());
        assert_eq!(rect.height(), COLLISION_Y.height());
    }

    #[test]
    fn test_ceiling_bump_zeroes_upward_velocity() {
        let mut timers = Timers::new();
        let mut map = floor_map();
        for col in 0..20 {
            map.set_tile(9, col, TileType::Wall);
        }
        let mut player = grounded_player(&mut timers, &map);

        player.start_jump();
        player.update(FRAME_TIME, &map, &timers);
        // head hits row 9; snapped flush under it with velocity cleared
        assert_eq!(player.pos.y, tile_to_game(9) + COLLISION_Y.height());
        assert_eq!(player.velocity.y, 0.0);
        assert!(!player.on_ground);
    }
}
