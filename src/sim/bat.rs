//! Flying enemy
//!
//! No tile collision: the bat bobs on a sine wave around a fixed center
//! height, faces whichever side the tracked actor is on, and exposes a
//! contact-damage point for the external overlap check against the
//! player.

use std::collections::HashMap;

use glam::Vec2;

use crate::render::DrawList;
use crate::sim::rect::Rectangle;
use crate::sim::state::HorizontalFacing;
use crate::sprite::Sprite;
use crate::units::{
    AngularVelocity, Degrees, Fps, Frame, Game, HALF_TILE, Hp, Ms, degrees_to_radians,
    tile_to_pixel,
};

const SPRITE_SHEET: &str = "content/npc.bmp";

const NUM_FLY_FRAMES: Frame = 3;
const FLY_FPS: Fps = 13;

/// Degrees per millisecond
const ANGULAR_VELOCITY: AngularVelocity = 120.0 / 1000.0;

const FLIGHT_AMPLITUDE: Game = 5.0 * HALF_TILE;
const CONTACT_DAMAGE: Hp = 1;

pub struct Bat {
    center_y: Game,
    pos: Vec2,
    flight_angle: Degrees,
    facing: HorizontalFacing,
    sprites: HashMap<HorizontalFacing, Sprite>,
}

impl Bat {
    pub fn new(x: Game, y: Game) -> Self {
        Self {
            center_y: y,
            pos: Vec2::new(x, y),
            flight_angle: 0.0,
            facing: HorizontalFacing::Right,
            sprites: initialize_sprites(),
        }
    }

    /// `player_x` is the tracked actor's horizontal position, used only to
    /// pick the facing.
    pub fn update(&mut self, elapsed_time: Ms, player_x: Game) {
        self.flight_angle += ANGULAR_VELOCITY * elapsed_time as f32;

        self.facing = if self.pos.x + HALF_TILE > player_x {
            HorizontalFacing::Left
        } else {
            HorizontalFacing::Right
        };

        self.pos.y = self.center_y + FLIGHT_AMPLITUDE * degrees_to_radians(self.flight_angle).sin();

        self.sprites
            .get_mut(&self.facing)
            .expect("sprite map covers both facings")
            .update(elapsed_time);
    }

    pub fn draw(&self, draw_list: &mut DrawList) {
        self.sprites
            .get(&self.facing)
            .expect("sprite map covers both facings")
            .draw(draw_list, self.pos.x, self.pos.y);
    }

    /// Contact-damage point at the sprite center.
    pub fn damage_rectangle(&self) -> Rectangle {
        Rectangle::new(self.pos.x + HALF_TILE, self.pos.y + HALF_TILE, 0.0, 0.0)
    }

    pub fn contact_damage(&self) -> Hp {
        CONTACT_DAMAGE
    }

    pub fn x(&self) -> Game {
        self.pos.x
    }

    pub fn y(&self) -> Game {
        self.pos.y
    }
}

fn initialize_sprites() -> HashMap<HorizontalFacing, Sprite> {
    let mut sprites = HashMap::new();
    for facing in HorizontalFacing::ALL {
        let tile_y = match facing {
            HorizontalFacing::Left => 2,
            HorizontalFacing::Right => 3,
        };
        sprites.insert(
            facing,
            Sprite::animated(
                SPRITE_SHEET,
                tile_to_pixel(2),
                tile_to_pixel(tile_y),
                tile_to_pixel(1),
                tile_to_pixel(1),
                FLY_FPS,
                NUM_FLY_FRAMES,
            ),
        );
    }
    sprites
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flight_follows_sine_around_center() {
        let mut bat = Bat::new(100.0, 200.0);

        // quarter period: 90 degrees at 120 deg/s is 750 ms
        bat.update(750, 0.0);
        assert!((bat.y() - (200.0 + FLIGHT_AMPLITUDE)).abs() < 0.01);

        // half period later the offset flips sign
        bat.update(1500, 0.0);
        assert!((bat.y() - (200.0 - FLIGHT_AMPLITUDE)).abs() < 0.01);
    }

    #[test]
    fn test_faces_tracked_actor() {
        let mut bat = Bat::new(100.0, 200.0);

        bat.update(16, 0.0);
        assert_eq!(bat.facing, HorizontalFacing::Left);

        bat.update(16, 500.0);
        assert_eq!(bat.facing, HorizontalFacing::Right);
    }

    #[test]
    fn test_damage_point_sits_at_sprite_center() {
        let bat = Bat::new(100.0, 200.0);
        let rect = bat.damage_rectangle();
        assert_eq!(rect.left(), 100.0 + HALF_TILE);
        assert_eq!(rect.top(), 200.0 + HALF_TILE);
        assert_eq!(rect.width(), 0.0);

        // the point overlaps a box strictly containing it
        let body = Rectangle::new(100.0, 200.0, 32.0, 32.0);
        assert!(rect.collides_with(&body));
    }

    #[test]
    fn test_contact_damage() {
        let bat = Bat::new(0.0, 0.0);
        assert_eq!(bat.contact_damage(), CONTACT_DAMAGE);
    }
}
